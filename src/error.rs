use crate::models::PropertyId;

/// Errors raised while parsing filter tokens or validating a catalog.
///
/// The query itself never fails; these only surface at the edges where
/// text or external data enters the crate.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QueryError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Duplicate property id: {0}")]
    DuplicateId(PropertyId),

    #[error("Invalid catalog entry {id}: {reason}")]
    InvalidCatalog { id: PropertyId, reason: String },
}
