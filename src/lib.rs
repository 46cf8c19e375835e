//! Listing catalog loading plus the filter, sort and favorites pipeline
//! behind the properties page.

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod query;
pub mod sources;

pub use error::QueryError;
pub use models::{Property, PropertyId, PropertyType};
pub use query::{query, query_with_summary, FavoriteSet, FilterConfig, QueryOutcome};
