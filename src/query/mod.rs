pub mod engine;
pub mod favorites;
pub mod types;

pub use engine::{query, query_with_summary, QueryOutcome};
pub use favorites::FavoriteSet;
pub use types::{Category, FilterConfig, SortKey, Threshold, TypeFilter};
