pub mod file;
pub mod http;
pub mod seed;
pub mod traits;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use seed::SeedCatalog;
pub use traits::ListingSource;
