use crate::models::Property;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads a JSON array of listings from disk
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Reading listings from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let properties: Vec<Property> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))?;

        info!("📂 Loaded {} listings from {}", properties.len(), self.path.display());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyId;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("listing-scout-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn loads_listing_array() {
        let path = temp_path("load");
        let json = r#"[
            {"id": "a1", "title": "Loft", "property_type": "Apartment", "location": "Harare",
             "price": 750000, "bedrooms": 1, "bathrooms": 1, "area_sqft": 900,
             "tags": ["City"], "is_new": true, "rating": 4.0, "review_count": 3,
             "listed_at": "2024-05-01T00:00:00Z"}
        ]"#;
        tokio::fs::write(&path, json).await.unwrap();

        let properties = JsonFileSource::new(&path).load().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id, PropertyId::from("a1"));
        assert!(properties[0].listed_at.is_some());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let result = JsonFileSource::new(temp_path("missing")).load().await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let path = temp_path("malformed");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let result = JsonFileSource::new(&path).load().await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(result.is_err());
    }
}
