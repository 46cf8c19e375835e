use crate::models::{Property, PropertyId, PropertyType};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in catalog of the agency's current listings
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedCatalog;

#[async_trait]
impl ListingSource for SeedCatalog {
    async fn load(&self) -> Result<Vec<Property>> {
        let properties = seed_properties();
        info!("📋 Loaded {} seeded listings", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "Seed"
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u64,
    title: &str,
    kind: PropertyType,
    location: &str,
    price: u64,
    (bedrooms, bathrooms, area_sqft): (u32, f32, u32),
    tags: &[&str],
    is_new: bool,
    (rating, review_count): (f32, u32),
) -> Property {
    Property {
        id: PropertyId::from(id),
        title: title.to_string(),
        property_type: kind,
        location: location.to_string(),
        price,
        bedrooms,
        bathrooms,
        area_sqft,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_new,
        rating,
        review_count,
        listed_at: None,
    }
}

/// The six listings shown on the properties page, in display order
pub fn seed_properties() -> Vec<Property> {
    vec![
        listing(
            1,
            "Waterfront Villa",
            PropertyType::House,
            "Borrowdale, Harare",
            4_500_000,
            (5, 4.0, 4200),
            &["Waterfront", "Pool", "Smart Home"],
            true,
            (4.9, 12),
        ),
        listing(
            2,
            "Apartment",
            PropertyType::Apartment,
            "Hillside, Harare",
            3_200_000,
            (3, 3.5, 2800),
            &["Penthouse", "Views", "Concierge"],
            false,
            (4.7, 8),
        ),
        listing(
            3,
            "Villa",
            PropertyType::House,
            "Avondale, Harare",
            6_700_000,
            (6, 5.0, 5600),
            &["Historic", "Garden", "Renovated"],
            true,
            (4.8, 15),
        ),
        listing(
            4,
            "Modern Apartment",
            PropertyType::Apartment,
            "Avondale, Harare",
            2_900_000,
            (2, 2.0, 1800),
            &["Beachfront", "Ocean View", "Gym"],
            false,
            (4.5, 7),
        ),
        listing(
            5,
            "Mountain Estate",
            PropertyType::Villa,
            "Mutare",
            8_500_000,
            (7, 8.0, 6900),
            &["Mountain View", "Private", "Luxury"],
            true,
            (5.0, 21),
        ),
        listing(
            6,
            "Elegant Urban Townhouse",
            PropertyType::House,
            "Strathaven, Avondale, Harare",
            3_800_000,
            (4, 3.5, 3200),
            &["Historic", "Renovated", "Garden"],
            false,
            (4.6, 9),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_catalog;

    #[tokio::test]
    async fn seed_catalog_is_valid() {
        let properties = SeedCatalog.load().await.unwrap();

        assert_eq!(properties.len(), 6);
        assert!(validate_catalog(&properties).is_ok());
        assert_eq!(SeedCatalog.source_name(), "Seed");
    }
}
