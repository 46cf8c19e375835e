use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::QueryError;

/// Unique identifier of a listing within a catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

impl From<u64> for PropertyId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PropertyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PropertyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of property. Unknown tags are kept verbatim in `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Estate,
    Other(String),
}

impl PropertyType {
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "house" => Self::House,
            "apartment" => Self::Apartment,
            "villa" => Self::Villa,
            "estate" => Self::Estate,
            _ => Self::Other(tag.trim().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Estate => "Estate",
            Self::Other(tag) => tag,
        }
    }

    /// Case-insensitive comparison, so `Other("house")` equals `House`.
    pub fn matches(&self, other: &PropertyType) -> bool {
        self.name().to_lowercase() == other.name().to_lowercase()
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl From<String> for PropertyType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<PropertyType> for String {
    fn from(kind: PropertyType) -> Self {
        kind.name().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Core listing data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub property_type: PropertyType,
    pub location: String,
    pub price: u64,
    pub bedrooms: u32,
    /// Half values allowed, e.g. 3.5
    pub bathrooms: f32,
    pub area_sqft: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_at: Option<DateTime<Utc>>,
}

impl Property {
    /// Case-insensitive substring match over title, location, type and tags.
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
            || self.property_type.name().to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Reject catalogs with duplicate ids or out-of-range numeric fields.
pub fn validate_catalog(properties: &[Property]) -> Result<(), QueryError> {
    let mut seen = HashSet::new();

    for property in properties {
        if !seen.insert(&property.id) {
            return Err(QueryError::DuplicateId(property.id.clone()));
        }

        if !property.bathrooms.is_finite() || property.bathrooms < 0.0 {
            return Err(QueryError::InvalidCatalog {
                id: property.id.clone(),
                reason: format!("bathrooms must be non-negative, got {}", property.bathrooms),
            });
        }

        if !(0.0..=5.0).contains(&property.rating) {
            return Err(QueryError::InvalidCatalog {
                id: property.id.clone(),
                reason: format!("rating must be within 0-5, got {}", property.rating),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn sample(id: u64, price: u64, kind: &str, beds: u32, is_new: bool) -> Property {
    Property {
        id: PropertyId::from(id),
        title: format!("Listing {}", id),
        property_type: PropertyType::parse(kind),
        location: "Harare".to_string(),
        price,
        bedrooms: beds,
        bathrooms: 2.0,
        area_sqft: 2000,
        tags: vec![],
        is_new,
        rating: 4.0,
        review_count: 0,
        listed_at: None,
    }
}
