use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QueryError;
use crate::models::{Property, PropertyType};

/// Upper price bound of the default filter
pub const DEFAULT_PRICE_MAX: u64 = 10_000_000;

/// Order in which matching listings are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Newest listings first; input order when no listing dates are known
    #[default]
    Newest,
    PriceAscending,
    PriceDescending,
    /// Most reviews first
    MostPopular,
    TopRated,
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "price-asc" | "price-ascending" => Ok(Self::PriceAscending),
            "price-desc" | "price-descending" => Ok(Self::PriceDescending),
            "popular" | "most-popular" => Ok(Self::MostPopular),
            "rated" | "top-rated" => Ok(Self::TopRated),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

/// First-stage gate selecting which tab of listings is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    All,
    NewOnly,
    FavoritesOnly,
}

impl FromStr for Category {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "new" | "new-only" => Ok(Self::NewOnly),
            "favorite" | "favorites" | "favorites-only" => Ok(Self::FavoritesOnly),
            _ => Err(QueryError::UnknownCategory(s.to_string())),
        }
    }
}

/// Minimum bedroom/bathroom count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Threshold {
    #[default]
    Any,
    AtLeast(u32),
}

impl Threshold {
    pub fn admits(&self, value: f32) -> bool {
        match self {
            Self::Any => true,
            Self::AtLeast(min) => value >= *min as f32,
        }
    }
}

impl FromStr for Threshold {
    type Err = QueryError;

    /// Accepts "any", "3" and "3+".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        if token == "any" {
            return Ok(Self::Any);
        }

        token
            .trim_end_matches('+')
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .map(Self::AtLeast)
            .ok_or_else(|| QueryError::InvalidThreshold(s.to_string()))
    }
}

/// Property type restriction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    pub fn admits(&self, kind: &PropertyType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.matches(kind),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(PropertyType::parse(s)))
        }
    }
}

/// User-chosen constraints and sort order for the listing view.
///
/// Updated by whole-value replacement through the `with_*` helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub price_min: u64,
    pub price_max: u64,
    pub property_type: TypeFilter,
    pub min_beds: Threshold,
    pub min_baths: Threshold,
    pub sort_key: SortKey,
    pub active_category: Category,
    /// Free-text term matched against title, location, type and tags
    pub search: Option<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_min: 0,
            price_max: DEFAULT_PRICE_MAX,
            property_type: TypeFilter::All,
            min_beds: Threshold::Any,
            min_baths: Threshold::Any,
            sort_key: SortKey::Newest,
            active_category: Category::All,
            search: None,
        }
    }
}

impl FilterConfig {
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// True when type, bedroom or bathroom filters differ from the defaults.
    pub fn has_active_filters(&self) -> bool {
        self.property_type != TypeFilter::All
            || self.min_beds != Threshold::Any
            || self.min_baths != Threshold::Any
    }

    pub fn with_price_range(&self, min: u64, max: u64) -> Self {
        Self {
            price_min: min,
            price_max: max,
            ..self.clone()
        }
    }

    pub fn with_property_type(&self, property_type: TypeFilter) -> Self {
        Self {
            property_type,
            ..self.clone()
        }
    }

    pub fn with_min_beds(&self, min_beds: Threshold) -> Self {
        Self {
            min_beds,
            ..self.clone()
        }
    }

    pub fn with_min_baths(&self, min_baths: Threshold) -> Self {
        Self {
            min_baths,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    pub fn with_category(&self, active_category: Category) -> Self {
        Self {
            active_category,
            ..self.clone()
        }
    }

    pub fn with_search(&self, term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..self.clone()
        }
    }

    /// Attribute stage of the pipeline: price, type, beds, baths and search.
    pub fn admits(&self, property: &Property) -> bool {
        if self.price_min > self.price_max {
            return false;
        }

        let needle = self
            .search
            .as_deref()
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty());

        (self.price_min..=self.price_max).contains(&property.price)
            && self.property_type.admits(&property.property_type)
            && self.min_beds.admits(property.bedrooms as f32)
            && self.min_baths.admits(property.bathrooms)
            && needle.map_or(true, |needle| property.mentions(&needle))
    }
}
