use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::PropertyId;
use crate::query::{FavoriteSet, FilterConfig};

/// Where the listing catalog comes from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    Seed,
    File(PathBuf),
    Http(String),
}

impl SourceKind {
    fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("seed") {
            Self::Seed
        } else if value.starts_with("http://") || value.starts_with("https://") {
            Self::Http(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

/// Runtime settings read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceKind,
    pub filters: FilterConfig,
    pub favorites: FavoriteSet,
    pub output_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load `.env` if present, then read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = lookup("LISTINGS_SOURCE")
            .map(|v| SourceKind::parse(&v))
            .unwrap_or(SourceKind::Seed);

        let defaults = FilterConfig::default();
        let filters = FilterConfig {
            price_min: parse_var(&lookup, "QUERY_PRICE_MIN")?.unwrap_or(defaults.price_min),
            price_max: parse_var(&lookup, "QUERY_PRICE_MAX")?.unwrap_or(defaults.price_max),
            property_type: parse_var(&lookup, "QUERY_TYPE")?.unwrap_or(defaults.property_type),
            min_beds: parse_var(&lookup, "QUERY_MIN_BEDS")?.unwrap_or(defaults.min_beds),
            min_baths: parse_var(&lookup, "QUERY_MIN_BATHS")?.unwrap_or(defaults.min_baths),
            sort_key: parse_var(&lookup, "QUERY_SORT")?.unwrap_or(defaults.sort_key),
            active_category: parse_var(&lookup, "QUERY_CATEGORY")?
                .unwrap_or(defaults.active_category),
            search: lookup("QUERY_SEARCH").filter(|s| !s.trim().is_empty()),
        };

        let favorites = lookup("QUERY_FAVORITES")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(PropertyId::from)
                    .collect()
            })
            .unwrap_or_default();

        let output_file = lookup("OUTPUT_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            source,
            filters,
            favorites,
            output_file,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid value for {}: {}", key, raw)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use crate::query::{Category, SortKey, Threshold, TypeFilter};
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.source, SourceKind::Seed);
        assert_eq!(config.filters, FilterConfig::default());
        assert!(config.favorites.is_empty());
        assert!(config.output_file.is_none());
    }

    #[test]
    fn reads_filter_variables() {
        let config = config_from(&[
            ("QUERY_PRICE_MIN", "1000000"),
            ("QUERY_PRICE_MAX", "5000000"),
            ("QUERY_TYPE", "villa"),
            ("QUERY_MIN_BEDS", "3+"),
            ("QUERY_MIN_BATHS", "any"),
            ("QUERY_SORT", "price-desc"),
            ("QUERY_CATEGORY", "favorite"),
            ("QUERY_SEARCH", "harare"),
            ("QUERY_FAVORITES", "1, 5,,"),
        ])
        .unwrap();

        assert_eq!(config.filters.price_min, 1_000_000);
        assert_eq!(config.filters.price_max, 5_000_000);
        assert_eq!(config.filters.property_type, TypeFilter::Only(PropertyType::Villa));
        assert_eq!(config.filters.min_beds, Threshold::AtLeast(3));
        assert_eq!(config.filters.min_baths, Threshold::Any);
        assert_eq!(config.filters.sort_key, SortKey::PriceDescending);
        assert_eq!(config.filters.active_category, Category::FavoritesOnly);
        assert_eq!(config.filters.search.as_deref(), Some("harare"));
        assert_eq!(config.favorites.len(), 2);
        assert!(config.favorites.contains(&PropertyId::from(5)));
    }

    #[test]
    fn picks_source_from_value() {
        let http = config_from(&[("LISTINGS_SOURCE", "https://example.com/feed.json")]).unwrap();
        assert_eq!(http.source, SourceKind::Http("https://example.com/feed.json".into()));

        let file = config_from(&[("LISTINGS_SOURCE", "data/listings.json")]).unwrap();
        assert_eq!(file.source, SourceKind::File(PathBuf::from("data/listings.json")));

        let seed = config_from(&[("LISTINGS_SOURCE", "SEED")]).unwrap();
        assert_eq!(seed.source, SourceKind::Seed);
    }

    #[test]
    fn rejects_bad_values() {
        let err = config_from(&[("QUERY_SORT", "cheapest")]).unwrap_err();
        assert!(err.to_string().contains("QUERY_SORT"));

        assert!(config_from(&[("QUERY_PRICE_MAX", "lots")]).is_err());
        assert!(config_from(&[("QUERY_MIN_BEDS", "-1")]).is_err());
    }
}
