use std::cmp::Ordering;
use tracing::debug;

use crate::models::Property;
use crate::query::favorites::FavoriteSet;
use crate::query::types::{Category, FilterConfig, SortKey};

/// Visible listings plus the counters the listing view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    pub listings: Vec<&'a Property>,
    pub total: usize,
    pub favorites: usize,
}

/// Produce the ordered subset of `records` visible under `config`.
///
/// Runs the category gate, then the attribute filter, then a stable sort.
/// Inputs are never modified; an inverted price range yields nothing.
pub fn query<'a>(
    records: &'a [Property],
    config: &FilterConfig,
    favorites: &FavoriteSet,
) -> Vec<&'a Property> {
    let mut visible: Vec<&Property> = records
        .iter()
        .filter(|p| in_category(p, config.active_category, favorites))
        .filter(|p| config.admits(p))
        .collect();

    // sort_by is stable, so ties keep input order
    visible.sort_by(|a, b| compare(a, b, config.sort_key));

    debug!(
        "Query matched {} of {} listings (sort: {:?}, category: {:?})",
        visible.len(),
        records.len(),
        config.sort_key,
        config.active_category
    );

    visible
}

/// Same as [`query`], with the totals attached.
pub fn query_with_summary<'a>(
    records: &'a [Property],
    config: &FilterConfig,
    favorites: &FavoriteSet,
) -> QueryOutcome<'a> {
    QueryOutcome {
        listings: query(records, config, favorites),
        total: records.len(),
        favorites: favorites.len(),
    }
}

fn in_category(property: &Property, category: Category, favorites: &FavoriteSet) -> bool {
    match category {
        Category::All => true,
        Category::NewOnly => property.is_new,
        Category::FavoritesOnly => favorites.contains(&property.id),
    }
}

fn compare(a: &Property, b: &Property, key: SortKey) -> Ordering {
    match key {
        // Undated listings sort after dated ones; None < Some
        SortKey::Newest => b.listed_at.cmp(&a.listed_at),
        SortKey::PriceAscending => a.price.cmp(&b.price),
        SortKey::PriceDescending => b.price.cmp(&a.price),
        SortKey::MostPopular => b
            .review_count
            .cmp(&a.review_count)
            .then_with(|| b.rating.total_cmp(&a.rating)),
        SortKey::TopRated => b
            .rating
            .total_cmp(&a.rating)
            .then_with(|| b.review_count.cmp(&a.review_count)),
    }
}
