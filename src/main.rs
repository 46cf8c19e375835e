use anyhow::Context;
use listing_scout::config::{AppConfig, SourceKind};
use listing_scout::format::{format_area, format_baths, format_price};
use listing_scout::models::validate_catalog;
use listing_scout::query_with_summary;
use listing_scout::sources::{HttpSource, JsonFileSource, ListingSource, SeedCatalog};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Listing Scout");
    info!("================");

    let config = AppConfig::from_env()?;

    let source: Box<dyn ListingSource> = match &config.source {
        SourceKind::Seed => Box::new(SeedCatalog),
        SourceKind::File(path) => Box::new(JsonFileSource::new(path)),
        SourceKind::Http(url) => Box::new(HttpSource::new(url)?),
    };

    info!("Loading listings from {} source...", source.source_name());
    let properties = source.load().await?;
    validate_catalog(&properties).context("Listing catalog failed validation")?;

    if config.filters.price_min > config.filters.price_max {
        warn!(
            "Price range is inverted ({} > {}), nothing will match",
            config.filters.price_min, config.filters.price_max
        );
    }
    if config.filters.has_active_filters() {
        info!("Filters active: {:?}", config.filters);
    }

    let outcome = query_with_summary(&properties, &config.filters, &config.favorites);

    info!(
        "✅ Showing {} of {} listings ({} favorites)\n",
        outcome.listings.len(),
        outcome.total,
        outcome.favorites
    );

    if outcome.listings.is_empty() {
        println!("No properties found. Try changing your filters or search criteria.");
    }

    for (i, property) in outcome.listings.iter().enumerate() {
        let marker = if config.favorites.contains(&property.id) { " ♥" } else { "" };
        let badge = if property.is_new { " [NEW]" } else { "" };
        println!(
            "{}. {} ({}){}{}",
            i + 1,
            property.title,
            format_price(property.price),
            badge,
            marker
        );
        println!(
            "   {} · {} beds, {} baths, {}",
            property.property_type,
            property.bedrooms,
            format_baths(property.bathrooms),
            format_area(property.area_sqft)
        );
        println!("   Location: {}", property.location);
        println!("   Rating: {:.1} ({} reviews)", property.rating, property.review_count);
        if !property.tags.is_empty() {
            println!("   Tags: {}", property.tags.join(", "));
        }
        println!("   ID: {}", property.id);
        println!();
    }

    if let Some(path) = &config.output_file {
        let json = serde_json::to_string_pretty(&outcome.listings)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved visible listings to {}", path.display());
    }

    Ok(())
}
