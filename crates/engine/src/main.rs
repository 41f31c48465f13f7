use engine::dashboards::d401_revenue_summary::service::build_revenue_summary;
use engine::domain::a001_country::catalog::COUNTRIES;
use engine::domain::a002_dataset::generator::generate_dataset;
use engine::domain::a003_product::catalog::demo_products;
use engine::domain::a003_product::service::{search_products, total_price};
use engine::shared::config::load_config;
use engine::shared::format::{format_currency, format_number};

use contracts::enums::product_sort_key::ProductSortKey;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Директория для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("stats-report.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = load_config()?;

    let records = generate_dataset(
        config.dataset.record_count,
        COUNTRIES,
        config.dataset.reference_time,
    )?;
    tracing::info!(
        "Generated {} records over {} countries",
        format_number(records.len() as u64),
        COUNTRIES.len()
    );

    let response = build_revenue_summary(&records, config.report.percentile)?;
    let summary = &response.summary;
    tracing::info!("Total revenue: {}", format_currency(summary.total_revenue, "USD"));
    tracing::info!("Average: {}", format_currency(summary.avg_revenue, "USD"));
    tracing::info!("Median: {}", format_currency(summary.median_revenue, "USD"));
    tracing::info!("Std deviation: {}", format_currency(summary.std_dev, "USD"));
    tracing::info!(
        "P{}: {}",
        summary.percentile,
        format_currency(summary.percentile_value, "USD")
    );

    for region in response.top_regions(config.report.top_regions) {
        tracing::info!(
            "Region {}: {} records, {}",
            region.region,
            region.count,
            format_currency(region.total_revenue, "USD")
        );
    }

    for record in records.iter().take(config.report.preview_rows) {
        tracing::debug!(
            "#{} {} ({}) {} {}",
            record.id,
            record.country_name,
            record.region,
            format_currency(record.revenue as f64, &record.currency),
            record.growth
        );
    }

    let sort_key = ProductSortKey::from_code(&config.products.sort);
    let products = search_products(&demo_products(), &config.products.search, sort_key);
    for product in &products {
        tracing::info!(
            "Product {} ({}): {}, rating {:.1}",
            product.name,
            product.category,
            format_currency(product.price, "USD"),
            product.rating
        );
    }
    tracing::info!(
        "{} products sorted by {}, total {}",
        products.len(),
        sort_key,
        format_currency(total_price(&products), "USD")
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
