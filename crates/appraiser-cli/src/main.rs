//! Moto Appraisal Pipeline - Main Entry Point

use listing_intake::load_listings;
use pipeline::PipelineConfig;
use std::env;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!(
        "=== Moto Appraisal Pipeline v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| "listings.json".to_string());
    let output = env::args()
        .nth(2)
        .unwrap_or_else(|| "appraisal_report.txt".to_string());

    let listings = load_listings(&input);
    let results = pipeline::run(&PipelineConfig::default(), &listings)?;
    report::write_report(&output, &listings, &results)?;

    info!(
        "{} of {} listings qualified; report at {}",
        results.len(),
        listings.len(),
        output
    );
    Ok(())
}
