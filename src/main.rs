//! Farm Metrics - Main Entry Point
//!
//! Fetches every configured farm once and logs a JSON snapshot per farm.

use farm_metrics::*;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    utils::setup_output_directories()?;
    let _logging_guard = utils::setup_logging()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🌾 Farm Metrics v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Chain ID: {}", config.chain_id);
    info!("   Multicall: {}", config.multicall_address);
    info!("   MasterChef: {:?}", config.masterchef_address);
    info!("   Fetch Timeout: {} ms", config.farm_fetch_timeout_ms);
    info!("   Farms File: {}", config.farms_file);

    let farms = load_farms(&config.farms_file)?;
    if farms.is_empty() {
        return Err(anyhow::anyhow!("No farms configured in {}", config.farms_file));
    }
    info!("✅ Loaded {} farms", farms.len());

    // Setup network provider and fetcher
    let provider = network::setup_provider(&config).await?;
    let aggregator = ProviderAggregator::new(provider, config.multicall_address);
    let fetcher = FarmFetcher::from_config(MulticallClient::new(aggregator), &config)?;

    let start_time = Instant::now();
    let outcomes = fetcher.fetch_farms(&farms).await;

    let mut summary = utils::RunSummary::default();
    for (farm, outcome) in farms.iter().zip(&outcomes) {
        utils::print_farm_snapshot(farm, outcome, &mut summary);
    }
    utils::print_run_summary(start_time, &summary);

    Ok(())
}

fn load_farms(path: &str) -> Result<Vec<FarmDescriptor>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read farms file {}", path))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse farms file {}", path))
}
