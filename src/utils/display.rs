//! Display and printing utilities

use std::time::Instant;
use tracing::{error, info, warn};
use crate::{
    errors::FarmResult,
    types::{FarmDescriptor, FarmMetrics},
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub fetched: usize,
    pub timed_out: usize,
    pub failed: usize,
}

/// Logs one farm outcome as a JSON line; a timed out farm prints as `{}`.
pub fn print_farm_snapshot(
    farm: &FarmDescriptor,
    outcome: &FarmResult<Option<FarmMetrics>>,
    summary: &mut RunSummary,
) {
    match outcome {
        Ok(Some(metrics)) => {
            summary.fetched += 1;
            match serde_json::to_string(metrics) {
                Ok(json) => info!("📊 {} (pid {:?}): {}", farm.lp_symbol, farm.pid, json),
                Err(e) => error!("❌ {} - Failed to serialize metrics: {}", farm.lp_symbol, e),
            }
        }
        Ok(None) => {
            summary.timed_out += 1;
            warn!("⏱️  {} (pid {:?}): {{}}", farm.lp_symbol, farm.pid);
        }
        Err(e) => {
            summary.failed += 1;
            error!("❌ {} - Fetch failed: {}", farm.lp_symbol, e);
        }
    }
}

pub fn print_run_summary(start_time: Instant, summary: &RunSummary) {
    info!("\n📋 Run Summary ({} ms)", start_time.elapsed().as_millis());
    info!("   Fetched:   {}", summary.fetched);
    info!("   Timed out: {}", summary.timed_out);
    info!("   Failed:    {}", summary.failed);
}
