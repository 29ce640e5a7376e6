//! Farm fetcher configuration and environment variable handling

use alloy::primitives::{Address, address};
use std::env;
use std::str::FromStr;
use std::time::Duration;

// Configuration constants
pub const BSC_MAINNET_CHAIN_ID: u64 = 56;
pub const MULTICALL3_ADDRESS: Address = address!("cA11bde05977b3631167028862bE2a173976CA11");
pub const DEFAULT_FARM_FETCH_TIMEOUT_MS: u64 = 5000;
pub const MIN_FARM_FETCH_TIMEOUT_MS: u64 = 100;
pub const MAX_FARM_FETCH_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: Option<String>,
    pub chain_id: u64,
    // Contracts
    pub multicall_address: Address,
    pub masterchef_address: Option<Address>,
    // Fetching
    pub farm_fetch_timeout_ms: u64,
    pub farms_file: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            rpc_url: env::var("RPC_URL").ok(),
            chain_id: env::var("CHAIN_ID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(BSC_MAINNET_CHAIN_ID),
            multicall_address: env::var("MULTICALL_ADDRESS")
                .ok()
                .and_then(|s| Address::from_str(&s).ok())
                .unwrap_or(MULTICALL3_ADDRESS),
            masterchef_address: env::var("MASTERCHEF_ADDRESS")
                .ok()
                .and_then(|s| Address::from_str(&s).ok()),
            farm_fetch_timeout_ms: clamp_timeout_ms(
                env::var("FARM_FETCH_TIMEOUT_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_FARM_FETCH_TIMEOUT_MS),
            ),
            farms_file: env::var("FARMS_FILE")
                .unwrap_or_else(|_| "config/farms.json".to_string()),
        }
    }

    pub fn farm_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.farm_fetch_timeout_ms)
    }
}

fn clamp_timeout_ms(ms: u64) -> u64 {
    ms.clamp(MIN_FARM_FETCH_TIMEOUT_MS, MAX_FARM_FETCH_TIMEOUT_MS)
}
