//! Farm metrics - on-chain LP farm statistics
//!
//! Reads LP balances, supplies and staking allocations through a multicall
//! aggregator contract and derives per-farm metrics with fixed-point decimals.
//! Each fetch is raced against a timeout and degrades to an empty snapshot.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod abi;
pub mod multicall;
pub mod farms;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{FarmError, FarmResult};
pub use farms::FarmFetcher;
pub use multicall::{Aggregator, Call, MulticallClient, ProviderAggregator};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
