//! Multicall batching

pub mod aggregator;
pub mod client;

pub use aggregator::*;
pub use client::*;
