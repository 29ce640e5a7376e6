//! Farm metric calculation and fetching

pub mod calculator;
pub mod fetcher;

pub use calculator::*;
pub use fetcher::*;
