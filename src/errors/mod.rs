//! Error handling

pub mod farm_error;

pub use farm_error::*;
