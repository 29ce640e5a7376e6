//! Core data types and structures

pub mod addresses;
pub mod farms;

pub use addresses::*;
pub use farms::*;
