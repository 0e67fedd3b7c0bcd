//! Core types and constants for geodetic coordinates

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
