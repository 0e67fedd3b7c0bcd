//! Configuration

pub mod config;

pub use config::{ConfigError, DisplayConfig, EarthModel, GeodesyConfig, ValidationResult};
