use std::fmt;

use crate::core::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::processing::formatter::FormatError;
use crate::processing::parser::ParseError;
use crate::utils::config::ConfigError;

/// Latitude or longitude outside its declared domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// Latitude outside [-90, 90] (or NaN)
    Latitude { value: f64 },
    /// Longitude outside [-180, 180) (or NaN)
    Longitude { value: f64 },
}

impl RangeError {
    /// The rejected value
    pub fn value(&self) -> f64 {
        match self {
            RangeError::Latitude { value } | RangeError::Longitude { value } => *value,
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::Latitude { value } => write!(
                f,
                "Latitude {} outside valid range [{}, {}]",
                value, LATITUDE_MIN, LATITUDE_MAX
            ),
            RangeError::Longitude { value } => write!(
                f,
                "Longitude {} outside valid range [{}, {})",
                value, LONGITUDE_MIN, LONGITUDE_MAX
            ),
        }
    }
}

impl std::error::Error for RangeError {}

/// Result type for operations that combine parsing, formatting and validation
pub type GeoResult<T> = Result<T, GeoError>;

/// Crate-level error covering every failure the library reports
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    Parse(ParseError),
    Format(FormatError),
    Range(RangeError),
    Config(ConfigError),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::Parse(e) => write!(f, "Parse error: {}", e),
            GeoError::Format(e) => write!(f, "Format error: {}", e),
            GeoError::Range(e) => write!(f, "Range error: {}", e),
            GeoError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::Parse(e) => Some(e),
            GeoError::Format(e) => Some(e),
            GeoError::Range(e) => Some(e),
            GeoError::Config(e) => Some(e),
        }
    }
}

impl From<ParseError> for GeoError {
    fn from(error: ParseError) -> Self {
        GeoError::Parse(error)
    }
}

impl From<FormatError> for GeoError {
    fn from(error: FormatError) -> Self {
        GeoError::Format(error)
    }
}

impl From<RangeError> for GeoError {
    fn from(error: RangeError) -> Self {
        GeoError::Range(error)
    }
}

impl From<ConfigError> for GeoError {
    fn from(error: ConfigError) -> Self {
        GeoError::Config(error)
    }
}
