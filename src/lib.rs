//! Geographic coordinates
//!
//! Conversion between decimal degrees and the colon-separated coordinate
//! syntaxes `D:M.fffff` and `D:M:S.fff`, plus great-circle distance and
//! azimuth between validated WGS84 coordinates.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use core::{Coordinate, ALTITUDE_UNKNOWN, EARTH_MEAN_RADIUS_M};
pub use algorithms::{azimuth, distance, Geodesic};
pub use processing::{
    degree_display, format_coordinate, parse_coordinate, FormatError, ParseError, ParsedAngle,
    Syntax,
};
pub use validation::{GeoError, GeoResult, RangeError};
pub use utils::{ConfigError, DisplayConfig, EarthModel, GeodesyConfig};
pub use api::LocationReport;
