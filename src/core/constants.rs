//! Physical constants and coordinate domain bounds

/// Mean Earth radius used by the spherical distance model (meters)
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// WGS84 semi-major axis (meters)
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS84 flattening
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// Latitude domain, inclusive on both ends (degrees)
pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;

/// Longitude domain, `[LONGITUDE_MIN, LONGITUDE_MAX)` (degrees)
pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Altitude sentinel meaning "not known"
pub const ALTITUDE_UNKNOWN: f32 = f32::NAN;
