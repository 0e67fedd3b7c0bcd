//! Core data types for geodetic coordinates

use serde::{Deserialize, Serialize};

use super::constants::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN};
use crate::algorithms::great_circle;
use crate::processing::parser::parse_coordinate;
use crate::validation::{GeoResult, RangeError};

/// Geodetic coordinate on the WGS84 datum.
///
/// Latitude and longitude are in decimal degrees. Latitude lies in
/// `[-90.0, 90.0]` (positive north), longitude in `[-180.0, 180.0)`
/// (positive east). Altitude is the height above the WGS84 ellipsoid in
/// meters; `NaN` means the altitude is not known.
///
/// Both angular fields are checked by [`Coordinate::new`] and by every
/// setter. A rejected update leaves the coordinate untouched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "CoordinateRecord", into = "CoordinateRecord")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    altitude: f32,
}

/// Wire form of [`Coordinate`]. An unknown altitude travels as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CoordinateRecord {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude: Option<f32>,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range latitude or longitude
    pub fn new(latitude: f64, longitude: f64, altitude: f32) -> Result<Self, RangeError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
            altitude,
        })
    }

    /// Create a coordinate from two textual angles (either `D:M.fffff` or `D:M:S.fff`)
    pub fn from_text(latitude: &str, longitude: &str, altitude: f32) -> GeoResult<Self> {
        let lat = parse_coordinate(latitude)?;
        let lon = parse_coordinate(longitude)?;
        Ok(Self::new(lat, lon, altitude)?)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude in meters above the WGS84 ellipsoid, `NaN` when unknown
    pub fn altitude(&self) -> f32 {
        self.altitude
    }

    pub fn has_altitude(&self) -> bool {
        !self.altitude.is_nan()
    }

    pub fn set_latitude(&mut self, latitude: f64) -> Result<(), RangeError> {
        self.latitude = check_latitude(latitude)?;
        Ok(())
    }

    pub fn set_longitude(&mut self, longitude: f64) -> Result<(), RangeError> {
        self.longitude = check_longitude(longitude)?;
        Ok(())
    }

    /// Altitude is unconstrained; pass `NaN` to mark it unknown
    pub fn set_altitude(&mut self, altitude: f32) {
        self.altitude = altitude;
    }

    pub fn is_north_pole(&self) -> bool {
        self.latitude == LATITUDE_MAX
    }

    pub fn is_south_pole(&self) -> bool {
        self.latitude == LATITUDE_MIN
    }

    /// Great-circle distance to `to` in meters, altitude ignored
    pub fn distance(&self, to: &Coordinate) -> f32 {
        great_circle::distance(self, to)
    }

    /// Initial bearing from this coordinate to `to`, degrees clockwise from true north
    pub fn azimuth_to(&self, to: &Coordinate) -> f32 {
        great_circle::azimuth(self, to)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        let same_altitude = self.altitude == other.altitude
            || (self.altitude.is_nan() && other.altitude.is_nan());
        self.latitude == other.latitude && self.longitude == other.longitude && same_altitude
    }
}

impl TryFrom<CoordinateRecord> for Coordinate {
    type Error = RangeError;

    fn try_from(record: CoordinateRecord) -> Result<Self, Self::Error> {
        Coordinate::new(
            record.latitude,
            record.longitude,
            record.altitude.unwrap_or(f32::NAN),
        )
    }
}

impl From<Coordinate> for CoordinateRecord {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            altitude: coordinate.has_altitude().then_some(coordinate.altitude),
        }
    }
}

// NaN fails both range checks.
fn check_latitude(latitude: f64) -> Result<f64, RangeError> {
    if (LATITUDE_MIN..=LATITUDE_MAX).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(RangeError::Latitude { value: latitude })
    }
}

fn check_longitude(longitude: f64) -> Result<f64, RangeError> {
    if (LONGITUDE_MIN..LONGITUDE_MAX).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(RangeError::Longitude { value: longitude })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALTITUDE_UNKNOWN;
    use crate::processing::parser::ParseError;
    use crate::validation::GeoError;

    #[test]
    fn test_construction_bounds() {
        assert!(matches!(
            Coordinate::new(91.0, 0.0, 0.0),
            Err(RangeError::Latitude { .. })
        ));
        assert!(matches!(
            Coordinate::new(0.0, 180.0, 0.0),
            Err(RangeError::Longitude { .. })
        ));
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0, 0.0),
            Err(RangeError::Latitude { .. })
        ));

        let corner = Coordinate::new(-90.0, -180.0, ALTITUDE_UNKNOWN).unwrap();
        assert_eq!(corner.latitude(), -90.0);
        assert_eq!(corner.longitude(), -180.0);
        assert!(corner.altitude().is_nan());
        assert!(!corner.has_altitude());
        assert!(corner.is_south_pole());

        assert!(Coordinate::new(90.0, 179.999999, -11.5).is_ok());
    }

    #[test]
    fn test_setters_revalidate() {
        let mut coord = Coordinate::new(37.7749, -122.4194, 12.0).unwrap();

        assert!(coord.set_latitude(-45.0).is_ok());
        assert_eq!(coord.latitude(), -45.0);

        let result = coord.set_latitude(-90.5);
        assert_eq!(result, Err(RangeError::Latitude { value: -90.5 }));
        assert_eq!(coord.latitude(), -45.0); // unchanged

        let result = coord.set_longitude(180.0);
        assert_eq!(result, Err(RangeError::Longitude { value: 180.0 }));
        assert_eq!(coord.longitude(), -122.4194);

        assert!(coord.set_longitude(-180.0).is_ok());

        coord.set_altitude(f32::NAN);
        assert!(!coord.has_altitude());
        coord.set_altitude(-30.0);
        assert_eq!(coord.altitude(), -30.0);
    }

    #[test]
    fn test_value_equality_with_unknown_altitude() {
        let a = Coordinate::new(10.0, 20.0, ALTITUDE_UNKNOWN).unwrap();
        let b = Coordinate::new(10.0, 20.0, ALTITUDE_UNKNOWN).unwrap();
        let c = Coordinate::new(10.0, 20.0, 0.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_text() {
        let coord = Coordinate::from_text("61:30:36", "-24:15.5", 100.0).unwrap();
        assert!((coord.latitude() - 61.51).abs() < 1e-6);
        assert!((coord.longitude() - (-24.0 + 15.5 / 60.0)).abs() < 1e-9);

        let err = Coordinate::from_text("", "10:00", 0.0).unwrap_err();
        assert_eq!(err, GeoError::Parse(ParseError::MissingInput));

        // Parses fine as an angle but is not a latitude
        let err = Coordinate::from_text("95:00", "10:00", 0.0).unwrap_err();
        assert!(matches!(err, GeoError::Range(RangeError::Latitude { .. })));
    }

    #[test]
    fn test_serde_round_trip() {
        let coord = Coordinate::new(48.8584, 2.2945, ALTITUDE_UNKNOWN).unwrap();
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, r#"{"latitude":48.8584,"longitude":2.2945,"altitude":null}"#);

        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coord);

        let missing: Coordinate =
            serde_json::from_str(r#"{"latitude":1.0,"longitude":2.0}"#).unwrap();
        assert!(!missing.has_altitude());

        let bad = serde_json::from_str::<Coordinate>(r#"{"latitude":120.0,"longitude":0.0}"#);
        assert!(bad.is_err());
    }
}
