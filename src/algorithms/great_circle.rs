//! Great-circle distance and azimuth on a spherical Earth

use crate::core::{Coordinate, EARTH_MEAN_RADIUS_M};

/// Central angle between two coordinates (radians), by the haversine formula
pub fn central_angle(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = b.longitude().to_radians() - a.longitude().to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;

    // sqrt(h) can overshoot 1.0 by rounding near antipodes
    2.0 * h.sqrt().min(1.0).asin()
}

/// Haversine distance on a sphere of the given radius (meters)
pub fn haversine_distance(a: &Coordinate, b: &Coordinate, radius_m: f64) -> f64 {
    radius_m * central_angle(a, b)
}

/// Distance in meters between two coordinates on a sphere of radius 6371 km.
///
/// Symmetric, altitude ignored, exactly zero for identical coordinates.
/// Long routes stay within about 0.35% of the WGS84 ellipsoidal distance.
/// Short arcs follow the local curvature instead: north-south hops near the
/// equator come out up to 0.56% long, those near the poles up to 0.45% short.
pub fn distance(a: &Coordinate, b: &Coordinate) -> f32 {
    haversine_distance(a, b, EARTH_MEAN_RADIUS_M) as f32
}

/// Initial bearing from `from` to `to` in degrees clockwise from true north, in `[0, 360)`.
///
/// From the North pole every other point lies due south (180). From the
/// South pole every other point lies due north (0). A point seen from
/// itself has azimuth 0.
pub fn azimuth(from: &Coordinate, to: &Coordinate) -> f32 {
    if from.is_north_pole() {
        return if to.is_north_pole() { 0.0 } else { 180.0 };
    }
    if from.is_south_pole() {
        return 0.0;
    }
    if from.latitude() == to.latitude() && from.longitude() == to.longitude() {
        return 0.0;
    }

    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let dlon = (to.longitude() - from.longitude()).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Fold an angle into `[0, 360)` after narrowing to `f32`
fn normalize_degrees(degrees: f64) -> f32 {
    let folded = degrees.rem_euclid(360.0) as f32;
    // rem_euclid of a tiny negative, or the f32 cast, can land on 360 itself
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALTITUDE_UNKNOWN;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon, ALTITUDE_UNKNOWN).unwrap()
    }

    #[test]
    fn test_identical_points_are_zero_apart() {
        for (lat, lon) in [(0.0, 0.0), (37.7749, -122.4194), (-90.0, -180.0), (90.0, 179.5)] {
            let p = coord(lat, lon);
            assert_eq!(distance(&p, &p), 0.0);
        }
    }

    #[test]
    fn test_pole_to_pole() {
        let north = coord(90.0, 0.0);
        let south = coord(-90.0, 0.0);
        let d = distance(&north, &south) as f64;
        assert!((d - 20_015_000.0).abs() / 20_015_000.0 < 0.0035, "got {}", d);
    }

    #[test]
    fn test_symmetric_and_ignores_altitude() {
        let a = Coordinate::new(51.5074, -0.1278, 35.0).unwrap();
        let b = Coordinate::new(48.8566, 2.3522, ALTITUDE_UNKNOWN).unwrap();
        assert_eq!(distance(&a, &b), distance(&b, &a));

        let high = Coordinate::new(51.5074, -0.1278, 9000.0).unwrap();
        assert_eq!(distance(&a, &b), distance(&high, &b));

        // London to Paris is about 343.5 km on the sphere
        let d = distance(&a, &b);
        assert!((d - 343_560.0).abs() < 1_000.0, "got {}", d);
    }

    #[test]
    fn test_antipodal_points_clamp() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, -180.0);
        let d = distance(&a, &b) as f64;
        assert!((d - std::f64::consts::PI * EARTH_MEAN_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn test_polar_azimuths() {
        let north = coord(90.0, 0.0);
        let south = coord(-90.0, 45.0);
        let elsewhere = coord(12.5, -70.0);

        assert_eq!(azimuth(&north, &elsewhere), 180.0);
        assert_eq!(azimuth(&north, &south), 180.0);
        assert_eq!(azimuth(&south, &elsewhere), 0.0);
        assert_eq!(azimuth(&south, &north), 0.0);
        assert_eq!(azimuth(&north, &coord(90.0, 120.0)), 0.0);
    }

    #[test]
    fn test_self_azimuth_is_zero() {
        for (lat, lon) in [(0.0, 0.0), (-33.8688, 151.2093), (89.9, -180.0)] {
            let p = coord(lat, lon);
            assert_eq!(azimuth(&p, &p), 0.0);
        }
    }

    #[test]
    fn test_cardinal_azimuths() {
        let origin = coord(35.0, 139.0);
        assert!(azimuth(&origin, &coord(36.0, 139.0)).abs() < 1e-4);
        assert!((azimuth(&origin, &coord(35.0, 140.0)) - 90.0).abs() < 1.0);
        assert!((azimuth(&origin, &coord(34.0, 139.0)) - 180.0).abs() < 1e-4);
        assert!((azimuth(&origin, &coord(35.0, 138.0)) - 270.0).abs() < 1.0);
    }

    #[test]
    fn test_azimuth_across_antimeridian() {
        let west_of_line = coord(0.0, 179.5);
        let east_of_line = coord(0.0, -179.5);
        assert!((azimuth(&west_of_line, &east_of_line) - 90.0).abs() < 1e-4);
        assert!((azimuth(&east_of_line, &west_of_line) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_azimuth_range() {
        let origin = coord(10.0, 10.0);
        for step in 0..72 {
            let (sin, cos) = (step as f64 * 5.0).to_radians().sin_cos();
            let bearing_target = coord(10.0 + cos, 10.0 + sin);
            let az = azimuth(&origin, &bearing_target);
            assert!((0.0..360.0).contains(&az), "azimuth {} out of range", az);
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1e-12), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(45.0), 45.0);
    }
}
