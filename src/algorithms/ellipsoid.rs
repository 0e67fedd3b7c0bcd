//! Ellipsoidal geodesy on an [`EarthModel`].
//!
//! Vincenty's inverse solution gives the reference distance and bearings
//! that the spherical approximations in [`great_circle`](super::great_circle)
//! are measured against. Earth-centred, Earth-fixed (ECEF) vectors give the
//! straight-line separation of two points including their altitude.

use nalgebra::Vector3;

use super::great_circle;
use crate::core::Coordinate;
use crate::utils::config::EarthModel;

/// Maximum iterations for Vincenty's inverse before giving up
pub const VINCENTY_MAX_ITERATIONS: usize = 200;

/// Convergence threshold on the auxiliary longitude (radians)
pub const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Solution of the inverse geodesic problem between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodesic {
    /// Length of the geodesic (meters)
    pub distance_m: f64,
    /// Bearing at the origin, degrees clockwise from north in `[0, 360)`
    pub initial_bearing_deg: f64,
    /// Bearing on arrival at the destination, degrees clockwise from north in `[0, 360)`
    pub final_bearing_deg: f64,
}

impl EarthModel {
    /// Semi-minor axis (meters)
    pub fn semi_minor_axis_m(&self) -> f64 {
        self.semi_major_axis_m * (1.0 - self.flattening)
    }

    /// First eccentricity squared
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Haversine distance using this model's mean radius (meters)
    pub fn great_circle_distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        great_circle::haversine_distance(a, b, self.mean_radius_m)
    }

    /// Vincenty's inverse solution on this ellipsoid.
    ///
    /// Returns `None` when the iteration does not converge, which happens
    /// only for nearly antipodal points.
    pub fn inverse(&self, from: &Coordinate, to: &Coordinate) -> Option<Geodesic> {
        let a = self.semi_major_axis_m;
        let b = self.semi_minor_axis_m();
        let f = self.flattening;

        let l = (to.longitude() - from.longitude()).to_radians();
        let u1 = ((1.0 - f) * from.latitude().to_radians().tan()).atan();
        let u2 = ((1.0 - f) * to.latitude().to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        for _ in 0..VINCENTY_MAX_ITERATIONS {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();
            if sin_sigma == 0.0 {
                // Coincident points
                return Some(Geodesic {
                    distance_m: 0.0,
                    initial_bearing_deg: 0.0,
                    final_bearing_deg: 0.0,
                });
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            // Equatorial line: cos_sq_alpha is zero
            let cos_2sigma_m = if cos_sq_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            } else {
                0.0
            };
            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

            let previous = lambda;
            let cos_2sigma_m_sq = cos_2sigma_m * cos_2sigma_m;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m_sq)));

            if (lambda - previous).abs() < VINCENTY_TOLERANCE {
                let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
                let big_a = 1.0
                    + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
                let big_b =
                    u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
                let delta_sigma = big_b
                    * sin_sigma
                    * (cos_2sigma_m
                        + big_b / 4.0
                            * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m_sq)
                                - big_b / 6.0
                                    * cos_2sigma_m
                                    * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                    * (-3.0 + 4.0 * cos_2sigma_m_sq)));

                let (sin_lambda, cos_lambda) = lambda.sin_cos();
                let initial = (cos_u2 * sin_lambda)
                    .atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
                let final_ = (cos_u1 * sin_lambda)
                    .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

                return Some(Geodesic {
                    distance_m: b * big_a * (sigma - delta_sigma),
                    initial_bearing_deg: initial.to_degrees().rem_euclid(360.0),
                    final_bearing_deg: final_.to_degrees().rem_euclid(360.0),
                });
            }
        }

        tracing::debug!(
            from_lat = from.latitude(),
            from_lon = from.longitude(),
            to_lat = to.latitude(),
            to_lon = to.longitude(),
            "vincenty inverse did not converge"
        );
        None
    }

    /// Earth-centred, Earth-fixed position (meters). Unknown altitude counts as 0.
    pub fn to_ecef(&self, coordinate: &Coordinate) -> Vector3<f64> {
        let altitude = if coordinate.has_altitude() {
            coordinate.altitude() as f64
        } else {
            0.0
        };
        let (sin_lat, cos_lat) = coordinate.latitude().to_radians().sin_cos();
        let (sin_lon, cos_lon) = coordinate.longitude().to_radians().sin_cos();
        let e2 = self.eccentricity_squared();

        // Prime vertical radius of curvature
        let n = self.semi_major_axis_m / (1.0 - e2 * sin_lat * sin_lat).sqrt();

        Vector3::new(
            (n + altitude) * cos_lat * cos_lon,
            (n + altitude) * cos_lat * sin_lon,
            (n * (1.0 - e2) + altitude) * sin_lat,
        )
    }

    /// Chord length between two points, altitude included (meters)
    pub fn straight_line_distance(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        (self.to_ecef(a) - self.to_ecef(b)).norm()
    }
}
