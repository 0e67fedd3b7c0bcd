//! Distance and bearing algorithms

pub mod great_circle;
pub mod ellipsoid;

pub use great_circle::{azimuth, distance};
pub use ellipsoid::Geodesic;
