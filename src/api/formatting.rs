//! Location report payloads
//!
//! A [`LocationReport`] carries a position as coordinate text, the form
//! handed to reporting transports that expect strings rather than numbers.

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::processing::formatter::format_coordinate;
use crate::utils::config::DisplayConfig;
use crate::validation::GeoResult;

/// A position rendered as coordinate text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationReport {
    pub latitude: String,
    pub longitude: String,
    /// Source of the fix, e.g. "gps" or "network"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl LocationReport {
    /// Render a coordinate with the configured syntax
    pub fn from_coordinate(coordinate: &Coordinate, display: &DisplayConfig) -> GeoResult<Self> {
        let syntax = display.syntax;
        let latitude = format_coordinate(coordinate.latitude(), syntax)?;
        let longitude = format_coordinate(coordinate.longitude(), syntax)?;
        tracing::trace!(%latitude, %longitude, ?syntax, "built location report");

        Ok(Self {
            latitude,
            longitude,
            provider: None,
        })
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Latitude and longitude text, in that order
    pub fn as_pair(&self) -> [String; 2] {
        [self.latitude.clone(), self.longitude.clone()]
    }

    /// Parse the text back into a coordinate with the given altitude.
    ///
    /// Fails for longitudes in `(-180, -179)`, whose text has degrees `-180`
    /// with non-zero minutes.
    pub fn to_coordinate(&self, altitude: f32) -> GeoResult<Coordinate> {
        Coordinate::from_text(&self.latitude, &self.longitude, altitude)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
