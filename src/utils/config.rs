use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{EARTH_MEAN_RADIUS_M, WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_M};
use crate::processing::formatter::Syntax;

/// Library configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeodesyConfig {
    /// Earth model used for distance calculations
    pub earth_model: EarthModel,
    /// Coordinate text settings for reports
    pub display: DisplayConfig,
}

/// Earth model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EarthModel {
    /// Radius of the sphere used by the haversine distance (meters)
    pub mean_radius_m: f64,
    /// Ellipsoid semi-major axis (meters)
    pub semi_major_axis_m: f64,
    /// Ellipsoid flattening
    pub flattening: f64,
}

/// How coordinates are rendered in location reports
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub syntax: Syntax,
}

impl EarthModel {
    /// WGS84 ellipsoid with the 6371 km mean sphere
    pub fn wgs84() -> Self {
        Self {
            mean_radius_m: EARTH_MEAN_RADIUS_M,
            semi_major_axis_m: WGS84_SEMI_MAJOR_AXIS_M,
            flattening: WGS84_FLATTENING,
        }
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::wgs84()
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON deserialization error
    SerializationError { message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => {
                write!(f, "I/O error: {}", message)
            }
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Outcome of [`GeodesyConfig::validate`]
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

impl GeodesyConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: GeodesyConfig = serde_json::from_str(content).map_err(|e| {
            ConfigError::SerializationError {
                message: format!("Failed to parse config: {}", e),
            }
        })?;

        let validation = config.validate();
        for warning in &validation.warnings {
            tracing::warn!(%warning, "configuration warning");
        }
        if let Some(error) = validation.errors.into_iter().next() {
            return Err(error);
        }

        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config = Self::from_json_str(&content).map_err(|e| match e {
            ConfigError::SerializationError { message } => ConfigError::SerializationError {
                message: format!("{} ({})", message, path_str),
            },
            other => other,
        })?;

        tracing::debug!(path = %path_str, "loaded geodesy configuration");
        Ok(config)
    }

    /// Check every parameter, collecting all problems
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let model = &self.earth_model;

        if !(model.mean_radius_m.is_finite() && model.mean_radius_m > 0.0) {
            errors.push(ConfigError::InvalidParameter {
                parameter: "earth_model.mean_radius_m".to_string(),
                value: model.mean_radius_m.to_string(),
                reason: "Must be a positive number of meters".to_string(),
            });
        }

        if !(model.semi_major_axis_m.is_finite() && model.semi_major_axis_m > 0.0) {
            errors.push(ConfigError::InvalidParameter {
                parameter: "earth_model.semi_major_axis_m".to_string(),
                value: model.semi_major_axis_m.to_string(),
                reason: "Must be a positive number of meters".to_string(),
            });
        }

        if !(0.0..1.0).contains(&model.flattening) {
            errors.push(ConfigError::InvalidParameter {
                parameter: "earth_model.flattening".to_string(),
                value: model.flattening.to_string(),
                reason: "Must be within [0, 1)".to_string(),
            });
        }

        if errors.is_empty() {
            let semi_minor = model.semi_major_axis_m * (1.0 - model.flattening);
            if model.mean_radius_m < semi_minor || model.mean_radius_m > model.semi_major_axis_m {
                warnings.push(format!(
                    "Mean radius {} m lies outside the ellipsoid axes [{}, {}]",
                    model.mean_radius_m, semi_minor, model.semi_major_axis_m
                ));
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GeodesyConfig::default();
        assert_eq!(config.earth_model.mean_radius_m, 6_371_000.0);
        assert_eq!(config.earth_model.semi_major_axis_m, 6_378_137.0);
        assert_eq!(config.display.syntax, Syntax::DegMinSec);

        let validation = config.validate();
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = GeodesyConfig::from_json_str(r#"{"display": {"syntax": "deg_min"}}"#).unwrap();
        assert_eq!(config.display.syntax, Syntax::DegMin);
        assert_eq!(config.earth_model, EarthModel::wgs84());

        let json = r#"{"earth_model": {"mean_radius_m": 6371008.8}}"#;
        let config = GeodesyConfig::from_json_str(json).unwrap();
        assert_eq!(config.earth_model.mean_radius_m, 6_371_008.8);
        assert_eq!(config.earth_model.flattening, 1.0 / 298.257223563);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = GeodesyConfig::from_json_str(r#"{"earth_model": {"mean_radius_m": -1.0}}"#);
        match result {
            Err(ConfigError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "earth_model.mean_radius_m")
            }
            other => panic!("expected an invalid parameter, got {:?}", other),
        }

        let result = GeodesyConfig::from_json_str(r#"{"display": {"syntax": "decimal"}}"#);
        assert!(matches!(result, Err(ConfigError::SerializationError { .. })));
    }

    #[test]
    fn test_validation_collects_every_error() {
        let config = GeodesyConfig {
            earth_model: EarthModel {
                mean_radius_m: 0.0,
                semi_major_axis_m: f64::NAN,
                flattening: 1.5,
            },
            display: DisplayConfig::default(),
        };
        let validation = config.validate();
        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 3);
    }

    #[test]
    fn test_radius_outside_axes_warns() {
        let mut config = GeodesyConfig::default();
        config.earth_model.mean_radius_m = 6_400_000.0;
        let validation = config.validate();
        assert!(validation.is_valid);
        assert_eq!(validation.warnings.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"display": {{"syntax": "deg_min"}}}}"#).unwrap();

        let config = GeodesyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.display.syntax, Syntax::DegMin);

        let missing = GeodesyConfig::from_file("/nonexistent/geocoords.json");
        assert!(matches!(missing, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidParameter {
            parameter: "earth_model.flattening".to_string(),
            value: "1.5".to_string(),
            reason: "Must be within [0, 1)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'earth_model.flattening' = '1.5': Must be within [0, 1)"
        );
    }
}
