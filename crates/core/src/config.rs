use crate::hex::{OrientationKind, Point};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a [Grid](crate::Grid). Two grids built from
/// the same config will always be identical. Build a grid from a config with
/// [Grid::from_config](crate::Grid::from_config).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Pointy-topped or flat-topped hexes
    pub orientation: OrientationKind,

    /// The pixel at the center of hex `(0, 0)`. Must be finite.
    #[validate(custom = "validate_origin")]
    pub origin: Point,

    /// Distance from a hex's center to its corners, per pixel axis. Neither
    /// component can be zero.
    #[validate(custom = "validate_size")]
    pub size: Point,

    /// Number of bits used for each axis in hex codes. This bounds how far
    /// from the origin a hex can be while still being encodable: each axis
    /// can hold magnitudes up to `2^(bits - 1) - 1`.
    #[validate(range(min = 1, max = 32))]
    pub bits_per_axis: u32,
}

impl GridConfig {
    /// Deserialize a config from JSON. Will fail if the input is malformed.
    /// The config is NOT validated here, that happens when a grid is built.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        serde_json::from_str(json).context("error deserializing grid config")
    }

    /// Serialize this config into JSON. This can be loaded back with
    /// [Self::from_json].
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing grid config")
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::default(),
            origin: Point::ORIGIN,
            size: Point::new(1.0, 1.0),
            bits_per_axis: 32,
        }
    }
}

fn validate_origin(origin: &Point) -> Result<(), ValidationError> {
    if origin.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("origin"))
    }
}

fn validate_size(size: &Point) -> Result<(), ValidationError> {
    if size.x() == 0.0 || size.y() == 0.0 || !size.is_finite() {
        Err(ValidationError::new("size"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GridConfig = serde_json::from_str(
            r#"{"orientation": "pointy", "size": {"x": 20.0, "y": 10.0}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            GridConfig {
                orientation: OrientationKind::Pointy,
                size: Point::new(20.0, 10.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_deserialize_bad_orientation() {
        let result =
            serde_json::from_str::<GridConfig>(r#"{"orientation": "round"}"#);
        assert!(result.is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_round_trip() {
        let config = GridConfig {
            orientation: OrientationKind::Pointy,
            origin: Point::new(10.0, 20.0),
            size: Point::new(20.0, 10.0),
            bits_per_axis: 16,
        };
        assert_eq!(GridConfig::from_json(&config.to_json()).unwrap(), config);
    }
}
