//! Configuration constants and settings for the drag rotator
//!
//! This module contains the default tuning values and the serializable
//! per-rotator settings, which can be loaded from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Target ticks per second for the headless schedule runner
pub const TARGET_FPS: f64 = 60.0;

/// Rotation defaults
pub mod rotation {
    /// Degrees of rotation per pixel of pointer movement
    pub const ROTATION_SPEED: f32 = 2.0;

    /// Lower bound of the tracked vertical angle (degrees)
    pub const MIN_VERTICAL_ANGLE: f32 = -90.0;

    /// Upper bound of the tracked vertical angle (degrees)
    pub const MAX_VERTICAL_ANGLE: f32 = 90.0;
}

/// Reset animation defaults
pub mod reset {
    /// Duration of the reset-to-identity animation (seconds)
    pub const RESET_DURATION: f32 = 0.2;
}

/// Per-rotator settings
///
/// Every field is optional in JSON; missing fields fall back to the
/// defaults above.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RotatorSettings {
    pub rotation_speed: f32,
    /// Flip the vertical (pitch) rotation
    pub invert_x: bool,
    /// Flip the horizontal (yaw) rotation
    pub invert_y: bool,
    pub limit_vertical_rotation: bool,
    pub min_vertical_angle: f32,
    pub max_vertical_angle: f32,
    /// Seconds
    pub reset_duration: f32,
}

impl Default for RotatorSettings {
    fn default() -> Self {
        Self {
            rotation_speed: rotation::ROTATION_SPEED,
            invert_x: false,
            invert_y: false,
            limit_vertical_rotation: true,
            min_vertical_angle: rotation::MIN_VERTICAL_ANGLE,
            max_vertical_angle: rotation::MAX_VERTICAL_ANGLE,
            reset_duration: reset::RESET_DURATION,
        }
    }
}

impl RotatorSettings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Whether the clamp bounds are ordered; inverted bounds saturate instead of failing
    pub fn has_ordered_bounds(&self) -> bool {
        self.min_vertical_angle <= self.max_vertical_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = RotatorSettings::from_json(r#"{ "rotation_speed": 0.5, "invert_y": true }"#)
            .unwrap();
        assert_eq!(settings.rotation_speed, 0.5);
        assert!(settings.invert_y);
        assert!(!settings.invert_x);
        assert!(settings.limit_vertical_rotation);
        assert_eq!(settings.min_vertical_angle, rotation::MIN_VERTICAL_ANGLE);
        assert_eq!(settings.max_vertical_angle, rotation::MAX_VERTICAL_ANGLE);
        assert_eq!(settings.reset_duration, reset::RESET_DURATION);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = RotatorSettings::from_json("{ rotation_speed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "drag_rotator_settings_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "min_vertical_angle": -30.0, "max_vertical_angle": 45.0 }"#)
            .unwrap();
        let settings = RotatorSettings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.min_vertical_angle, -30.0);
        assert_eq!(settings.max_vertical_angle, 45.0);
        assert!(settings.has_ordered_bounds());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = RotatorSettings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
