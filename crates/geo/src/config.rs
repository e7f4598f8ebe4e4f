//! Planner configuration.
//!
//! The constants the viewport planner falls back on can be overridden from
//! a TOML file, e.g.:
//!
//! ```toml
//! viewer_zoom = 14
//!
//! [default_center]
//! latitude = 41.3851
//! longitude = 2.1734
//! ```

use crate::zoom::{MAX_ZOOM, MIN_ZOOM, SINGLE_POINT_ZOOM};
use crate::{Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Madrid, where the map opens when there is nothing to show.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(40.416775, -3.70379);

/// Zoom for the empty map and for a viewer with no cats around.
pub const DEFAULT_ZOOM: u8 = 15;

/// Fallback values used by [`crate::ViewportPlanner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Center when neither a viewer nor a located cat is available
    pub default_center: Coordinate,
    /// Zoom when neither a viewer nor a located cat is available
    pub default_zoom: u8,
    /// Zoom when only the viewer is known
    pub viewer_zoom: u8,
    /// Zoom when exactly one cat is located and there is no viewer
    pub single_point_zoom: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            viewer_zoom: DEFAULT_ZOOM,
            single_point_zoom: SINGLE_POINT_ZOOM,
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PlannerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GeoError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Checks that every zoom is in range and the default center is valid.
    pub fn validate(&self) -> Result<()> {
        if !self.default_center.is_valid() {
            return Err(GeoError::Config(format!(
                "default_center out of range: {:?}",
                self.default_center
            )));
        }

        let zooms = [
            ("default_zoom", self.default_zoom),
            ("viewer_zoom", self.viewer_zoom),
            ("single_point_zoom", self.single_point_zoom),
        ];
        for (name, zoom) in zooms {
            if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
                return Err(GeoError::Config(format!(
                    "{} must be between {} and {}, got {}",
                    name, MIN_ZOOM, MAX_ZOOM, zoom
                )));
            }
        }

        Ok(())
    }
}
