//! Sector scan configuration.

use std::path::PathBuf;

use luty_core::Sector;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_output() -> PathBuf {
    PathBuf::from("scan.png")
}

const fn default_radius() -> u32 {
    50
}

const fn default_edge() -> u32 {
    800
}

const fn default_supersample() -> u32 {
    4
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// PNG file the scan is written to.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Sector center `[x, y, z]`.
    #[serde(default)]
    pub center: [i64; 3],

    /// Sector half-width. Bounds are inclusive.
    #[serde(default = "default_radius")]
    pub radius: u32,

    /// Output width in pixels.
    #[serde(default = "default_edge")]
    pub width: u32,

    /// Output height in pixels.
    #[serde(default = "default_edge")]
    pub height: u32,

    /// The renderer draws at `supersample × (width, height)` before the
    /// image is downsampled for antialiasing.
    #[serde(default = "default_supersample")]
    pub supersample: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            center: [0, 0, 0],
            radius: default_radius(),
            width: default_edge(),
            height: default_edge(),
            supersample: default_supersample(),
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub const fn sector(&self) -> Sector {
        Sector::new(self.center, self.radius)
    }

    /// Reject sizes the renderer cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero dimension or a
    /// supersampled dimension that overflows `u32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scan.width", self.width),
            ("scan.height", self.height),
            ("scan.supersample", self.supersample),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        for (field, value) in [("scan.width", self.width), ("scan.height", self.height)] {
            if value.checked_mul(self.supersample).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value} × supersample {} overflows", self.supersample),
                });
            }
        }

        Ok(())
    }
}
