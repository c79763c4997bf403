//! Galaxy data file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("galaxy-001.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GalaxyConfig {
    /// JSON file holding the galaxy. A missing file is an empty galaxy.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
