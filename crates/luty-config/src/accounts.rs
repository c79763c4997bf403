//! Account store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("accounts.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountsConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
