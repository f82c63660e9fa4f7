//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! public = "public"                 # site root that urls are computed from
//! assets = "public/static/assets"   # directory scanned for generated html
//! output = "dashboards.json"        # manifest file, relative to assets
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Component, PathBuf};

use crate::config::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Public root, relative to the base directory.
    pub public: PathBuf,
    /// Assets root, relative to the base directory.
    pub assets: PathBuf,
    /// Manifest file name, relative to the assets root.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            public: "public".into(),
            assets: "public/static/assets".into(),
            output: "dashboards.json".into(),
        }
    }
}

impl PathsConfig {
    /// Reject output paths that would escape the assets root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let plain = !self.output.as_os_str().is_empty()
            && self
                .output
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !plain {
            return Err(ConfigError::Validation(format!(
                "[paths.output] must be a relative file path inside the assets root, got `{}`",
                self.output.display()
            )));
        }
        Ok(())
    }
}
