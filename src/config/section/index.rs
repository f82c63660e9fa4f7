//! `[index]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [index]
//! extension = "html"    # matched case-insensitively, without the dot
//! on_error = "abort"    # abort | skip
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::index::ErrorPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSectionConfig {
    /// File extension to index.
    pub extension: String,
    /// What to do with unreadable directories during the walk.
    pub on_error: ErrorPolicy,
}

impl Default for IndexSectionConfig {
    fn default() -> Self {
        Self {
            extension: "html".into(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl IndexSectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ext = self.extension.as_str();
        if ext.is_empty() || ext.contains(['.', '/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "[index.extension] must be a bare extension like `html`, got `{ext}`"
            )));
        }
        Ok(())
    }
}
