//! Manifest data model and serialization.
//!
//! # Format
//!
//! ```json
//! {
//!   "generatedAt": "2024-06-15T14:30:45.123Z",
//!   "entries": [
//!     {
//!       "name": "report.html",
//!       "folder": "/static/assets/dash",
//!       "url": "/static/assets/dash/report.html"
//!     }
//!   ]
//! }
//! ```

mod write;

pub use write::write_atomic;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::index::IndexError;
use crate::utils::date::DateTimeUtc;

/// One discovered file.
///
/// Invariant: `url == folder + "/" + name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Final url segment.
    pub name: String,
    /// Url without the final segment; empty for files at the public root.
    pub folder: String,
    /// Site-relative url with a leading slash.
    pub url: String,
}

impl ManifestEntry {
    /// Split a site url into folder and name at the last `/`.
    ///
    /// `/static/dash/a.html` -> folder `/static/dash`, name `a.html`
    /// `/a.html`             -> folder ``, name `a.html`
    pub fn from_url(url: String) -> Self {
        let (folder, name) = url.rsplit_once('/').unwrap_or(("", url.as_str()));
        Self {
            name: name.to_string(),
            folder: folder.to_string(),
            url,
        }
    }
}

/// Document written to the manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// RFC 3339 generation time.
    pub generated_at: String,
    /// Entries sorted ascending by `url`.
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Assemble a manifest, sorting entries by url.
    pub fn new(generated_at: DateTimeUtc, mut entries: Vec<ManifestEntry>) -> Self {
        entries.sort_by(|a, b| a.url.cmp(&b.url));
        Self {
            generated_at: generated_at.to_rfc3339(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON (2-space indent) with a trailing newline.
    pub fn to_json(&self) -> Result<String, IndexError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Serialize and replace `path` in one step.
    ///
    /// The previous file is left untouched if anything fails.
    pub fn write(&self, path: &Path) -> Result<(), IndexError> {
        let json = self.to_json()?;
        write_atomic(path, json.as_bytes())
    }
}
