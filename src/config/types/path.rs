//! Resolved filesystem locations for one indexing run.

use std::path::{Path, PathBuf};

/// Absolute public root, assets root and manifest path.
///
/// Built by [`IndexerConfig::paths`](crate::config::IndexerConfig::paths);
/// every path is normalized against the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPaths {
    public_root: PathBuf,
    assets_root: PathBuf,
    output: PathBuf,
}

impl IndexPaths {
    pub fn new(public_root: PathBuf, assets_root: PathBuf, output: PathBuf) -> Self {
        Self {
            public_root,
            assets_root,
            output,
        }
    }

    /// Directory that site urls are relative to.
    pub fn public_root(&self) -> &Path {
        &self.public_root
    }

    /// Directory that is walked for html files.
    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }

    /// Manifest file location.
    pub fn output(&self) -> &Path {
        &self.output
    }
}
