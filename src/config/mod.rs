//! Indexer configuration management for `dashdex.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [paths] and [index]
//! ├── types/         # ConfigError, IndexPaths
//! ├── util.rs        # config file discovery
//! └── mod.rs         # IndexerConfig (this file)
//! ```
//!
//! The config file is optional. Without one, the base directory is the
//! current working directory and every setting keeps its default, which
//! yields the fixed layout `public/` + `public/static/assets/dashboards.json`.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{IndexSectionConfig, PathsConfig};
pub use types::{ConfigError, IndexPaths};

use crate::{
    cli::{Cli, IndexArgs},
    index::ErrorPolicy,
    log,
    utils::path::{is_within, normalize_path, resolve_path},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "dashdex.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing dashdex.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Base directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Public root, assets root and manifest location
    pub paths: PathsConfig,

    /// Extension filter and walk error policy
    pub index: IndexSectionConfig,
}

impl IndexerConfig {
    /// Load configuration for the current invocation.
    ///
    /// Searches upward from cwd for the config file. The base directory is
    /// the config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let name = cli.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG));

        let mut config = match find_config_file(name, cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            // An explicitly requested config must exist
            None if cli.config.is_some() => {
                return Err(ConfigError::Io(
                    cwd.join(name),
                    io::Error::from(io::ErrorKind::NotFound),
                )
                .into());
            }
            None => Self {
                root: cwd.to_path_buf(),
                ..Self::default()
            },
        };

        config.root = normalize_path(&config.root);
        config.apply_index_args(&cli.index_args());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), fields.join(", "));
    }

    /// Apply `index` subcommand flags on top of the file settings.
    fn apply_index_args(&mut self, args: &IndexArgs) {
        if args.skip_unreadable {
            self.index.on_error = ErrorPolicy::Skip;
        }
    }

    /// Validate sections and the relationship between the resolved roots.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.paths.validate()?;
        self.index.validate()?;

        let paths = self.paths();
        if !is_within(paths.assets_root(), paths.public_root()) {
            return Err(ConfigError::Validation(format!(
                "assets root `{}` is not inside public root `{}`",
                paths.assets_root().display(),
                paths.public_root().display()
            )));
        }
        Ok(())
    }

    /// Get the base directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Resolve public root, assets root and manifest path against the base
    /// directory.
    pub fn paths(&self) -> IndexPaths {
        let public_root = resolve_path(&self.paths.public, &self.root);
        let assets_root = resolve_path(&self.paths.assets, &self.root);
        let output = assets_root.join(&self.paths.output);
        IndexPaths::new(public_root, assets_root, output)
    }
}

#[cfg(test)]
pub fn test_parse_config(content: &str) -> IndexerConfig {
    let (parsed, ignored) = IndexerConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
