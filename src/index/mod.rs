//! Html asset indexing.
//!
//! Walks the assets root, keeps files with the configured extension,
//! derives their site urls and assembles a sorted [`Manifest`].
//!
//! ```text
//! public/                          ← public root
//! └── static/assets/               ← assets root
//!     ├── dash/report.HTML         -> /static/assets/dash/report.HTML
//!     ├── dash/notes.txt           -> (skipped)
//!     └── overview.html            -> /static/assets/overview.html
//! ```

mod error;
mod policy;
mod url;
mod walk;

pub use error::IndexError;
pub use policy::ErrorPolicy;
pub use url::site_url;
pub use walk::collect_files;

use std::path::Path;

use crate::config::{IndexPaths, IndexSectionConfig};
use crate::debug;
use crate::manifest::{Manifest, ManifestEntry};
use crate::utils::date::DateTimeUtc;

/// Build the manifest for the configured roots.
///
/// Reads the filesystem only; writing is left to the caller.
pub fn build_manifest(
    paths: &IndexPaths,
    section: &IndexSectionConfig,
) -> Result<Manifest, IndexError> {
    let walked = collect_files(paths.assets_root(), section.on_error)?;
    debug!("walk"; "found {} files ({} skipped)", walked.files.len(), walked.skipped);

    let suffix = extension_suffix(&section.extension);
    let entries = walked
        .files
        .iter()
        .filter(|path| has_suffix(path, &suffix))
        .map(|path| site_url(paths.public_root(), path).map(ManifestEntry::from_url))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest::new(DateTimeUtc::now(), entries))
}

/// Lowercased `.ext` suffix for matching file names.
fn extension_suffix(extension: &str) -> String {
    format!(".{}", extension.to_lowercase())
}

/// Whether the final path segment ends with `suffix`, ignoring case.
fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().to_lowercase().ends_with(suffix))
}
