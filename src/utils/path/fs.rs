//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - resolve configured paths against the base directory
//! - `is_within` - ancestor check on normalized paths

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// `.` and `..` components are folded lexically in the fallback so that
/// paths which do not exist yet still compare correctly.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        };
        clean_components(&absolute)
    })
}

/// Resolve a configured path against a base directory.
///
/// Absolute paths are used as-is, relative ones are joined onto `base`.
/// Resolution is lexical so that the result still shares its prefix with
/// `base` when the target does not exist or sits behind a symlink.
///
/// # Example
/// ```ignore
/// let assets = resolve_path(Path::new("public/static/assets"), base_dir);
/// ```
#[inline]
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        clean_components(path)
    } else {
        clean_components(&base.join(path))
    }
}

/// Check whether `inner` equals `outer` or lies beneath it.
#[inline]
pub fn is_within(inner: &Path, outer: &Path) -> bool {
    inner.starts_with(outer)
}

/// Lexically remove `.` and `..` components.
fn clean_components(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
