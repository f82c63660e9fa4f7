//! Site url derivation from filesystem paths.
//!
//! - Always starts with `/`
//! - Only `/` separates segments, whatever the host separator is
//! - Non-UTF-8 segments are converted lossily

use std::path::{MAIN_SEPARATOR, Path};

use super::IndexError;

/// Url of `file` relative to `public_root`.
///
/// # Example
/// ```ignore
/// site_url(Path::new("/srv/public"), Path::new("/srv/public/static/a.html"))
///     -> "/static/a.html"
/// ```
pub fn site_url(public_root: &Path, file: &Path) -> Result<String, IndexError> {
    let relative = file
        .strip_prefix(public_root)
        .map_err(|_| IndexError::OutsidePublicRoot {
            path: file.to_path_buf(),
            root: public_root.to_path_buf(),
        })?;
    Ok(url_from_relative(relative))
}

/// Prefix a relative path with `/` after separator normalization.
pub fn url_from_relative(relative: &Path) -> String {
    let text = relative.to_string_lossy();
    let slashed = with_forward_slashes(&text, MAIN_SEPARATOR);
    format!("/{}", slashed.trim_start_matches('/'))
}

/// Replace `separator` with `/`.
///
/// A no-op on hosts where the separator already is `/`.
pub fn with_forward_slashes(text: &str, separator: char) -> String {
    if separator == '/' {
        text.to_string()
    } else {
        text.replace(separator, "/")
    }
}
