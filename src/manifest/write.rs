//! All-or-nothing file replacement.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::index::IndexError;

/// Write `content` to `path` atomically.
///
/// Writes a temp file in the same directory, syncs it, then renames it over
/// the target. Readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), IndexError> {
    let to_error = |source: io::Error| IndexError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(to_error)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(to_error)?;
    temp.write_all(content).map_err(to_error)?;
    temp.as_file().sync_all().map_err(to_error)?;

    // Temp files are created owner-only; manifests are served publicly
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(to_error)?;
    }

    temp.persist(path).map_err(|err| to_error(err.error))?;
    Ok(())
}
