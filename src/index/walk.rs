//! Directory walk over the assets root.
//!
//! Uses an explicit stack of pending directories instead of recursion, so
//! tree depth never grows the call stack. Symlinks are not followed, which
//! means every directory is read at most once.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ErrorPolicy, IndexError};
use crate::debug;

/// Files discovered under a root, in discovery order.
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub files: Vec<PathBuf>,
    /// Directories or entries dropped under [`ErrorPolicy::Skip`].
    pub skipped: usize,
}

/// What a directory entry is, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

/// One listed entry, or the path that failed with its error.
pub type DirItem = Result<(PathBuf, EntryKind), (PathBuf, io::Error)>;

/// Source of directory listings for the walk.
pub trait DirReader {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirItem>>;
}

/// Lists directories on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDirs;

impl DirReader for LocalDirs {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirItem>> {
        let items = fs::read_dir(dir)?
            .map(|entry| {
                let entry = entry.map_err(|err| (dir.to_path_buf(), err))?;
                let path = entry.path();
                match entry.file_type() {
                    Ok(ft) if ft.is_dir() => Ok((path, EntryKind::Dir)),
                    Ok(ft) if ft.is_file() => Ok((path, EntryKind::File)),
                    Ok(_) => Ok((path, EntryKind::Other)),
                    Err(err) => Err((path, err)),
                }
            })
            .collect();
        Ok(items)
    }
}

/// Collect every regular file beneath `root`.
///
/// The root must be a readable directory regardless of `policy`.
pub fn collect_files(root: &Path, policy: ErrorPolicy) -> Result<WalkOutput, IndexError> {
    collect_files_with(&LocalDirs, root, policy)
}

/// [`collect_files`] over any [`DirReader`].
pub fn collect_files_with(
    reader: &impl DirReader,
    root: &Path,
    policy: ErrorPolicy,
) -> Result<WalkOutput, IndexError> {
    let items = reader
        .read_dir(root)
        .map_err(|source| IndexError::RootMissing {
            path: root.to_path_buf(),
            source,
        })?;

    let mut walker = Walker {
        policy,
        pending: Vec::new(),
        output: WalkOutput::default(),
    };
    walker.visit(items)?;

    while let Some(dir) = walker.pending.pop() {
        debug!("walk"; "reading {}", dir.display());
        match reader.read_dir(&dir) {
            Ok(items) => walker.visit(items)?,
            Err(source) => walker.fail(IndexError::Walk { path: dir, source })?,
        }
    }

    Ok(walker.output)
}

struct Walker {
    policy: ErrorPolicy,
    pending: Vec<PathBuf>,
    output: WalkOutput,
}

impl Walker {
    /// Sort the entries of one directory into pending dirs and files.
    fn visit(&mut self, items: Vec<DirItem>) -> Result<(), IndexError> {
        for item in items {
            match item {
                Ok((path, EntryKind::Dir)) => self.pending.push(path),
                Ok((path, EntryKind::File)) => self.output.files.push(path),
                Ok((_, EntryKind::Other)) => {}
                Err((path, source)) => self.fail(IndexError::Walk { path, source })?,
            }
        }
        Ok(())
    }

    fn fail(&mut self, err: IndexError) -> Result<(), IndexError> {
        self.policy.handle(err)?;
        self.output.skipped += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// In-memory tree; directories mapped to `None` fail to list.
    #[derive(Default)]
    struct FakeDirs {
        dirs: HashMap<PathBuf, Option<Vec<(&'static str, EntryKind)>>>,
        broken_entries: HashMap<PathBuf, Vec<&'static str>>,
    }

    impl FakeDirs {
        fn dir(mut self, dir: &str, entries: Vec<(&'static str, EntryKind)>) -> Self {
            self.dirs.insert(PathBuf::from(dir), Some(entries));
            self
        }

        fn unreadable(mut self, dir: &str) -> Self {
            self.dirs.insert(PathBuf::from(dir), None);
            self
        }

        fn broken_entry(mut self, dir: &str, name: &'static str) -> Self {
            self.broken_entries
                .entry(PathBuf::from(dir))
                .or_default()
                .push(name);
            self
        }
    }

    impl DirReader for FakeDirs {
        fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirItem>> {
            let Some(Some(entries)) = self.dirs.get(dir) else {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            };
            let mut items: Vec<DirItem> = entries
                .iter()
                .map(|(name, kind)| Ok((dir.join(name), *kind)))
                .collect();
            for name in self.broken_entries.get(dir).into_iter().flatten() {
                items.push(Err((
                    dir.join(name),
                    io::Error::from(io::ErrorKind::PermissionDenied),
                )));
            }
            Ok(items)
        }
    }

    fn tree_with_locked_dir() -> FakeDirs {
        FakeDirs::default()
            .dir(
                "/assets",
                vec![
                    ("a.html", EntryKind::File),
                    ("locked", EntryKind::Dir),
                    ("open", EntryKind::Dir),
                    ("link", EntryKind::Other),
                ],
            )
            .unreadable("/assets/locked")
            .dir("/assets/open", vec![("b.html", EntryKind::File)])
    }

    fn sorted(mut files: Vec<PathBuf>) -> Vec<PathBuf> {
        files.sort();
        files
    }

    #[test]
    fn test_collects_files_at_any_depth() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let deep = root.join("a/b/c/d/e/f");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("top.html"), "").unwrap();
        fs::write(root.join("a/mid.txt"), "").unwrap();
        fs::write(deep.join("leaf.html"), "").unwrap();

        let output = collect_files(root, ErrorPolicy::Abort).unwrap();
        assert_eq!(
            sorted(output.files),
            vec![
                root.join("a/b/c/d/e/f/leaf.html"),
                root.join("a/mid.txt"),
                root.join("top.html"),
            ]
        );
        assert_eq!(output.skipped, 0);
    }

    #[test]
    fn test_very_deep_tree() {
        let dir = TempDir::new().unwrap();
        let mut deep = dir.path().to_path_buf();
        for _ in 0..200 {
            deep.push("d");
        }
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("x.html"), "").unwrap();

        let output = collect_files(dir.path(), ErrorPolicy::Abort).unwrap();
        assert_eq!(output.files, vec![deep.join("x.html")]);
    }

    #[test]
    fn test_missing_root_is_fatal_under_any_policy() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        for policy in [ErrorPolicy::Abort, ErrorPolicy::Skip] {
            let err = collect_files(&missing, policy).unwrap_err();
            assert!(matches!(err, IndexError::RootMissing { .. }));
        }
    }

    #[test]
    fn test_file_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not-a-dir.html");
        fs::write(&file, "").unwrap();

        let err = collect_files(&file, ErrorPolicy::Skip).unwrap_err();
        assert!(matches!(err, IndexError::RootMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_followed() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        let outside = dir.path().join("outside");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("remote.html"), "").unwrap();
        fs::write(root.join("local.html"), "").unwrap();
        std::os::unix::fs::symlink(&outside, root.join("linked-dir")).unwrap();
        std::os::unix::fs::symlink(outside.join("remote.html"), root.join("linked.html"))
            .unwrap();
        // a cycle back to the root
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        let output = collect_files(&root, ErrorPolicy::Abort).unwrap();
        assert_eq!(output.files, vec![root.join("local.html")]);
    }

    #[test]
    fn test_skip_policy_continues_past_unreadable_dir() {
        let reader = tree_with_locked_dir();

        let output =
            collect_files_with(&reader, Path::new("/assets"), ErrorPolicy::Skip).unwrap();
        assert_eq!(
            sorted(output.files),
            vec![
                PathBuf::from("/assets/a.html"),
                PathBuf::from("/assets/open/b.html"),
            ]
        );
        assert_eq!(output.skipped, 1);
    }

    #[test]
    fn test_abort_policy_stops_at_unreadable_dir() {
        let reader = tree_with_locked_dir();

        let err =
            collect_files_with(&reader, Path::new("/assets"), ErrorPolicy::Abort).unwrap_err();
        match err {
            IndexError::Walk { path, .. } => assert_eq!(path, PathBuf::from("/assets/locked")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unreadable_entry_under_both_policies() {
        let reader = FakeDirs::default()
            .dir("/assets", vec![("a.html", EntryKind::File)])
            .broken_entry("/assets", "b.html");

        let output =
            collect_files_with(&reader, Path::new("/assets"), ErrorPolicy::Skip).unwrap();
        assert_eq!(output.files, vec![PathBuf::from("/assets/a.html")]);
        assert_eq!(output.skipped, 1);

        let err =
            collect_files_with(&reader, Path::new("/assets"), ErrorPolicy::Abort).unwrap_err();
        assert!(matches!(err, IndexError::Walk { .. }));
    }

    #[test]
    fn test_unreadable_root_ignores_skip_policy() {
        let reader = FakeDirs::default().unreadable("/assets");

        let err =
            collect_files_with(&reader, Path::new("/assets"), ErrorPolicy::Skip).unwrap_err();
        assert!(matches!(err, IndexError::RootMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_dir_on_disk() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let locked = root.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(root.join("a.html"), "").unwrap();
        fs::write(locked.join("hidden.html"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // permission bits do not restrict root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let skipped = collect_files(root, ErrorPolicy::Skip);
        let aborted = collect_files(root, ErrorPolicy::Abort);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let skipped = skipped.unwrap();
        assert_eq!(skipped.files, vec![root.join("a.html")]);
        assert_eq!(skipped.skipped, 1);
        assert!(matches!(aborted, Err(IndexError::Walk { .. })));
    }
}
