use std::fs::{self, OpenOptions};
use std::path::Path;

use logging::debug_log;

use crate::{FsError, path_exists};

/// What [`create_if_not_exists`] should create.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// An empty regular file, along with any missing parent directories.
    File,
    /// A directory, along with any missing parent directories.
    Dir,
}

/// Creates `path` as `kind` unless something already exists there.
///
/// An existing entry is left untouched whatever its type; use
/// [`file_exists`](crate::file_exists) or [`dir_exists`](crate::dir_exists)
/// first when the type matters.
///
/// # Errors
///
/// Returns [`FsError::Stat`] when the existence check fails and
/// [`FsError::Create`] when a directory or the file cannot be created.
///
/// # Examples
///
/// ```
/// use fsutil::{Kind, create_if_not_exists};
///
/// let temp = tempfile::tempdir().unwrap();
/// let report = temp.path().join("out/reports/matched.txt");
///
/// create_if_not_exists(&report, Kind::File).unwrap();
/// assert!(report.is_file());
/// assert!(report.parent().unwrap().is_dir());
/// ```
pub fn create_if_not_exists<P: AsRef<Path>>(path: P, kind: Kind) -> Result<(), FsError> {
    let path = path.as_ref();
    if path_exists(path)? {
        return Ok(());
    }

    match kind {
        Kind::Dir => {
            debug_log!(Fs, 1, "creating directory {}", path.display());
            fs::create_dir_all(path).map_err(|error| FsError::create(path, error))
        }
        Kind::File => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|error| FsError::create(parent, error))?;
            }
            debug_log!(Fs, 1, "creating file {}", path.display());
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(path)
                .map(drop)
                .map_err(|error| FsError::create(path, error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("a/b/c");
        create_if_not_exists(&dir, Kind::Dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn creates_empty_file_with_parents() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("x/y/z.txt");
        create_if_not_exists(&file, Kind::File).unwrap();
        assert!(file.is_file());
        assert_eq!(fs::read(&file).unwrap().len(), 0);
    }

    #[test]
    fn existing_file_is_left_untouched() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("keep.txt");
        fs::write(&file, b"contents").unwrap();

        create_if_not_exists(&file, Kind::File).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"contents");

        create_if_not_exists(&file, Kind::Dir).unwrap();
        assert!(file.is_file());
    }

    #[test]
    fn file_under_a_file_reports_create_error() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let err = create_if_not_exists(blocker.join("child.txt"), Kind::File).unwrap_err();
        assert!(matches!(err, FsError::Create { .. } | FsError::Stat { .. }));
    }
}
