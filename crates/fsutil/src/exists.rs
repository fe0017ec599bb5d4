use std::fs;
use std::io;
use std::path::Path;

use logging::debug_log;

use crate::FsError;

/// Queries metadata for `path`, following symlinks.
///
/// Returns `Ok(None)` when the path does not exist.
fn stat(path: &Path) -> Result<Option<fs::Metadata>, FsError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(FsError::stat(path, error)),
    }
}

/// Reports whether anything exists at `path`.
///
/// # Errors
///
/// Returns [`FsError::Stat`] when metadata cannot be queried for a reason
/// other than the path being absent, such as a permission failure.
pub fn path_exists<P: AsRef<Path>>(path: P) -> Result<bool, FsError> {
    let path = path.as_ref();
    let exists = stat(path)?.is_some();
    debug_log!(Fs, 2, "path_exists {}: {exists}", path.display());
    Ok(exists)
}

/// Reports whether a non-directory exists at `path`.
///
/// # Errors
///
/// Returns [`FsError::IsDirectory`] when `path` names a directory, and
/// [`FsError::Stat`] as for [`path_exists`].
///
/// # Examples
///
/// ```
/// use fsutil::{FsError, file_exists};
///
/// let temp = tempfile::tempdir().unwrap();
/// let file = temp.path().join("rules.txt");
/// assert!(!file_exists(&file).unwrap());
///
/// std::fs::write(&file, "*.tmp\n").unwrap();
/// assert!(file_exists(&file).unwrap());
///
/// assert!(matches!(file_exists(temp.path()), Err(FsError::IsDirectory { .. })));
/// ```
pub fn file_exists<P: AsRef<Path>>(path: P) -> Result<bool, FsError> {
    let path = path.as_ref();
    match stat(path)? {
        None => Ok(false),
        Some(metadata) if metadata.is_dir() => Err(FsError::IsDirectory {
            path: path.to_path_buf(),
        }),
        Some(_) => {
            debug_log!(Fs, 2, "file_exists {}", path.display());
            Ok(true)
        }
    }
}

/// Reports whether a directory exists at `path`.
///
/// # Errors
///
/// Returns [`FsError::NotADirectory`] when something other than a directory
/// exists at `path`, and [`FsError::Stat`] as for [`path_exists`].
pub fn dir_exists<P: AsRef<Path>>(path: P) -> Result<bool, FsError> {
    let path = path.as_ref();
    match stat(path)? {
        None => Ok(false),
        Some(metadata) if !metadata.is_dir() => Err(FsError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Some(_) => {
            debug_log!(Fs, 2, "dir_exists {}", path.display());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_not_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing");
        assert!(!path_exists(&missing).unwrap());
        assert!(!file_exists(&missing).unwrap());
        assert!(!dir_exists(&missing).unwrap());
    }

    #[test]
    fn path_exists_accepts_files_and_directories() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, b"data").unwrap();

        assert!(path_exists(temp.path()).unwrap());
        assert!(path_exists(&file).unwrap());
    }

    #[test]
    fn file_exists_rejects_directories() {
        let temp = tempfile::tempdir().unwrap();
        let err = file_exists(temp.path()).unwrap_err();
        assert!(matches!(err, FsError::IsDirectory { .. }));
        assert_eq!(err.path(), temp.path());
    }

    #[test]
    fn dir_exists_rejects_files() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, b"data").unwrap();

        assert!(dir_exists(temp.path()).unwrap());
        let err = dir_exists(&file).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_missing() {
        let temp = tempfile::tempdir().unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("nowhere"), &link).unwrap();
        assert!(!path_exists(&link).unwrap());
    }
}
