use std::path::{Path, PathBuf};

use logging::debug_log;

use crate::{FsError, dir_exists};

/// Searches `start` and its ancestors for a directory containing a
/// subdirectory called `name`, returning the containing directory.
///
/// The search is lexical: `start` is not canonicalized, and it stops before
/// reaching `/` or an empty relative parent, so neither the filesystem root
/// nor the implicit current directory above a relative `start` is consulted.
///
/// # Errors
///
/// Propagates [`FsError::NotADirectory`] when an ancestor contains an entry
/// called `name` that is not a directory, and [`FsError::Stat`] when metadata
/// cannot be queried.
///
/// # Examples
///
/// ```
/// use fsutil::find_dir_in_or_above;
///
/// let temp = tempfile::tempdir().unwrap();
/// let root = temp.path().join("project");
/// std::fs::create_dir_all(root.join(".git")).unwrap();
/// std::fs::create_dir_all(root.join("src/nested")).unwrap();
///
/// let found = find_dir_in_or_above(root.join("src/nested"), ".git").unwrap();
/// assert_eq!(found.as_deref(), Some(root.as_path()));
/// assert!(find_dir_in_or_above(root.join("src"), ".hg").unwrap().is_none());
/// ```
pub fn find_dir_in_or_above<P: AsRef<Path>>(
    start: P,
    name: &str,
) -> Result<Option<PathBuf>, FsError> {
    let mut current = start.as_ref();
    loop {
        debug_log!(Fs, 3, "looking for {name} in {}", current.display());
        if dir_exists(current.join(name))? {
            debug_log!(Fs, 1, "found {name} in {}", current.display());
            return Ok(Some(current.to_path_buf()));
        }
        match current.parent() {
            Some(parent) if !is_search_boundary(parent) => current = parent,
            _ => return Ok(None),
        }
    }
}

fn is_search_boundary(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new(".") || path.parent().is_none()
}
