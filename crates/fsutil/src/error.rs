use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned by the filesystem helpers.
///
/// Every variant carries the path that was being inspected so callers can
/// forward it into diagnostics without pattern matching.
#[derive(Debug, Error)]
pub enum FsError {
    /// Querying metadata failed for a reason other than the path being absent.
    #[error("failed to inspect '{}': {source}", path.display())]
    Stat {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// A file was expected but the path names a directory.
    #[error("'{}' is a directory, not a file", path.display())]
    IsDirectory {
        /// Offending path.
        path: PathBuf,
    },
    /// A directory was expected but the path names something else.
    #[error("'{}' exists but is not a directory", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },
    /// Creating a file or directory failed.
    #[error("failed to create '{}': {source}", path.display())]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Reading the contents of a directory failed during traversal.
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub(crate) fn stat(path: &Path, source: io::Error) -> Self {
        Self::Stat {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn create(path: &Path, source: io::Error) -> Self {
        Self::Create {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn read_dir(path: &Path, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Stat { path, .. }
            | Self::IsDirectory { path }
            | Self::NotADirectory { path }
            | Self::Create { path, .. }
            | Self::ReadDir { path, .. } => path,
        }
    }
}
