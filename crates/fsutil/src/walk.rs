use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use logging::debug_log;

use crate::FsError;

/// Configures a traversal rooted at a specific directory.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    include_root: bool,
    max_depth: Option<usize>,
}

impl WalkBuilder {
    /// Creates a builder that will traverse `root`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            include_root: false,
            max_depth: None,
        }
    }

    /// Controls whether the root itself is yielded first. Off by default.
    #[must_use]
    pub const fn include_root(mut self, include: bool) -> Self {
        self.include_root = include;
        self
    }

    /// Limits how deep the walker descends; depth 1 is the root's children.
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Builds a [`Walker`].
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Stat`] when the root cannot be inspected,
    /// [`FsError::NotADirectory`] when it is not a directory, and
    /// [`FsError::ReadDir`] when its contents cannot be listed.
    pub fn build(self) -> Result<Walker, FsError> {
        Walker::new(self)
    }
}

/// One entry produced by [`Walker`].
#[derive(Debug)]
pub struct WalkEntry {
    full_path: PathBuf,
    relative_path: PathBuf,
    file_type: fs::FileType,
    depth: usize,
}

impl WalkEntry {
    /// Path of the entry including the traversal root.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Path of the entry relative to the traversal root. Empty for the root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Relative path with components joined by `/`, or `.` for the root.
    ///
    /// Non-UTF-8 components are converted lossily.
    #[must_use]
    pub fn relative_str(&self) -> String {
        let joined = self
            .relative_path
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if joined.is_empty() {
            ".".to_owned()
        } else {
            joined
        }
    }

    /// File type of the entry, without following symlinks.
    #[must_use]
    pub const fn file_type(&self) -> fs::FileType {
        self.file_type
    }

    /// Depth relative to the root (root depth is `0`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the entry is a directory. Symlinks to directories are not.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }
}

/// Depth-first iterator over a directory tree.
///
/// Directory entries are sorted by name before they are yielded, so the
/// order is stable across platforms. A directory is yielded before its
/// contents. Symlinks are yielded but never followed. The first error ends
/// the traversal.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    pending_root: Option<fs::FileType>,
    max_depth: Option<usize>,
    stack: Vec<DirectoryState>,
    finished: bool,
}

impl Walker {
    fn new(builder: WalkBuilder) -> Result<Self, FsError> {
        let WalkBuilder {
            root,
            include_root,
            max_depth,
        } = builder;
        debug_log!(Fs, 1, "walking {}", root.display());

        let metadata = fs::metadata(&root).map_err(|error| FsError::stat(&root, error))?;
        if !metadata.is_dir() {
            return Err(FsError::NotADirectory { path: root });
        }

        let mut walker = Self {
            pending_root: include_root.then(|| metadata.file_type()),
            max_depth,
            stack: Vec::new(),
            finished: false,
            root,
        };
        if walker.max_depth != Some(0) {
            let state = DirectoryState::new(walker.root.clone(), PathBuf::new(), 0)?;
            walker.stack.push(state);
        }
        Ok(walker)
    }

    fn prepare_entry(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
        depth: usize,
    ) -> Result<WalkEntry, FsError> {
        let metadata =
            fs::symlink_metadata(&full_path).map_err(|error| FsError::stat(&full_path, error))?;
        let file_type = metadata.file_type();

        let descend = self.max_depth.is_none_or(|max| depth < max);
        if file_type.is_dir() && descend {
            debug_log!(Fs, 3, "entering directory {}", full_path.display());
            let state = DirectoryState::new(full_path.clone(), relative_path.clone(), depth)?;
            self.stack.push(state);
        }

        Ok(WalkEntry {
            full_path,
            relative_path,
            file_type,
            depth,
        })
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(file_type) = self.pending_root.take() {
            return Some(Ok(WalkEntry {
                full_path: self.root.clone(),
                relative_path: PathBuf::new(),
                file_type,
                depth: 0,
            }));
        }

        loop {
            let (full_path, relative_path, depth) = {
                let state = self.stack.last_mut()?;
                match state.next_name() {
                    Some(name) => (
                        state.fs_path.join(&name),
                        state.relative_prefix.join(&name),
                        state.depth + 1,
                    ),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                }
            };

            return match self.prepare_entry(full_path, relative_path, depth) {
                Ok(entry) => Some(Ok(entry)),
                Err(error) => {
                    self.finished = true;
                    Some(Err(error))
                }
            };
        }
    }
}

#[derive(Clone, Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: std::vec::IntoIter<OsString>,
    depth: usize,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) -> Result<Self, FsError> {
        let read_dir = fs::read_dir(&fs_path).map_err(|error| FsError::read_dir(&fs_path, error))?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|error| FsError::read_dir(&fs_path, error))?;
            entries.push(entry.file_name());
        }
        entries.sort();

        debug_log!(Fs, 3, "found {} entries in {}", entries.len(), fs_path.display());

        Ok(Self {
            fs_path,
            relative_prefix,
            entries: entries.into_iter(),
            depth,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        self.entries.next()
    }
}
