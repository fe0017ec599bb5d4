#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fsutil` collects the small filesystem helpers the fsfilter command needs
//! around pattern evaluation: existence checks that distinguish files from
//! directories, create-if-missing for output locations, upward discovery of a
//! marker directory such as `.git`, and a deterministic directory walker that
//! produces `/`-separated relative paths ready for matching.
//!
//! # Design
//!
//! - [`path_exists`], [`file_exists`] and [`dir_exists`] follow symlinks and
//!   treat "not found" as `Ok(false)`. Every other failure is an [`FsError`].
//! - [`create_if_not_exists`] never touches an existing entry.
//! - [`find_dir_in_or_above`] searches lexically from a start directory up to,
//!   but not including, the filesystem root.
//! - [`WalkBuilder`] configures a [`Walker`], an iterator of [`WalkEntry`]
//!   values in sorted depth-first order.
//!
//! Operations record diagnostics through the `fs` debug flag of the `logging`
//! crate.
//!
//! # Errors
//!
//! All helpers return [`FsError`], which carries the offending path and, for
//! operating-system failures, the underlying [`std::io::Error`] as its source.
//!
//! # Examples
//!
//! ```
//! use fsutil::{Kind, WalkBuilder, create_if_not_exists, dir_exists};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! create_if_not_exists(temp.path().join("src/lib.rs"), Kind::File)?;
//! assert!(dir_exists(temp.path().join("src"))?);
//!
//! let paths: Vec<String> = WalkBuilder::new(temp.path())
//!     .build()?
//!     .map(|entry| entry.map(|entry| entry.relative_str()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(paths, ["src", "src/lib.rs"]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - `filters` for the pattern evaluation applied to walked paths.

mod create;
mod error;
mod exists;
mod find;
mod walk;

pub use create::{Kind, create_if_not_exists};
pub use error::FsError;
pub use exists::{dir_exists, file_exists, path_exists};
pub use find::find_dir_in_or_above;
pub use walk::{WalkBuilder, WalkEntry, Walker};
