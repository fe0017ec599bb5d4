#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides whether a relative path is matched by an ordered list of
//! gitignore-style glob patterns. Callers use the answer to exclude paths from
//! an archive, a sync, or any other bulk file operation. Patterns may be
//! negated with a leading `!`, which un-matches paths that an earlier pattern
//! matched (or is itself overridden by a later plain pattern).
//!
//! # Design
//!
//! - [`Pattern`] is one normalized pattern: cleaned text, negation flag,
//!   `/`-separated segments, and a lazily compiled [`globset`] matcher.
//! - [`PatternSet`] owns the ordered patterns produced by [`normalize`] and
//!   folds them over a [`Candidate`] path, last match wins.
//! - [`clean`] and [`parent`] provide the lexical path normalization applied
//!   to both patterns and candidates.
//! - [`MatchObserver`] receives per-pattern and per-path notifications. The
//!   default [`NoopObserver`] keeps evaluation silent; [`TracingObserver`] and
//!   [`debug_filter::FilterTracer`] forward to `tracing` when the `tracing`
//!   feature is enabled.
//!
//! # Invariants
//!
//! - Pattern order is preserved from input to evaluation.
//! - A candidate that cleans to `.` is never matched.
//! - A pattern naming a directory matches everything below that directory:
//!   patterns are also compared with the leading segments of the candidate's
//!   parent directory.
//! - `*` and `?` never match `/`.
//!
//! # Errors
//!
//! [`FilterError::InvalidPattern`] is returned by normalization when a pattern
//! is the bare `!` marker. [`FilterError::MalformedGlob`] is returned by
//! evaluation when a pattern is not valid glob syntax; the pattern set stays
//! usable and reports the same error each time that pattern is reached.
//!
//! # Examples
//!
//! Match everything under `docs` except its README:
//!
//! ```
//! use filters::PatternSet;
//!
//! let set = PatternSet::new(["docs/*", "!docs/README.md"]).expect("patterns");
//!
//! assert!(set.matches("docs/install.md").unwrap());
//! assert!(!set.matches("docs/README.md").unwrap());
//! assert!(!set.matches("src/main.rs").unwrap());
//! ```
//!
//! # See also
//!
//! - `cli` wires [`PatternSet`] into the `fsfilter` command.
//! - [`globset`] for the glob matching primitives used internally.

mod clean;
pub mod debug_filter;
mod error;
mod observer;
mod pattern;
mod set;

pub use clean::{clean, parent};
pub use error::FilterError;
pub use observer::{MatchObserver, NoopObserver, TracingObserver};
pub use pattern::{Candidate, Pattern};
pub use set::{PatternSet, matches, normalize};
