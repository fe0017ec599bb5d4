#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity model shared across the fsfilter
//! workspace. Diagnostics are grouped into user-facing info categories
//! ([`InfoFlag`]) and developer debug categories ([`DebugFlag`]), each with its
//! own numeric level. Code emits diagnostics with [`info_log!`] and
//! [`debug_log!`]; the front end drains them with [`drain_events`] and decides
//! where to print them.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds the [`InfoLevels`] and [`DebugLevels`] for a
//!   run. It is built from a `-v` count and refined with `--info`/`--debug`
//!   token lists such as `skip2,stats`.
//! - The active configuration and the collected [`DiagnosticEvent`]s live in
//!   thread-local storage, so concurrent tests on separate threads never see
//!   each other's output.
//! - With the `tracing` feature, [`FsfilterLayer`] maps `tracing` events onto
//!   the same flags by target (`fsfilter::filter`, `fsfilter::fs`, ...), so
//!   library crates can use plain `tracing` macros.
//!
//! # Invariants
//!
//! - An event is recorded only when its flag's level is at or above the
//!   event's level.
//! - [`drain_events`] returns events in emission order and empties the buffer.
//!
//! # Errors
//!
//! Flag parsing reports unknown names and malformed levels as `String`
//! messages suitable for a usage error.
//!
//! # Examples
//!
//! ```
//! use logging::{VerbosityConfig, debug_log, drain_events, init};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flags("filter2").unwrap();
//! init(config);
//!
//! debug_log!(Filter, 2, "normalized {} patterns", 3);
//! debug_log!(Fs, 1, "not enabled");
//!
//! let events = drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].to_string(), "[filter] normalized 3 patterns");
//! ```
//!
//! # See also
//!
//! - `filters::debug_filter` for the pattern evaluation events.
//! - `cli` for the `-v`, `--info` and `--debug` options.

mod config;
mod levels;
mod macros;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, apply_info_flag, current, debug_gte, drain_events,
    emit_debug, emit_info, info_gte, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{FsfilterLayer, with_tracing};
