//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity flags.
//!
//! [`FsfilterLayer`] is a tracing-subscriber layer that maps events to info
//! and debug flags by target, checks the thread-local verbosity, and records
//! accepted events into the diagnostic buffer read by [`drain_events`].
//!
//! Targets are matched on their last `::` component, so `fsfilter::filter`
//! and `filter` both map to [`DebugFlag::Filter`]. Tracing levels map to
//! verbosity levels as follows: `ERROR`, `WARN` and `INFO` are 1, `DEBUG` is 2
//! and `TRACE` is 3.
//!
//! # Usage
//!
//! ```
//! use logging::{VerbosityConfig, drain_events, with_tracing};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! with_tracing(config, || {
//!     tracing::debug!(target: "fsfilter::filter", "filter_decision");
//!     tracing::trace!(target: "fsfilter::filter", "too detailed for -vv");
//! });
//! assert_eq!(drain_events().len(), 1);
//! ```
//!
//! [`drain_events`]: crate::drain_events

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte};
use std::fmt::{self, Write as _};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that bridges tracing events to the verbosity flags.
#[derive(Clone, Debug, Default)]
pub struct FsfilterLayer {
    _priv: (),
}

impl FsfilterLayer {
    /// Create a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _priv: () }
    }

    fn target_leaf(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        InfoFlag::from_name(Self::target_leaf(target))
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        match Self::target_leaf(target) {
            "filter" | "filters" => Some(DebugFlag::Filter),
            "fs" | "fsutil" => Some(DebugFlag::Fs),
            "cmd" | "cli" => Some(DebugFlag::Cmd),
            _ => None,
        }
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for FsfilterLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let verbosity_level = Self::level_to_verbosity_level(metadata.level());

        // Debug flags first; they are the more specific mapping.
        if let Some(debug_flag) = Self::target_to_debug_flag(target) {
            if debug_gte(debug_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                emit_debug(debug_flag, verbosity_level, visitor.finish());
            }
            return;
        }

        if let Some(info_flag) = Self::target_to_info_flag(target) {
            if info_gte(info_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                emit_info(info_flag, verbosity_level, visitor.finish_message());
            }
        }
    }
}

/// Collects the `message` field and the remaining fields as `name=value`
/// pairs. Debug events keep both; info events keep only the message.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn finish_message(self) -> String {
        if self.message.is_empty() {
            self.fields
        } else {
            self.message
        }
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
            return;
        }
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value:?}", field.name());
    }
}

/// Run `f` with the bridge installed as the thread's default subscriber.
///
/// The calling thread's verbosity is set to `config` for the duration of the
/// call and restored afterwards, also when `f` unwinds. Events recorded while
/// `f` runs stay in the buffer until drained.
pub fn with_tracing<R>(config: VerbosityConfig, f: impl FnOnce() -> R) -> R {
    let _restore = RestoreConfig(super::thread_local::current());
    super::thread_local::init(config);
    let subscriber = tracing_subscriber::registry().with(FsfilterLayer::new());
    tracing::subscriber::with_default(subscriber, f)
}

/// Reinstalls the wrapped configuration when dropped.
struct RestoreConfig(VerbosityConfig);

impl Drop for RestoreConfig {
    fn drop(&mut self) {
        super::thread_local::init(std::mem::take(&mut self.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiagnosticEvent, drain_events};

    #[test]
    fn test_target_to_info_flag() {
        assert_eq!(
            FsfilterLayer::target_to_info_flag("fsfilter::stats"),
            Some(InfoFlag::Stats)
        );
        assert_eq!(
            FsfilterLayer::target_to_info_flag("skip"),
            Some(InfoFlag::Skip)
        );
        assert_eq!(FsfilterLayer::target_to_info_flag("unknown"), None);
    }

    #[test]
    fn test_target_to_debug_flag() {
        assert_eq!(
            FsfilterLayer::target_to_debug_flag("fsfilter::filter"),
            Some(DebugFlag::Filter)
        );
        assert_eq!(
            FsfilterLayer::target_to_debug_flag("fsutil"),
            Some(DebugFlag::Fs)
        );
        assert_eq!(
            FsfilterLayer::target_to_debug_flag("cli::frontend::cmd"),
            Some(DebugFlag::Cmd)
        );
        assert_eq!(FsfilterLayer::target_to_debug_flag("fsfilter::fsx"), None);
    }

    #[test]
    fn test_level_to_verbosity_level() {
        assert_eq!(FsfilterLayer::level_to_verbosity_level(&Level::ERROR), 1);
        assert_eq!(FsfilterLayer::level_to_verbosity_level(&Level::WARN), 1);
        assert_eq!(FsfilterLayer::level_to_verbosity_level(&Level::INFO), 1);
        assert_eq!(FsfilterLayer::level_to_verbosity_level(&Level::DEBUG), 2);
        assert_eq!(FsfilterLayer::level_to_verbosity_level(&Level::TRACE), 3);
    }

    #[test]
    fn fields_are_appended_to_message() {
        drain_events();
        let mut config = VerbosityConfig::default();
        config.debug.filter = 3;
        with_tracing(config, || {
            tracing::trace!(
                target: "fsfilter::filter",
                path = %"docs/a.md",
                matched = true,
                "filter_evaluate"
            );
        });

        let events = drain_events();
        assert_eq!(
            events,
            [DiagnosticEvent::Debug {
                flag: DebugFlag::Filter,
                level: 3,
                message: "filter_evaluate path=docs/a.md matched=true".to_string(),
            }]
        );
    }

    #[test]
    fn events_below_configured_level_are_dropped() {
        drain_events();
        with_tracing(VerbosityConfig::from_verbose_level(1), || {
            tracing::debug!(target: "fsfilter::fs", "stat");
            tracing::info!(target: "fsfilter::stats", "summary");
            tracing::info!(target: "elsewhere", "ignored");
        });

        let events = drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "summary");
    }

    #[test]
    fn info_events_keep_only_the_message() {
        drain_events();
        with_tracing(VerbosityConfig::from_verbose_level(1), || {
            tracing::info!(target: "fsfilter::stats", total = 3_usize, "evaluated 3 paths");
        });
        assert_eq!(drain_events()[0].message(), "evaluated 3 paths");
    }

    #[test]
    fn with_tracing_restores_config_after_panic() {
        crate::init(VerbosityConfig::default());
        let outcome = std::panic::catch_unwind(|| {
            with_tracing(VerbosityConfig::from_verbose_level(3), || {
                assert!(crate::debug_gte(DebugFlag::Filter, 3));
                panic!("callback failed");
            })
        });
        assert!(outcome.is_err());
        assert!(!crate::debug_gte(DebugFlag::Filter, 1));
    }

    #[test]
    fn with_tracing_restores_previous_config() {
        crate::init(VerbosityConfig::default());
        with_tracing(VerbosityConfig::from_verbose_level(3), || {
            assert!(crate::debug_gte(DebugFlag::Filter, 3));
        });
        assert!(!crate::debug_gte(DebugFlag::Filter, 1));
    }
}
