//! Tracing hooks for pattern evaluation.
//!
//! Every function in this module is compiled behind the `tracing` feature and
//! becomes an inline no-op when the feature is disabled. Events are emitted
//! under the [`FILTER_TARGET`] target so a subscriber (for example the layer in
//! the `logging` crate) can route them to the `filter` debug flag; the summary
//! uses [`STATS_TARGET`].
//!
//! The hooks are not called by the evaluator directly. They are reached
//! through [`TracingObserver`](crate::TracingObserver) or [`FilterTracer`],
//! which callers pass to [`PatternSet::matches_with`](crate::PatternSet::matches_with).
//!
//! # Examples
//!
//! ```
//! use filters::PatternSet;
//! use filters::debug_filter::FilterTracer;
//!
//! let set = PatternSet::new(["*.go", "!main.go"]).unwrap();
//! let tracer = FilterTracer::new();
//!
//! assert!(set.matches_with("file.go", &tracer).unwrap());
//! assert!(!set.matches_with("main.go", &tracer).unwrap());
//!
//! assert_eq!(tracer.total_evaluated(), 2);
//! assert_eq!(tracer.total_matched(), 1);
//! tracer.summary();
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::MatchObserver;

/// Target name for per-pattern and per-path events.
pub const FILTER_TARGET: &str = "fsfilter::filter";

/// Target name for aggregate statistics.
pub const STATS_TARGET: &str = "fsfilter::stats";

/// Traces evaluation of a path against one pattern.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_evaluate(path: &str, pattern: &str, negated: bool, matched: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        path = %path,
        pattern = %pattern,
        negated = negated,
        matched = matched,
        "filter_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_evaluate(_path: &str, _pattern: &str, _negated: bool, _matched: bool) {}

/// Traces the final result for a path and the pattern that decided it.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_decision(path: &str, matched: bool, rule: Option<&str>) {
    tracing::debug!(
        target: FILTER_TARGET,
        path = %path,
        matched = matched,
        rule = ?rule,
        "filter_decision"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_decision(_path: &str, _matched: bool, _rule: Option<&str>) {}

/// Traces a path that the pattern list matched, and so excludes.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_excluded_path(path: &str) {
    tracing::debug!(target: FILTER_TARGET, "skipping excluded path: {path}");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_excluded_path(_path: &str) {}

/// Traces aggregate statistics for a batch of evaluations.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_filter_summary(total_evaluated: usize, total_matched: usize, total_unmatched: usize) {
    tracing::info!(
        target: STATS_TARGET,
        total_evaluated = total_evaluated,
        total_matched = total_matched,
        total_unmatched = total_unmatched,
        "evaluated {total_evaluated} paths: {total_matched} matched, {total_unmatched} unmatched"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_filter_summary(_total_evaluated: usize, _total_matched: usize, _total_unmatched: usize) {}

/// Observer that counts evaluations and forwards them to the tracing hooks.
///
/// Counters are atomic so one tracer can observe evaluations running on
/// several threads against a shared [`PatternSet`](crate::PatternSet).
#[derive(Debug, Default)]
pub struct FilterTracer {
    rules_evaluated: AtomicUsize,
    total_evaluated: AtomicUsize,
    total_matched: AtomicUsize,
}

impl FilterTracer {
    /// Creates a tracer with zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules_evaluated: AtomicUsize::new(0),
            total_evaluated: AtomicUsize::new(0),
            total_matched: AtomicUsize::new(0),
        }
    }

    /// Records one decided path.
    pub fn record_evaluation(&self, matched: bool) {
        self.total_evaluated.fetch_add(1, Ordering::Relaxed);
        if matched {
            self.total_matched.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Emits a summary event with the accumulated counters.
    pub fn summary(&self) {
        trace_filter_summary(
            self.total_evaluated(),
            self.total_matched(),
            self.total_unmatched(),
        );
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.rules_evaluated.store(0, Ordering::Relaxed);
        self.total_evaluated.store(0, Ordering::Relaxed);
        self.total_matched.store(0, Ordering::Relaxed);
    }

    /// Number of single-pattern tests performed.
    #[must_use]
    pub fn rules_evaluated(&self) -> usize {
        self.rules_evaluated.load(Ordering::Relaxed)
    }

    /// Number of paths that reached a decision.
    #[must_use]
    pub fn total_evaluated(&self) -> usize {
        self.total_evaluated.load(Ordering::Relaxed)
    }

    /// Number of paths the pattern list matched.
    #[must_use]
    pub fn total_matched(&self) -> usize {
        self.total_matched.load(Ordering::Relaxed)
    }

    /// Number of paths the pattern list did not match.
    #[must_use]
    pub fn total_unmatched(&self) -> usize {
        self.total_evaluated().saturating_sub(self.total_matched())
    }
}

impl MatchObserver for FilterTracer {
    fn rule_evaluated(&self, path: &str, pattern: &str, negated: bool, matched: bool) {
        self.rules_evaluated.fetch_add(1, Ordering::Relaxed);
        trace_filter_evaluate(path, pattern, negated, matched);
    }

    fn decided(&self, path: &str, matched: bool, rule: Option<&str>) {
        self.record_evaluation(matched);
        trace_filter_decision(path, matched, rule);
        if matched {
            trace_excluded_path(path);
        }
    }
}
