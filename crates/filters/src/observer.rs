use crate::debug_filter::{trace_excluded_path, trace_filter_decision, trace_filter_evaluate};

/// Receives diagnostics while a [`PatternSet`](crate::PatternSet) evaluates a
/// candidate path.
///
/// Evaluation itself stays free of side effects; anything that wants to log
/// or count decisions is passed in as an observer. Both hooks default to
/// no-ops so implementors only override what they need.
pub trait MatchObserver {
    /// Called after each pattern has been tested against `path`.
    fn rule_evaluated(&self, path: &str, pattern: &str, negated: bool, matched: bool) {
        let _ = (path, pattern, negated, matched);
    }

    /// Called once per evaluated path with the final result and the pattern
    /// that decided it, if any pattern matched.
    fn decided(&self, path: &str, matched: bool, rule: Option<&str>) {
        let _ = (path, matched, rule);
    }
}

impl<O: MatchObserver + ?Sized> MatchObserver for &O {
    fn rule_evaluated(&self, path: &str, pattern: &str, negated: bool, matched: bool) {
        (**self).rule_evaluated(path, pattern, negated, matched);
    }

    fn decided(&self, path: &str, matched: bool, rule: Option<&str>) {
        (**self).decided(path, matched, rule);
    }
}

/// Observer that discards every notification.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

/// Observer that forwards notifications to the [`debug_filter`](crate::debug_filter)
/// tracing hooks.
///
/// Without the `tracing` feature the hooks compile to nothing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn rule_evaluated(&self, path: &str, pattern: &str, negated: bool, matched: bool) {
        trace_filter_evaluate(path, pattern, negated, matched);
    }

    fn decided(&self, path: &str, matched: bool, rule: Option<&str>) {
        trace_filter_decision(path, matched, rule);
        if matched {
            trace_excluded_path(path);
        }
    }
}
