//! crates/logging/src/macros.rs
//! Level-gated logging macros backed by the thread-local event buffer.

/// Emit an info diagnostic when the named [`InfoFlag`](crate::InfoFlag) is at
/// or above `level`.
///
/// The message is formatted only when the flag is enabled.
///
/// ```
/// use logging::{VerbosityConfig, drain_events, info_log, init};
///
/// init(VerbosityConfig::from_verbose_level(1));
/// info_log!(Name, 1, "docs/README.md");
/// info_log!(Skip, 1, "not recorded at -v");
/// assert_eq!(drain_events().len(), 1);
/// ```
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let level: u8 = $level;
        if $crate::info_gte($crate::InfoFlag::$flag, level) {
            $crate::emit_info($crate::InfoFlag::$flag, level, ::std::format!($($arg)+));
        }
    }};
}

/// Emit a debug diagnostic when the named [`DebugFlag`](crate::DebugFlag) is
/// at or above `level`.
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let level: u8 = $level;
        if $crate::debug_gte($crate::DebugFlag::$flag, level) {
            $crate::emit_debug($crate::DebugFlag::$flag, level, ::std::format!($($arg)+));
        }
    }};
}
