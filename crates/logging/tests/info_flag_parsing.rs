//! Integration tests for `--info` and `--debug` list parsing.
//!
//! Lists are comma-separated flag tokens such as `name2,skip,stats`.
//! A token without digits means level 1. The keywords ALL and NONE set or
//! clear every flag in the list's category.

use logging::{DebugFlag, DebugLevels, InfoFlag, InfoLevels, VerbosityConfig, info_gte, init};

// ============================================================================
// Single Flag Parsing
// ============================================================================

/// Verifies a single flag without a level defaults to level 1.
#[test]
fn single_flag_no_level() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("skip").unwrap();

    assert_eq!(config.info.skip, 1);
    assert_eq!(config.info.name, 0);
}

/// Verifies an explicit level is honored.
#[test]
fn single_flag_with_level() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("name2").unwrap();
    assert_eq!(config.info.name, 2);
}

/// Verifies later tokens override earlier ones for the same flag.
#[test]
fn later_tokens_win() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("skip3,skip1").unwrap();
    assert_eq!(config.info.skip, 1);
}

// ============================================================================
// Keywords
// ============================================================================

/// Verifies ALL enables every info flag at level 1.
#[test]
fn all_keyword() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("ALL").unwrap();

    for flag in InfoFlag::ALL {
        assert_eq!(config.info.get(flag), 1, "{flag}");
    }
}

/// Verifies NONE clears flags set by a verbose level.
#[test]
fn none_keyword_clears_verbose_defaults() {
    let mut config = VerbosityConfig::from_verbose_level(3);
    config.apply_info_flags("NONE").unwrap();
    config.apply_debug_flags("none").unwrap();

    assert_eq!(config.info, InfoLevels::default());
    assert_eq!(config.debug, DebugLevels::default());
}

/// Verifies ALL can be refined by later tokens.
#[test]
fn all_then_specific_level() {
    let mut config = VerbosityConfig::default();
    config.apply_debug_flags("ALL,filter3").unwrap();

    assert_eq!(config.debug.get(DebugFlag::Filter), 3);
    assert_eq!(config.debug.get(DebugFlag::Fs), 1);
    assert_eq!(config.debug.get(DebugFlag::Cmd), 1);
}

// ============================================================================
// Errors and Edge Cases
// ============================================================================

/// Verifies unknown flags are reported with their name.
#[test]
fn unknown_flag_is_error() {
    let mut config = VerbosityConfig::default();
    let err = config.apply_info_flags("name,progress2").unwrap_err();
    assert_eq!(err, "unknown info flag: progress");
}

/// Verifies levels beyond u8 are rejected.
#[test]
fn oversized_level_is_error() {
    let mut config = VerbosityConfig::default();
    assert!(config.apply_debug_flags("filter256").is_err());
}

/// Verifies empty lists and stray commas are accepted.
#[test]
fn empty_tokens_are_ignored() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("").unwrap();
    config.apply_info_flags(",,stats,").unwrap();
    assert_eq!(config.info.stats, 1);
    assert_eq!(config.info.name, 0);
}

/// Verifies the parsed configuration drives the thread-local checks.
#[test]
fn parsed_config_drives_info_gte() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("misc2").unwrap();
    init(config);

    assert!(info_gte(InfoFlag::Misc, 2));
    assert!(!info_gte(InfoFlag::Misc, 3));
    assert!(!info_gte(InfoFlag::Stats, 1));
}
