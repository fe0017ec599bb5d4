//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a `-v` count.
    ///
    /// Level 0 is silent. Each additional `-v` enables more categories; levels
    /// above 3 behave like 3.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.info.name = 1;
                config.info.stats = 1;
                config.info.misc = 1;
            }
            2 => {
                config.info.name = 1;
                config.info.stats = 1;
                config.info.misc = 1;
                config.info.skip = 1;
                config.debug.filter = 2;
                config.debug.fs = 2;
                config.debug.cmd = 1;
            }
            _ => {
                config.info.name = 2;
                config.info.stats = 1;
                config.info.misc = 1;
                config.info.skip = 2;
                config.debug.filter = 3;
                config.debug.fs = 3;
                config.debug.cmd = 2;
            }
        }

        config
    }

    /// Apply a single info flag token (e.g., "skip2", "name").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;
        let flag = InfoFlag::from_name(name).ok_or_else(|| format!("unknown info flag: {name}"))?;
        self.info.set(flag, level);
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "filter3", "fs").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;
        let flag =
            DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma-separated `--info` list.
    ///
    /// `ALL` sets every info flag to 1 and `NONE` (or `0`) clears them; both
    /// may be followed by further tokens, which are applied in order.
    pub fn apply_info_flags(&mut self, list: &str) -> Result<(), String> {
        for token in split_flag_list(list) {
            match token {
                "ALL" | "all" => self.info.set_all(1),
                "NONE" | "none" | "0" => self.info.set_all(0),
                _ => self.apply_info_flag(token)?,
            }
        }
        Ok(())
    }

    /// Apply a comma-separated `--debug` list. Accepts `ALL` and `NONE` like
    /// [`apply_info_flags`](Self::apply_info_flags).
    pub fn apply_debug_flags(&mut self, list: &str) -> Result<(), String> {
        for token in split_flag_list(list) {
            match token {
                "ALL" | "all" => self.debug.set_all(1),
                "NONE" | "none" | "0" => self.debug.set_all(0),
                _ => self.apply_debug_flag(token)?,
            }
        }
        Ok(())
    }
}

fn split_flag_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Parse a flag token like "skip2" into ("skip", 2) or "name" into ("name", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}
