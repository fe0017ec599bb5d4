//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

use std::fmt;

/// Info flags for user-facing diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Names of evaluated paths.
    Name,
    /// Paths skipped because the pattern list matched them.
    Skip,
    /// Summary statistics.
    Stats,
    /// Miscellaneous notices.
    Misc,
}

impl InfoFlag {
    /// Every info flag, in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Skip, Self::Stats, Self::Misc];

    /// Token used for this flag in `--info` lists.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Skip => "skip",
            Self::Stats => "stats",
            Self::Misc => "misc",
        }
    }

    /// Looks up a flag by its `--info` token.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

impl fmt::Display for InfoFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Debug flags for developer diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Pattern normalization and evaluation.
    Filter,
    /// Filesystem helper operations.
    Fs,
    /// Command-line handling.
    Cmd,
}

impl DebugFlag {
    /// Every debug flag, in display order.
    pub const ALL: [Self; 3] = [Self::Filter, Self::Fs, Self::Cmd];

    /// Token used for this flag in `--debug` lists.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Fs => "fs",
            Self::Cmd => "cmd",
        }
    }

    /// Looks up a flag by its `--debug` token.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

impl fmt::Display for DebugFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InfoLevels {
    /// Path name level.
    pub name: u8,
    /// Skipped path level.
    pub skip: u8,
    /// Statistics level.
    pub stats: u8,
    /// Miscellaneous level.
    pub misc: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Name => self.name,
            InfoFlag::Skip => self.skip,
            InfoFlag::Stats => self.stats,
            InfoFlag::Misc => self.misc,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Name => self.name = level,
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Stats => self.stats = level,
            InfoFlag::Misc => self.misc = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugLevels {
    /// Filter evaluation level.
    pub filter: u8,
    /// Filesystem helper level.
    pub fs: u8,
    /// Command-line handling level.
    pub cmd: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Filter => self.filter,
            DebugFlag::Fs => self.fs,
            DebugFlag::Cmd => self.cmd,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Filter => self.filter = level,
            DebugFlag::Fs => self.fs = level,
            DebugFlag::Cmd => self.cmd = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }
}
