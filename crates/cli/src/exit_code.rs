//! Exit codes returned by the `fsfilter` command.

use std::fmt;

/// Process exit status of a `fsfilter` run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,

    /// Invalid command line or verbosity tokens.
    Usage = 1,

    /// A pattern is invalid: a bare `!` or malformed glob syntax.
    Pattern = 2,

    /// `--check` found no selected path.
    NoMatch = 3,

    /// Reading an input list, walking a directory, or writing output failed.
    Io = 4,
}

impl ExitCode {
    /// Numeric value passed to the operating system.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Usage => "syntax or usage error",
            Self::Pattern => "invalid pattern",
            Self::NoMatch => "no path selected",
            Self::Io => "i/o error",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
