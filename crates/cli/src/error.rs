use std::io;
use std::path::PathBuf;

use filters::FilterError;
use fsutil::FsError;
use thiserror::Error;

use crate::ExitCode;

/// Failure that ends a `fsfilter` run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Pattern(#[from] FilterError),
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error("failed to read {what} '{}': {source}", path.display())]
    Read {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl CliError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub(crate) const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(_) => ExitCode::Usage,
            Self::Pattern(_) => ExitCode::Pattern,
            Self::Fs(_) | Self::Read { .. } | Self::Write(_) => ExitCode::Io,
        }
    }
}
