use thiserror::Error;

/// Error produced while normalizing or evaluating a pattern list.
#[derive(Clone, Debug, Error)]
pub enum FilterError {
    /// A pattern consisted of the negation marker alone (`!`).
    #[error("illegal exclusion pattern: bare negation marker")]
    InvalidPattern,
    /// The glob engine rejected the pattern syntax.
    #[error("failed to compile filter pattern '{pattern}': {source}")]
    MalformedGlob {
        /// The offending pattern, including any negation marker.
        pattern: String,
        /// Error reported by the glob compiler.
        #[source]
        source: globset::Error,
    },
}

impl FilterError {
    pub(crate) fn malformed(pattern: &str, source: globset::Error) -> Self {
        Self::MalformedGlob {
            pattern: pattern.to_owned(),
            source,
        }
    }

    /// Returns the offending pattern when the error is tied to one.
    ///
    /// [`FilterError::InvalidPattern`] always refers to the bare `!` marker.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::InvalidPattern => "!",
            Self::MalformedGlob { pattern, .. } => pattern,
        }
    }

    /// Reports whether the error was raised while normalizing the pattern list.
    #[must_use]
    pub const fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern)
    }

    /// Reports whether the error came from the glob compiler at match time.
    #[must_use]
    pub const fn is_malformed_glob(&self) -> bool {
        matches!(self, Self::MalformedGlob { .. })
    }
}
