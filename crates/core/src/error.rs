//! Error types for u-zoning.

use thiserror::Error;

/// Errors raised while loading input or configuring a search.
#[derive(Debug, Error)]
pub enum Error {
    /// The minimum subset size cannot be satisfied by the input.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input text is malformed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line of the offending token (0 when the input ended early).
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// The input source could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The exhaustive solver was given more points than it accepts.
    #[error("Instance too large for exhaustive search: {items} points (limit {limit})")]
    TooLarge {
        /// Number of points supplied.
        items: usize,
        /// Configured limit.
        limit: usize,
    },
}

/// Result type alias for u-zoning operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns true for errors that describe an unsatisfiable configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::TooLarge { .. })
    }
}
