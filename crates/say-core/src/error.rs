//! Error types for the SAY likelihoods

use thiserror::Error;

/// SAY likelihood error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `log(1 + x)` was requested for `x <= -1`.
    #[error("Domain error: invalid input argument ({value}); must be greater than -1.0")]
    Domain {
        /// The offending argument.
        value: f64,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
