//! Crate error type.
//!
//! Only malformed input raises an error. A calendar too small for the
//! fixture is not an error; see [`Schedule::is_truncated`].
//!
//! [`Schedule::is_truncated`]: crate::models::Schedule::is_truncated

use thiserror::Error;

/// Errors raised while preparing or running a schedule.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// A day window time is not a 24-hour `HH:MM` value.
    #[error("invalid time '{input}': expected 24-hour HH:MM")]
    InvalidTime {
        /// The rejected text.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// A numeric parameter is out of range (zero pitches, zero-length matches, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be read.
    #[error("failed to read configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, FixtureError>;
