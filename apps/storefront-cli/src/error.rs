//! # Shell Error Type
//!
//! Errors that can end the console process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError (rejected order, bad login)  ──► printed, session goes on   │
//! │  ShellError::Io / Config / Json          ──► process exits non-zero    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Business failures are reported on stdout by the session and never
//! surface here on their own; `Core` only carries failures while seeding.

use std::io;

use storefront_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// An environment variable held a value we cannot use.
    #[error("invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },

    /// Seeding the store failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Receipt could not be encoded as JSON.
    #[error("receipt encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    pub fn config(key: &str, reason: impl Into<String>) -> Self {
        ShellError::Config {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ShellError::config("STOREFRONT_SEED_DEMO", "expected true or false");
        assert_eq!(
            err.to_string(),
            "invalid configuration for STOREFRONT_SEED_DEMO: expected true or false"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: ShellError = CoreError::TotalOverflow.into();
        assert_eq!(err.to_string(), "Order total overflows");
    }
}
