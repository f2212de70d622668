//! Error types for fizzbuzz-rs operations.
//!
//! This module provides the error hierarchy using `thiserror` for rule
//! validation, output writing, and CLI commands.

use thiserror::Error;

/// Result type alias for fizzbuzz operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Rule validation errors (divisor preconditions).
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// I/O errors (writing the sequence).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

impl Error {
    /// Returns true if the error came from a closed downstream pipe.
    #[must_use]
    pub const fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(IoError::BrokenPipe))
    }
}

/// Errors raised while building a [`crate::core::Rule`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A divisor was zero or negative.
    #[error("divisor {name} must be a positive integer, got {value}")]
    NonPositiveDivisor {
        /// Argument name of the divisor (`a` or `b`).
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
}

/// I/O-specific errors for writing output.
#[derive(Error, Debug)]
pub enum IoError {
    /// The reader on the other end of stdout went away.
    #[error("broken pipe")]
    BrokenPipe,

    /// Failed to write a line.
    #[error("failed to write output: {reason}")]
    WriteFailed {
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            Self::Io(IoError::BrokenPipe)
        } else {
            Self::Io(IoError::WriteFailed {
                reason: err.to_string(),
            })
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return std::io::Error::from(err).into();
        }
        Self::Command(CommandError::OutputFormat(err.to_string()))
    }
}
