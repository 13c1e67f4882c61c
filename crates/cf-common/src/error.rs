//! Error types for Controller Facts.
//!
//! This module provides structured error handling with:
//! - A unified error enum covering every fatal failure mode
//! - Category classification for error grouping
//!
//! The taxonomy is deliberately small: a fact-gathering invocation either
//! succeeds with every requested category populated or fails with exactly
//! one of these errors. There is no partial-success shape. The only
//! non-fatal miss (pip version lookup) never surfaces here; it is recorded
//! as an explicit absence in the fact document instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Controller Facts operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed caller input (bad subset token, bad arguments).
    Validation,
    /// Required invocation context value is absent.
    Precondition,
    /// OS-level identity resolution failed.
    Resolution,
    /// External command execution failed during gathering.
    Collection,
    /// Controller platform is not supported.
    Platform,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Precondition => write!(f, "precondition"),
            ErrorCategory::Resolution => write!(f, "resolution"),
            ErrorCategory::Collection => write!(f, "collection"),
            ErrorCategory::Platform => write!(f, "platform"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Controller Facts.
#[derive(Error, Debug)]
pub enum Error {
    /// A gather-subset token that is neither a known category, a known
    /// negation, nor `all`/`!all`. Fails the invocation before any
    /// gatherer runs.
    #[error("invalid gather subset token: '{0}'")]
    InvalidSubset(String),

    /// The controller host platform cannot run the POSIX identity tools.
    #[error("unsupported controller platform: '{0}' (POSIX-only tools are required)")]
    UnsupportedPlatform(String),

    /// A gatherer's required invocation context value is missing or empty.
    #[error("required invocation context value '{0}' is missing")]
    MissingContext(&'static str),

    /// OS-level user/group identity resolution failed.
    #[error("failed to resolve controller user identity: {0}")]
    Identity(String),

    /// An external command invoked during gathering failed.
    #[error("fact collection failed: {0}")]
    Collection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get the category classification for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidSubset(_) => ErrorCategory::Validation,
            Error::UnsupportedPlatform(_) => ErrorCategory::Platform,
            Error::MissingContext(_) => ErrorCategory::Precondition,
            Error::Identity(_) => ErrorCategory::Resolution,
            Error::Collection(_) => ErrorCategory::Collection,
            Error::Io(_) => ErrorCategory::Io,
        }
    }
}
