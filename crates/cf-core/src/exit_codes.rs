//! Exit codes for the cfacts CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use cf_common::{Error, ErrorCategory};

/// Exit codes for cfacts operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: all requested fact categories gathered.
    Clean = 0,

    /// Invalid arguments (malformed gather-subset token).
    ArgsError = 10,

    /// Unsupported controller platform.
    PlatformError = 11,

    /// Required invocation context value missing.
    PreconditionError = 12,

    /// User/group identity resolution failed.
    IdentityError = 13,

    /// External command execution failed during gathering.
    CollectionError = 14,

    /// Internal error (bug - please report).
    InternalError = 20,

    /// I/O error.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    /// These can be resolved by user action.
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Check if this exit code is an internal error (codes 20-29).
    /// These indicate bugs and should be reported.
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "clean",
            ExitCode::ArgsError => "args_error",
            ExitCode::PlatformError => "platform_error",
            ExitCode::PreconditionError => "precondition_error",
            ExitCode::IdentityError => "identity_error",
            ExitCode::CollectionError => "collection_error",
            ExitCode::InternalError => "internal_error",
            ExitCode::IoError => "io_error",
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Validation => ExitCode::ArgsError,
            ErrorCategory::Platform => ExitCode::PlatformError,
            ErrorCategory::Precondition => ExitCode::PreconditionError,
            ErrorCategory::Resolution => ExitCode::IdentityError,
            ErrorCategory::Collection => ExitCode::CollectionError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}
