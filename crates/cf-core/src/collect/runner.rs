//! Safe execution of external commands.
//!
//! The gatherers shell out to a small set of POSIX utilities (`id`, the
//! interpreter binary). This module provides a blocking runner with:
//!
//! - Command path validation to prevent injection
//! - A sanitized environment (`LC_ALL=C` so output parses predictably)
//! - Captured stdout/stderr and exit status
//!
//! Execution is synchronous and unbounded: a single fact-gathering
//! invocation is one short-lived call, so there is no timeout or
//! parallelism here. The [`CommandRunner`] trait is the seam tests use
//! to substitute scripted fakes.

use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur during command execution.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("command '{command}' failed to spawn: {cause}")]
    SpawnFailed { command: String, cause: String },

    #[error("invalid command path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output from a command execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Command that was executed.
    pub command: String,

    /// Arguments passed to the command.
    pub args: Vec<String>,

    /// Captured standard output.
    pub stdout: Vec<u8>,

    /// Captured standard error.
    pub stderr: Vec<u8>,

    /// Exit code (None when killed by a signal).
    pub exit_code: Option<i32>,
}

impl ToolOutput {
    /// Get stdout as string (lossy UTF-8 conversion).
    pub fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Get stderr as string (lossy UTF-8 conversion).
    pub fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// Check if the command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Seam for invoking external commands.
///
/// Gatherers depend on this trait rather than on [`ToolRunner`] so tests
/// can script deterministic responses.
pub trait CommandRunner {
    /// Run a command and capture its output and exit status.
    fn run(&self, cmd: &str, args: &[&str]) -> Result<ToolOutput, RunnerError>;
}

/// Production command runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRunner;

impl ToolRunner {
    pub fn new() -> Self {
        ToolRunner
    }

    /// Validate that a command is safe to execute.
    fn validate_command(&self, cmd: &str) -> Result<(), RunnerError> {
        if cmd.is_empty() {
            return Err(RunnerError::InvalidPath("empty command".to_string()));
        }

        // Reject commands with shell metacharacters
        if cmd.contains(['|', '&', ';', '$', '`', '\n', '\r']) {
            return Err(RunnerError::InvalidPath(format!(
                "command contains shell metacharacters: {}",
                cmd
            )));
        }

        // Verify command exists if it's an absolute path
        if cmd.starts_with('/') && !Path::new(cmd).exists() {
            return Err(RunnerError::CommandNotFound(cmd.to_string()));
        }

        Ok(())
    }

    /// Build the command with a minimal, predictable environment.
    fn build_command(&self, cmd: &str, args: &[&str]) -> Command {
        let mut command = Command::new(cmd);
        command.args(args);
        command.env_clear();
        if let Ok(path) = std::env::var("PATH") {
            command.env("PATH", path);
        }
        command.env("LC_ALL", "C");
        command.env("LANG", "C");
        command
    }
}

impl CommandRunner for ToolRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<ToolOutput, RunnerError> {
        self.validate_command(cmd)?;

        debug!(command = %cmd, args = ?args, "running command");

        let output = self
            .build_command(cmd, args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                error!(command = %cmd, error = %e, "failed to spawn");
                if e.kind() == std::io::ErrorKind::NotFound {
                    RunnerError::CommandNotFound(cmd.to_string())
                } else {
                    RunnerError::SpawnFailed {
                        command: cmd.to_string(),
                        cause: e.to_string(),
                    }
                }
            })?;

        debug!(
            command = %cmd,
            exit_code = ?output.status.code(),
            "command complete"
        );

        Ok(ToolOutput {
            command: cmd.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code(),
        })
    }
}
