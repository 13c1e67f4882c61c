//! Scripted test doubles for the command runner and environment probe.

use super::runner::{CommandRunner, RunnerError, ToolOutput};
use crate::probe::{EnvProbe, OsFamily};
use std::cell::RefCell;
use std::collections::HashMap;

/// A scripted command response.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// Succeed with the given stdout.
    Stdout(String),
    /// Exit non-zero with the given code and stderr.
    Exit(i32, String),
    /// Fail to spawn entirely.
    SpawnError(String),
}

/// Command runner that replays scripted responses keyed by the full
/// command line. Unscripted commands report "command not found". Every
/// invocation is recorded so tests can assert on side effects (or their
/// absence).
#[derive(Debug, Default)]
pub struct FakeRunner {
    responses: HashMap<String, FakeResponse>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(cmd: &str, args: &[&str]) -> String {
        let mut key = cmd.to_string();
        for arg in args {
            key.push(' ');
            key.push_str(arg);
        }
        key
    }

    /// Script a successful response for a command line.
    pub fn ok(mut self, cmdline: &str, stdout: &str) -> Self {
        self.responses
            .insert(cmdline.to_string(), FakeResponse::Stdout(stdout.to_string()));
        self
    }

    /// Script a non-zero exit for a command line.
    pub fn exit(mut self, cmdline: &str, code: i32, stderr: &str) -> Self {
        self.responses.insert(
            cmdline.to_string(),
            FakeResponse::Exit(code, stderr.to_string()),
        );
        self
    }

    /// Script a spawn failure for a command line.
    pub fn spawn_error(mut self, cmdline: &str, cause: &str) -> Self {
        self.responses.insert(
            cmdline.to_string(),
            FakeResponse::SpawnError(cause.to_string()),
        );
        self
    }

    /// Number of commands that were actually invoked.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> Result<ToolOutput, RunnerError> {
        let key = Self::key(cmd, args);
        self.calls.borrow_mut().push(key.clone());

        let output = |stdout: &str, stderr: &str, exit_code: i32| ToolOutput {
            command: cmd.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
            exit_code: Some(exit_code),
        };

        match self.responses.get(&key) {
            Some(FakeResponse::Stdout(stdout)) => Ok(output(stdout, "", 0)),
            Some(FakeResponse::Exit(code, stderr)) => Ok(output("", stderr, *code)),
            Some(FakeResponse::SpawnError(cause)) => Err(RunnerError::SpawnFailed {
                command: cmd.to_string(),
                cause: cause.clone(),
            }),
            None => Err(RunnerError::CommandNotFound(cmd.to_string())),
        }
    }
}

/// Environment probe with fixed answers.
#[derive(Debug, Clone, Copy)]
pub struct FakeProbe {
    pub uid: u32,
    pub os: OsFamily,
}

impl FakeProbe {
    pub fn posix(uid: u32) -> Self {
        FakeProbe {
            uid,
            os: OsFamily::Posix,
        }
    }

    pub fn windows() -> Self {
        FakeProbe {
            uid: 0,
            os: OsFamily::Windows,
        }
    }
}

impl EnvProbe for FakeProbe {
    fn effective_uid(&self) -> u32 {
        self.uid
    }

    fn os_family(&self) -> OsFamily {
        self.os
    }
}
