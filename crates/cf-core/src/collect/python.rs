//! Interpreter gatherer: Python and pip details.
//!
//! The interpreter path is required input. The version reported is that
//! of the ambient interpreter resolved from the controller's own PATH,
//! not the binary at the supplied path; the pip lookup, by contrast,
//! targets the supplied path. That asymmetry is preserved deliberately
//! (see DESIGN.md), as is the failure split: the version query is
//! essential, the pip query is best-effort and any failure there leaves
//! `pip` as an explicit null.

use super::runner::CommandRunner;
use super::InvocationContext;
use cf_common::{Error, InterpreterFacts, PipFacts, PythonFacts, Result, VersionInfo};
use tracing::debug;

/// Interpreter resolved from the controller's environment for the
/// version query.
pub const AMBIENT_INTERPRETER: &str = "python3";

/// Gather interpreter version and, best-effort, pip version.
pub fn gather_python(runner: &dyn CommandRunner, ctx: &InvocationContext) -> Result<PythonFacts> {
    debug!("collecting controller python info");

    let path = match ctx.interpreter.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => return Err(Error::MissingContext("interpreter")),
    };

    let version = interpreter_version(runner)?;

    let pip = match pip_version(runner, path) {
        Some(id) => Some(PipFacts {
            version: VersionInfo { id },
        }),
        None => {
            debug!("pip not available for this interpreter");
            None
        }
    };

    Ok(PythonFacts {
        interpreter: InterpreterFacts {
            path: path.to_string(),
            version: VersionInfo { id: version },
        },
        pip,
    })
}

/// Version of the ambient interpreter. First whitespace token of
/// `sys.version`, e.g. `3.12.1`.
fn interpreter_version(runner: &dyn CommandRunner) -> Result<String> {
    let output = runner
        .run(AMBIENT_INTERPRETER, &["-c", "import sys; print(sys.version)"])
        .map_err(|e| Error::Collection(format!("interpreter version query failed: {}", e)))?;

    if !output.success() {
        return Err(Error::Collection(format!(
            "interpreter version query exited with status {}: {}",
            output
                .exit_code
                .map_or_else(|| "signal".to_string(), |c| c.to_string()),
            output.stderr_str().trim()
        )));
    }

    output
        .stdout_str()
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| Error::Collection("interpreter version query produced no output".into()))
}

/// pip version from the interpreter at `path`, or None on any failure.
/// Expected output is `pip X.Y.Z from ...`; the second token is the
/// version.
fn pip_version(runner: &dyn CommandRunner, path: &str) -> Option<String> {
    let output = runner.run(path, &["-m", "pip", "--version"]).ok()?;
    if !output.success() {
        return None;
    }
    output
        .stdout_str()
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}
