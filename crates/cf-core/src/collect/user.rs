//! Identity gatherer: who is running the controller.
//!
//! The effective uid comes from the environment probe; username and
//! primary group are resolved by the POSIX `id` utility. Identity
//! resolution is expected to be deterministic and fast, so any failure
//! is surfaced immediately as a resolution error rather than retried.

use super::runner::CommandRunner;
use crate::probe::EnvProbe;
use cf_common::{Error, GroupFacts, Result, UserFacts};
use tracing::debug;

/// Gather the controller user's id, name, and primary group.
pub fn gather_user(runner: &dyn CommandRunner, probe: &dyn EnvProbe) -> Result<UserFacts> {
    debug!("collecting controller user info");

    let uid = probe.effective_uid();
    let uid_str = uid.to_string();

    let name = resolve_id(runner, &["-un", "--", &uid_str])?;
    let group_id = resolve_id(runner, &["-g", "--", &uid_str])?;
    let group_name = resolve_id(runner, &["-gn", "--", &uid_str])?;

    Ok(UserFacts {
        id: uid,
        name,
        group: GroupFacts {
            id: group_id,
            name: group_name,
        },
    })
}

/// Run `id` with the given arguments and return its trimmed stdout.
fn resolve_id(runner: &dyn CommandRunner, args: &[&str]) -> Result<String> {
    let output = runner
        .run("id", args)
        .map_err(|e| Error::Identity(e.to_string()))?;

    if !output.success() {
        return Err(Error::Identity(format!(
            "'id {}' exited with status {}: {}",
            args.join(" "),
            output
                .exit_code
                .map_or_else(|| "signal".to_string(), |c| c.to_string()),
            output.stderr_str().trim()
        )));
    }

    Ok(output
        .stdout_str()
        .trim_end_matches(['\r', '\n'])
        .to_string())
}
