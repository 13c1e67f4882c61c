//! End-to-end CLI tests for cfacts.
//!
//! These run the real binary against real POSIX tooling (`id`), temp
//! config files, and the error paths, asserting on payload, exit codes,
//! and diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Get a Command for the cfacts binary with a clean environment.
fn cfacts() -> Command {
    let mut cmd = Command::cargo_bin("cfacts").expect("cfacts binary should exist");
    cmd.env_remove("CFACTS_CONFIG_FILE")
        .env_remove("CFACTS_INTERPRETER")
        .env_remove("CFACTS_LOG")
        .env_remove("CFACTS_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn temp_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[defaults]\ninventory = ./hosts").expect("write");
    file.flush().expect("flush");
    file
}

#[test]
fn gather_config_subset() {
    let file = temp_config();

    let output = cfacts()
        .args(["--subset", "config"])
        .args(["--config-file", file.path().to_str().unwrap()])
        .output()
        .expect("run cfacts");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json payload");
    let settings = &doc["controller"]["config"]["settings"];
    assert_eq!(settings["defaults"]["inventory"], "./hosts");
    assert!(doc["controller"].get("user").is_none());
    assert!(doc["controller"].get("python").is_none());
}

#[test]
fn gather_user_subset_resolves_real_identity() {
    let output = cfacts()
        .args(["--subset", "user"])
        .output()
        .expect("run cfacts");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json payload");
    let user = &doc["controller"]["user"];
    assert!(user["id"].is_u64());
    assert!(!user["name"].as_str().unwrap().is_empty());
    assert!(!user["group"]["name"].as_str().unwrap().is_empty());
}

#[test]
fn invalid_subset_token_exits_with_args_error() {
    cfacts()
        .args(["--subset", "bogus"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn missing_config_path_exits_with_precondition_error() {
    cfacts()
        .args(["--subset", "config"])
        .assert()
        .code(12)
        .stderr(predicate::str::contains("config_file"));
}

#[test]
fn missing_interpreter_path_exits_with_precondition_error() {
    cfacts()
        .args(["--subset", "python"])
        .assert()
        .code(12)
        .stderr(predicate::str::contains("interpreter"));
}

#[test]
fn not_all_yields_empty_document() {
    cfacts()
        .args(["--subset", "!all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"controller":{}}"#));
}

#[test]
fn exclusion_drops_category() {
    let file = temp_config();

    let output = cfacts()
        .args(["--subset", "all", "--subset", "!python", "--subset", "!user"])
        .args(["--config-file", file.path().to_str().unwrap()])
        .output()
        .expect("run cfacts");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json payload");
    assert!(doc["controller"].get("config").is_some());
    assert!(doc["controller"].get("python").is_none());
    assert!(doc["controller"].get("user").is_none());
}

#[test]
fn missing_config_file_on_disk_is_lenient() {
    cfacts()
        .args(["--subset", "config"])
        .args(["--config-file", "/nonexistent/controller.cfg"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""settings":{}"#));
}

#[test]
fn gather_subcommand_matches_default_invocation() {
    let default = cfacts().args(["--subset", "!all"]).output().expect("run");
    let explicit = cfacts()
        .args(["gather", "--subset", "!all"])
        .output()
        .expect("run");

    assert!(default.status.success());
    assert!(explicit.status.success());
    assert_eq!(default.stdout, explicit.stdout);
}

#[test]
fn config_file_env_var_is_honored() {
    let file = temp_config();

    cfacts()
        .args(["--subset", "config"])
        .env("CFACTS_CONFIG_FILE", file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("inventory"));
}

#[test]
fn yaml_format_renders_document() {
    cfacts()
        .args(["--subset", "!all", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("controller:"));
}

#[test]
fn per_host_emits_warning() {
    cfacts()
        .args(["--subset", "!all", "--per-host"])
        .assert()
        .success()
        .stderr(predicate::str::contains("once per automation run"));
}

#[test]
fn version_subcommand_prints_version() {
    cfacts()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_fails() {
    cfacts()
        .arg("--nonexistent-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
