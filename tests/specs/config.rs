//! Behavioral specs for configuration.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// fuzzmatch.toml in the working directory is picked up
#[test]
fn discovered_config_sets_wildcard() {
    let project = project_with_config("wildcard = \"*\"\n");
    fuzzmatch_cmd()
        .current_dir(project.path())
        .write_stdin("a*c abc")
        .assert()
        .success()
        .stdout("1\n0 \n");
}

/// Output settings from the config file apply
#[test]
fn config_output_settings() {
    let project = project_with_config("[output]\nformat = \"json\"\none_based = true\n");
    fuzzmatch_cmd()
        .current_dir(project.path())
        .write_stdin("b abab")
        .assert()
        .success()
        .stdout("{\"count\":2,\"positions\":[2,4]}\n");
}

/// Flags win over the config file
#[test]
fn flags_override_config() {
    let project = project_with_config("wildcard = \"*\"\n");
    fuzzmatch_cmd()
        .current_dir(project.path())
        .args(["--wildcard", "?"])
        .write_stdin("a?c abc")
        .assert()
        .success()
        .stdout("1\n0 \n");
}

/// -C points at an explicit config file
#[test]
fn explicit_config_path() {
    let project = project_with_config("wildcard = \"#\"\n");
    let path = project.path().join("fuzzmatch.toml");
    fuzzmatch_cmd()
        .arg("-C")
        .arg(&path)
        .write_stdin("a#c abc")
        .assert()
        .success()
        .stdout("1\n0 \n");
}

/// An invalid config file exits with code 3
#[test]
fn invalid_config_exits_with_config_error() {
    let project = project_with_config("unknown_key = 1\n");
    fuzzmatch_cmd()
        .current_dir(project.path())
        .write_stdin("a b")
        .assert()
        .code(3)
        .stderr(predicates::str::contains("invalid config file"));
}

/// A missing explicit config file exits with code 3
#[test]
fn missing_explicit_config_exits_with_config_error() {
    fuzzmatch_cmd()
        .args(["-C", "/nonexistent/fuzzmatch.toml"])
        .write_stdin("a b")
        .assert()
        .code(3)
        .stderr(predicates::str::contains("failed to read config file"));
}
