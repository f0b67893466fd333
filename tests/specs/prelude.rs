//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
pub use tempfile::TempDir;

/// Returns a Command running the fuzzmatch binary in an isolated directory.
///
/// Environment overrides are cleared so the host cannot leak settings in.
pub fn fuzzmatch_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("fuzzmatch"));
    cmd.current_dir(std::env::temp_dir())
        .env_remove("FUZZMATCH_CONFIG")
        .env_remove("FUZZMATCH_WILDCARD")
        .env_remove("FUZZMATCH_LOG");
    cmd
}

/// Runs fuzzmatch with `stdin` and returns its stdout.
pub fn run_stdin(args: &[&str], stdin: &str) -> String {
    let output = fuzzmatch_cmd()
        .args(args)
        .write_stdin(stdin)
        .output()
        .expect("command should run");
    assert!(
        output.status.success(),
        "fuzzmatch failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Creates a project directory (with a git root) holding `fuzzmatch.toml`.
pub fn project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join("fuzzmatch.toml"), config).unwrap();
    dir
}
