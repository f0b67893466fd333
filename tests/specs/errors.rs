//! Behavioral specs for malformed input.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Empty input is rejected
#[test]
fn empty_input_exits_with_input_error() {
    fuzzmatch_cmd()
        .write_stdin("")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicates::str::contains("missing pattern"));
}

/// A pattern without text is rejected
#[test]
fn missing_text_exits_with_input_error() {
    fuzzmatch_cmd()
        .write_stdin("a?b\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("missing text"));
}

/// More than two tokens are rejected
#[test]
fn extra_tokens_exit_with_input_error() {
    fuzzmatch_cmd()
        .write_stdin("a b c")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unexpected input"));
}

/// A multi-character wildcard is rejected
#[test]
fn invalid_wildcard_exits_with_config_error() {
    fuzzmatch_cmd()
        .args(["--wildcard", "ab"])
        .write_stdin("a b")
        .assert()
        .code(3)
        .stderr(predicates::str::contains("invalid wildcard").and(predicates::str::contains("ab")));
}
