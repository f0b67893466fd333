//! Behavioral specs for pattern matching output.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Text output
// =============================================================================

/// Overlapping occurrences are all reported
#[test]
fn reports_overlapping_matches() {
    assert_eq!(run_stdin(&[], "a?a\naaaa\n"), "2\n0 1 \n");
    assert_eq!(run_stdin(&[], "a?a\naaa\n"), "1\n0 \n");
}

/// A lone wildcard matches at every position
#[test]
fn lone_wildcard_matches_everywhere() {
    assert_eq!(run_stdin(&[], "? xyz"), "3\n0 1 2 \n");
}

/// A pattern without wildcards is a plain substring search
#[test]
fn literal_pattern_matches_substrings() {
    assert_eq!(run_stdin(&[], "ab ababab"), "3\n0 2 4 \n");
}

/// Adjacent wildcards each consume one character
#[test]
fn adjacent_wildcards_match_one_character_each() {
    assert_eq!(run_stdin(&[], "a??b axxb"), "1\n0 \n");
    assert_eq!(run_stdin(&[], "a??b axb"), "0\n\n");
}

/// No match prints a zero count and an empty list
#[test]
fn no_match_prints_zero() {
    assert_eq!(run_stdin(&[], "xyz\nabc\n"), "0\n\n");
}

/// Long texts are handled without trouble
#[test]
fn long_text_is_scanned() {
    let text = "ab".repeat(50_000);
    let stdout = run_stdin(&[], &format!("a?a {text}"));
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("49999"));
}

// =============================================================================
// Options
// =============================================================================

/// --one-based shifts positions by one
#[test]
fn one_based_positions() {
    assert_eq!(run_stdin(&["--one-based"], "ab ababab"), "3\n1 3 5 \n");
}

/// --output json prints a single JSON object
#[test]
fn json_output() {
    let stdout = run_stdin(&["--output", "json"], "a?a aaaa");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("should be valid JSON");
    assert_eq!(json["count"], 2);
    assert_eq!(json["positions"], serde_json::json!([0, 1]));
}

/// --wildcard changes the wildcard character
#[test]
fn custom_wildcard_flag() {
    assert_eq!(run_stdin(&["--wildcard", "*"], "a*? ab?"), "1\n0 \n");
}

/// FUZZMATCH_WILDCARD sets the wildcard character
#[test]
fn custom_wildcard_env() {
    fuzzmatch_cmd()
        .env("FUZZMATCH_WILDCARD", "_")
        .write_stdin("a_c abc")
        .assert()
        .success()
        .stdout("1\n0 \n");
}

/// --verbose logs to stderr and leaves stdout untouched
#[test]
fn verbose_logs_to_stderr() {
    fuzzmatch_cmd()
        .arg("--verbose")
        .write_stdin("a?a aaaa")
        .assert()
        .success()
        .stdout("2\n0 1 \n")
        .stderr(predicates::str::contains("built automaton"))
        .stderr(predicates::str::contains("reset wildcard matcher"));
}
