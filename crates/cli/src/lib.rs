// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming wildcard pattern matching.
//!
//! A pattern such as `a??b` is split on its wildcards into literal
//! fragments, an Aho-Corasick automaton is built over the fragments, and
//! text is scanned one byte at a time while a fixed-size window of
//! counters tracks which alignments have seen every fragment.
//!
//! ```
//! use fuzzmatch::matcher::find_matches;
//!
//! assert_eq!(find_matches("a?a", "aaaa", b'?'), vec![0, 1]);
//! ```

pub mod automaton;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod input;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod traverse;

#[cfg(test)]
pub mod test_utils;
