// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

/// Find every occurrence of a wildcard pattern in a text.
///
/// Reads the pattern and then the text, as two whitespace-separated tokens,
/// from standard input. Prints the number of matches followed by their start
/// positions.
#[derive(Debug, Parser)]
#[command(name = "fuzzmatch")]
#[command(version, about)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "FUZZMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Character that matches any single character (default: ?)
    #[arg(short, long, value_name = "CHAR", env = "FUZZMATCH_WILDCARD")]
    pub wildcard: Option<String>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Print 1-based start positions
    #[arg(long)]
    pub one_based: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
