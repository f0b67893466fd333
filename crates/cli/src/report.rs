// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match list output.
//!
//! Text output is two lines: the match count, then every start position
//! followed by a space. JSON output is a single object.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;

/// Matches found in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub count: usize,
    pub positions: Vec<usize>,
}

impl MatchReport {
    /// Build a report from 0-based positions, shifting them if `one_based`.
    pub fn new(mut positions: Vec<usize>, one_based: bool) -> Self {
        if one_based {
            positions.iter_mut().for_each(|p| *p += 1);
        }
        Self {
            count: positions.len(),
            positions,
        }
    }
}

/// Write `report` in the requested format.
pub fn write<W: Write>(out: &mut W, report: &MatchReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}

fn write_text<W: Write>(out: &mut W, report: &MatchReport) -> io::Result<()> {
    writeln!(out, "{}", report.count)?;
    for position in &report.positions {
        write!(out, "{} ", position)?;
    }
    writeln!(out)
}

fn write_json<W: Write>(out: &mut W, report: &MatchReport) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
