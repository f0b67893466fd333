// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: match the pattern and text read from stdin.

use std::io::{self, BufWriter, Write};

use fuzzmatch::cli::Cli;
use fuzzmatch::config::{self, Settings};
use fuzzmatch::error::ExitCode;
use fuzzmatch::input;
use fuzzmatch::report::{self, MatchReport};

/// Run the matcher over stdin and print the report to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (config, _) = config::load_for(cli.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(cli, &config)?;

    let positions = input::match_tokens(io::stdin().lock(), settings.wildcard)?;
    let report = MatchReport::new(positions, settings.one_based);

    let mut out = BufWriter::new(io::stdout().lock());
    report::write(&mut out, &report, settings.format)?;
    out.flush()?;

    Ok(ExitCode::Success)
}
