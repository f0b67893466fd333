// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use fuzzmatch::cli::Cli;
use fuzzmatch::error::ExitCode;

mod cmd_match;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    fuzzmatch::logging::init(cli.verbose);

    match cmd_match::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("fuzzmatch: {err:#}");
            ExitCode::for_error(&err).into()
        }
    }
}
