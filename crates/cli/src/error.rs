// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed or unreadable input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing pattern: input is empty")]
    MissingPattern,

    #[error("missing text: expected a second token after the pattern")]
    MissingText,

    #[error("unexpected input after the text token")]
    TrailingInput,

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {0} (expected 1)")]
    UnsupportedVersion(i64),

    #[error("invalid wildcard {0:?}: expected a single ASCII character")]
    InvalidWildcard(String),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InternalError = 1,
    InputError = 2,
    ConfigError = 3,
}

impl ExitCode {
    /// Exit code for an error surfaced at the top level.
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<InputError>().is_some() {
            ExitCode::InputError
        } else if err.downcast_ref::<ConfigError>().is_some() {
            ExitCode::ConfigError
        } else {
            ExitCode::InternalError
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
