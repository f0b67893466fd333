// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and resolution.
//!
//! Settings are layered, highest priority first:
//! 1. Command-line flags (and their environment variables)
//! 2. `fuzzmatch.toml`
//! 3. Built-in defaults

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, OutputFormat};
use crate::error::ConfigError;

/// Contents of a `fuzzmatch.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version.
    #[serde(default = "defaults::version")]
    pub version: i64,

    /// Character that matches any single character.
    #[serde(default = "defaults::wildcard")]
    pub wildcard: String,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::version(),
            wildcard: defaults::wildcard(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Report 1-based start positions instead of 0-based.
    #[serde(default)]
    pub one_based: bool,
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse and validate config content; `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version != defaults::VERSION {
        return Err(ConfigError::UnsupportedVersion(config.version));
    }
    parse_wildcard(&config.wildcard)?;

    Ok(config)
}

/// Validate a wildcard setting, returning its byte.
pub fn parse_wildcard(value: &str) -> Result<u8, ConfigError> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(ConfigError::InvalidWildcard(value.to_string())),
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub wildcard: u8,
    pub format: OutputFormat,
    pub one_based: bool,
}

impl Settings {
    /// Layer command-line flags over a loaded config.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, ConfigError> {
        let wildcard = cli.wildcard.as_deref().unwrap_or(&config.wildcard);
        Ok(Self {
            wildcard: parse_wildcard(wildcard)?,
            format: cli.output.unwrap_or(config.output.format),
            one_based: cli.one_based || config.output.one_based,
        })
    }
}

/// Config for this run: the explicit path if given, otherwise the
/// discovered `fuzzmatch.toml`, otherwise defaults.
pub fn load_for(
    explicit: Option<&Path>,
    start_dir: &Path,
) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => crate::discovery::find_config(start_dir),
    };

    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok((load(&path)?, Some(path)))
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
