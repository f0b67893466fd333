// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "fuzzmatch.toml";

/// Only supported config schema version.
pub const VERSION: i64 = 1;

/// Default wildcard character.
pub const WILDCARD: &str = "?";

pub fn version() -> i64 {
    VERSION
}

pub fn wildcard() -> String {
    WILDCARD.to_string()
}
