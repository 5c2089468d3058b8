// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const CHECKOUT_JSON: &str = include_str!("../../../tests/fixtures/checkout.json");
pub const CHECKOUT_MD: &str = include_str!("../../../tests/fixtures/checkout.md");
pub const CHECKOUT_EMBEDDED_MD: &str = include_str!("../../../tests/fixtures/checkout.embedded.md");

/// `ibmd` with a clean environment: no user config, no colors, no timings.
pub fn ibmd(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ibmd");
    cmd.env_remove("IBMD_CONFIG")
        .env_remove("IBMD_LOG")
        .env_remove("IBMD_TIMINGS")
        .env("NO_COLOR", "1")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(home);
    cmd
}

/// Temp directory holding `name` with `contents`.
pub fn temp_with(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}

/// Temp directory holding the checkout fixture as `issue-bundle.json`.
pub fn checkout_dir() -> (TempDir, PathBuf) {
    temp_with("issue-bundle.json", CHECKOUT_JSON)
}
