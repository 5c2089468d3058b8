// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ibmd - render issue bundles as Markdown.
//!
//! This crate is the driver around [`ib_core`]: it parses arguments, reads
//! configuration, loads and parses the bundle, optionally validates it, and
//! writes the rendered report.
//!
//! # Main Components
//!
//! - [`Cli`] - command-line arguments
//! - [`Config`] - settings from `.ibmd.toml` and friends
//! - [`Error`] - driver errors and their exit codes
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = ibmd::Cli::parse_from(["ibmd", "bundle.json", "--no-json"]);
//! ibmd::run(&cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod input;
pub mod logging;
pub mod timings;

pub use cli::{Cli, DEFAULT_PATH, STDIN_SENTINEL};
pub use config::{Config, ConfigSource, Settings};
pub use error::{Error, Result};

/// Execute the CLI. This is the main entry point for library users
/// and provides a testable way to run without process execution.
pub fn run(cli: &Cli) -> Result<()> {
    match cli.completions {
        Some(shell) => commands::completion::run(shell),
        None => commands::render::run(cli),
    }
}
