// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::help;
use clap::Parser;
use clap_complete::Shell;

/// Default bundle path when none is given.
pub const DEFAULT_PATH: &str = "issue-bundle.json";

/// Source name that reads the bundle from standard input.
pub const STDIN_SENTINEL: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "ibmd")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Render an issue bundle JSON file as human-readable Markdown (optionally embedding the JSON)"
)]
#[command(after_help = help::examples())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Path to the issue bundle, or '-' for stdin
    #[arg(default_value = DEFAULT_PATH, value_name = "PATH")]
    pub path: String,

    /// Do not embed the JSON at the end of the Markdown output
    #[arg(long = "no-json", conflicts_with = "json")]
    pub no_json: bool,

    /// Embed the JSON even if the config file disables it
    #[arg(long = "json")]
    pub json: bool,

    /// Validate the bundle before rendering
    #[arg(long)]
    pub validate: bool,

    /// Validate strictly (timestamp format and cycles); implies --validate
    #[arg(long)]
    pub strict: bool,

    /// Read settings from this TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the report to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Embed flag requested on the command line, if any.
    pub fn embed_override(&self) -> Option<bool> {
        if self.no_json {
            Some(false)
        } else if self.json {
            Some(true)
        } else {
            None
        }
    }

    /// Whether `path` names standard input.
    pub fn reads_stdin(&self) -> bool {
        self.path == STDIN_SENTINEL
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
