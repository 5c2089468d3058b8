// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Examples shown after options in main help.
pub fn examples() -> String {
    colors::examples(
        "\
Examples:
  ibmd                              Render ./issue-bundle.json to stdout
  ibmd bundle.json --no-json        Render without the embedded JSON
  ibmd - < bundle.json              Read the bundle from stdin
  ibmd bundle.json --strict         Validate strictly, then render
  ibmd bundle.json -o backlog.md    Write the report to a file

Configuration:
  --config <file>                   Explicit config file
  IBMD_CONFIG                       Config file from the environment
  .ibmd.toml                        Project config in the working directory",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
