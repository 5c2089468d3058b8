// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Filter directives come from `IBMD_LOG` (e.g. `IBMD_LOG=ibmd=debug`),
//! falling back to [`DEFAULT_FILTER`]. Stdout only ever carries the report.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from a directive string, falling back to the default
/// when it is absent or does not parse.
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = filter_from(env::log_filter().as_deref());
    let ansi = std::io::stderr().is_terminal() && !env::no_color();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
