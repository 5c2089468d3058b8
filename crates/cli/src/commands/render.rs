// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ib_core::{render, validate, RenderOptions, ValidationReport};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, Settings};
use crate::error::{Error, Result};
use crate::input;
use crate::time_phase;

pub fn run(cli: &Cli) -> Result<()> {
    let (config, source) = time_phase!("config", Config::discover(cli.config.as_deref()))?;
    match source.path() {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file, using defaults"),
    }
    let settings = Settings::resolve(&config, cli);

    let text = time_phase!("load", input::load(&cli.path))?;
    debug!(source = %cli.path, bytes = text.len(), "loaded bundle");

    let markdown = run_impl(&text, &settings, &mut io::stderr().lock())?;
    time_phase!("write", write_report(&markdown, cli.output.as_deref()))
}

/// Parse, optionally validate, and render bundle text.
///
/// Validator findings are written to `diagnostics` as `warning: ` and
/// `error: ` lines. Nothing is rendered when validation fails.
pub(crate) fn run_impl(
    text: &str,
    settings: &Settings,
    diagnostics: &mut impl Write,
) -> Result<String> {
    let bundle = time_phase!("parse", input::parse(text))?;

    if settings.validate {
        let report = time_phase!("validate", validate(&bundle, settings.strict));
        debug!(
            strict = settings.strict,
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated bundle"
        );
        print_report(&report, diagnostics)?;
        if !report.is_valid() {
            return Err(Error::ValidationFailed {
                count: report.errors.len(),
            });
        }
    }

    let options = RenderOptions {
        embed_json: settings.embed_json,
    };
    let markdown = time_phase!("render", render(&bundle, &options))?;
    debug!(
        embed_json = options.embed_json,
        bytes = markdown.len(),
        "rendered report"
    );
    Ok(markdown)
}

fn print_report(report: &ValidationReport, out: &mut impl Write) -> Result<()> {
    for warning in &report.warnings {
        writeln!(out, "warning: {}", warning)?;
    }
    for error in &report.errors {
        writeln!(out, "error: {}", error)?;
    }
    Ok(())
}

fn write_report(markdown: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, markdown)?;
            debug!(path = %path.display(), "wrote report");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markdown.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
