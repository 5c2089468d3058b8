// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

pub fn run(shell: Shell) -> Result<()> {
    run_impl(shell, &mut io::stdout().lock())
}

pub(crate) fn run_impl(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ibmd", out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
