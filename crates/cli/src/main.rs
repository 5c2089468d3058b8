// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use ibmd::Cli;

fn main() {
    let cli = Cli::parse();
    ibmd::logging::init();
    if let Err(e) = ibmd::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
