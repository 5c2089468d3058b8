// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading and parsing bundle text.

use std::fs;
use std::io::{self, Read};

use serde_json::Value;

use crate::cli::STDIN_SENTINEL;
use crate::error::{Error, Result};

/// Read the bundle text named by `source` (`-` for stdin).
pub fn load(source: &str) -> Result<String> {
    if source == STDIN_SENTINEL {
        return read_all(io::stdin().lock(), source);
    }
    fs::read_to_string(source).map_err(|e| read_error(source, e))
}

/// Read everything from `reader` as UTF-8 text.
pub fn read_all(mut reader: impl Read, source: &str) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| read_error(source, e))?;
    Ok(text)
}

fn read_error(source: &str, e: io::Error) -> Error {
    match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(source.to_string()),
        _ => Error::Read {
            path: source.to_string(),
            source: e,
        },
    }
}

/// Parse bundle text as JSON, keeping object key order.
pub fn parse(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
