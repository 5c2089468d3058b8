// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inline and table-cell text formatting.
//!
//! Every field value that reaches the report passes through [`cell`] or
//! [`cell_str`]. Line breaks become spaces, surrounding whitespace is
//! trimmed, empty text becomes [`PLACEHOLDER`], and pipes are escaped so a
//! value can never open a new table column.

use serde_json::Value;

use crate::field::scalar_text;

/// Substituted for missing or empty display values.
pub const PLACEHOLDER: &str = "—";

/// Format an optional value for inline or table display.
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(v) => cell_str(&scalar_text(v)),
    }
}

/// Format raw text for inline or table display.
pub fn cell_str(text: &str) -> String {
    let single_line = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
    let trimmed = single_line.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER.to_string();
    }
    trimmed.replace('|', "\\|")
}

#[cfg(test)]
#[path = "cell_tests.rs"]
mod tests;
