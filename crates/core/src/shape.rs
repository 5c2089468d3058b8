// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level bundle shape checks.

use serde_json::Value;

use crate::error::{Result, StructuralError};

/// Keys every bundle must carry, in the order they are checked.
pub const REQUIRED_KEYS: [&str; 3] = ["meta", "epics", "issues"];

/// Borrowed view of a bundle whose top-level shape has been checked.
///
/// Nested values are not inspected: an epic that is a number, or an issue
/// with a list for a title, is still a valid element here.
#[derive(Debug, Clone, Copy)]
pub struct BundleView<'a> {
    /// The `meta` mapping.
    pub meta: &'a Value,
    pub epics: &'a [Value],
    pub issues: &'a [Value],
}

/// Check that `bundle` is a mapping with `meta`, `epics` and `issues` of the
/// expected kinds. All three keys are checked for presence before any kind
/// check, so a bundle missing `issues` reports that even if `meta` is also
/// malformed.
pub fn require_shape(bundle: &Value) -> Result<BundleView<'_>> {
    let object = bundle.as_object().ok_or(StructuralError::NotAnObject)?;

    let get = |key: &'static str| object.get(key).ok_or(StructuralError::MissingKey { key });
    for key in REQUIRED_KEYS {
        get(key)?;
    }

    let meta = get("meta")?;
    if !meta.is_object() {
        return Err(StructuralError::WrongKind {
            key: "meta",
            expected: "object",
        });
    }
    let epics = get("epics")?
        .as_array()
        .ok_or(StructuralError::WrongKind {
            key: "epics",
            expected: "array",
        })?;
    let issues = get("issues")?
        .as_array()
        .ok_or(StructuralError::WrongKind {
            key: "issues",
            expected: "array",
        })?;

    Ok(BundleView {
        meta,
        epics,
        issues,
    })
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
