// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loosely-typed access to bundle fields.
//!
//! Bundle entities are plain JSON values with no enforced schema below the
//! top level. Every read goes through [`FieldExt`], which checks the kind of
//! the stored value and hands back an optional typed view. A field of the
//! wrong kind reads exactly like a missing one, which is what lets the
//! renderer substitute placeholders instead of failing.

use serde_json::Value;

/// Kind-checked field accessors for JSON values.
pub trait FieldExt {
    /// The value stored under `key`, with JSON `null` treated as absent.
    fn field(&self, key: &str) -> Option<&Value>;

    /// The string stored under `key`, if it is a string.
    fn str_field(&self, key: &str) -> Option<&str>;

    /// The sequence stored under `key`; empty when absent or not a sequence.
    fn list_field(&self, key: &str) -> &[Value];

    /// Truthiness: null, false, zero, and empty strings or containers are falsy.
    fn is_truthy(&self) -> bool;
}

impl FieldExt for Value {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn list_field(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

/// The plain-text form of a value.
///
/// Strings are taken as-is (unquoted), sequences become their non-null
/// elements joined with `", "`, and everything else uses its JSON form.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(item_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => item_text(other),
    }
}

fn item_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
