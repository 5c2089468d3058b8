// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ib-core operations.

use thiserror::Error;

/// A violation of the top-level bundle shape.
///
/// Rendering checks these before producing any text, so a caller that
/// receives one of these has no partial report to discard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("top-level JSON must be an object")]
    NotAnObject,

    #[error("missing required top-level key: {key}")]
    MissingKey { key: &'static str },

    #[error("'{key}' must be an {expected}")]
    WrongKind {
        key: &'static str,
        expected: &'static str,
    },
}

/// A specialized Result type for ib-core operations.
pub type Result<T> = std::result::Result<T, StructuralError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
