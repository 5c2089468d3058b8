// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use ib_core::StructuralError;
use thiserror::Error;

/// All possible errors that can occur while rendering a bundle from the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("{0}")]
    Structural(#[from] StructuralError),

    #[error("validation failed with {count} error(s)")]
    ValidationFailed { count: usize },

    #[error("config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Validation failures exit with 1; everything that prevents a report
    /// from being produced at all exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ValidationFailed { .. } => 1,
            Error::FileNotFound(_)
            | Error::Read { .. }
            | Error::InvalidJson(_)
            | Error::Structural(_)
            | Error::Config { .. }
            | Error::Io(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
