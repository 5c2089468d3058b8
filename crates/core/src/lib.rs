// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ib-core: Issue bundle rendering and validation.
//!
//! An issue bundle is a JSON document with `meta`, `epics` and `issues`.
//! This crate turns one into a Markdown report ([`render`]) and checks it
//! against the bundle conventions ([`validate`]). Both are pure functions of
//! the parsed document; reading and parsing input is left to the caller.
//!
//! ```rust,ignore
//! use ib_core::{render, RenderOptions};
//!
//! let bundle: serde_json::Value = serde_json::from_str(&text)?;
//! let markdown = render(&bundle, &RenderOptions { embed_json: false })?;
//! ```

pub mod cell;
pub mod error;
pub mod field;
pub mod ident;
pub mod issue;
pub mod render;
pub mod shape;
pub mod validate;

pub use error::{Result, StructuralError};
pub use field::FieldExt;
pub use issue::{IssueKind, TypeLabels};
pub use render::{render, RenderOptions, RenderTables, Renderer, DEFAULT_TABLES};
pub use shape::{require_shape, BundleView};
pub use validate::{validate, ValidationReport};
