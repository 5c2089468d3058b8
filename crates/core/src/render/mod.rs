// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown report rendering for issue bundles.
//!
//! The report is assembled as a list of lines in a fixed order:
//!
//! 1. Title, Meta, Assumptions and Open Questions ([`meta`])
//! 2. Epics ([`epics`])
//! 3. Backlog Summary table ([`summary`])
//! 4. Issue Details grouped by epic ([`groups`], [`detail`])
//! 5. The bundle itself as pretty-printed JSON, when requested
//!
//! Rendering is a pure function of the bundle. The top-level shape is
//! checked before the first line is produced.

mod detail;
mod epics;
mod groups;
mod meta;
mod summary;

use serde_json::Value;

use crate::cell::{cell, cell_str, PLACEHOLDER};
use crate::error::Result;
use crate::ident::{
    sort_by_id, PrefixTable, EPIC_PREFIXES, ISSUE_PREFIXES, QUESTION_PREFIXES, STORY_PREFIXES,
};
use crate::issue::{TypeLabels, TYPE_LABELS};
use crate::shape::require_shape;

/// Formatting tables consulted while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTables {
    pub type_labels: TypeLabels,
    /// Global issue order (summary table, children).
    pub issue_prefixes: PrefixTable,
    /// Order of user stories within an epic group.
    pub story_prefixes: PrefixTable,
    pub epic_prefixes: PrefixTable,
    pub question_prefixes: PrefixTable,
    /// Title used when `meta.project` is missing or blank.
    pub untitled_project: &'static str,
}

pub const DEFAULT_TABLES: RenderTables = RenderTables {
    type_labels: TYPE_LABELS,
    issue_prefixes: ISSUE_PREFIXES,
    story_prefixes: STORY_PREFIXES,
    epic_prefixes: EPIC_PREFIXES,
    question_prefixes: QUESTION_PREFIXES,
    untitled_project: "TBD",
};

/// Per-call rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the input bundle as a fenced JSON block.
    pub embed_json: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { embed_json: true }
    }
}

/// Renders bundles with a fixed set of tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    tables: RenderTables,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(DEFAULT_TABLES)
    }
}

impl Renderer {
    pub const fn new(tables: RenderTables) -> Self {
        Renderer { tables }
    }

    pub fn tables(&self) -> &RenderTables {
        &self.tables
    }

    /// Render `bundle` to Markdown.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralError`](crate::StructuralError) if the bundle is
    /// not a mapping with `meta` (mapping), `epics` and `issues` (sequences).
    /// Nothing nested below those keys can make rendering fail.
    pub fn render(&self, bundle: &Value, options: &RenderOptions) -> Result<String> {
        let view = require_shape(bundle)?;
        let tables = &self.tables;
        let mut lines: Vec<String> = Vec::new();

        meta::render_title(&mut lines, view.meta, tables);
        lines.push(String::new());
        meta::render_meta(&mut lines, view.meta, tables);
        let epic_by_id = epics::render_epics(&mut lines, view.epics, tables);

        let issues = sort_by_id(
            view.issues.iter().filter(|issue| issue.is_object()),
            &tables.issue_prefixes,
        );
        summary::render_summary(&mut lines, &issues, tables);

        let children = groups::children_by_parent(&issues);
        lines.push(String::new());
        lines.push("## Issue Details".to_string());

        for group in groups::group_by_epic(&issues, tables) {
            lines.push(String::new());
            match group.epic_id {
                None => lines.push("### No Epic".to_string()),
                Some(epic_id) => {
                    let title = epic_by_id.get(epic_id).and_then(|epic| epic.get("title"));
                    // Escaped like every other cell value, so `E|1` prints as `E\|1`.
                    lines.push(format!("### {}: {}", cell_str(epic_id), cell(title)));
                }
            }
            for issue in groups::detail_order(&group.issues, &children, tables) {
                detail::render_issue(&mut lines, issue, tables);
            }
        }

        if options.embed_json {
            lines.push(String::new());
            lines.push("## Issue Bundle (JSON)".to_string());
            lines.push(String::new());
            lines.push("```json".to_string());
            lines.push(format!("{:#}", bundle));
            lines.push("```".to_string());
        }

        let text = lines.join("\n");
        Ok(format!("{}\n", text.trim_end()))
    }
}

/// Render `bundle` with the default tables.
pub fn render(bundle: &Value, options: &RenderOptions) -> Result<String> {
    Renderer::default().render(bundle, options)
}

/// Push a bulleted list of `items`, or a placeholder bullet when empty.
fn push_bullets(lines: &mut Vec<String>, indent: &str, items: &[Value]) {
    if items.is_empty() {
        lines.push(format!("{indent}- {PLACEHOLDER}"));
        return;
    }
    for item in items {
        lines.push(format!("{indent}- {}", cell(Some(item))));
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
