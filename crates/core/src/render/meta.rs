// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;

use super::{push_bullets, RenderTables};
use crate::cell::{cell, cell_str, PLACEHOLDER};
use crate::field::FieldExt;
use crate::ident::sort_by_id;

/// Title line: `# Issue Bundle — <project>`.
pub(super) fn render_title(lines: &mut Vec<String>, meta: &Value, tables: &RenderTables) {
    let project = match meta.str_field("project") {
        Some(project) if !project.trim().is_empty() => cell_str(project),
        _ => tables.untitled_project.to_string(),
    };
    lines.push(format!("# Issue Bundle — {project}"));
}

/// Meta, Assumptions and Open Questions sections.
pub(super) fn render_meta(lines: &mut Vec<String>, meta: &Value, tables: &RenderTables) {
    lines.push("## Meta".to_string());
    lines.push(format!("- **Source:** {}", cell(meta.get("source"))));
    lines.push(format!("- **Generated:** {}", cell(meta.get("generated_at"))));

    lines.push(String::new());
    lines.push("## Assumptions".to_string());
    push_bullets(lines, "", meta.list_field("assumptions"));

    lines.push(String::new());
    lines.push("## Open Questions".to_string());
    let questions = meta.list_field("open_questions");
    if questions.is_empty() {
        lines.push(format!("- {PLACEHOLDER}"));
        return;
    }
    // A non-empty list with no mappings in it renders no bullets at all.
    for question in sort_by_id(
        questions.iter().filter(|q| q.is_object()),
        &tables.question_prefixes,
    ) {
        lines.push(format!(
            "- **{}** ({}, owner: {}): {}",
            cell(question.get("id")),
            cell(question.get("type")),
            cell(question.get("owner")),
            cell(question.get("question")),
        ));
        if let Some(context) = question.str_field("context") {
            if !context.trim().is_empty() {
                lines.push(format!("  - Context: {}", cell_str(context)));
            }
        }
    }
}
