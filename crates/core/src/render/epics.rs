// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;

use serde_json::Value;

use super::{push_bullets, RenderTables};
use crate::cell::{cell, PLACEHOLDER};
use crate::field::FieldExt;
use crate::ident::sort_by_id;

/// Epics section. Returns the id → epic index used to title the Issue
/// Details groups; when two epics share an id the later one wins.
pub(super) fn render_epics<'a>(
    lines: &mut Vec<String>,
    epics: &'a [Value],
    tables: &RenderTables,
) -> HashMap<&'a str, &'a Value> {
    lines.push(String::new());
    lines.push("## Epics".to_string());

    let mut epic_by_id = HashMap::new();
    let sorted = sort_by_id(epics.iter().filter(|e| e.is_object()), &tables.epic_prefixes);
    if sorted.is_empty() {
        lines.push(format!("- {PLACEHOLDER}"));
        return epic_by_id;
    }

    for epic in sorted {
        if let Some(id) = epic.str_field("id") {
            epic_by_id.insert(id, epic);
        }
        lines.push(format!(
            "### {}: {}",
            cell(epic.get("id")),
            cell(epic.get("title"))
        ));
        lines.push(format!("- **Objective:** {}", cell(epic.get("objective"))));
        lines.push("- **Exit criteria:**".to_string());
        push_bullets(lines, "  ", epic.list_field("exit_criteria"));

        let non_goals = epic.list_field("non_goals");
        if !non_goals.is_empty() {
            lines.push("- **Non-goals:**".to_string());
            push_bullets(lines, "  ", non_goals);
        }
        lines.push(String::new());
    }

    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    epic_by_id
}
