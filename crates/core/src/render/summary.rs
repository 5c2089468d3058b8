// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;

use super::RenderTables;
use crate::cell::cell;
use crate::issue::IssueKind;

/// Column headers of the Backlog Summary table.
pub(super) const SUMMARY_HEADER: &str =
    "| ID | Type | P | Status | Epic | Parent | WS | Title | Blocked by |";
pub(super) const SUMMARY_SEPARATOR: &str = "|---|---|---|---|---|---|---|---|---|";

/// Backlog Summary: one row per issue, in the order given.
pub(super) fn render_summary(lines: &mut Vec<String>, issues: &[&Value], tables: &RenderTables) {
    lines.push(String::new());
    lines.push("## Backlog Summary".to_string());
    lines.push(String::new());
    lines.push(SUMMARY_HEADER.to_string());
    lines.push(SUMMARY_SEPARATOR.to_string());

    for issue in issues {
        lines.push(summary_row(issue, tables));
    }
}

fn summary_row(issue: &Value, tables: &RenderTables) -> String {
    let columns = [
        cell(issue.get("id")),
        IssueKind::of(issue).display_name(&tables.type_labels),
        cell(issue.get("priority")),
        cell(issue.get("status")),
        cell(issue.get("epic_id")),
        cell(issue.get("parent_id")),
        cell(issue.get("workstream")),
        cell(issue.get("title")),
        cell(issue.get("blocked_by")),
    ];
    format!("| {} |", columns.join(" | "))
}
