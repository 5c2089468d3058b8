// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-issue detail blocks.

use serde_json::Value;

use super::{push_bullets, RenderTables};
use crate::cell::{cell, cell_str, PLACEHOLDER};
use crate::field::{scalar_text, FieldExt};
use crate::issue::IssueKind;

/// What a bulleted section shows when its list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WhenEmpty {
    Placeholder,
    Omit,
}

/// Render one issue: the common block, its variant section, and a
/// trailing blank line.
pub(super) fn render_issue(lines: &mut Vec<String>, issue: &Value, tables: &RenderTables) {
    let kind = IssueKind::of(issue);
    render_common(lines, issue, kind, tables);
    match kind {
        IssueKind::UserStory => render_user_story(lines, issue),
        IssueKind::Task => render_task(lines, issue),
        IssueKind::Bug => render_bug(lines, issue),
        IssueKind::Other(_) => {}
    }
    lines.push(String::new());
}

fn render_common(
    lines: &mut Vec<String>,
    issue: &Value,
    kind: IssueKind<'_>,
    tables: &RenderTables,
) {
    lines.push(format!(
        "#### {}: {}",
        cell(issue.get("id")),
        cell(issue.get("title"))
    ));
    lines.push(format!(
        "- **Type:** {}  **Priority:** {}  **Status:** {}  **Estimate:** {}",
        kind.display_name(&tables.type_labels),
        cell(issue.get("priority")),
        cell(issue.get("status")),
        cell_str(&format_estimate(issue.get("estimate"))),
    ));
    lines.push(format!(
        "- **Epic:** {}  **Parent:** {}  **Workstream:** {}",
        cell(issue.get("epic_id")),
        cell(issue.get("parent_id")),
        cell(issue.get("workstream")),
    ));
    lines.push(format!("- **Labels:** {}", cell(issue.get("labels"))));
    lines.push(format!("- **Blocked by:** {}", cell(issue.get("blocked_by"))));
    lines.push(String::new());
    lines.push("**Description**".to_string());
    lines.push(cell(issue.get("description")));
}

fn render_user_story(lines: &mut Vec<String>, issue: &Value) {
    text_section(lines, "Story", issue.get("story"));
    text_section(lines, "Value", issue.get("value"));
    list_section(
        lines,
        "Acceptance Criteria",
        issue,
        "acceptance_criteria",
        WhenEmpty::Placeholder,
    );
    list_section(
        lines,
        "Definition of Done",
        issue,
        "definition_of_done",
        WhenEmpty::Omit,
    );
}

fn render_task(lines: &mut Vec<String>, issue: &Value) {
    text_section(lines, "Task Kind", issue.get("task_kind"));
    text_section(lines, "Deliverable", issue.get("deliverable"));
    text_section(lines, "Verification", issue.get("verification"));
    list_section(
        lines,
        "Acceptance Criteria",
        issue,
        "acceptance_criteria",
        WhenEmpty::Omit,
    );
    list_section(
        lines,
        "Definition of Done",
        issue,
        "definition_of_done",
        WhenEmpty::Omit,
    );
}

fn render_bug(lines: &mut Vec<String>, issue: &Value) {
    text_section(lines, "Severity", issue.get("severity"));
    text_section(lines, "Environment", issue.get("environment"));
    list_section(
        lines,
        "Steps to Reproduce",
        issue,
        "steps_to_reproduce",
        WhenEmpty::Placeholder,
    );
    text_section(lines, "Expected", issue.get("expected"));
    text_section(lines, "Actual", issue.get("actual"));
    list_section(
        lines,
        "Acceptance Criteria",
        issue,
        "acceptance_criteria",
        WhenEmpty::Placeholder,
    );
    list_section(
        lines,
        "Definition of Done",
        issue,
        "definition_of_done",
        WhenEmpty::Omit,
    );
}

fn text_section(lines: &mut Vec<String>, label: &str, value: Option<&Value>) {
    lines.push(String::new());
    lines.push(format!("**{label}**"));
    lines.push(cell(value));
}

fn list_section(
    lines: &mut Vec<String>,
    label: &str,
    issue: &Value,
    key: &str,
    when_empty: WhenEmpty,
) {
    let items = issue.list_field(key);
    if items.is_empty() && when_empty == WhenEmpty::Omit {
        return;
    }
    lines.push(String::new());
    lines.push(format!("**{label}**"));
    push_bullets(lines, "", items);
}

/// Estimate text: `method value`, `method` alone when there is no value,
/// or `unknown` for the unknown method whatever its value.
pub(super) fn format_estimate(estimate: Option<&Value>) -> String {
    let Some(estimate) = estimate.filter(|e| e.is_object()) else {
        return PLACEHOLDER.to_string();
    };
    let Some(method) = estimate.field("method") else {
        return PLACEHOLDER.to_string();
    };
    if method.as_str() == Some("unknown") {
        return "unknown".to_string();
    }
    let method = scalar_text(method);
    match estimate.field("value") {
        Some(value) => format!("{} {}", method, scalar_text(value)),
        None => method,
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
