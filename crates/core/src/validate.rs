// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bundle validation.
//!
//! Unlike rendering, which tolerates anything below the top level,
//! validation reports every field that does not follow the bundle
//! conventions. Problems are collected, never raised: the caller decides
//! whether errors abort the run.
//!
//! Strict mode additionally requires an RFC 3339 `meta.generated_at` and
//! rejects `blocked_by` and `parent_id` cycles.

use std::collections::{HashMap, HashSet};

use chrono::DateTime;
use serde_json::Value;

use crate::field::FieldExt;
use crate::ident::{parse_id, ISSUE_PREFIXES, UNRANKED};
use crate::issue::IssueKind;
use crate::shape::require_shape;

/// Errors and warnings found in a bundle, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Returns true if no errors were found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// The parts of an issue the cross-reference checks need.
struct IssueRef<'a> {
    id: &'a str,
    parent_id: Option<&'a str>,
    blocked_by: Vec<&'a str>,
}

/// Validate `bundle`, optionally with the strict checks.
pub fn validate(bundle: &Value, strict: bool) -> ValidationReport {
    let mut report = ValidationReport::default();
    let view = match require_shape(bundle) {
        Ok(view) => view,
        Err(e) => {
            report.error(e.to_string());
            return report;
        }
    };

    check_meta(&mut report, view.meta, strict);
    let epic_ids = check_epics(&mut report, view.epics);
    let issues = check_issues(&mut report, view.issues, &epic_ids);

    if strict {
        let blockers: Vec<(&str, Vec<&str>)> = issues
            .iter()
            .map(|i| (i.id, i.blocked_by.clone()))
            .collect();
        for cycle in find_cycles(&blockers) {
            report.error(format!("dependency cycle: {}", cycle.join(" -> ")));
        }

        let parents: Vec<(&str, Vec<&str>)> = issues
            .iter()
            .map(|i| (i.id, i.parent_id.into_iter().collect()))
            .collect();
        for cycle in find_cycles(&parents) {
            report.error(format!("parent cycle: {}", cycle.join(" -> ")));
        }
    }

    report
}

fn check_meta(report: &mut ValidationReport, meta: &Value, strict: bool) {
    if meta.str_field("project").is_none_or(|p| p.trim().is_empty()) {
        report.warning("meta.project is missing; the report title will be TBD");
    }

    match meta.field("generated_at") {
        None => report.warning("meta.generated_at is missing"),
        Some(Value::String(ts)) => {
            if strict && DateTime::parse_from_rfc3339(ts).is_err() {
                report.error(format!(
                    "meta.generated_at '{ts}' is not an RFC 3339 timestamp"
                ));
            }
        }
        Some(_) => report.error("meta.generated_at must be a string"),
    }

    if meta.field("assumptions").is_some_and(|a| !a.is_array()) {
        report.error("meta.assumptions must be an array");
    }

    match meta.field("open_questions") {
        None => {}
        Some(Value::Array(questions)) => {
            for (i, question) in questions.iter().enumerate() {
                if !question.is_object() {
                    report.error(format!("meta.open_questions[{i}] must be an object"));
                    continue;
                }
                match question.str_field("id") {
                    None => report.warning(format!("meta.open_questions[{i}] has no id")),
                    Some(id) if !matches!(parse_id(id), Some(("Q", _))) => report.warning(
                        format!("meta.open_questions[{i}].id '{id}' should look like Q-<n>"),
                    ),
                    Some(_) => {}
                }
                if question.str_field("question").is_none_or(|q| q.trim().is_empty()) {
                    report.error(format!("meta.open_questions[{i}].question is required"));
                }
            }
        }
        Some(_) => report.error("meta.open_questions must be an array"),
    }
}

fn check_epics<'a>(report: &mut ValidationReport, epics: &'a [Value]) -> HashSet<&'a str> {
    let mut ids = HashSet::new();
    for (i, epic) in epics.iter().enumerate() {
        if !epic.is_object() {
            report.error(format!("epics[{i}] must be an object"));
            continue;
        }
        let label = match epic.str_field("id") {
            None => {
                report.error(format!("epics[{i}].id is required"));
                format!("epics[{i}]")
            }
            Some(id) => {
                if !matches!(parse_id(id), Some(("E", _))) {
                    report.error(format!("epics[{i}].id '{id}' must look like E-<n>"));
                }
                if !ids.insert(id) {
                    report.error(format!("duplicate epic id: {id}"));
                }
                format!("epic {id}")
            }
        };
        if epic.str_field("title").is_none_or(|t| t.trim().is_empty()) {
            report.error(format!("{label}: title is required"));
        }
        for key in ["exit_criteria", "non_goals"] {
            if epic.field(key).is_some_and(|v| !v.is_array()) {
                report.error(format!("{label}: {key} must be an array"));
            }
        }
    }
    ids
}

fn check_issues<'a>(
    report: &mut ValidationReport,
    issues: &'a [Value],
    epic_ids: &HashSet<&str>,
) -> Vec<IssueRef<'a>> {
    let known_ids: HashSet<&str> = issues.iter().filter_map(|i| i.str_field("id")).collect();
    let mut seen = HashSet::new();
    let mut refs = Vec::new();

    for (i, issue) in issues.iter().enumerate() {
        if !issue.is_object() {
            report.error(format!("issues[{i}] must be an object"));
            continue;
        }
        let id = issue.str_field("id");
        let label = id.map_or_else(|| format!("issues[{i}]"), |id| format!("issue {id}"));
        let kind = IssueKind::of(issue);

        if kind.as_str().is_none() {
            report.error(format!(
                "{label}: type must be one of user_story, task, bug"
            ));
        }

        match id {
            None => report.error(format!("issues[{i}].id is required")),
            Some(id) => {
                check_issue_id(report, &label, id, kind);
                if !seen.insert(id) {
                    report.error(format!("duplicate issue id: {id}"));
                }
            }
        }

        if issue.str_field("title").is_none_or(|t| t.trim().is_empty()) {
            report.error(format!("{label}: title is required"));
        }

        match issue.field("epic_id") {
            None => {}
            Some(Value::String(epic_id)) => {
                if !epic_ids.contains(epic_id.as_str()) {
                    report.error(format!(
                        "{label}: epic_id '{epic_id}' does not match any epic"
                    ));
                }
            }
            Some(_) => report.error(format!("{label}: epic_id must be a string")),
        }

        let parent_id = match issue.field("parent_id") {
            None => None,
            Some(Value::String(parent_id)) => {
                if Some(parent_id.as_str()) == id {
                    report.error(format!("{label}: parent_id refers to the issue itself"));
                } else if !known_ids.contains(parent_id.as_str()) {
                    report.error(format!(
                        "{label}: parent_id '{parent_id}' does not match any issue"
                    ));
                }
                Some(parent_id.as_str())
            }
            Some(_) => {
                report.error(format!("{label}: parent_id must be a string"));
                None
            }
        };

        let blocked_by = check_blocked_by(report, &label, issue, id, &known_ids);

        match issue.field("estimate") {
            None => {}
            Some(estimate) if estimate.is_object() => {
                if estimate.field("method").is_none() {
                    report.warning(format!("{label}: estimate has no method"));
                }
            }
            Some(_) => report.error(format!("{label}: estimate must be an object")),
        }

        match kind {
            IssueKind::UserStory if issue.list_field("acceptance_criteria").is_empty() => {
                report.warning(format!("{label}: user story has no acceptance criteria"));
            }
            IssueKind::Bug if issue.list_field("steps_to_reproduce").is_empty() => {
                report.warning(format!("{label}: bug has no steps to reproduce"));
            }
            _ => {}
        }

        if let Some(id) = id {
            refs.push(IssueRef {
                id,
                parent_id,
                blocked_by,
            });
        }
    }
    refs
}

fn check_issue_id(report: &mut ValidationReport, label: &str, id: &str, kind: IssueKind<'_>) {
    let Some((prefix, _)) = parse_id(id) else {
        report.error(format!("{label}: id must look like <PREFIX>-<n>"));
        return;
    };
    if ISSUE_PREFIXES.rank_of(prefix) == UNRANKED {
        let known: Vec<String> = ISSUE_PREFIXES.prefixes().map(|p| format!("{p}-")).collect();
        report.error(format!(
            "{label}: id prefix must be one of {}",
            known.join(", ")
        ));
        return;
    }
    let expected = match kind {
        IssueKind::UserStory => "US",
        IssueKind::Task => "TASK",
        IssueKind::Bug => "BUG",
        IssueKind::Other(_) => return,
    };
    if prefix != expected {
        report.error(format!(
            "{label}: id prefix {prefix} does not match type {}",
            kind.as_str().unwrap_or_default()
        ));
    }
}

fn check_blocked_by<'a>(
    report: &mut ValidationReport,
    label: &str,
    issue: &'a Value,
    id: Option<&str>,
    known_ids: &HashSet<&str>,
) -> Vec<&'a str> {
    let mut blockers = Vec::new();
    match issue.field("blocked_by") {
        None => {}
        Some(Value::Array(items)) => {
            for item in items {
                let Some(blocker) = item.as_str() else {
                    report.error(format!("{label}: blocked_by entries must be strings"));
                    continue;
                };
                if Some(blocker) == id {
                    report.error(format!("{label}: blocked_by refers to the issue itself"));
                } else if !known_ids.contains(blocker) {
                    report.error(format!(
                        "{label}: blocked_by '{blocker}' does not match any issue"
                    ));
                } else {
                    blockers.push(blocker);
                }
            }
        }
        Some(_) => report.error(format!("{label}: blocked_by must be an array")),
    }
    blockers
}

/// Find cycles in a directed graph given as `(node, successors)` pairs.
///
/// Each cycle is reported once, as the path from its first visited node
/// back to itself. Self-edges are skipped; they are reported separately.
fn find_cycles<'a>(graph: &[(&'a str, Vec<&'a str>)]) -> Vec<Vec<&'a str>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Visiting,
        Done,
    }

    let edges: HashMap<&str, &[&str]> = graph
        .iter()
        .map(|(node, next)| (*node, next.as_slice()))
        .collect();
    let mut marks = HashMap::new();
    let mut cycles = Vec::new();

    // Explicit stack of (node, index of the next successor to try); the
    // nodes on the stack are the current path.
    let mut stack: Vec<(&str, usize)> = Vec::new();
    for &(root, _) in graph {
        if marks.contains_key(root) {
            continue;
        }
        marks.insert(root, Mark::Visiting);
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, index) = *top;
            top.1 += 1;
            let successors = edges.get(node).copied().unwrap_or_default();
            let Some(&next) = successors.get(index) else {
                marks.insert(node, Mark::Done);
                stack.pop();
                continue;
            };
            if next == node {
                continue;
            }
            match marks.get(next) {
                Some(Mark::Visiting) => {
                    let start = stack.iter().position(|(n, _)| *n == next).unwrap_or_default();
                    let mut cycle: Vec<&str> = stack[start..].iter().map(|(n, _)| *n).collect();
                    cycle.push(next);
                    cycles.push(cycle);
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next, Mark::Visiting);
                    stack.push((next, 0));
                }
            }
        }
    }
    cycles
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
