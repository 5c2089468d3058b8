// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use serde_json::json;
use yare::parameterized;

fn valid_bundle() -> Value {
    json!({
        "meta": {
            "project": "Demo",
            "generated_at": "2026-01-15T10:00:00Z",
            "assumptions": ["Team of three"],
            "open_questions": [{"id": "Q-1", "question": "Scope?"}],
        },
        "epics": [{"id": "E-1", "title": "Core", "exit_criteria": ["Ships"]}],
        "issues": [
            {"id": "US-1", "type": "user_story", "title": "Story", "epic_id": "E-1",
             "acceptance_criteria": ["Works"]},
            {"id": "TASK-1", "type": "task", "title": "Task", "parent_id": "US-1",
             "blocked_by": ["BUG-1"], "estimate": {"method": "points", "value": 2}},
            {"id": "BUG-1", "type": "bug", "title": "Bug", "steps_to_reproduce": ["Click"]},
        ]
    })
}

fn errors_for(bundle: &Value) -> Vec<String> {
    validate(bundle, false).errors
}

fn has_error(report: &ValidationReport, needle: &str) -> bool {
    report.errors.iter().any(|e| e.contains(needle))
}

#[test]
fn test_valid_bundle_has_no_errors_or_warnings() {
    let report = validate(&valid_bundle(), true);
    assert!(report.is_valid(), "errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
}

#[test]
fn test_structural_error_short_circuits() {
    let report = validate(&json!({"meta": {}, "epics": []}), false);
    assert_eq!(report.errors, vec!["missing required top-level key: issues"]);
    assert!(report.warnings.is_empty());
}

#[parameterized(
    bad_type = { "/issues/0/type", json!("epic"), "type must be one of" },
    missing_title = { "/issues/0/title", json!("  "), "title is required" },
    unknown_epic = { "/issues/0/epic_id", json!("E-9"), "epic_id 'E-9' does not match any epic" },
    epic_not_string = { "/issues/0/epic_id", json!(1), "epic_id must be a string" },
    bad_prefix = { "/issues/1/id", json!("STORY-1"), "id prefix must be one of US-, TASK-, BUG-" },
    malformed_id = { "/issues/1/id", json!("TASK1"), "id must look like <PREFIX>-<n>" },
    prefix_mismatch = { "/issues/2/id", json!("TASK-9"), "id prefix TASK does not match type bug" },
    unknown_parent = { "/issues/1/parent_id", json!("US-7"), "parent_id 'US-7' does not match any issue" },
    self_parent = { "/issues/1/parent_id", json!("TASK-1"), "parent_id refers to the issue itself" },
    unknown_blocker = { "/issues/1/blocked_by", json!(["BUG-5"]), "blocked_by 'BUG-5' does not match any issue" },
    self_blocker = { "/issues/1/blocked_by", json!(["TASK-1"]), "blocked_by refers to the issue itself" },
    blocker_not_list = { "/issues/1/blocked_by", json!("BUG-1"), "blocked_by must be an array" },
    blocker_not_string = { "/issues/1/blocked_by", json!([3]), "blocked_by entries must be strings" },
    estimate_not_map = { "/issues/1/estimate", json!(5), "estimate must be an object" },
    epic_bad_id = { "/epics/0/id", json!("EPIC-1"), "must look like E-<n>" },
    epic_no_title = { "/epics/0/title", json!(null), "epic E-1: title is required" },
    epic_exit_not_list = { "/epics/0/exit_criteria", json!("done"), "exit_criteria must be an array" },
    assumptions_not_list = { "/meta/assumptions", json!("one"), "meta.assumptions must be an array" },
    questions_not_list = { "/meta/open_questions", json!({}), "meta.open_questions must be an array" },
    question_text_missing = { "/meta/open_questions/0/question", json!(""), "open_questions[0].question is required" },
    generated_not_string = { "/meta/generated_at", json!(20260115), "generated_at must be a string" },
)]
fn test_field_errors(pointer: &str, value: Value, needle: &str) {
    let mut bundle = valid_bundle();
    *bundle.pointer_mut(pointer).unwrap() = value;
    let report = validate(&bundle, false);
    assert!(has_error(&report, needle), "expected '{needle}' in {:?}", report.errors);
}

#[test]
fn test_duplicate_ids() {
    let mut bundle = valid_bundle();
    bundle["issues"][2]["id"] = json!("TASK-1");
    bundle["issues"][2]["type"] = json!("task");
    bundle["epics"] = json!([{"id": "E-1", "title": "A"}, {"id": "E-1", "title": "B"}]);
    let errors = errors_for(&bundle);
    assert!(errors.iter().any(|e| e == "duplicate issue id: TASK-1"));
    assert!(errors.iter().any(|e| e == "duplicate epic id: E-1"));
}

#[test]
fn test_non_object_entries() {
    let mut bundle = valid_bundle();
    bundle["epics"] = json!(["E-1"]);
    bundle["issues"] = json!([null]);
    let errors = errors_for(&bundle);
    assert!(errors.contains(&"epics[0] must be an object".to_string()));
    assert!(errors.contains(&"issues[0] must be an object".to_string()));
}

#[test]
fn test_missing_issue_id_uses_index_label() {
    let mut bundle = valid_bundle();
    bundle["issues"][0].as_object_mut().unwrap().remove("id");
    let errors = errors_for(&bundle);
    assert!(errors.contains(&"issues[0].id is required".to_string()));
}

#[test]
fn test_warnings() {
    let mut bundle = valid_bundle();
    bundle["meta"] = json!({"open_questions": [{"question": "Why?"}, {"id": "X", "question": "How?"}]});
    bundle["issues"][0]["acceptance_criteria"] = json!([]);
    bundle["issues"][2].as_object_mut().unwrap().remove("steps_to_reproduce");
    bundle["issues"][1]["estimate"] = json!({"value": 3});
    let report = validate(&bundle, false);
    assert!(report.is_valid(), "errors: {:?}", report.errors);
    let expected = [
        "meta.project is missing",
        "meta.generated_at is missing",
        "open_questions[0] has no id",
        "open_questions[1].id 'X' should look like Q-<n>",
        "issue US-1: user story has no acceptance criteria",
        "issue TASK-1: estimate has no method",
        "issue BUG-1: bug has no steps to reproduce",
    ];
    for needle in expected {
        assert!(
            report.warnings.iter().any(|w| w.contains(needle)),
            "missing warning '{needle}' in {:?}",
            report.warnings
        );
    }
}

#[parameterized(
    rfc3339_utc = { "2026-01-15T10:00:00Z", true },
    rfc3339_offset = { "2026-01-15T10:00:00+02:00", true },
    fractional = { "2026-01-15T10:00:00.123Z", true },
    date_only = { "2026-01-15", false },
    words = { "yesterday", false },
)]
fn test_strict_timestamp(ts: &str, ok: bool) {
    let mut bundle = valid_bundle();
    bundle["meta"]["generated_at"] = json!(ts);
    assert_eq!(validate(&bundle, true).is_valid(), ok);
    assert!(validate(&bundle, false).is_valid());
}

#[test]
fn test_strict_detects_dependency_cycle() {
    let mut bundle = valid_bundle();
    bundle["issues"][2]["blocked_by"] = json!(["TASK-1"]);
    assert!(validate(&bundle, false).is_valid());

    let report = validate(&bundle, true);
    assert_eq!(
        report.errors,
        vec!["dependency cycle: TASK-1 -> BUG-1 -> TASK-1"]
    );
}

#[test]
fn test_strict_detects_parent_cycle() {
    let mut bundle = valid_bundle();
    bundle["issues"][0]["parent_id"] = json!("TASK-1");
    let report = validate(&bundle, true);
    assert!(has_error(&report, "parent cycle: US-1 -> TASK-1 -> US-1"));
    assert!(!has_error(&validate(&bundle, false), "cycle"));
}

#[test]
fn test_find_cycles_reports_each_cycle_once() {
    let graph = vec![
        ("A", vec!["B"]),
        ("B", vec!["C"]),
        ("C", vec!["A", "C"]),
        ("D", vec!["A"]),
    ];
    let cycles = find_cycles(&graph);
    assert_eq!(cycles, vec![vec!["A", "B", "C", "A"]]);
}

#[test]
fn test_find_cycles_acyclic() {
    let graph = vec![("A", vec!["B", "C"]), ("B", vec!["C"]), ("C", vec![])];
    assert!(find_cycles(&graph).is_empty());
}

#[test]
fn test_find_cycles_long_chain_closed_into_loop() {
    const N: usize = 100_000;
    let ids: Vec<String> = (0..N).map(|i| format!("TASK-{i}")).collect();
    let graph: Vec<(&str, Vec<&str>)> = (0..N)
        .map(|i| (ids[i].as_str(), vec![ids[(i + 1) % N].as_str()]))
        .collect();

    let cycles = find_cycles(&graph);
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), N + 1);
    assert_eq!(cycles[0].first(), Some(&"TASK-0"));
    assert_eq!(cycles[0].last(), Some(&"TASK-0"));
}

#[test]
fn test_strict_handles_long_dependency_chain() {
    const N: usize = 100_000;
    let issues: Vec<Value> = (1..=N)
        .map(|i| {
            let blocked_by: Vec<String> = if i < N {
                vec![format!("TASK-{}", i + 1)]
            } else {
                vec![]
            };
            json!({"id": format!("TASK-{i}"), "type": "task", "title": "Step",
                   "blocked_by": blocked_by, "parent_id": (i > 1).then(|| format!("TASK-{}", i - 1))})
        })
        .collect();
    let bundle = json!({
        "meta": {"project": "Chain", "generated_at": "2026-01-15T10:00:00Z"},
        "epics": [],
        "issues": issues,
    });

    let report = validate(&bundle, true);
    assert!(report.is_valid(), "{:?}", report.errors.first());
    assert!(report.warnings.is_empty());
}
