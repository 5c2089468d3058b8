// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use similar_asserts::assert_eq;

const CHECKOUT: &str = include_str!("../../../../tests/fixtures/checkout.json");
const CHECKOUT_MD: &str = include_str!("../../../../tests/fixtures/checkout.md");
const CHECKOUT_EMBEDDED_MD: &str = include_str!("../../../../tests/fixtures/checkout.embedded.md");

fn settings(embed_json: bool, validate: bool, strict: bool) -> Settings {
    Settings {
        embed_json,
        validate,
        strict,
    }
}

fn run_capture(text: &str, settings: &Settings) -> (Result<String>, String) {
    let mut diagnostics = Vec::new();
    let result = run_impl(text, settings, &mut diagnostics);
    (result, String::from_utf8(diagnostics).unwrap())
}

#[test]
fn renders_without_json() {
    let (result, diagnostics) = run_capture(CHECKOUT, &settings(false, false, false));
    assert_eq!(result.unwrap(), CHECKOUT_MD);
    assert_eq!(diagnostics, "");
}

#[test]
fn renders_with_json() {
    let (result, _) = run_capture(CHECKOUT, &settings(true, false, false));
    assert_eq!(result.unwrap(), CHECKOUT_EMBEDDED_MD);
}

#[test]
fn validation_warnings_do_not_block_rendering() {
    let (result, diagnostics) = run_capture(CHECKOUT, &settings(false, true, true));
    assert_eq!(result.unwrap(), CHECKOUT_MD);
    assert_eq!(
        diagnostics,
        "warning: issue TASK-1: estimate has no method\n"
    );
}

#[test]
fn validation_errors_block_rendering() {
    let text = r#"{"meta": {"project": "P", "generated_at": "2026-01-01T00:00:00Z"},
        "epics": [],
        "issues": [{"id": "US-1", "type": "user_story", "title": "", "epic_id": "E-9",
                    "acceptance_criteria": ["ok"]}]}"#;
    let (result, diagnostics) = run_capture(text, &settings(true, true, false));

    let err = result.unwrap_err();
    assert!(matches!(err, Error::ValidationFailed { count: 2 }), "{err:?}");
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        diagnostics,
        "error: issue US-1: title is required\n\
         error: issue US-1: epic_id 'E-9' does not match any epic\n"
    );
}

#[test]
fn validation_skipped_when_disabled() {
    let text = r#"{"meta": {}, "epics": [], "issues": [{"id": "nope"}]}"#;
    let (result, diagnostics) = run_capture(text, &settings(false, false, false));
    assert!(result.is_ok());
    assert_eq!(diagnostics, "");
}

#[test]
fn strict_reports_cycles() {
    let text = r#"{"meta": {"project": "P", "generated_at": "2026-01-01T00:00:00Z"},
        "epics": [],
        "issues": [
            {"id": "TASK-1", "type": "task", "title": "a", "blocked_by": ["TASK-2"]},
            {"id": "TASK-2", "type": "task", "title": "b", "blocked_by": ["TASK-1"]}
        ]}"#;

    let (lenient, _) = run_capture(text, &settings(false, true, false));
    assert!(lenient.is_ok());

    let (strict, diagnostics) = run_capture(text, &settings(false, true, true));
    assert_eq!(strict.unwrap_err().exit_code(), 1);
    assert!(diagnostics.contains("error: dependency cycle: TASK-1 -> TASK-2 -> TASK-1"));
}

#[test]
fn invalid_json_is_exit_two() {
    let (result, _) = run_capture("{not json", &settings(true, false, false));
    let err = result.unwrap_err();
    assert!(matches!(err, Error::InvalidJson(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn structural_error_is_exit_two() {
    let (result, _) = run_capture(r#"{"meta": {}, "epics": []}"#, &settings(true, false, false));
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "missing required top-level key: issues");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn structural_error_with_validation_reports_once_as_validation() {
    let (result, diagnostics) = run_capture("[]", &settings(true, true, false));
    assert_eq!(result.unwrap_err().exit_code(), 1);
    assert_eq!(diagnostics, "error: top-level JSON must be an object\n");
}

#[test]
fn write_report_to_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("out.md");
    write_report("# Issue Bundle — TBD\n", Some(&path)).unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# Issue Bundle — TBD\n"
    );
}

#[test]
fn write_report_to_missing_dir_is_io_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("no/such/dir/out.md");
    let err = write_report("x\n", Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.exit_code(), 2);
}
