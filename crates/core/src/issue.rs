// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue variants.
//!
//! The `type` field of an issue selects one of three known variants. Any
//! other value, including a missing or non-string one, is [`IssueKind::Other`]
//! and keeps the raw value for display.

use serde_json::Value;

use crate::cell::{cell, cell_str};

/// Classification of an issue by its `type` tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IssueKind<'a> {
    UserStory,
    Task,
    Bug,
    /// Unrecognized or missing tag, with the raw value.
    Other(Option<&'a Value>),
}

impl<'a> IssueKind<'a> {
    /// Classify an issue mapping by its `type` field.
    pub fn of(issue: &'a Value) -> Self {
        let tag = issue.get("type");
        match tag.and_then(Value::as_str) {
            Some("user_story") => IssueKind::UserStory,
            Some("task") => IssueKind::Task,
            Some("bug") => IssueKind::Bug,
            _ => IssueKind::Other(tag),
        }
    }

    /// Returns the tag used in bundle documents, if this is a known variant.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            IssueKind::UserStory => Some("user_story"),
            IssueKind::Task => Some("task"),
            IssueKind::Bug => Some("bug"),
            IssueKind::Other(_) => None,
        }
    }

    pub fn is_user_story(&self) -> bool {
        matches!(self, IssueKind::UserStory)
    }

    /// Display name for reports. Unknown tags pass through the cell formatter.
    pub fn display_name(&self, labels: &TypeLabels) -> String {
        match self {
            IssueKind::UserStory => cell_str(labels.user_story),
            IssueKind::Task => cell_str(labels.task),
            IssueKind::Bug => cell_str(labels.bug),
            IssueKind::Other(raw) => cell(*raw),
        }
    }
}

/// Display names for the known issue variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeLabels {
    pub user_story: &'static str,
    pub task: &'static str,
    pub bug: &'static str,
}

pub const TYPE_LABELS: TypeLabels = TypeLabels {
    user_story: "User Story",
    task: "Task",
    bug: "Bug",
};

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
