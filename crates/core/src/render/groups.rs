// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Epic grouping and parent/child placement for Issue Details.
//!
//! Nesting is one level deep: only the direct children of a user story are
//! placed under it. A child whose parent is missing, or is not a user
//! story, does not appear in Issue Details. Parent links are not checked
//! for cycles; a cycle simply means neither issue is shown as a child of
//! a story.

use std::collections::HashMap;

use serde_json::Value;

use super::RenderTables;
use crate::field::FieldExt;
use crate::ident::{child_key, compare_ids, sort_by_id, sort_by_key_fn};
use crate::issue::IssueKind;

/// Issues sharing an `epic_id`. `None` collects issues with no string epic id.
#[derive(Debug)]
pub(super) struct EpicGroup<'a> {
    pub epic_id: Option<&'a str>,
    pub issues: Vec<&'a Value>,
}

/// Index issues by their non-empty string `parent_id`, keeping input order.
pub(super) fn children_by_parent<'a>(
    issues: &[&'a Value],
) -> HashMap<&'a str, Vec<&'a Value>> {
    let mut children: HashMap<&str, Vec<&Value>> = HashMap::new();
    for &issue in issues {
        if let Some(parent_id) = issue.str_field("parent_id").filter(|p| !p.is_empty()) {
            children.entry(parent_id).or_default().push(issue);
        }
    }
    children
}

/// Group issues by `epic_id`, ordered by epic identity with the no-epic
/// group last. Issue order inside a group follows the input order.
pub(super) fn group_by_epic<'a>(
    issues: &[&'a Value],
    tables: &RenderTables,
) -> Vec<EpicGroup<'a>> {
    let mut by_epic: HashMap<Option<&str>, Vec<&Value>> = HashMap::new();
    for &issue in issues {
        by_epic.entry(issue.str_field("epic_id")).or_default().push(issue);
    }

    let mut epic_ids: Vec<&str> = by_epic.keys().copied().flatten().collect();
    epic_ids.sort_by(|a, b| compare_ids(a, b, &tables.epic_prefixes));

    let mut groups: Vec<EpicGroup> = epic_ids
        .into_iter()
        .map(|epic_id| EpicGroup {
            epic_id: Some(epic_id),
            issues: by_epic.remove(&Some(epic_id)).unwrap_or_default(),
        })
        .collect();
    if let Some(issues) = by_epic.remove(&None) {
        groups.push(EpicGroup {
            epic_id: None,
            issues,
        });
    }
    groups
}

/// The order issues of one group are detailed in: each user story followed
/// by its direct children, then the remaining top-level issues.
pub(super) fn detail_order<'a>(
    group: &[&'a Value],
    children: &HashMap<&str, Vec<&'a Value>>,
    tables: &RenderTables,
) -> Vec<&'a Value> {
    let stories = sort_by_id(
        group
            .iter()
            .copied()
            .filter(|issue| IssueKind::of(issue).is_user_story()),
        &tables.story_prefixes,
    );

    let mut order = Vec::with_capacity(group.len());
    for story in stories {
        order.push(story);
        let Some(story_id) = story.str_field("id") else {
            continue;
        };
        if let Some(kids) = children.get(story_id) {
            order.extend(sort_by_key_fn(kids.iter().copied(), |child| {
                child_key(child.get("id"), &tables.issue_prefixes)
            }));
        }
    }

    order.extend(group.iter().copied().filter(|issue| {
        !IssueKind::of(issue).is_user_story()
            && !issue.get("parent_id").is_some_and(FieldExt::is_truthy)
    }));
    order
}

#[cfg(test)]
#[path = "groups_tests.rs"]
mod tests;
