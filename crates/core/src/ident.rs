// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identity sort keys for `<PREFIX>-<digits>` identifiers.
//!
//! Issues, epics, and open questions are all ordered by the same rule: known
//! prefixes first in table order, then numerically within a prefix, with the
//! exact identifier breaking ties.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

// Hard-coded pattern, verified by the ident tests.
static ID_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^([A-Z]+)-([0-9]+)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Rank given to identifiers whose prefix is not in the table.
pub const UNRANKED: u32 = 99;

/// An immutable prefix → rank lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixTable {
    entries: &'static [(&'static str, u32)],
}

impl PrefixTable {
    pub const fn new(entries: &'static [(&'static str, u32)]) -> Self {
        PrefixTable { entries }
    }

    /// Rank of `prefix`, or [`UNRANKED`] if the table does not know it.
    pub fn rank_of(&self, prefix: &str) -> u32 {
        self.entries
            .iter()
            .find(|(p, _)| *p == prefix)
            .map_or(UNRANKED, |(_, rank)| *rank)
    }

    /// Iterate the known prefixes in table order.
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(p, _)| *p)
    }
}

/// Issue identifiers: user stories, then tasks, then bugs.
pub const ISSUE_PREFIXES: PrefixTable = PrefixTable::new(&[("US", 0), ("TASK", 1), ("BUG", 2)]);

/// Ordering used for user stories inside an epic group.
pub const STORY_PREFIXES: PrefixTable = PrefixTable::new(&[("US", 0)]);

pub const EPIC_PREFIXES: PrefixTable = PrefixTable::new(&[("E", 0)]);

pub const QUESTION_PREFIXES: PrefixTable = PrefixTable::new(&[("Q", 0)]);

/// Composite `(rank, number, text)` ordering key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IdKey {
    pub rank: u32,
    pub number: u64,
    pub text: String,
}

/// Split an identifier into its prefix and number if it has the
/// `<PREFIX>-<digits>` shape. Numbers too large for `u64` saturate.
pub fn parse_id(id: &str) -> Option<(&str, u64)> {
    let caps = ID_RE.captures(id)?;
    let prefix = caps.get(1)?.as_str();
    let number = caps
        .get(2)
        .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(u64::MAX));
    Some((prefix, number))
}

/// Key for a string identifier.
pub fn str_key(id: &str, table: &PrefixTable) -> IdKey {
    match parse_id(id) {
        Some((prefix, number)) => IdKey {
            rank: table.rank_of(prefix),
            number,
            text: id.to_string(),
        },
        None => IdKey {
            rank: UNRANKED,
            number: 0,
            text: id.to_string(),
        },
    }
}

/// Key for an arbitrary identity value. Non-strings sort after every
/// ranked identifier, by their JSON text.
pub fn id_key(value: Option<&Value>, table: &PrefixTable) -> IdKey {
    match value {
        Some(Value::String(id)) => str_key(id, table),
        other => IdKey {
            rank: UNRANKED,
            number: 0,
            text: other.map_or_else(|| Value::Null.to_string(), Value::to_string),
        },
    }
}

/// Key for ordering children beneath a story: the rank of whatever text
/// precedes the first `-`, then the full identity key.
pub fn child_key(value: Option<&Value>, table: &PrefixTable) -> (u32, IdKey) {
    let text = match value {
        Some(Value::String(id)) => id.clone(),
        other => other.map_or_else(|| Value::Null.to_string(), Value::to_string),
    };
    let head = text.split('-').next().unwrap_or_default();
    (table.rank_of(head), id_key(value, table))
}

/// Stable sort of entities by the identity key of their `id` field.
pub fn sort_by_id<'a, I>(items: I, table: &PrefixTable) -> Vec<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    sort_by_key_fn(items, |item| id_key(item.get("id"), table))
}

/// Stable sort of entities by a caller-supplied key.
pub fn sort_by_key_fn<'a, I, K, F>(items: I, key: F) -> Vec<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
    K: Ord,
    F: Fn(&'a Value) -> K,
{
    let mut keyed: Vec<(K, &'a Value)> = items.into_iter().map(|v| (key(v), v)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, v)| v).collect()
}

/// Compare two string identifiers under `table`.
pub fn compare_ids(a: &str, b: &str, table: &PrefixTable) -> Ordering {
    str_key(a, table).cmp(&str_key(b, table))
}

#[cfg(test)]
#[path = "ident_tests.rs"]
mod tests;
