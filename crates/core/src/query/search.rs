// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case-insensitive substring search across record fields.

use crate::record::Record;

/// Returns the records matching `query`, in input order.
///
/// A blank query returns the input unchanged.
pub fn search<R: Record>(items: &[R], query: &str) -> Vec<R> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(*item, &needle))
        .cloned()
        .collect()
}

/// Checks one record against an already lower-cased needle.
///
/// Title, body, every tag and the due-date text are considered.
pub fn matches_query<R: Record>(item: &R, needle: &str) -> bool {
    if item.title().to_lowercase().contains(needle) {
        return true;
    }

    if item
        .body()
        .is_some_and(|body| body.to_lowercase().contains(needle))
    {
        return true;
    }

    if item
        .tags()
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
    {
        return true;
    }

    item.due_date()
        .is_some_and(|date| date.format("%Y-%m-%d").to_string().contains(needle))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
