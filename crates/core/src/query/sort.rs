// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stable ordering of record views.

use std::cmp::Ordering;
use std::fmt;

use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Case-insensitive title.
    Title,
    Created,
    /// Last update, falling back to creation.
    Updated,
    DueDate,
    Progress,
    /// Done before not done when descending.
    Status,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Created => "created",
            SortKey::Updated => "updated",
            SortKey::DueDate => "date",
            SortKey::Progress => "progress",
            SortKey::Status => "status",
        }
    }

    fn from_field(field: &str) -> Option<Self> {
        match field {
            "title" => Some(SortKey::Title),
            "created" => Some(SortKey::Created),
            "updated" => Some(SortKey::Updated),
            "date" => Some(SortKey::DueDate),
            "progress" => Some(SortKey::Progress),
            "status" => Some(SortKey::Status),
            _ => None,
        }
    }

    fn compare<R: Record>(self, a: &R, b: &R) -> Ordering {
        match self {
            SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
            // None < Some, so missing timestamps sort as oldest.
            SortKey::Created => a.created_at().cmp(&b.created_at()),
            SortKey::Updated => updated_or_created(a).cmp(&updated_or_created(b)),
            SortKey::DueDate => match (a.due_date(), b.due_date()) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => Ordering::Equal,
            },
            SortKey::Progress => a.progress().unwrap_or(0).cmp(&b.progress().unwrap_or(0)),
            SortKey::Status => a.is_done().cmp(&b.is_done()),
        }
    }
}

fn updated_or_created<R: Record>(r: &R) -> Option<chrono::DateTime<chrono::Utc>> {
    r.updated_at().or_else(|| r.created_at())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// How a view orders its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    /// Keep the collection's own order.
    Unsorted,
    By { key: SortKey, direction: Direction },
}

impl Default for SortKind {
    /// Newest first.
    fn default() -> Self {
        SortKind::By {
            key: SortKey::Created,
            direction: Direction::Desc,
        }
    }
}

impl SortKind {
    /// Parses `<field>-<asc|desc>`.
    ///
    /// Anything other than `asc` after the field means descending, so a bare
    /// field sorts descending. Unknown fields yield [`SortKind::Unsorted`].
    pub fn parse(spec: &str) -> Self {
        let mut parts = spec.trim().splitn(2, '-');
        let field = parts.next().unwrap_or_default();
        let direction = match parts.next() {
            Some("asc") => Direction::Asc,
            _ => Direction::Desc,
        };
        match SortKey::from_field(field) {
            Some(key) => SortKind::By { key, direction },
            None => SortKind::Unsorted,
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKind::Unsorted => write!(f, "none"),
            SortKind::By { key, direction } => {
                write!(f, "{}-{}", key.as_str(), direction.as_str())
            }
        }
    }
}

/// Returns `items` ordered by `kind`. The sort is stable.
pub fn sort<R: Record>(items: &[R], kind: &SortKind) -> Vec<R> {
    let mut sorted = items.to_vec();
    if let SortKind::By { key, direction } = *kind {
        sorted.sort_by(|a, b| {
            let ord = key.compare(a, b);
            match direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        });
    }
    sorted
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
