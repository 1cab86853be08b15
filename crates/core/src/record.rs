// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record kinds and the traits shared by notes, tasks and goals.
//!
//! Each collection is served by the REST API under its own resource path.
//! The [`Record`] trait exposes the fields the query pipeline reads, so
//! search, filter and sort stay generic over the three kinds.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::query::NamedFilter;

/// Prefix reserved for color values; filter ids starting with it select by color.
pub const COLOR_PREFIX: &str = "bg-";

/// The color palette offered for new records: (display name, value).
pub const COLORS: [(&str, &str); 6] = [
    ("Blue", "bg-blue-100"),
    ("Green", "bg-green-100"),
    ("Yellow", "bg-yellow-100"),
    ("Purple", "bg-purple-100"),
    ("Pink", "bg-pink-100"),
    ("Orange", "bg-orange-100"),
];

/// Color assigned to new records when none is given.
pub const DEFAULT_COLOR: &str = "bg-blue-100";

/// Returns the palette name for a color value, if it is one of ours.
pub fn color_name(value: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(name, _)| *name)
}

/// Parses a color given either as a palette value (`bg-pink-100`) or a
/// palette name (`pink`).
pub fn parse_color(s: &str) -> Result<String> {
    let s = s.trim();
    if s.starts_with(COLOR_PREFIX) {
        return Ok(s.to_string());
    }
    COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, value)| value.to_string())
        .ok_or_else(|| Error::InvalidColor(s.to_string()))
}

/// The three record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Notes,
    Todos,
    Goals,
}

impl Kind {
    /// All kinds, in dashboard order.
    pub const ALL: [Kind; 3] = [Kind::Notes, Kind::Todos, Kind::Goals];

    /// Returns the string representation used in paths and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Notes => "notes",
            Kind::Todos => "todos",
            Kind::Goals => "goals",
        }
    }

    /// REST resource path for the collection, relative to the API root.
    pub fn path(&self) -> &'static str {
        match self {
            Kind::Notes => "/notes",
            Kind::Todos => "/todos",
            Kind::Goals => "/goals",
        }
    }

    /// Singular noun used in user-facing messages.
    pub fn singular(&self) -> &'static str {
        match self {
            Kind::Notes => "note",
            Kind::Todos => "task",
            Kind::Goals => "goal",
        }
    }

    /// Message shown when a view of this kind is empty.
    pub fn empty_state(&self) -> &'static str {
        match self {
            Kind::Notes => "No notes found",
            Kind::Todos => "No tasks found",
            Kind::Goals => "No goals found",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "notes" | "note" => Ok(Kind::Notes),
            "todos" | "todo" | "tasks" | "task" => Ok(Kind::Todos),
            "goals" | "goal" => Ok(Kind::Goals),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

/// A user-submitted payload lacking server-assigned fields.
pub trait Draft: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the first required field left empty, if any.
    ///
    /// Drafts with a missing required field are not submitted.
    fn missing_required(&self) -> Option<&'static str>;

    /// Checks the field limits enforced by the record store.
    fn validate(&self) -> Result<()>;
}

/// A stored record of one of the three kinds.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload used to create or fully replace this record.
    type Draft: Draft;
    /// Named predicates available for this kind.
    type Filter: NamedFilter<Record = Self>;

    const KIND: Kind;

    fn id(&self) -> i64;
    fn title(&self) -> &str;

    /// The free-text body: content, description or comment.
    fn body(&self) -> Option<&str>;

    fn tags(&self) -> &[String] {
        &[]
    }

    fn color(&self) -> Option<&str>;
    fn created_at(&self) -> Option<DateTime<Utc>>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;

    fn due_date(&self) -> Option<NaiveDate> {
        None
    }

    fn progress(&self) -> Option<u8> {
        None
    }

    fn is_done(&self) -> bool {
        false
    }

    /// Builds the draft that would recreate this record's editable fields.
    fn to_draft(&self) -> Self::Draft;

    /// Builds the record the server would return for `draft` under `id`.
    ///
    /// Timestamps are kept from `self`.
    fn with_draft(&self, draft: Self::Draft) -> Self;
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
