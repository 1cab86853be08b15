// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sj-core: Shared library for SJ Notes
//!
//! This crate provides the record types, the search/filter/sort pipeline
//! and list reordering used by both the sjn client and the sjd server.

pub mod entity;
pub mod error;
pub mod query;
pub mod record;
pub mod reorder;

pub use entity::{
    normalize_tags, parse_tags, Goal, GoalDraft, Note, NoteDraft, Progress, Task, TaskDraft,
};
pub use error::{Error, Result};
pub use query::{
    FilterKind, GoalFilter, NamedFilter, NoteFilter, Query, QueryContext, SearchResults, SortKind,
    TaskFilter,
};
pub use record::{color_name, parse_color, Draft, Kind, Record, COLORS, DEFAULT_COLOR};
pub use reorder::{reorder, DragSession};
