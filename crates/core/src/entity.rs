// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notes, tasks and goals as exchanged with the REST API.
//!
//! Wire field names follow the API (`date` for a task's due date); ids and
//! timestamps are assigned by the server.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::{GoalFilter, NoteFilter, TaskFilter};
use crate::record::{Draft, Kind, Record};

pub const TITLE_MAX_LEN: usize = 255;
pub const CONTENT_MAX_LEN: usize = 5000;
pub const COMMENT_MAX_LEN: usize = 2000;
pub const COLOR_MAX_LEN: usize = 50;

/// Splits a comma-separated tag string into trimmed, non-empty tags.
///
/// Duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims every tag and drops the empty ones.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Goal completion percentage, always within 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Progress(u8);

impl Progress {
    pub const MAX: Progress = Progress(100);

    /// Clamps `value` into 0..=100.
    pub fn new(value: i64) -> Self {
        Progress(value.clamp(0, 100) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl From<i64> for Progress {
    fn from(value: i64) -> Self {
        Progress::new(value)
    }
}

impl From<Progress> for i64 {
    fn from(p: Progress) -> Self {
        i64::from(p.0)
    }
}

fn check_title(title: &str) -> Result<()> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err(Error::validation("title", "must not be empty"));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(Error::validation(
            "title",
            format!("must be at most {TITLE_MAX_LEN} characters"),
        ));
    }
    Ok(())
}

fn check_len(field: &'static str, value: Option<&str>, max: usize) -> Result<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(Error::validation(
            field,
            format!("must be at most {max} characters"),
        )),
        _ => Ok(()),
    }
}

fn missing_title(title: &str) -> Option<&'static str> {
    if title.trim().is_empty() {
        Some("title")
    } else {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>) -> Self {
        NoteDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_tags(mut self, tags: &[String]) -> Self {
        self.tags = normalize_tags(tags);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Draft for NoteDraft {
    fn missing_required(&self) -> Option<&'static str> {
        missing_title(&self.title)
    }

    fn validate(&self) -> Result<()> {
        check_title(&self.title)?;
        check_len("content", self.content.as_deref(), CONTENT_MAX_LEN)?;
        check_len("color", self.color.as_deref(), COLOR_MAX_LEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Note {
    type Draft = NoteDraft;
    type Filter = NoteFilter;

    const KIND: Kind = Kind::Notes;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            color: self.color.clone(),
        }
    }

    fn with_draft(&self, draft: NoteDraft) -> Self {
        Note {
            id: self.id,
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            color: draft.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tasks
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        TaskDraft {
            title: title.into(),
            description: None,
            due_date,
            tags: Vec::new(),
            color: None,
            done: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: &[String]) -> Self {
        self.tags = normalize_tags(tags);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}

impl Draft for TaskDraft {
    fn missing_required(&self) -> Option<&'static str> {
        missing_title(&self.title)
    }

    fn validate(&self) -> Result<()> {
        check_title(&self.title)?;
        check_len("description", self.description.as_deref(), CONTENT_MAX_LEN)?;
        check_len("color", self.color.as_deref(), COLOR_MAX_LEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "date")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Task {
    type Draft = TaskDraft;
    type Filter = TaskFilter;

    const KIND: Kind = Kind::Todos;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date,
            tags: self.tags.clone(),
            color: self.color.clone(),
            done: self.done,
        }
    }

    fn with_draft(&self, draft: TaskDraft) -> Self {
        Task {
            id: self.id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            tags: draft.tags,
            color: draft.color,
            done: draft.done,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Goals
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub color: Option<String>,
}

impl GoalDraft {
    pub fn new(title: impl Into<String>) -> Self {
        GoalDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets progress, clamped into 0..=100.
    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Progress::new(progress);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Draft for GoalDraft {
    fn missing_required(&self) -> Option<&'static str> {
        missing_title(&self.title)
    }

    fn validate(&self) -> Result<()> {
        check_title(&self.title)?;
        check_len("comment", self.comment.as_deref(), COMMENT_MAX_LEN)?;
        check_len("color", self.color.as_deref(), COLOR_MAX_LEN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Goal {
    type Draft = GoalDraft;
    type Filter = GoalFilter;

    const KIND: Kind = Kind::Goals;

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn progress(&self) -> Option<u8> {
        Some(self.progress.get())
    }

    fn to_draft(&self) -> GoalDraft {
        GoalDraft {
            title: self.title.clone(),
            comment: self.comment.clone(),
            progress: self.progress,
            color: self.color.clone(),
        }
    }

    fn with_draft(&self, draft: GoalDraft) -> Self {
        Goal {
            id: self.id,
            title: draft.title,
            comment: draft.comment,
            progress: draft.progress,
            color: draft.color,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
