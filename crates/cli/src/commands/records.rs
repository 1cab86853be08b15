// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that change records: new, edit, done, progress, delete, move.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use sj_core::{
    parse_color, parse_tags, Goal, GoalDraft, Kind, Note, NoteDraft, Progress, Task, TaskDraft,
    DEFAULT_COLOR,
};

use crate::autosave::SaveOutcome;
use crate::cli::{FieldArgs, OutputFormat, ViewArgs};
use crate::dashboard::{AssumeYes, Confirm, Dashboard, Tracked};
use crate::display::ListLine;
use crate::error::{Error, Result};
use crate::store::Transport;

use super::hydrate;
use super::list::{apply_view, print_visible};

const UNSORTED: &str = "none";

/// Asks on stderr and reads the answer from stdin.
pub struct Prompt;

impl Confirm for Prompt {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::ValidationSkipped { field: "date" });
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| sj_core::Error::InvalidDate(value.to_string()).into())
}

fn ignored(kind: Kind, flag: &str) {
    tracing::warn!(%kind, flag, "flag does not apply, ignoring");
}

/// Records whose drafts can be built from command-line fields.
pub trait FromFields: Tracked + ListLine {
    /// Draft for a new record titled `title`.
    fn draft(title: String, fields: &FieldArgs) -> Result<Self::Draft>;

    /// Overwrites the fields given on the command line.
    fn apply(draft: &mut Self::Draft, title: Option<String>, fields: &FieldArgs) -> Result<()>;
}

impl FromFields for Note {
    fn draft(title: String, fields: &FieldArgs) -> Result<NoteDraft> {
        let mut draft = NoteDraft::new(title).with_color(DEFAULT_COLOR);
        Self::apply(&mut draft, None, fields)?;
        Ok(draft)
    }

    fn apply(draft: &mut NoteDraft, title: Option<String>, fields: &FieldArgs) -> Result<()> {
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(body) = &fields.body {
            draft.content = Some(body.clone());
        }
        if let Some(tags) = &fields.tags {
            draft.tags = parse_tags(tags);
        }
        if let Some(color) = &fields.color {
            draft.color = Some(parse_color(color)?);
        }
        if fields.date.is_some() {
            ignored(Kind::Notes, "--date");
        }
        if fields.progress.is_some() {
            ignored(Kind::Notes, "--progress");
        }
        Ok(())
    }
}

impl FromFields for Task {
    fn draft(title: String, fields: &FieldArgs) -> Result<TaskDraft> {
        let date = parse_date(fields.date.as_deref().unwrap_or_default())?;
        let mut draft = TaskDraft::new(title, date).with_color(DEFAULT_COLOR);
        Self::apply(&mut draft, None, fields)?;
        Ok(draft)
    }

    fn apply(draft: &mut TaskDraft, title: Option<String>, fields: &FieldArgs) -> Result<()> {
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(body) = &fields.body {
            draft.description = Some(body.clone());
        }
        if let Some(date) = &fields.date {
            draft.due_date = parse_date(date)?;
        }
        if let Some(tags) = &fields.tags {
            draft.tags = parse_tags(tags);
        }
        if let Some(color) = &fields.color {
            draft.color = Some(parse_color(color)?);
        }
        if fields.progress.is_some() {
            ignored(Kind::Todos, "--progress");
        }
        Ok(())
    }
}

impl FromFields for Goal {
    fn draft(title: String, fields: &FieldArgs) -> Result<GoalDraft> {
        let mut draft = GoalDraft::new(title).with_color(DEFAULT_COLOR);
        Self::apply(&mut draft, None, fields)?;
        Ok(draft)
    }

    fn apply(draft: &mut GoalDraft, title: Option<String>, fields: &FieldArgs) -> Result<()> {
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(body) = &fields.body {
            draft.comment = Some(body.clone());
        }
        if let Some(progress) = fields.progress {
            draft.progress = Progress::new(progress);
        }
        if let Some(color) = &fields.color {
            draft.color = Some(parse_color(color)?);
        }
        if fields.date.is_some() {
            ignored(Kind::Goals, "--date");
        }
        if fields.tags.is_some() {
            ignored(Kind::Goals, "--tags");
        }
        Ok(())
    }
}

fn print_record<R: ListLine, T: Transport + 'static>(
    dashboard: &Dashboard<T>,
    record: &R,
    format: OutputFormat,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(record)?)?,
        OutputFormat::Text => writeln!(out, "{}", record.line(&dashboard.context(), color))?,
    }
    Ok(())
}

/// Creates a record of kind `R`.
pub async fn new<R: FromFields, T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    title: String,
    fields: &FieldArgs,
    format: OutputFormat,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let draft = R::draft(title, fields)?;
    let record = dashboard.create::<R>(&draft).await?;
    print_record(dashboard, &record, format, color, out)
}

/// Edits record `id` through an auto-save session and saves immediately.
pub async fn edit<R: FromFields, T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    id: i64,
    title: Option<String>,
    fields: &FieldArgs,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    hydrate(dashboard, err).await?;
    let session = dashboard.edit_session::<R>(id)?;
    let mut draft = session
        .buffer()
        .ok_or(Error::NotFound { kind: R::KIND.singular(), id })?;
    R::apply(&mut draft, title, fields)?;

    session.observe(draft.clone());
    let outcome = session.save_now().await;
    session.end();
    dashboard.record_save_outcome(&outcome);

    match outcome {
        SaveOutcome::Saved => {
            dashboard.apply_saved::<R>(id, draft);
            if let Some(record) = dashboard.find::<R>(id) {
                writeln!(out, "{}", record.line(&dashboard.context(), color))?;
            }
            Ok(())
        }
        SaveOutcome::Unchanged => {
            writeln!(out, "No changes")?;
            Ok(())
        }
        SaveOutcome::Failed(reason) => Err(Error::SaveFailed(reason)),
    }
}

/// Toggles a task's done flag.
pub async fn done<T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    id: i64,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    hydrate(dashboard, err).await?;
    let task = dashboard.toggle_done(id).await?;
    print_record(dashboard, &task, OutputFormat::Text, color, out)
}

/// Sets a goal's progress.
pub async fn progress<T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    id: i64,
    value: i64,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    hydrate(dashboard, err).await?;
    let goal = dashboard.set_progress(id, value).await?;
    print_record(dashboard, &goal, OutputFormat::Text, color, out)
}

/// Deletes record `id`, asking first unless `yes` is set.
pub async fn delete<R: Tracked, T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    id: i64,
    yes: bool,
    err: &mut dyn Write,
) -> Result<()> {
    hydrate(dashboard, err).await?;
    if yes {
        dashboard.delete::<R>(id, &AssumeYes).await
    } else {
        dashboard.delete::<R>(id, &Prompt).await
    }
}

/// Moves the displayed item at position `from` to `to` (both 1-based) and
/// prints the resulting list.
///
/// Without `--sort` the list is shown in collection order, since a sorted
/// view would put the item straight back.
#[allow(clippy::too_many_arguments)]
pub async fn move_item<R: Tracked + ListLine, T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    from: usize,
    to: usize,
    view: &ViewArgs,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    hydrate(dashboard, err).await?;
    dashboard.set_sort::<R>(UNSORTED);
    apply_view::<R, T>(dashboard, view)?;

    let len = dashboard.visible::<R>().len();
    let index = |position: usize| {
        position
            .checked_sub(1)
            .ok_or(sj_core::Error::IndexOutOfRange { index: position, len })
    };
    let (from, to) = (index(from)?, index(to)?);

    if !dashboard.move_item::<R>(from, to)? {
        writeln!(out, "Nothing to move")?;
        return Ok(());
    }
    print_visible::<R, T>(dashboard, OutputFormat::Text, color, out)
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
