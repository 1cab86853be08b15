// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-line renderings of records for list output.

use sj_core::{color_name, Goal, Note, QueryContext, Record, Task};

use crate::colors::{self, codes};

/// Width of the goal progress bar in cells.
const BAR_WIDTH: usize = 10;

/// Records that can be printed as a list line.
pub trait ListLine: Record {
    fn line(&self, ctx: &QueryContext, color: bool) -> String;
}

fn tags_suffix(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = tags.iter().map(|t| format!("#{t}")).collect();
    format!("  {}", joined.join(" "))
}

/// Colored bullet for a palette color, or nothing.
fn swatch(color_value: Option<&str>, color: bool) -> String {
    let Some(value) = color_value else {
        return String::new();
    };
    match (color, colors::swatch(value)) {
        (true, Some(code)) => format!("{} ", colors::paint(code, "●")),
        _ => match color_name(value) {
            Some(name) => format!("({}) ", name.to_lowercase()),
            None => String::new(),
        },
    }
}

fn id_column(id: i64, color: bool) -> String {
    let id = format!("[{id}]");
    if color {
        colors::context(&id)
    } else {
        id
    }
}

/// `████░░░░░░ 40%`
pub fn progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent) * BAR_WIDTH + 50) / 100;
    format!(
        "{}{} {percent}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}

impl ListLine for Note {
    fn line(&self, _ctx: &QueryContext, color: bool) -> String {
        format!(
            "{} {}{}{}",
            id_column(self.id, color),
            swatch(self.color.as_deref(), color),
            self.title,
            tags_suffix(&self.tags)
        )
    }
}

impl ListLine for Task {
    fn line(&self, ctx: &QueryContext, color: bool) -> String {
        let check = if self.done { "[x]" } else { "[ ]" };
        let overdue = !self.done && self.due_date < ctx.today();
        let due = format!("due {}", self.due_date.format("%Y-%m-%d"));
        let due = match (overdue, color) {
            (true, true) => colors::paint(codes::ERROR, &format!("{due} (overdue)")),
            (true, false) => format!("{due} (overdue)"),
            (false, _) => due,
        };
        format!(
            "{} {check} {}{}  {due}{}",
            id_column(self.id, color),
            swatch(self.color.as_deref(), color),
            self.title,
            tags_suffix(&self.tags)
        )
    }
}

impl ListLine for Goal {
    fn line(&self, _ctx: &QueryContext, color: bool) -> String {
        let bar = progress_bar(self.progress.get());
        let bar = if color && self.progress.is_complete() {
            colors::paint(codes::SUCCESS, &bar)
        } else {
            bar
        };
        format!(
            "{} {}{}  {bar}",
            id_column(self.id, color),
            swatch(self.color.as_deref(), color),
            self.title
        )
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
