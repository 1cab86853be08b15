// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the list and example colors.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(color(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let rows = [
        ("list", "List notes, tasks or goals"),
        ("search", "Search every collection"),
        ("new", "Create a note, task or goal"),
        ("edit", "Change a record's fields"),
        ("done", "Toggle a task's done flag"),
        ("progress", "Set a goal's progress"),
        ("delete", "Delete a record"),
        ("move", "Move a record within a list"),
        ("tab", "Show or switch the active tab"),
        ("status", "Check the server and offline cache"),
        ("sync", "Refresh the offline cache and replay queued writes"),
    ];

    let mut out = colors::header("Commands:");
    for (name, about) in rows {
        out.push_str(&format!("\n  {}{}{}", colors::literal(name), " ".repeat(10 - name.len()), about));
    }
    out
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  sjn new notes \"Groceries\" --tags home    Create a note
  sjn new todos \"Pay rent\" --date 2026-03-01  Create a task
  sjn list todos --filter overdue           List overdue tasks
  sjn done <id>                             Toggle a task
  sjn search rent                           Search everything",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
