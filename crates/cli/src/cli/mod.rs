// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sj_core::Kind;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Record collection named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    #[value(alias = "note")]
    Notes,
    #[value(aliases = ["todo", "tasks", "task"])]
    Todos,
    #[value(alias = "goal")]
    Goals,
}

impl From<KindArg> for Kind {
    fn from(arg: KindArg) -> Kind {
        match arg {
            KindArg::Notes => Kind::Notes,
            KindArg::Todos => Kind::Todos,
            KindArg::Goals => Kind::Goals,
        }
    }
}

/// Search, filter and sort flags shared by `list` and `move`.
#[derive(Args, Clone, Debug, Default)]
pub struct ViewArgs {
    /// Filter id (all, pending, overdue, tagged, bg-pink-100, ...)
    #[arg(long, short)]
    pub filter: Option<String>,

    /// Sort spec such as created-desc, title-asc, date-asc, status
    #[arg(long, short)]
    pub sort: Option<String>,

    /// Only show records matching this text
    #[arg(long)]
    pub search: Option<String>,
}

/// Editable fields shared by `new` and `edit`.
#[derive(Args, Clone, Debug, Default)]
pub struct FieldArgs {
    /// Content of a note, description of a task or comment of a goal
    #[arg(long, short, visible_aliases = ["content", "description", "comment"])]
    pub body: Option<String>,

    /// Tags, comma-separated (notes and tasks)
    #[arg(long, short)]
    pub tags: Option<String>,

    /// Color by name (pink) or value (bg-pink-100)
    #[arg(long, short)]
    pub color: Option<String>,

    /// Due date as YYYY-MM-DD (tasks)
    #[arg(long, short)]
    pub date: Option<String>,

    /// Progress 0-100 (goals)
    #[arg(long, short)]
    pub progress: Option<i64>,
}

#[derive(Parser)]
#[command(name = "sjn")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Notes, to-dos and goals from the terminal")]
#[command(
    long_about = "Notes, to-dos and goals from the terminal.\n\n\
    Talks to an SJ Notes server and keeps working from a local cache when it is unreachable."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List notes, tasks or goals
    #[command(after_help = colors::examples("\
Examples:
  sjn list                                 List the active tab
  sjn list todos --filter overdue          Overdue tasks
  sjn list goals --sort progress-desc      Goals by progress
  sjn list notes --search books -o json    Matching notes as JSON
  sjn list todos --options                 Show filter and sort ids"))]
    List {
        /// Collection to list; defaults to the active tab
        #[arg(value_enum)]
        kind: Option<KindArg>,

        #[command(flatten)]
        view: ViewArgs,

        /// Print the available filters and sorts instead of records
        #[arg(long)]
        options: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Search every collection
    #[command(arg_required_else_help = true)]
    Search {
        /// Text to look for in titles, bodies and tags
        query: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Create a note, task or goal
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  sjn new notes \"Groceries\" -t home,food       Note with tags
  sjn new todos \"Pay rent\" -d 2026-03-01       Task due on a date
  sjn new goals \"Run 10k\" -p 20 -c green       Goal at 20%")
    )]
    New {
        #[arg(value_enum)]
        kind: KindArg,

        title: String,

        #[command(flatten)]
        fields: FieldArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Change a record's fields
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  sjn edit notes 3 --title \"Reading list\"     Rename a note
  sjn edit todos 7 -d 2026-04-01              Move a due date
  sjn edit goals 2 --comment \"halfway\"        Update a comment")
    )]
    Edit {
        #[arg(value_enum)]
        kind: KindArg,

        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Toggle a task's done flag
    #[command(arg_required_else_help = true)]
    Done { id: i64 },

    /// Set a goal's progress
    #[command(arg_required_else_help = true)]
    Progress {
        id: i64,

        /// New progress, clamped to 0-100
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Delete a record
    #[command(arg_required_else_help = true)]
    Delete {
        #[arg(value_enum)]
        kind: KindArg,

        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Move a record within a list
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  sjn move notes 3 1                  Move the third note to the top
  sjn move todos 1 2 -f pending       Swap the first two pending tasks")
    )]
    Move {
        #[arg(value_enum)]
        kind: KindArg,

        /// Current position (1-based), counted in collection order unless --sort is given
        from: usize,

        /// Target position in the displayed list (1-based)
        to: usize,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show or switch the active tab
    Tab {
        /// Tab to switch to (notes, todo, goals, about)
        #[arg(conflicts_with_all = ["next", "prev"])]
        tab: Option<String>,

        /// Switch to the next tab
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Switch to the previous tab
        #[arg(long)]
        prev: bool,
    },

    /// Check the server and offline cache
    Status {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Refresh the offline cache and replay queued writes
    Sync,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
