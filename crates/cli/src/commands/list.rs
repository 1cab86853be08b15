// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use serde::Serialize;
use sj_core::query::{filter_options, sort_options, FilterOption, SortOption};
use sj_core::{Goal, Kind, Note, QueryContext, Task};

use crate::cli::{OutputFormat, ViewArgs};
use crate::dashboard::{Dashboard, Tracked};
use crate::display::ListLine;
use crate::error::Result;
use crate::store::Transport;

use super::hydrate;

const ABOUT: &str = "\
SJ Notes keeps notes, to-dos and goals in one place.

Switch to a collection with `sjn tab notes`, `sjn tab todo` or `sjn tab goals`.";

/// JSON output of `list --options`.
#[derive(Serialize)]
struct OptionsJson {
    filters: Vec<FilterOption>,
    sorts: Vec<SortOption>,
}

/// JSON output of `search`.
#[derive(Serialize)]
struct SearchJson<'a> {
    query: &'a str,
    total: usize,
    notes: &'a [Note],
    todos: &'a [Task],
    goals: &'a [Goal],
}

/// Applies the search, filter and sort flags to the view of `R`.
pub(crate) fn apply_view<R: Tracked, T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    view: &ViewArgs,
) -> Result<()> {
    if let Some(filter) = &view.filter {
        dashboard.set_filter::<R>(filter)?;
    }
    if let Some(sort) = &view.sort {
        dashboard.set_sort::<R>(sort);
    }
    if let Some(search) = &view.search {
        dashboard.set_search(search.as_str());
    }
    Ok(())
}

/// Prints the displayed items of `R`, numbered by position.
pub(crate) fn print_visible<R: Tracked + ListLine, T: Transport + 'static>(
    dashboard: &Dashboard<T>,
    format: OutputFormat,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let items = dashboard.visible::<R>();
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&items)?)?;
        }
        OutputFormat::Text => {
            if items.is_empty() {
                writeln!(out, "{}", R::KIND.empty_state())?;
            }
            let ctx = dashboard.context();
            for (i, item) in items.iter().enumerate() {
                writeln!(out, "{:>3}. {}", i + 1, item.line(&ctx, color))?;
            }
        }
    }
    Ok(())
}

fn print_options(kind: Kind, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let options = OptionsJson {
        filters: filter_options(kind),
        sorts: sort_options(kind),
    };
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&options)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Filters:")?;
            for f in &options.filters {
                writeln!(out, "  {:<16}{}", f.id, f.label)?;
            }
            writeln!(out, "Sorts:")?;
            for s in &options.sorts {
                writeln!(out, "  {:<16}{}", s.id, s.label)?;
            }
        }
    }
    Ok(())
}

fn show<R: Tracked + ListLine, T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    view: &ViewArgs,
    format: OutputFormat,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    apply_view::<R, T>(dashboard, view)?;
    print_visible::<R, T>(dashboard, format, color, out)
}

/// Lists one collection, or the active tab's collection when `kind` is
/// not given.
#[allow(clippy::too_many_arguments)]
pub async fn run_impl<T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    kind: Option<Kind>,
    view: &ViewArgs,
    options: bool,
    format: OutputFormat,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let Some(kind) = kind.or_else(|| dashboard.tab().kind()) else {
        writeln!(out, "{ABOUT}")?;
        return Ok(());
    };
    if options {
        return print_options(kind, format, out);
    }

    hydrate(dashboard, err).await?;
    match kind {
        Kind::Notes => show::<Note, T>(dashboard, view, format, color, out),
        Kind::Todos => show::<Task, T>(dashboard, view, format, color, out),
        Kind::Goals => show::<Goal, T>(dashboard, view, format, color, out),
    }
}

fn print_section<R: ListLine>(
    heading: &str,
    items: &[R],
    ctx: &QueryContext,
    color: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{heading} ({})", items.len())?;
    for item in items {
        writeln!(out, "  {}", item.line(ctx, color))?;
    }
    Ok(())
}

/// Searches every collection.
pub async fn search<T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    query: &str,
    format: OutputFormat,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    hydrate(dashboard, err).await?;
    dashboard.set_search(query);
    let results = dashboard.search_results();

    match format {
        OutputFormat::Json => {
            let json = SearchJson {
                query,
                total: results.total(),
                notes: &results.notes,
                todos: &results.todos,
                goals: &results.goals,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        OutputFormat::Text => {
            if results.total() == 0 {
                writeln!(out, "No results for \"{}\"", query.trim())?;
                return Ok(());
            }
            let ctx = dashboard.context();
            print_section("Notes", &results.notes, &ctx, color, out)?;
            print_section("To-Do", &results.todos, &ctx, color, out)?;
            print_section("Goals", &results.goals, &ctx, color, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
