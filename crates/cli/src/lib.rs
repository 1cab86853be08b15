// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sjrs - Client library for SJ Notes.
//!
//! This crate provides the functionality behind the `sjn` CLI: a client for
//! the notes, todos and goals collections of an SJ Notes server, with an
//! offline cache underneath.
//!
//! # Main Components
//!
//! - [`RecordStore`] - CRUD over the REST API through a [`Transport`](store::Transport)
//! - [`Dashboard`] - Local replica, views, tabs and notifications
//! - [`AutoSave`] - Debounced saving of an edit buffer
//! - [`offline`] - Network-first/cache-first policy and the write outbox
//! - [`Config`] - Client configuration (server address, offline settings)
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use sjrs::{Config, Dashboard, RecordStore};
//!
//! let config = Config::load_default()?;
//! let store = RecordStore::new(&config)?;
//! let notes = store.list::<sj_core::Note>().await?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod autosave;
pub mod config;
pub mod dashboard;
pub mod env;
pub mod error;
pub mod notify;
pub mod offline;
pub mod store;

pub use autosave::{AutoSave, SaveOutcome, SaveState};
pub use cli::{Cli, Command, FieldArgs, KindArg, OutputFormat, ViewArgs};
pub use config::Config;
pub use dashboard::{Dashboard, Tab};
pub use error::{Error, Result};
pub use notify::{Notification, Notifier};
pub use store::{HttpTransport, RecordStore};

use std::io::{self, Write};

use sj_core::{Goal, Kind, Note, Task};

use commands::records;
use commands::Session;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let config = Config::load_default()?;
        let mut session = commands::open(config).await?;

        let mut out = io::stdout();
        let mut err = io::stderr();
        let result = dispatch(&mut session, command, &mut out, &mut err).await;

        let notes = session.dashboard.notifier_mut().drain();
        commands::print_notifications(&notes, &mut err)?;
        out.flush()?;
        result
    })
}

async fn dispatch(
    session: &mut Session,
    command: Command,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let color = colors::should_colorize();
    let dashboard = &mut session.dashboard;

    match command {
        Command::List {
            kind,
            view,
            options,
            output,
        } => {
            commands::list::run_impl(
                dashboard,
                kind.map(Kind::from),
                &view,
                options,
                output,
                color,
                out,
                err,
            )
            .await
        }
        Command::Search { query, output } => {
            commands::list::search(dashboard, &query, output, color, out, err).await
        }
        Command::New {
            kind,
            title,
            fields,
            output,
        } => match Kind::from(kind) {
            Kind::Notes => records::new::<Note, _>(dashboard, title, &fields, output, color, out).await,
            Kind::Todos => records::new::<Task, _>(dashboard, title, &fields, output, color, out).await,
            Kind::Goals => records::new::<Goal, _>(dashboard, title, &fields, output, color, out).await,
        },
        Command::Edit {
            kind,
            id,
            title,
            fields,
        } => match Kind::from(kind) {
            Kind::Notes => records::edit::<Note, _>(dashboard, id, title, &fields, color, out, err).await,
            Kind::Todos => records::edit::<Task, _>(dashboard, id, title, &fields, color, out, err).await,
            Kind::Goals => records::edit::<Goal, _>(dashboard, id, title, &fields, color, out, err).await,
        },
        Command::Done { id } => records::done(dashboard, id, color, out, err).await,
        Command::Progress { id, value } => {
            records::progress(dashboard, id, value, color, out, err).await
        }
        Command::Delete { kind, id, yes } => match Kind::from(kind) {
            Kind::Notes => records::delete::<Note, _>(dashboard, id, yes, err).await,
            Kind::Todos => records::delete::<Task, _>(dashboard, id, yes, err).await,
            Kind::Goals => records::delete::<Goal, _>(dashboard, id, yes, err).await,
        },
        Command::Move {
            kind,
            from,
            to,
            view,
        } => match Kind::from(kind) {
            Kind::Notes => records::move_item::<Note, _>(dashboard, from, to, &view, color, out, err).await,
            Kind::Todos => records::move_item::<Task, _>(dashboard, from, to, &view, color, out, err).await,
            Kind::Goals => records::move_item::<Goal, _>(dashboard, from, to, &view, color, out, err).await,
        },
        Command::Tab { tab, next, prev } => {
            commands::tab::run_impl(dashboard, tab.as_deref(), next, prev, out)
        }
        Command::Status { output } => {
            let direct = RecordStore::with_transport(session.config.api_base(), session.http.clone());
            let mut report = commands::status::check(&direct).await;
            if let Some(worker) = &session.worker {
                report = report.with_worker(worker.as_ref())?;
            }
            commands::status::print(&report, output, out)
        }
        Command::Sync => match &session.worker {
            Some(worker) => commands::status::sync(worker.as_ref(), out).await.map(|_| ()),
            None => Err(Error::Config(
                "the offline cache is disabled\n  hint: set offline.enabled = true in the config"
                    .to_string(),
            )),
        },
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
