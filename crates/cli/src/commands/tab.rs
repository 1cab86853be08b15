// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::dashboard::{Dashboard, Tab};
use crate::error::Result;
use crate::store::Transport;

/// Shows the tabs with the active one marked, or switches tabs.
pub fn run_impl<T: Transport + 'static>(
    dashboard: &mut Dashboard<T>,
    tab: Option<&str>,
    next: bool,
    prev: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if next {
        dashboard.next_tab()?;
    } else if prev {
        dashboard.prev_tab()?;
    } else if let Some(name) = tab {
        let tab: Tab = name.parse()?;
        dashboard.set_tab(tab)?;
        writeln!(out, "Switched to {}", tab.label())?;
        return Ok(());
    } else {
        let active = dashboard.tab();
        for tab in Tab::ALL {
            let marker = if tab == active { '*' } else { ' ' };
            writeln!(out, "{marker} {:<7}{}", tab.as_str(), tab.label())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tab_tests.rs"]
mod tests;
