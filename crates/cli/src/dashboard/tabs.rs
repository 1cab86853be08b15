// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Active tab and the key-value store it is persisted in.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sj_core::Kind;

use crate::error::{Error, Result};

/// Key under which the active tab is stored.
pub const ACTIVE_TAB_KEY: &str = "sj-notes-active-tab";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Notes,
    Todo,
    Goals,
    About,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Tab; 4] = [Tab::Notes, Tab::Todo, Tab::Goals, Tab::About];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Notes => "notes",
            Tab::Todo => "todo",
            Tab::Goals => "goals",
            Tab::About => "about",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Notes => "Notes",
            Tab::Todo => "To-Do",
            Tab::Goals => "Goals",
            Tab::About => "About",
        }
    }

    /// The collection shown on this tab.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Tab::Notes => Some(Kind::Notes),
            Tab::Todo => Some(Kind::Todos),
            Tab::Goals => Some(Kind::Goals),
            Tab::About => None,
        }
    }

    /// The tab after this one, wrapping around.
    pub fn next(&self) -> Tab {
        let i = self.index();
        Tab::ALL[(i + 1) % Tab::ALL.len()]
    }

    /// The tab before this one, wrapping around.
    pub fn prev(&self) -> Tab {
        let i = self.index();
        Tab::ALL[(i + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidTab(s.to_string()))
    }
}

/// String key-value persistence.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store that forgets everything on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object in a file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: &Path) -> Self {
        FileStore {
            path: path.to_path_buf(),
        }
    }

    fn read(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// Reads the stored tab. Missing, unreadable or unknown values give [`Tab::Notes`].
pub fn load_tab(store: &dyn KeyValueStore) -> Tab {
    match store.get(ACTIVE_TAB_KEY) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|_| {
            tracing::debug!(%value, "ignoring unknown stored tab");
            Tab::default()
        }),
        Ok(None) => Tab::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored tab");
            Tab::default()
        }
    }
}

pub fn save_tab(store: &mut dyn KeyValueStore, tab: Tab) -> Result<()> {
    store.set(ACTIVE_TAB_KEY, tab.as_str())
}

#[cfg(test)]
#[path = "tabs_tests.rs"]
mod tests;
