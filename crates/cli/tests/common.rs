// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Nothing listens on the discard port, so connections are refused.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// A temp home holding the config file and the data directory.
pub struct Home {
    pub dir: TempDir,
}

impl Home {
    /// Offline cache on, server unreachable.
    pub fn offline() -> Self {
        Home::with_config("timeout_secs = 2\n")
    }

    /// Offline cache off, server unreachable.
    pub fn direct() -> Self {
        Home::with_config("timeout_secs = 2\n\n[offline]\nenabled = false\n")
    }

    pub fn with_config(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), config).unwrap();
        Home { dir }
    }

    /// `sjn` pointed at this home.
    pub fn sjn(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("sjn");
        cmd.env("SJN_CONFIG", self.dir.path().join("config.toml"))
            .env("SJN_DATA_DIR", self.dir.path().join("data"))
            .env("SJN_BASE_URL", UNREACHABLE)
            .env("NO_COLOR", "1")
            .env_remove("COLOR")
            .env_remove("SJN_LOG");
        cmd
    }
}
