// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::models::Currency;
use crate::tracker::Goals;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "BudgetHive", "budgethive"));

pub const STATE_FILE: &str = "budget_tracker_data.csv";
pub const SETTINGS_FILE: &str = "settings.json";

/// Where the state file and settings live for this invocation.
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_file: PathBuf,
    pub settings_file: PathBuf,
}

impl Paths {
    /// Platform directories, with the state file optionally overridden.
    pub fn resolve(data_override: Option<&Path>) -> Result<Self> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        let data_file = match data_override {
            Some(p) => p.to_path_buf(),
            None => proj.data_dir().join(STATE_FILE),
        };
        let paths = Self {
            data_file,
            settings_file: proj.config_dir().join(SETTINGS_FILE),
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    /// Create the directories holding the state and settings files.
    pub fn ensure_dirs(&self) -> Result<()> {
        for file in [&self.data_file, &self.settings_file] {
            if let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
        }
        Ok(())
    }

    /// Keep both files side by side in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data_file: dir.join(STATE_FILE),
            settings_file: dir.join(SETTINGS_FILE),
        }
    }
}

/// Display currency and goals. The state file carries ledger rows only, so
/// these persist separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency: Currency,
    pub saving_goal: Option<rust_decimal::Decimal>,
    pub budget_goal: Option<rust_decimal::Decimal>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        match fs::read_to_string(path) {
            Ok(s) => Ok(serde_json::from_str(&s)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn goals(&self) -> Goals {
        Goals {
            saving: self.saving_goal,
            budget: self.budget_goal,
        }
    }

    pub fn set_goals(&mut self, goals: Goals) {
        self.saving_goal = goals.saving;
        self.budget_goal = goals.budget;
    }
}
