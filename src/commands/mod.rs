// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod balance;
pub mod currency;
pub mod entries;
pub mod exporter;
pub mod goals;
pub mod reminders;
pub mod reports;

use anyhow::{Context, Result};

use crate::config::{Paths, Settings};
use crate::tracker::Tracker;

/// State shared by every command: loaded once, saved back after a mutation.
pub struct Session {
    pub paths: Paths,
    pub settings: Settings,
    pub tracker: Tracker,
}

impl Session {
    pub fn open(paths: Paths) -> Result<Self> {
        let settings = Settings::load(&paths.settings_file)
            .with_context(|| format!("Read settings {}", paths.settings_file.display()))?;
        let tracker = Tracker::load_path(&paths.data_file)
            .with_context(|| format!("Load {}", paths.data_file.display()))?
            .with_goals(settings.goals());
        Ok(Self {
            paths,
            settings,
            tracker,
        })
    }

    pub fn save_state(&self) -> Result<()> {
        self.tracker
            .save_path(&self.paths.data_file)
            .with_context(|| format!("Save {}", self.paths.data_file.display()))
    }

    pub fn save_settings(&mut self) -> Result<()> {
        self.settings.set_goals(self.tracker.goals());
        self.settings
            .save(&self.paths.settings_file)
            .with_context(|| format!("Write settings {}", self.paths.settings_file.display()))
    }
}
