// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::Record;
use crate::reminders::ReminderBook;
use crate::store;

/// Saving and budget targets. Display only; nothing checks the ledger
/// against them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    pub saving: Option<Decimal>,
    pub budget: Option<Decimal>,
}

/// Everything one user tracks: the ledger, the reminder book and the goals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    ledger: Ledger,
    reminders: ReminderBook,
    goals: Goals,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goals(mut self, goals: Goals) -> Self {
        self.goals = goals;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn reminders(&self) -> &ReminderBook {
        &self.reminders
    }

    pub fn goals(&self) -> Goals {
        self.goals
    }

    pub fn add_expense(
        &mut self,
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<&Record> {
        self.ledger.add_expense(date, category, description, amount)
    }

    pub fn add_income(
        &mut self,
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<&Record> {
        self.ledger.add_income(date, category, description, amount)
    }

    pub fn add_reminder(
        &mut self,
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
        kind: &str,
    ) -> Result<bool> {
        self.reminders.add(date, category, description, amount, kind)
    }

    pub fn set_saving_goal(&mut self, amount: Decimal) {
        self.goals.saving = Some(amount);
    }

    pub fn set_budget_goal(&mut self, amount: Decimal) {
        self.goals.budget = Some(amount);
    }

    pub fn saving_goal(&self) -> Option<Decimal> {
        self.goals.saving
    }

    pub fn budget_goal(&self) -> Option<Decimal> {
        self.goals.budget
    }

    pub fn remaining_balance(&self) -> Result<Decimal> {
        self.ledger.remaining_balance()
    }

    /// Reminders due today or tomorrow.
    pub fn due_reminders(&self, today: NaiveDate) -> Vec<&Record> {
        self.reminders.due_within(today, 1)
    }

    pub fn export_report<W: Write>(&self, sink: W) -> Result<()> {
        store::export_report(&self.ledger, sink)
    }

    /// Fresh tracker from a state stream. Goals start unset.
    pub fn load<R: Read>(source: R) -> Result<Self> {
        let (ledger, reminders) = store::load(source)?;
        Ok(Self {
            ledger,
            reminders,
            goals: Goals::default(),
        })
    }

    pub fn save<W: Write>(&self, sink: W) -> Result<()> {
        store::save(&self.ledger, &self.reminders, sink)
    }

    pub fn load_path(path: &Path) -> Result<Self> {
        let (ledger, reminders) = store::load_path(path)?;
        Ok(Self {
            ledger,
            reminders,
            goals: Goals::default(),
        })
    }

    pub fn save_path(&self, path: &Path) -> Result<()> {
        store::save_path(&self.ledger, &self.reminders, path)
    }
}
