// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, NaiveDate};

use crate::error::{LedgerError, Result};
use crate::ledger::{DATE_FORMAT, parse_decimal};
use crate::models::{Record, RecordKind};

/// Scheduled notices. Reminders are advisory: dates are only parsed when
/// querying, and a bad date never blocks the rest of the book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderBook {
    reminders: Vec<Record>,
}

impl ReminderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the first blank field, in prompt order.
    pub fn blank_field(
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
        kind: &str,
    ) -> Option<&'static str> {
        [
            ("date", date),
            ("category", category),
            ("description", description),
            ("amount", amount),
            ("type", kind),
        ]
        .into_iter()
        .find(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// Append a reminder when all five fields are filled in.
    ///
    /// Returns `Ok(false)` without touching the book if any field is blank.
    /// A complete reminder with an unparsable amount, or a type other than
    /// Expense/Income, is a validation error.
    pub fn add(
        &mut self,
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
        kind: &str,
    ) -> Result<bool> {
        if let Some(field) = Self::blank_field(date, category, description, amount, kind) {
            tracing::debug!(field, "reminder not added, blank field");
            return Ok(false);
        }
        let amount = parse_decimal(amount)
            .ok_or_else(|| LedgerError::validation("amount", amount, "not a number"))?;
        let kind = match kind.parse::<RecordKind>()? {
            RecordKind::Reminder => {
                return Err(LedgerError::validation(
                    "type",
                    kind,
                    "expected Expense or Income",
                ));
            }
            k => k,
        };
        self.reminders.push(Record {
            kind,
            date: date.trim().to_string(),
            category: category.trim().to_string(),
            description: description.trim().to_string(),
            amount,
        });
        Ok(true)
    }

    pub(crate) fn push_loaded(&mut self, record: Record) {
        self.reminders.push(record);
    }

    /// Reminders dated `today` or up to `horizon_days` after it.
    pub fn due_within(&self, today: NaiveDate, horizon_days: u32) -> Vec<&Record> {
        let last = today
            .checked_add_days(Days::new(horizon_days.into()))
            .unwrap_or(NaiveDate::MAX);
        self.reminders
            .iter()
            .filter(|r| match NaiveDate::parse_from_str(r.date.trim(), DATE_FORMAT) {
                Ok(d) => d >= today && d <= last,
                Err(_) => {
                    tracing::debug!(date = %r.date, "skipping reminder with unparsable date");
                    false
                }
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.reminders.iter()
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}
