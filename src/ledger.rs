// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Append-only income and expense ledger.
//!
//! The remaining balance is always recomputed from the two record lists;
//! nothing caches a running total.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::error::{LedgerError, Result};
use crate::models::{Record, RecordKind, canonical_category};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a decimal amount as typed by a user or stored in the state file.
/// Accepts plain (`12.50`) and scientific (`1.5e3`) notation.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// Parse an amount for a new ledger entry. Negative values are rejected.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let amount = parse_decimal(s)
        .ok_or_else(|| LedgerError::validation("amount", s, "not a number"))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::validation("amount", s, "must not be negative"));
    }
    Ok(amount)
}

pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::validation("date", s, "expected YYYY-MM-DD"))
}

/// The two sides of the ledger. Reminders never land in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Expense,
    Income,
}

impl Side {
    pub fn kind(self) -> RecordKind {
        match self {
            Side::Expense => RecordKind::Expense,
            Side::Income => RecordKind::Income,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Side::Expense => "expenses",
            Side::Income => "income",
        }
    }
}

impl TryFrom<RecordKind> for Side {
    type Error = LedgerError;

    fn try_from(kind: RecordKind) -> Result<Self> {
        match kind {
            RecordKind::Expense => Ok(Side::Expense),
            RecordKind::Income => Ok(Side::Income),
            RecordKind::Reminder => Err(LedgerError::validation(
                "type",
                kind.as_str(),
                "reminders are not ledger records",
            )),
        }
    }
}

fn checked_sum<'a>(
    mut records: impl Iterator<Item = &'a Record>,
    what: &'static str,
) -> Result<Decimal> {
    records
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.amount))
        .ok_or(LedgerError::Overflow { what })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<Record>,
    incomes: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_expense(
        &mut self,
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<&Record> {
        self.add(Side::Expense, date, category, description, amount)
    }

    pub fn add_income(
        &mut self,
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<&Record> {
        self.add(Side::Income, date, category, description, amount)
    }

    fn add(
        &mut self,
        side: Side,
        date: &str,
        category: &str,
        description: &str,
        amount_raw: &str,
    ) -> Result<&Record> {
        // Validate everything before touching the lists.
        let amount = parse_amount(amount_raw)?;
        let date = parse_iso_date(date)?;
        let category = canonical_category(side.kind(), category)?;
        self.check_room_for(side, amount)
            .map_err(|_| LedgerError::validation("amount", amount_raw, "total would be too large"))?;
        let record = Record {
            kind: side.kind(),
            date: date.format(DATE_FORMAT).to_string(),
            category: category.to_string(),
            description: description.trim().to_string(),
            amount,
        };
        tracing::debug!(?record, "appending ledger record");
        let list = self.list_mut(side);
        list.push(record);
        Ok(&list[list.len() - 1])
    }

    /// Both side totals and the balance must stay representable once
    /// `amount` is appended to `side`.
    fn check_room_for(&self, side: Side, amount: Decimal) -> Result<()> {
        let mut income = self.total_income()?;
        let mut expenses = self.total_expenses()?;
        let total = match side {
            Side::Income => &mut income,
            Side::Expense => &mut expenses,
        };
        *total = total
            .checked_add(amount)
            .ok_or(LedgerError::Overflow { what: side.label() })?;
        income
            .checked_sub(expenses)
            .ok_or(LedgerError::Overflow { what: "remaining balance" })?;
        Ok(())
    }

    /// Append an already-parsed record, as read back from the state file.
    /// Stored strings are kept verbatim.
    pub(crate) fn push_loaded(&mut self, side: Side, record: Record) {
        self.list_mut(side).push(record);
    }

    fn list(&self, side: Side) -> &Vec<Record> {
        match side {
            Side::Expense => &self.expenses,
            Side::Income => &self.incomes,
        }
    }

    fn list_mut(&mut self, side: Side) -> &mut Vec<Record> {
        match side {
            Side::Expense => &mut self.expenses,
            Side::Income => &mut self.incomes,
        }
    }

    pub fn expenses(&self) -> impl Iterator<Item = &Record> {
        self.expenses.iter()
    }

    pub fn incomes(&self) -> impl Iterator<Item = &Record> {
        self.incomes.iter()
    }

    /// Every ledger record, expenses first, each side in entry order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.expenses.iter().chain(self.incomes.iter())
    }

    pub fn len(&self) -> usize {
        self.expenses.len() + self.incomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_income(&self) -> Result<Decimal> {
        checked_sum(self.incomes.iter(), Side::Income.label())
    }

    pub fn total_expenses(&self) -> Result<Decimal> {
        checked_sum(self.expenses.iter(), Side::Expense.label())
    }

    /// Income minus expenses. Errors instead of panicking when a loaded
    /// state file holds amounts too large to add up.
    pub fn remaining_balance(&self) -> Result<Decimal> {
        self.total_income()?
            .checked_sub(self.total_expenses()?)
            .ok_or(LedgerError::Overflow { what: "remaining balance" })
    }

    /// Per-category sums for one side of the ledger, ordered by category.
    pub fn totals_by_category(&self, side: Side) -> Result<BTreeMap<String, Decimal>> {
        let mut agg: BTreeMap<String, Decimal> = BTreeMap::new();
        for r in self.list(side) {
            let sum = agg.entry(r.category.clone()).or_insert(Decimal::ZERO);
            *sum = sum
                .checked_add(r.amount)
                .ok_or(LedgerError::Overflow { what: side.label() })?;
        }
        Ok(agg)
    }
}
