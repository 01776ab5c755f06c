// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Discriminant shared by ledger entries and reminders. It doubles as the
/// `Type` column of the state file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Expense,
    Income,
    Reminder,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Expense => "Expense",
            RecordKind::Income => "Income",
            RecordKind::Reminder => "Reminder",
        }
    }

    /// Fixed category set offered for a ledger side. Reminders take free text.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Expense => EXPENSE_CATEGORIES,
            RecordKind::Income => INCOME_CATEGORIES,
            RecordKind::Reminder => &[],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(RecordKind::Expense),
            "income" => Ok(RecordKind::Income),
            "reminder" => Ok(RecordKind::Reminder),
            _ => Err(LedgerError::validation(
                "type",
                s,
                "expected Expense, Income or Reminder",
            )),
        }
    }
}

pub const EXPENSE_CATEGORIES: &[&str] = &["Groceries", "Utilities", "Entertainment", "Others"];
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Others"];

/// Resolve `name` against the fixed category set of `kind`, returning the
/// canonical spelling.
pub fn canonical_category(kind: RecordKind, name: &str) -> Result<&'static str, LedgerError> {
    let name = name.trim();
    kind.categories()
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            LedgerError::validation(
                "category",
                name,
                format!("expected one of {}", kind.categories().join(", ")),
            )
        })
}

/// One row of the ledger or reminder book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub kind: RecordKind,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

/// Display-only currency label. Amounts are never converted between symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "₹")]
    Rupee,
    #[serde(rename = "$")]
    Dollar,
    #[serde(rename = "€")]
    Euro,
    #[serde(rename = "£")]
    Pound,
    #[serde(rename = "JPY")]
    Yen,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Rupee,
        Currency::Dollar,
        Currency::Euro,
        Currency::Pound,
        Currency::Yen,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Rupee => "₹",
            Currency::Dollar => "$",
            Currency::Euro => "€",
            Currency::Pound => "£",
            Currency::Yen => "JPY",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rupee => "INR",
            Currency::Dollar => "USD",
            Currency::Euro => "EUR",
            Currency::Pound => "GBP",
            Currency::Yen => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.symbol() == s || c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| LedgerError::validation("currency", s, "expected one of ₹, $, €, £, JPY"))
    }
}
