// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat-file state: one header row, then one `Type`-tagged row per record.
//!
//! ```text
//! Type,Date,Category,Description,Amount
//! Expense,2024-01-02,Groceries,food,200.0
//! Income,2024-01-01,Salary,pay,1000.0
//! Reminder,2024-03-11,Rent,flat,500
//! ```

use csv::{ReaderBuilder, Writer};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{LedgerError, Result};
use crate::ledger::{Ledger, Side, parse_decimal};
use crate::models::{Record, RecordKind};
use crate::reminders::ReminderBook;

pub const HEADER: [&str; 5] = ["Type", "Date", "Category", "Description", "Amount"];

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
}

fn write_row<W: Write>(wtr: &mut Writer<W>, kind: RecordKind, r: &Record) -> Result<()> {
    wtr.write_record([
        kind.as_str(),
        r.date.as_str(),
        r.category.as_str(),
        r.description.as_str(),
        r.amount.to_string().as_str(),
    ])?;
    Ok(())
}

/// Write the full state: expenses, then incomes, then reminders. Reminders
/// are always tagged `Reminder`, whatever kind they were added with.
pub fn save<W: Write>(ledger: &Ledger, reminders: &ReminderBook, sink: W) -> Result<()> {
    let mut wtr = Writer::from_writer(sink);
    wtr.write_record(HEADER)?;
    for r in ledger.records() {
        write_row(&mut wtr, r.kind, r)?;
    }
    for r in reminders.iter() {
        write_row(&mut wtr, RecordKind::Reminder, r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read state written by [`save`]. Rows with an unknown `Type` are skipped;
/// an unparsable amount aborts the load.
pub fn load<R: Read>(source: R) -> Result<(Ledger, ReminderBook)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(source);
    let headers = rdr.headers()?.clone();
    let mut ledger = Ledger::new();
    let mut reminders = ReminderBook::new();

    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        let row: Row = rec.deserialize(Some(&headers))?;
        let kind = match row.kind.as_str() {
            "Expense" => RecordKind::Expense,
            "Income" => RecordKind::Income,
            "Reminder" => RecordKind::Reminder,
            other => {
                tracing::debug!(line, kind = other, "ignoring row with unknown type");
                continue;
            }
        };
        let amount = parse_decimal(&row.amount).ok_or_else(|| LedgerError::MalformedRecord {
            line,
            value: row.amount.clone(),
        })?;
        let record = Record {
            kind,
            date: row.date,
            category: row.category,
            description: row.description,
            amount,
        };
        match Side::try_from(kind) {
            Ok(side) => ledger.push_loaded(side, record),
            Err(_) => reminders.push_loaded(record),
        }
    }
    tracing::debug!(
        records = ledger.len(),
        reminders = reminders.len(),
        "loaded state"
    );
    Ok((ledger, reminders))
}

/// Load from `path`. A missing file is the first-run state, not an error.
pub fn load_path(path: &Path) -> Result<(Ledger, ReminderBook)> {
    match File::open(path) {
        Ok(f) => load(f),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no state file yet, starting empty");
            Ok((Ledger::new(), ReminderBook::new()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn save_path(ledger: &Ledger, reminders: &ReminderBook, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    save(ledger, reminders, file)?;
    tracing::debug!(path = %path.display(), "saved state");
    Ok(())
}

/// One-way report of every ledger record. Reminders are not included.
pub fn export_report<W: Write>(ledger: &Ledger, sink: W) -> Result<()> {
    let mut wtr = Writer::from_writer(sink);
    wtr.write_record(HEADER)?;
    for r in ledger.records() {
        write_row(&mut wtr, r.kind, r)?;
    }
    wtr.flush()?;
    Ok(())
}
