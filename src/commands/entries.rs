// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::Session;
use crate::models::{Record, RecordKind};
use crate::utils::{fmt_money, maybe_print_json, pretty_table, record_rows, today};

pub fn handle(s: &mut Session, kind: RecordKind, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(s, kind, sub)?,
        Some(("list", sub)) => list(s, kind, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(s: &mut Session, kind: RecordKind, sub: &clap::ArgMatches) -> Result<()> {
    let date = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| today().to_string());
    let category = sub.get_one::<String>("category").unwrap();
    let description = sub.get_one::<String>("description").unwrap();
    let amount = sub.get_one::<String>("amount").unwrap();

    let record = match kind {
        RecordKind::Income => s.tracker.add_income(&date, category, description, amount)?,
        _ => s.tracker.add_expense(&date, category, description, amount)?,
    }
    .clone();
    s.save_state()?;
    println!(
        "Recorded {} of {} on {} in {}",
        kind.as_str().to_lowercase(),
        fmt_money(&record.amount, s.settings.currency),
        record.date,
        record.category
    );
    println!(
        "Remaining balance: {}",
        fmt_money(&s.tracker.remaining_balance()?, s.settings.currency)
    );
    Ok(())
}

fn list(s: &Session, kind: RecordKind, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = s.tracker.ledger();
    let data: Vec<&Record> = match kind {
        RecordKind::Income => ledger.incomes().collect(),
        _ => ledger.expenses().collect(),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &["Date", "Category", "Description", "Amount"],
                record_rows(data.into_iter(), s.settings.currency),
            )
        );
    }
    Ok(())
}
