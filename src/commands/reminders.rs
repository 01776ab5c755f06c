// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;

use super::Session;
use crate::models::{Currency, Record};
use crate::reminders::ReminderBook;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table, today};

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(s, sub)?,
        Some(("list", sub)) => list(s, sub)?,
        Some(("due", sub)) => due(s, sub)?,
        _ => {}
    }
    Ok(())
}

fn field<'a>(sub: &'a clap::ArgMatches, name: &str) -> &'a str {
    sub.get_one::<String>(name).map(String::as_str).unwrap_or("")
}

fn add(s: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let (date, category, description, amount, kind) = (
        field(sub, "date"),
        field(sub, "category"),
        field(sub, "description"),
        field(sub, "amount"),
        field(sub, "type"),
    );

    if s.tracker.add_reminder(date, category, description, amount, kind)? {
        s.save_state()?;
        println!("Reminder has been set successfully!");
    } else if let Some(blank) = ReminderBook::blank_field(date, category, description, amount, kind)
    {
        tracing::warn!(field = blank, "reminder not set");
        eprintln!("Reminder not set: {} is blank", blank);
    }
    Ok(())
}

fn reminder_rows<'a>(items: impl Iterator<Item = &'a Record>, ccy: Currency) -> Vec<Vec<String>> {
    items
        .map(|r| {
            vec![
                r.date.clone(),
                r.kind.to_string(),
                r.category.clone(),
                r.description.clone(),
                fmt_money(&r.amount, ccy),
            ]
        })
        .collect()
}

fn list(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<&Record> = s.tracker.reminders().iter().collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Description", "Amount"],
                reminder_rows(data.into_iter(), s.settings.currency),
            )
        );
    }
    Ok(())
}

fn due(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let day = match sub.get_one::<String>("today") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let days = *sub.get_one::<u32>("days").unwrap_or(&1);
    let data = s.tracker.reminders().due_within(day, days);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No reminders due");
        } else {
            println!(
                "{}",
                pretty_table(
                    &["Date", "Type", "Category", "Description", "Amount"],
                    reminder_rows(data.into_iter(), s.settings.currency),
                )
            );
        }
    }
    Ok(())
}

/// The notice printed for a reminder falling due.
pub fn notice(r: &Record, ccy: Currency) -> String {
    format!(
        "Reminder for {}: {} ({} of {}) in {} category",
        r.date,
        r.description,
        r.kind,
        fmt_money(&r.amount, ccy),
        r.category
    )
}

/// Startup check: print reminders due today or tomorrow to stderr.
pub fn print_due_notices(s: &Session, day: NaiveDate) {
    for r in s.tracker.due_reminders(day) {
        eprintln!("{}", notice(r, s.settings.currency));
    }
}
