// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgethive::{RecordKind, ReminderBook};
use chrono::NaiveDate;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn due_within_covers_today_and_tomorrow() {
    let mut book = ReminderBook::new();
    book.add("2024-03-10", "Bills", "power", "50", "Expense").unwrap();
    book.add("2024-03-11", "Rent", "flat", "500", "Expense").unwrap();
    book.add("2024-03-12", "Pay", "salary", "1000", "Income").unwrap();
    book.add("2024-03-09", "Old", "missed", "1", "Expense").unwrap();

    let due: Vec<&str> = book
        .due_within(day("2024-03-10"), 1)
        .into_iter()
        .map(|r| r.date.as_str())
        .collect();
    assert_eq!(due, ["2024-03-10", "2024-03-11"]);

    let wider = book.due_within(day("2024-03-10"), 2);
    assert_eq!(wider.len(), 3);
}

#[test]
fn unparsable_dates_are_skipped() {
    let mut book = ReminderBook::new();
    assert!(book.add("next tuesday", "Misc", "x", "1", "Expense").unwrap());
    assert!(book.add("2024-03-11", "Rent", "flat", "500", "Expense").unwrap());
    let due = book.due_within(day("2024-03-10"), 1);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].category, "Rent");
    assert_eq!(book.len(), 2);
}

#[test]
fn blank_field_is_a_silent_no_op() {
    let mut book = ReminderBook::new();
    let added = book.add("", "Food", "x", "5", "Expense").unwrap();
    assert!(!added);
    assert!(book.is_empty());
    assert_eq!(
        ReminderBook::blank_field("", "Food", "x", "5", "Expense"),
        Some("date")
    );
    assert_eq!(
        ReminderBook::blank_field("2024-01-01", "Food", "x", "5", "  "),
        Some("type")
    );
    assert_eq!(
        ReminderBook::blank_field("2024-01-01", "Food", "x", "5", "Income"),
        None
    );
}

#[test]
fn kind_is_kept_until_persisted() {
    let mut book = ReminderBook::new();
    book.add("2024-05-01", "Freelance", "invoice", "250", "income").unwrap();
    let r = book.iter().next().unwrap();
    assert_eq!(r.kind, RecordKind::Income);
}

#[test]
fn complete_reminder_with_bad_amount_or_kind_is_an_error() {
    let mut book = ReminderBook::new();
    assert!(book.add("2024-05-01", "Rent", "flat", "lots", "Expense").is_err());
    assert!(book.add("2024-05-01", "Rent", "flat", "500", "Transfer").is_err());
    assert!(book.add("2024-05-01", "Rent", "flat", "500", "Reminder").is_err());
    assert!(book.is_empty());
}

#[test]
fn huge_horizon_is_clamped_to_the_last_date() {
    let mut book = ReminderBook::new();
    book.add("2024-03-10", "Bills", "power", "50", "Expense").unwrap();
    book.add("9999-12-31", "Far", "future", "1", "Income").unwrap();
    book.add("2024-03-09", "Old", "missed", "1", "Expense").unwrap();
    let due = book.due_within(day("2024-03-10"), u32::MAX);
    assert_eq!(due.len(), 2);
}
