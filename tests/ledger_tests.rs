// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgethive::{Ledger, LedgerError, RecordKind, Side, store};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn remaining_balance_is_income_minus_expenses() {
    let mut ledger = Ledger::new();
    ledger
        .add_income("2024-01-01", "Salary", "pay", "1000.0")
        .unwrap();
    ledger
        .add_expense("2024-01-02", "Groceries", "food", "200.0")
        .unwrap();
    assert_eq!(ledger.remaining_balance().unwrap(), dec("800"));
    assert_eq!(format!("{:.2}", ledger.remaining_balance().unwrap()), "800.00");
}

#[test]
fn balance_does_not_depend_on_entry_order() {
    let mut a = Ledger::new();
    a.add_expense("2024-02-01", "Utilities", "power", "45.10").unwrap();
    a.add_income("2024-02-01", "Bonus", "", "300").unwrap();
    a.add_expense("2024-02-03", "Entertainment", "cinema", "12.40").unwrap();

    let mut b = Ledger::new();
    b.add_expense("2024-02-03", "Entertainment", "cinema", "12.40").unwrap();
    b.add_income("2024-02-01", "Bonus", "", "300").unwrap();
    b.add_expense("2024-02-01", "Utilities", "power", "45.10").unwrap();

    assert_eq!(a.remaining_balance().unwrap(), b.remaining_balance().unwrap());
    assert_eq!(a.remaining_balance().unwrap(), dec("242.50"));
    assert_eq!(a.total_expenses().unwrap(), dec("57.50"));
    assert_eq!(a.total_income().unwrap(), dec("300"));
}

#[test]
fn unparsable_amount_leaves_ledger_unchanged() {
    let mut ledger = Ledger::new();
    let err = ledger
        .add_expense("2024-01-05", "Groceries", "Milk", "abc")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "amount", .. }));
    assert!(ledger.is_empty());
    assert_eq!(ledger.remaining_balance().unwrap(), Decimal::ZERO);
}

#[test]
fn negative_amount_is_rejected() {
    let mut ledger = Ledger::new();
    assert!(ledger.add_income("2024-01-05", "Salary", "", "-10").is_err());
    assert!(ledger.is_empty());
}

#[test]
fn unknown_category_and_bad_date_are_rejected() {
    let mut ledger = Ledger::new();
    let err = ledger
        .add_expense("2024-01-05", "Salary", "wrong side", "5")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "category", .. }));
    let err = ledger
        .add_income("05/01/2024", "Salary", "", "5")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "date", .. }));
    assert!(ledger.is_empty());
}

#[test]
fn category_is_canonicalized_and_order_kept() {
    let mut ledger = Ledger::new();
    let rec = ledger
        .add_expense(" 2024-01-05 ", "groceries", " Milk ", "3.5")
        .unwrap()
        .clone();
    assert_eq!(rec.kind, RecordKind::Expense);
    assert_eq!(rec.date, "2024-01-05");
    assert_eq!(rec.category, "Groceries");
    assert_eq!(rec.description, "Milk");

    ledger.add_expense("2024-01-04", "Others", "earlier date", "1").unwrap();
    let dates: Vec<&str> = ledger.expenses().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-05", "2024-01-04"]);
}

#[test]
fn totals_by_category_sums_one_side() {
    let mut ledger = Ledger::new();
    ledger.add_expense("2024-03-01", "Groceries", "a", "10").unwrap();
    ledger.add_expense("2024-03-02", "Groceries", "b", "2.5").unwrap();
    ledger.add_expense("2024-03-02", "Utilities", "c", "40").unwrap();
    ledger.add_income("2024-03-01", "Salary", "d", "900").unwrap();

    let spent = ledger.totals_by_category(Side::Expense).unwrap();
    assert_eq!(spent.len(), 2);
    assert_eq!(spent["Groceries"], dec("12.5"));
    assert_eq!(spent["Utilities"], dec("40"));

    let earned = ledger.totals_by_category(Side::Income).unwrap();
    assert_eq!(earned.len(), 1);
    assert_eq!(earned["Salary"], dec("900"));
}

#[test]
fn totals_by_category_is_ordered_by_name() {
    let mut ledger = Ledger::new();
    ledger.add_expense("2024-03-01", "Utilities", "", "500").unwrap();
    ledger.add_expense("2024-03-01", "Entertainment", "", "1").unwrap();
    ledger.add_expense("2024-03-01", "Groceries", "", "20").unwrap();
    let names: Vec<String> = ledger
        .totals_by_category(Side::Expense)
        .unwrap()
        .into_keys()
        .collect();
    assert_eq!(names, ["Entertainment", "Groceries", "Utilities"]);
}

#[test]
fn reminder_kind_is_not_a_ledger_side() {
    assert_eq!(Side::try_from(RecordKind::Income).unwrap(), Side::Income);
    assert_eq!(Side::try_from(RecordKind::Expense).unwrap().kind(), RecordKind::Expense);
    assert!(Side::try_from(RecordKind::Reminder).is_err());
}

#[test]
fn add_that_would_overflow_totals_is_rejected() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense("2024-01-05", "Others", "huge", "79228162514264337593543950335")
        .unwrap();
    let err = ledger
        .add_expense("2024-01-06", "Others", "one more", "1")
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { field: "amount", .. }));
    assert_eq!(ledger.len(), 1);
    assert_eq!(
        ledger.remaining_balance().unwrap(),
        -Decimal::MAX
    );
    assert_eq!(
        ledger.totals_by_category(Side::Expense).unwrap()["Others"],
        Decimal::MAX
    );
}

#[test]
fn overflowing_state_file_reports_instead_of_panicking() {
    let data = "Type,Date,Category,Description,Amount\n\
                Income,2024-01-01,Salary,a,79228162514264337593543950335\n\
                Income,2024-01-02,Salary,b,79228162514264337593543950335\n";
    let (ledger, _) = store::load(data.as_bytes()).unwrap();
    assert_eq!(ledger.len(), 2);
    assert!(matches!(
        ledger.remaining_balance(),
        Err(LedgerError::Overflow { .. })
    ));
    assert!(matches!(
        ledger.total_income(),
        Err(LedgerError::Overflow { what: "income" })
    ));
    assert!(matches!(
        ledger.totals_by_category(Side::Income),
        Err(LedgerError::Overflow { .. })
    ));
}
