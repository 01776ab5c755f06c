// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgethive::config::Settings;
use budgethive::{Currency, Goals, Tracker};
use rust_decimal::Decimal;
use tempfile::tempdir;

#[test]
fn missing_settings_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let s = Settings::load(&dir.path().join("settings.json")).unwrap();
    assert_eq!(s.currency, Currency::Rupee);
    assert_eq!(s.goals(), Goals::default());
}

#[test]
fn settings_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut s = Settings::default();
    s.currency = Currency::Yen;
    s.set_goals(Goals {
        saving: Some(Decimal::new(25000, 2)),
        budget: None,
    });
    s.save(&path).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), s);
}

#[test]
fn currency_accepts_symbols_and_codes() {
    assert_eq!("$".parse::<Currency>().unwrap(), Currency::Dollar);
    assert_eq!("gbp".parse::<Currency>().unwrap(), Currency::Pound);
    assert_eq!("JPY".parse::<Currency>().unwrap(), Currency::Yen);
    assert_eq!("€".parse::<Currency>().unwrap(), Currency::Euro);
    assert!("BTC".parse::<Currency>().is_err());
}

#[test]
fn goals_are_independent_and_overwritable() {
    let mut t = Tracker::new();
    assert_eq!(t.saving_goal(), None);
    t.set_budget_goal(Decimal::from(100));
    t.set_budget_goal(Decimal::from(80));
    assert_eq!(t.budget_goal(), Some(Decimal::from(80)));
    assert_eq!(t.saving_goal(), None);
}
