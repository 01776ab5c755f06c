// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Session;
use crate::utils::{fmt_goal, fmt_money, maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
pub struct BalanceSummary {
    pub currency: String,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub remaining_balance: Decimal,
    pub saving_goal: Option<Decimal>,
    pub budget_goal: Option<Decimal>,
}

pub fn summary(s: &Session) -> Result<BalanceSummary> {
    let ledger = s.tracker.ledger();
    let goals = s.tracker.goals();
    Ok(BalanceSummary {
        currency: s.settings.currency.symbol().to_string(),
        total_income: ledger.total_income()?,
        total_expenses: ledger.total_expenses()?,
        remaining_balance: s.tracker.remaining_balance()?,
        saving_goal: goals.saving,
        budget_goal: goals.budget,
    })
}

pub fn handle(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    let data = summary(s)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &data)? {
        let ccy = s.settings.currency;
        let rows = vec![
            vec!["Income".into(), fmt_money(&data.total_income, ccy)],
            vec!["Expenses".into(), fmt_money(&data.total_expenses, ccy)],
            vec!["Remaining Balance".into(), fmt_money(&data.remaining_balance, ccy)],
            vec!["Saving Goal".into(), fmt_goal(data.saving_goal, ccy)],
            vec!["Budget Goal".into(), fmt_goal(data.budget_goal, ccy)],
        ];
        println!("{}", pretty_table(&["", "Amount"], rows));
    }
    Ok(())
}
