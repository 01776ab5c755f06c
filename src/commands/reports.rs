// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use super::Session;
use crate::ledger::Side;
use crate::models::RecordKind;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(s: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(s, sub)?,
        _ => {}
    }
    Ok(())
}

fn by_category(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let kind: RecordKind = sub.get_one::<String>("type").unwrap().parse()?;
    let side = Side::try_from(kind)
        .map_err(|_| anyhow!("Reminders are not part of the ledger; use expense or income"))?;
    let totals = s.tracker.ledger().totals_by_category(side)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let data = totals
            .into_iter()
            .map(|(cat, amt)| vec![cat, fmt_money(&amt, s.settings.currency)])
            .collect();
        let hdr = match side {
            Side::Income => "Earned",
            Side::Expense => "Spent",
        };
        println!("{}", pretty_table(&["Category", hdr], data));
    }
    Ok(())
}
