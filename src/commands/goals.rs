// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use super::Session;
use crate::utils::{fmt_goal, fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("saving", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            s.tracker.set_saving_goal(amount);
            s.save_settings()?;
            println!("Saving goal set to {}", fmt_money(&amount, s.settings.currency));
        }
        Some(("budget", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            s.tracker.set_budget_goal(amount);
            s.save_settings()?;
            println!("Budget goal set to {}", fmt_money(&amount, s.settings.currency));
        }
        Some(("show", sub)) => {
            let goals = s.tracker.goals();
            let v = json!({ "saving_goal": goals.saving, "budget_goal": goals.budget });
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &v)? {
                let ccy = s.settings.currency;
                println!(
                    "{}",
                    pretty_table(
                        &["Goal", "Amount"],
                        vec![
                            vec!["Saving".into(), fmt_goal(goals.saving, ccy)],
                            vec!["Budget".into(), fmt_goal(goals.budget, ccy)],
                        ],
                    )
                );
            }
        }
        _ => {}
    }
    Ok(())
}
