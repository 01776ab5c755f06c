// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::Session;
use crate::models::Currency;
use crate::utils::pretty_table;

pub fn handle(s: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let ccy: Currency = sub.get_one::<String>("symbol").unwrap().parse()?;
            s.settings.currency = ccy;
            s.save_settings()?;
            println!("Currency set to {}", ccy);
        }
        Some(("show", _)) => println!("{}", s.settings.currency),
        Some(("list", _)) => {
            let rows = Currency::ALL
                .iter()
                .map(|c| {
                    let mark = if *c == s.settings.currency { "*" } else { "" };
                    vec![c.symbol().to_string(), c.code().to_string(), mark.to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["Symbol", "Code", "Selected"], rows));
        }
        _ => {}
    }
    Ok(())
}
