// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use serde_json::json;
use std::fs::File;

use super::Session;

pub fn handle(s: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let file = File::create(out).with_context(|| format!("Create {}", out))?;
            s.tracker.export_report(file)?;
        }
        "json" => {
            let items: Vec<_> = s
                .tracker
                .ledger()
                .records()
                .map(|r| {
                    json!({
                        "type": r.kind.as_str(), "date": r.date, "category": r.category,
                        "description": r.description, "amount": r.amount.to_string()
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    tracing::info!(out = %out, format = %fmt, "exported ledger");
    println!("Exported ledger to {}", out);
    Ok(())
}
