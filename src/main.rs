// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use budgethive::commands::{self, Session};
use budgethive::models::RecordKind;
use budgethive::{cli, config, logging, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::init_tracing(matches.get_flag("verbose"));

    let paths = config::Paths::resolve(matches.get_one::<PathBuf>("data").map(PathBuf::as_path))?;

    if let Some(("init", _)) = matches.subcommand() {
        println!("State file: {}", paths.data_file.display());
        println!("Settings:   {}", paths.settings_file.display());
        return Ok(());
    }

    let mut session = Session::open(paths)?;
    commands::reminders::print_due_notices(&session, utils::today());

    match matches.subcommand() {
        Some(("expense", sub)) => commands::entries::handle(&mut session, RecordKind::Expense, sub)?,
        Some(("income", sub)) => commands::entries::handle(&mut session, RecordKind::Income, sub)?,
        Some(("reminder", sub)) => commands::reminders::handle(&mut session, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&mut session, sub)?,
        Some(("currency", sub)) => commands::currency::handle(&mut session, sub)?,
        Some(("balance", sub)) => commands::balance::handle(&session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
