// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn entry_command(name: &'static str, about: &'static str, categories: &[&str]) -> Command {
    let add = Command::new("add")
        .about(format!("Record a new {}", name))
        .arg(
            Arg::new("date")
                .long("date")
                .help("YYYY-MM-DD (defaults to today)"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .required(true)
                .help(format!("One of: {}", categories.join(", "))),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .default_value(""),
        )
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(true)
                .allow_hyphen_values(true),
        );
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(add)
        .subcommand(json_args(Command::new("list").about("List in entry order")))
}

pub fn build_cli() -> Command {
    Command::new("budgethive")
        .version(clap::crate_version!())
        .about("Personal income and expense tracker with goals and reminders")
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("State file (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("init").about("Create data and config directories"))
        .subcommand(entry_command(
            "expense",
            "Expenses",
            crate::models::EXPENSE_CATEGORIES,
        ))
        .subcommand(entry_command(
            "income",
            "Income",
            crate::models::INCOME_CATEGORIES,
        ))
        .subcommand(
            Command::new("reminder")
                .about("Date-based reminders")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Add a reminder; all fields must be filled in")
                        .arg(Arg::new("date").long("date").default_value(""))
                        .arg(Arg::new("category").long("category").default_value(""))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .default_value(""),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .default_value("")
                                .allow_hyphen_values(true),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("")
                                .help("Expense or Income"),
                        ),
                )
                .subcommand(json_args(Command::new("list")))
                .subcommand(json_args(
                    Command::new("due")
                        .about("Reminders due today or within the next days")
                        .arg(Arg::new("today").long("today").help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("days")
                                .long("days")
                                .value_parser(value_parser!(u32))
                                .default_value("1"),
                        ),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Saving and budget goals")
                .subcommand_required(true)
                .subcommand(
                    Command::new("saving")
                        .arg(Arg::new("amount").required(true).allow_hyphen_values(true)),
                )
                .subcommand(
                    Command::new("budget")
                        .arg(Arg::new("amount").required(true).allow_hyphen_values(true)),
                )
                .subcommand(json_args(Command::new("show"))),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set").arg(
                        Arg::new("symbol")
                            .required(true)
                            .help("₹, $, €, £, JPY or an ISO code"),
                    ),
                )
                .subcommand(Command::new("show"))
                .subcommand(Command::new("list")),
        )
        .subcommand(json_args(
            Command::new("balance").about("Remaining balance, totals and goals"),
        ))
        .subcommand(
            Command::new("report")
                .subcommand_required(true)
                .subcommand(json_args(
                    Command::new("by-category").arg(
                        Arg::new("type")
                            .long("type")
                            .default_value("expense")
                            .help("expense or income"),
                    ),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write a one-way report of all ledger records")
                .arg(Arg::new("format").long("format").default_value("csv"))
                .arg(Arg::new("out").long("out").required(true)),
        )
}
