// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn month_arg() -> Arg {
    Arg::new("month")
        .short('m')
        .long("month")
        .required(true)
        .help("Ledger month (name or 1-12)")
}

fn kind_arg() -> Arg {
    Arg::new("kind")
        .short('k')
        .long("kind")
        .required(true)
        .help("Transaction kind: fixed|variable|income")
}

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn tx_form_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("desc")
            .long("desc")
            .required(true)
            .help("Description"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Amount (decimal, greater than zero)"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .help("Date YYYY-MM-DD (variable only)"),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .help("Category (variable only)"),
    )
    .arg(
        Arg::new("method")
            .long("method")
            .help("Payment method: debit or a card name/id (variable only)"),
    )
    .arg(
        Arg::new("paid")
            .long("paid")
            .action(ArgAction::SetTrue)
            .help("Mark as paid in this month (fixed only)"),
    )
    .arg(
        Arg::new("months")
            .long("months")
            .help("Months carrying this fixed expense: comma-separated names/numbers, or 'all'"),
    )
}

pub fn build_cli() -> Command {
    Command::new("billfold")
        .version(crate_version!())
        .about("Billfold: household budgeting, monthly ledger, card invoices, and savings goals")
        .subcommand(Command::new("init").about("Initialize the data store"))
        .subcommand(
            Command::new("tx")
                .about("Monthly ledger transactions")
                .subcommand(tx_form_args(
                    Command::new("add")
                        .about("Add a transaction")
                        .arg(month_arg())
                        .arg(kind_arg()),
                ))
                .subcommand(tx_form_args(
                    Command::new("edit")
                        .about("Edit a transaction by id")
                        .arg(month_arg())
                        .arg(kind_arg())
                        .arg(Arg::new("id").long("id").required(true).help("Transaction id")),
                ))
                .subcommand(
                    Command::new("del")
                        .about("Delete a transaction by list position")
                        .arg(month_arg())
                        .arg(kind_arg())
                        .arg(
                            Arg::new("index")
                                .long("index")
                                .required(true)
                                .value_parser(clap::value_parser!(usize))
                                .help("Zero-based position in the list"),
                        ),
                )
                .subcommand(
                    Command::new("toggle")
                        .about("Toggle a fixed expense between paid and pending")
                        .arg(month_arg())
                        .arg(
                            Arg::new("index")
                                .long("index")
                                .required(true)
                                .value_parser(clap::value_parser!(usize))
                                .help("Zero-based position in the fixed list"),
                        ),
                )
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List a month's ledger")
                        .arg(month_arg())
                        .arg(
                            Arg::new("kind")
                                .short('k')
                                .long("kind")
                                .help("Limit to one kind: fixed|variable|income"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Filter the variable table by category"),
                        )
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .default_value("date")
                                .help("Sort the variable table: date|desc|cat|val"),
                        )
                        .arg(
                            Arg::new("reverse")
                                .long("reverse")
                                .action(ArgAction::SetTrue)
                                .help("Sort descending"),
                        ),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Add a goal")
                        .arg(Arg::new("name").long("name").required(true).help("Goal name"))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .required(true)
                                .help("Target amount"),
                        )
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .help("Amount already saved (default 0)"),
                        )
                        .arg(Arg::new("deadline").long("deadline").help("Deadline YYYY-MM-DD"))
                        .arg(Arg::new("icon").long("icon").help("Display icon")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a goal by id")
                        .arg(Arg::new("id").long("id").required(true).help("Goal id"))
                        .arg(Arg::new("name").long("name").required(true).help("Goal name"))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .required(true)
                                .help("Target amount"),
                        )
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .help("Amount already saved (default 0)"),
                        )
                        .arg(Arg::new("deadline").long("deadline").help("Deadline YYYY-MM-DD"))
                        .arg(Arg::new("icon").long("icon").help("Display icon")),
                )
                .subcommand(
                    Command::new("del")
                        .about("Delete a goal")
                        .arg(Arg::new("id").long("id").required(true).help("Goal id")),
                )
                .subcommand(with_json_flags(Command::new("list").about("List goals"))),
        )
        .subcommand(
            Command::new("card")
                .about("Credit cards and statements")
                .subcommand(
                    Command::new("add")
                        .about("Add a card")
                        .arg(Arg::new("name").long("name").required(true).help("Card name"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .required(true)
                                .help("Credit limit"),
                        )
                        .arg(
                            Arg::new("closing")
                                .long("closing")
                                .required(true)
                                .value_parser(clap::value_parser!(u32))
                                .help("Statement closing day (1-31)"),
                        )
                        .arg(Arg::new("color").long("color").help("Display color")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a card by id")
                        .arg(Arg::new("id").long("id").required(true).help("Card id"))
                        .arg(Arg::new("name").long("name").required(true).help("Card name"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .required(true)
                                .help("Credit limit"),
                        )
                        .arg(
                            Arg::new("closing")
                                .long("closing")
                                .required(true)
                                .value_parser(clap::value_parser!(u32))
                                .help("Statement closing day (1-31)"),
                        )
                        .arg(Arg::new("color").long("color").help("Display color")),
                )
                .subcommand(
                    Command::new("del")
                        .about("Delete a card")
                        .arg(Arg::new("id").long("id").required(true).help("Card id")),
                )
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List cards with the month's statement")
                        .arg(month_arg()),
                ))
                .subcommand(
                    Command::new("pay")
                        .about("Record an invoice payment as a debit transaction")
                        .arg(
                            Arg::new("card")
                                .long("card")
                                .required(true)
                                .help("Card name or id"),
                        )
                        .arg(month_arg())
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .help("Override the computed invoice amount"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Payment date YYYY-MM-DD (default today)"),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summary views")
                .subcommand(with_json_flags(
                    Command::new("dashboard").about("Yearly income/expense series and totals"),
                ))
                .subcommand(with_json_flags(
                    Command::new("monthly")
                        .about("A month's balances")
                        .arg(month_arg()),
                ))
                .subcommand(with_json_flags(
                    Command::new("categories")
                        .about("A month's variable spending by category")
                        .arg(month_arg()),
                )),
        )
        .subcommand(Command::new("categories").about("List suggested categories"))
        .subcommand(
            Command::new("import")
                .about("Replace the whole store from a JSON backup")
                .arg(Arg::new("path").long("path").required(true).help("Backup file")),
        )
        .subcommand(
            Command::new("export")
                .about("Write the whole store as a JSON backup")
                .arg(Arg::new("out").long("out").required(true).help("Output file")),
        )
        .subcommand(Command::new("doctor").about("Check store invariants"))
}
