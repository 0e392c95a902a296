// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{category_breakdown, dashboard_series, month_balance, month_totals};
use crate::models::{LedgerStore, MONTHS};
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("dashboard", sub)) => dashboard(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct DashboardReport {
    pub months: Vec<DashboardMonthRow>,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub savings_rate_pct: Decimal,
}

#[derive(Serialize)]
pub struct DashboardMonthRow {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub fn dashboard_report(store: &LedgerStore) -> DashboardReport {
    let series = dashboard_series(store);
    let months = MONTHS
        .iter()
        .enumerate()
        .map(|(i, name)| DashboardMonthRow {
            month: name.to_string(),
            income: series.income[i],
            expense: series.expense[i],
            net: series.income[i] - series.expense[i],
        })
        .collect();
    DashboardReport {
        months,
        total_income: series.total_income(),
        total_expense: series.total_expense(),
        balance: series.balance(),
        savings_rate_pct: series.savings_rate_pct(),
    }
}

fn dashboard(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let report = dashboard_report(store);
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let data = report
            .months
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    fmt_money(&r.income),
                    fmt_money(&r.expense),
                    fmt_money(&r.net),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Net"], data)
        );
        println!("Total income:  {}", fmt_money(&report.total_income));
        println!("Total expense: {}", fmt_money(&report.total_expense));
        println!("Balance:       {}", fmt_money(&report.balance));
        println!("Savings rate:  {:.1}%", report.savings_rate_pct);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct MonthlyReport {
    pub month: String,
    pub previous_balance: Decimal,
    pub income: Decimal,
    pub cash_expense: Decimal,
    pub balance: Decimal,
}

pub fn monthly_report(store: &LedgerStore, month_idx: usize) -> MonthlyReport {
    let (previous_balance, balance) = month_balance(store, month_idx);
    let totals = month_totals(store.bucket(month_idx));
    MonthlyReport {
        month: MONTHS[month_idx].to_string(),
        previous_balance,
        income: totals.income,
        cash_expense: totals.cash_expense(),
        balance,
    }
}

fn monthly(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let report = monthly_report(store, month_idx);
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        let data = vec![
            vec![
                "Previous balance".to_string(),
                fmt_money(&report.previous_balance),
            ],
            vec!["Income".to_string(), fmt_money(&report.income)],
            vec!["Cash expense".to_string(), fmt_money(&report.cash_expense)],
            vec!["Balance".to_string(), fmt_money(&report.balance)],
        ];
        let title = report.month.to_uppercase();
        println!("{}", pretty_table(&[title.as_str(), ""], data));
    }
    Ok(())
}

fn categories(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let breakdown = category_breakdown(store.bucket(month_idx));

    let mut items: Vec<(String, Decimal)> = breakdown.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));

    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let data = items
            .iter()
            .map(|(cat, amt)| vec![cat.clone(), fmt_money(amt)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}
