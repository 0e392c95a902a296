// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::GoalInput;
use crate::models::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => save_form(store, sub, false)?,
        Some(("edit", sub)) => save_form(store, sub, true)?,
        Some(("del", sub)) => del(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn save_form(store: &mut LedgerStore, sub: &clap::ArgMatches, editing: bool) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let current = sub
        .get_one::<String>("current")
        .map(|s| parse_decimal(s))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    let deadline = sub
        .get_one::<String>("deadline")
        .map(|s| parse_date(s))
        .transpose()?;
    let icon = sub.get_one::<String>("icon").map(|s| s.to_string());
    let id = if editing {
        Some(sub.get_one::<String>("id").unwrap().to_string())
    } else {
        None
    };

    store.add_or_update_goal(GoalInput {
        id,
        name: name.clone(),
        target,
        current,
        deadline,
        icon,
    })?;
    println!("Saved goal '{}' ({})", name, fmt_money(&target));
    Ok(())
}

fn del(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let removed = store.delete_goal(id)?;
    println!("Deleted goal '{}'", removed.name);
    Ok(())
}

#[derive(Serialize)]
pub struct GoalRow {
    pub id: String,
    pub name: String,
    pub progress_pct: String,
    pub current: String,
    pub target: String,
    pub deadline: String,
    pub per_month: String,
}

pub fn goal_rows(store: &LedgerStore, today: chrono::NaiveDate) -> Vec<GoalRow> {
    store
        .goals
        .iter()
        .map(|g| {
            let per_month = if g.remaining() <= Decimal::ZERO {
                "done".to_string()
            } else if g.is_overdue(today) {
                "overdue".to_string()
            } else {
                g.monthly_suggestion(today)
                    .map(|s| fmt_money(&s))
                    .unwrap_or_else(|| "-".to_string())
            };
            GoalRow {
                id: g.id.clone(),
                name: g.name.clone(),
                progress_pct: format!("{:.1}%", g.progress_pct()),
                current: fmt_money(&g.current),
                target: fmt_money(&g.target),
                deadline: g
                    .deadline
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into()),
                per_month,
            }
        })
        .collect()
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Local::now().date_naive();
    let rows = goal_rows(store, today);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.progress_pct.clone(),
                    r.current.clone(),
                    r.target.clone(),
                    r.deadline.clone(),
                    r.per_month.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Goal", "Progress", "Saved", "Target", "Deadline", "Per month"],
                data,
            )
        );
    }
    Ok(())
}
