// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::TransactionInput;
use crate::models::{LedgerStore, MonthBucket, TransactionKind, MONTHS};
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_kind, parse_month,
    parse_month_list, pretty_table, resolve_method,
};
use anyhow::{anyhow, Result};
use serde::Serialize;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => save_form(store, sub, false)?,
        Some(("edit", sub)) => save_form(store, sub, true)?,
        Some(("del", sub)) => del(store, sub)?,
        Some(("toggle", sub)) => toggle(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn save_form(store: &mut LedgerStore, sub: &clap::ArgMatches, editing: bool) -> Result<()> {
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let description = sub.get_one::<String>("desc").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?;
    let category = sub.get_one::<String>("category").map(|s| s.to_string());
    let payment_method = sub
        .get_one::<String>("method")
        .map(|s| resolve_method(store, s))
        .transpose()?;
    let paid = sub.get_flag("paid");
    let mut selected_months = sub
        .get_one::<String>("months")
        .map(|s| parse_month_list(s))
        .transpose()?;

    let id = if editing {
        Some(sub.get_one::<String>("id").unwrap().to_string())
    } else {
        None
    };

    // Editing a fixed expense snapshots the description it currently has;
    // that snapshot, not the new name, is what locates the expense in the
    // other months. An omitted --months keeps the months that carry it.
    let mut original_description = None;
    if kind == TransactionKind::Fixed {
        if let Some(id) = id.as_deref() {
            let original = store
                .bucket(month_idx)
                .fixed
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.description.clone())
                .ok_or_else(|| {
                    anyhow!("No fixed entry with id '{}' in {}", id, MONTHS[month_idx])
                })?;
            if selected_months.is_none() {
                selected_months = Some(months_carrying(store, &original));
            }
            original_description = Some(original);
        }
    }

    let month_count = selected_months.as_ref().map(|m| m.len()).unwrap_or(1);
    store.add_or_update_transaction(
        month_idx,
        kind,
        TransactionInput {
            id,
            description: description.clone(),
            amount,
            date,
            category,
            paid,
            payment_method,
            selected_months,
            original_description,
        },
    )?;

    match kind {
        TransactionKind::Fixed => println!(
            "Saved fixed expense '{}' ({}) across {} month(s)",
            description,
            fmt_money(&amount),
            month_count
        ),
        _ => println!(
            "Saved {} '{}' ({}) in {}",
            kind.as_str(),
            description,
            fmt_money(&amount),
            MONTHS[month_idx]
        ),
    }
    Ok(())
}

fn months_carrying(store: &LedgerStore, description: &str) -> Vec<usize> {
    (0..MONTHS.len())
        .filter(|&i| {
            store
                .bucket(i)
                .fixed
                .iter()
                .any(|t| t.description == description)
        })
        .collect()
}

fn del(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let kind = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let index = *sub.get_one::<usize>("index").unwrap();
    let removed = store.delete_transaction(month_idx, kind, index)?;
    println!(
        "Deleted {} '{}' from {}",
        kind.as_str(),
        removed.description,
        MONTHS[month_idx]
    );
    Ok(())
}

fn toggle(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let index = *sub.get_one::<usize>("index").unwrap();
    let paid = store.toggle_fixed_paid(month_idx, index)?;
    println!(
        "Marked fixed entry {} in {} as {}",
        index,
        MONTHS[month_idx],
        if paid { "PAID" } else { "PENDING" }
    );
    Ok(())
}

#[derive(Serialize)]
pub struct FixedRow {
    pub index: usize,
    pub status: String,
    pub desc: String,
    pub amount: String,
}

#[derive(Serialize)]
pub struct VariableRow {
    pub index: usize,
    pub date: String,
    pub desc: String,
    pub category: String,
    pub method: String,
    pub amount: String,
}

#[derive(Serialize)]
pub struct IncomeRow {
    pub index: usize,
    pub desc: String,
    pub amount: String,
}

#[derive(Serialize)]
pub struct MonthListing {
    pub fixed: Vec<FixedRow>,
    pub variable: Vec<VariableRow>,
    pub income: Vec<IncomeRow>,
}

pub fn fixed_rows(bucket: &MonthBucket) -> Vec<FixedRow> {
    bucket
        .fixed
        .iter()
        .enumerate()
        .map(|(index, t)| FixedRow {
            index,
            status: if t.paid.unwrap_or(false) {
                "PAID".into()
            } else {
                "PEND".into()
            },
            desc: t.description.clone(),
            amount: fmt_money(&t.amount),
        })
        .collect()
}

/// The variable table keeps each row's position in the underlying list (the
/// delete key) stable across filtering and sorting.
pub fn variable_rows(
    store: &LedgerStore,
    bucket: &MonthBucket,
    category: Option<&str>,
    sort: &str,
    reverse: bool,
) -> Result<Vec<VariableRow>> {
    let mut display: Vec<(usize, &crate::models::Transaction)> =
        bucket.variable.iter().enumerate().collect();

    if let Some(cat) = category {
        display.retain(|(_, t)| t.category.as_deref() == Some(cat));
    }

    match sort {
        "date" => display.sort_by_key(|(_, t)| t.date),
        "desc" => display.sort_by_key(|(_, t)| t.description.to_lowercase()),
        "cat" => display.sort_by_key(|(_, t)| {
            t.category.as_deref().unwrap_or_default().to_lowercase()
        }),
        "val" => display.sort_by_key(|(_, t)| t.amount),
        other => return Err(anyhow!("Invalid sort key '{}', expected date|desc|cat|val", other)),
    }
    if reverse {
        display.reverse();
    }

    Ok(display
        .into_iter()
        .map(|(index, t)| VariableRow {
            index,
            date: t.date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
            desc: t.description.clone(),
            category: t.category.clone().unwrap_or_default(),
            method: match t.payment_method.as_deref() {
                None | Some("debit") => "debit".into(),
                Some(card_id) => store
                    .card(card_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| card_id.to_string()),
            },
            amount: fmt_money(&t.amount),
        })
        .collect())
}

pub fn income_rows(bucket: &MonthBucket) -> Vec<IncomeRow> {
    bucket
        .income
        .iter()
        .enumerate()
        .map(|(index, t)| IncomeRow {
            index,
            desc: t.description.clone(),
            amount: fmt_money(&t.amount),
        })
        .collect()
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let kind = sub
        .get_one::<String>("kind")
        .map(|s| parse_kind(s))
        .transpose()?;
    let category = sub.get_one::<String>("category").map(|s| s.as_str());
    let sort = sub.get_one::<String>("sort").unwrap();
    let reverse = sub.get_flag("reverse");

    let bucket = store.bucket(month_idx);

    match kind {
        Some(TransactionKind::Fixed) => {
            let rows = fixed_rows(bucket);
            if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
                print_fixed(&rows);
            }
        }
        Some(TransactionKind::Variable) => {
            let rows = variable_rows(store, bucket, category, sort, reverse)?;
            if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
                print_variable(&rows);
            }
        }
        Some(TransactionKind::Income) => {
            let rows = income_rows(bucket);
            if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
                print_income(&rows);
            }
        }
        None => {
            let listing = MonthListing {
                fixed: fixed_rows(bucket),
                variable: variable_rows(store, bucket, category, sort, reverse)?,
                income: income_rows(bucket),
            };
            if !maybe_print_json(json_flag, jsonl_flag, &listing)? {
                println!("{}", MONTHS[month_idx].to_uppercase());
                print_fixed(&listing.fixed);
                print_variable(&listing.variable);
                print_income(&listing.income);
            }
        }
    }
    Ok(())
}

fn print_fixed(rows: &[FixedRow]) {
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.index.to_string(),
                r.status.clone(),
                r.desc.clone(),
                r.amount.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["#", "Status", "Description", "Amount"], data)
    );
}

fn print_variable(rows: &[VariableRow]) {
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.index.to_string(),
                r.date.clone(),
                r.desc.clone(),
                r.category.clone(),
                r.method.clone(),
                r.amount.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["#", "Date", "Description", "Category", "Method", "Amount"],
            data,
        )
    );
}

fn print_income(rows: &[IncomeRow]) {
    let data = rows
        .iter()
        .map(|r| vec![r.index.to_string(), r.desc.clone(), r.amount.clone()])
        .collect();
    println!("{}", pretty_table(&["#", "Description", "Amount"], data));
}
