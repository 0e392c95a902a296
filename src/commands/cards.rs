// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::invoice::card_statement;
use crate::ledger::CardInput;
use crate::models::{LedgerStore, MONTHS};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
use anyhow::{anyhow, Result};
use serde::Serialize;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => save_form(store, sub, false)?,
        Some(("edit", sub)) => save_form(store, sub, true)?,
        Some(("del", sub)) => del(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("pay", sub)) => pay(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn save_form(store: &mut LedgerStore, sub: &clap::ArgMatches, editing: bool) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let limit = parse_decimal(sub.get_one::<String>("limit").unwrap())?;
    let closing = *sub.get_one::<u32>("closing").unwrap();
    let color = sub.get_one::<String>("color").map(|s| s.to_string());
    let id = if editing {
        Some(sub.get_one::<String>("id").unwrap().to_string())
    } else {
        None
    };

    store.add_or_update_card(CardInput {
        id,
        name: name.clone(),
        limit,
        closing,
        color,
    })?;
    println!("Saved card '{}' (closes day {})", name, closing);
    Ok(())
}

fn del(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let removed = store.delete_card(id)?;
    println!("Deleted card '{}'", removed.name);
    Ok(())
}

#[derive(Serialize)]
pub struct CardRow {
    pub id: String,
    pub name: String,
    pub closing: u32,
    pub invoice: String,
    pub available: String,
    pub used_pct: String,
}

pub fn card_rows(store: &LedgerStore, month_idx: usize) -> Vec<CardRow> {
    store
        .cards
        .iter()
        .map(|c| {
            let st = card_statement(store, c, month_idx);
            CardRow {
                id: c.id.clone(),
                name: c.name.clone(),
                closing: c.closing_day(),
                invoice: fmt_money(&st.invoice_total),
                available: fmt_money(&st.available_credit),
                used_pct: format!("{:.0}%", st.utilization_pct),
            }
        })
        .collect()
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let rows = card_rows(store, month_idx);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        println!("Statements for {}", MONTHS[month_idx]);
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.closing.to_string(),
                    r.invoice.clone(),
                    r.available.clone(),
                    r.used_pct.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Card", "Closing", "Invoice", "Available", "Used"],
                data,
            )
        );
    }
    Ok(())
}

fn pay(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let month_idx = parse_month(sub.get_one::<String>("month").unwrap())?;
    let key = sub.get_one::<String>("card").unwrap();
    let card = store
        .find_card(key)
        .ok_or_else(|| anyhow!("Card '{}' not found", key))?;
    let card_id = card.id.clone();
    let card_name = card.name.clone();

    let amount = match sub.get_one::<String>("amount") {
        Some(s) => parse_decimal(s)?,
        None => card_statement(store, card, month_idx).invoice_total,
    };
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    store.pay_invoice(&card_id, month_idx, amount, date)?;
    println!(
        "Payment of {} recorded against '{}' in {}",
        fmt_money(&amount),
        card_name,
        MONTHS[month_idx]
    );
    Ok(())
}
