// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{month_index, LedgerStore, TransactionKind, MONTHS};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Months are addressed by their ledger name (case-insensitive) or by
/// number 1-12; returns the calendar index.
pub fn parse_month(s: &str) -> Result<usize> {
    if let Some(idx) = month_index(s) {
        return Ok(idx);
    }
    if let Ok(n) = s.trim().parse::<usize>() {
        if (1..=12).contains(&n) {
            return Ok(n - 1);
        }
    }
    Err(anyhow!(
        "Invalid month '{}', expected one of {} or 1-12",
        s,
        MONTHS.join(", ")
    ))
}

pub fn parse_kind(s: &str) -> Result<TransactionKind> {
    TransactionKind::parse(s)
        .ok_or_else(|| anyhow!("Invalid kind '{}', expected fixed|variable|income", s))
}

/// Comma-separated month selection for fixed expenses; `all` selects every
/// month.
pub fn parse_month_list(s: &str) -> Result<Vec<usize>> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok((0..MONTHS.len()).collect());
    }
    let mut out = Vec::new();
    for part in s.split(',') {
        let idx = parse_month(part)?;
        if !out.contains(&idx) {
            out.push(idx);
        }
    }
    Ok(out)
}

/// Resolve a `--method` value to what the ledger stores: `debit` as-is,
/// anything else as the id of an existing card.
pub fn resolve_method(store: &LedgerStore, s: &str) -> Result<String> {
    if s.eq_ignore_ascii_case("debit") {
        return Ok("debit".to_string());
    }
    let card = store
        .find_card(s)
        .ok_or_else(|| anyhow!("Card '{}' not found", s))?;
    Ok(card.id.clone())
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("R$ {}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
