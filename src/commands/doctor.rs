// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{month_index, LedgerStore, TransactionKind, MONTHS};
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle(store: &LedgerStore) -> Result<()> {
    let rows = issues(store);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn issues(store: &LedgerStore) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Bucket invariant: all twelve months, nothing else
    for name in MONTHS {
        if !store.months.contains_key(name) {
            rows.push(vec!["missing_month_bucket".into(), name.to_string()]);
        }
    }
    for name in store.months.keys() {
        if month_index(name).is_none() {
            rows.push(vec!["unknown_month_key".into(), name.clone()]);
        }
    }

    // 2) Per-transaction checks
    for name in MONTHS.iter() {
        let Some(bucket) = store.months.get(*name) else {
            continue;
        };
        for kind in [
            TransactionKind::Fixed,
            TransactionKind::Variable,
            TransactionKind::Income,
        ] {
            for (idx, t) in bucket.list(kind).iter().enumerate() {
                if t.amount < Decimal::ZERO {
                    rows.push(vec![
                        "negative_amount".into(),
                        format!("{}/{}[{}] {}", name, kind.as_str(), idx, t.description),
                    ]);
                }
            }
        }
        for (idx, t) in bucket.fixed.iter().enumerate() {
            if t.paid.is_none() {
                rows.push(vec![
                    "fixed_missing_paid".into(),
                    format!("{}[{}] {}", name, idx, t.description),
                ]);
            }
        }
        for t in &bucket.variable {
            if let Some(method) = t.payment_method.as_deref() {
                if method != "debit" && store.card(method).is_none() {
                    rows.push(vec![
                        "unknown_card_method".into(),
                        format!("{} {} -> {}", name, t.description, method),
                    ]);
                }
            }
        }

        // Duplicate descriptions break the cross-month fixed-expense match
        // (first one wins); surface them instead of guessing.
        let mut seen = HashSet::new();
        for t in &bucket.fixed {
            if !seen.insert(t.description.as_str()) {
                rows.push(vec![
                    "ambiguous_fixed_desc".into(),
                    format!("{} '{}'", name, t.description),
                ]);
            }
        }
    }

    // 3) Cards and goals
    for c in &store.cards {
        if c.closing == 0 || c.closing > 31 {
            rows.push(vec![
                "card_closing_out_of_range".into(),
                format!("{} (closing {})", c.name, c.closing),
            ]);
        }
    }
    for g in &store.goals {
        if g.target <= Decimal::ZERO {
            rows.push(vec![
                "goal_target_not_positive".into(),
                format!("{} (target {})", g.name, g.target),
            ]);
        }
    }

    rows
}
