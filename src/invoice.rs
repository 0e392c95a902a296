// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{prev_month_index, Card, LedgerStore, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStatement {
    pub invoice_total: Decimal,
    pub available_credit: Decimal,
    pub utilization_pct: Decimal,
}

fn billed_sum<F>(list: &[Transaction], card_id: &str, day_matches: F) -> Decimal
where
    F: Fn(u32) -> bool,
{
    list.iter()
        .filter(|t| t.billed_to(card_id))
        .filter_map(|t| t.day_of_month().map(|day| (t.amount, day)))
        .filter(|(_, day)| day_matches(*day))
        .map(|(amount, _)| amount)
        .sum()
}

/// Invoice billed to `card` for the reference month's statement. The cycle
/// spans two calendar months split at the closing day: entries from the
/// previous month dated strictly after it, plus entries from the reference
/// month dated on or before it. Undated entries never bill. December wraps
/// into January's statement.
pub fn invoice_total(store: &LedgerStore, card: &Card, month_idx: usize) -> Decimal {
    let closing = card.closing_day();
    let prev = store.bucket(prev_month_index(month_idx));
    let current = store.bucket(month_idx);

    let carried = billed_sum(&prev.variable, &card.id, |day| day > closing);
    let this_cycle = billed_sum(&current.variable, &card.id, |day| day <= closing);
    carried + this_cycle
}

pub fn card_statement(store: &LedgerStore, card: &Card, month_idx: usize) -> CardStatement {
    let invoice_total = invoice_total(store, card, month_idx);
    let available_credit = card.limit - invoice_total;
    // A zero or negative limit has no meaningful ratio; report it as fully
    // used as soon as anything is billed.
    let utilization_pct = if card.limit <= Decimal::ZERO {
        if invoice_total > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    } else {
        (invoice_total / card.limit * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    };
    CardStatement {
        invoice_total,
        available_credit,
        utilization_pct,
    }
}
