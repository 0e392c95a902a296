// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{LedgerStore, MonthBucket, FALLBACK_CATEGORY, MONTHS};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-month sums. `variable_expense` is the gross figure over every
/// variable transaction; `debit_variable_expense` keeps only cash
/// (no method or "debit") entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotals {
    pub income: Decimal,
    pub fixed_expense: Decimal,
    pub variable_expense: Decimal,
    pub debit_variable_expense: Decimal,
}

impl MonthTotals {
    /// What actually left the account this month. Card-billed spending is
    /// settled later through an invoice payment, so it is excluded here.
    pub fn cash_expense(&self) -> Decimal {
        self.fixed_expense + self.debit_variable_expense
    }

    /// Total spending regardless of payment method; the dashboard figure.
    pub fn gross_expense(&self) -> Decimal {
        self.fixed_expense + self.variable_expense
    }
}

pub fn month_totals(bucket: &MonthBucket) -> MonthTotals {
    MonthTotals {
        income: bucket.income.iter().map(|t| t.amount).sum(),
        fixed_expense: bucket.fixed.iter().map(|t| t.amount).sum(),
        variable_expense: bucket.variable.iter().map(|t| t.amount).sum(),
        debit_variable_expense: bucket
            .variable
            .iter()
            .filter(|t| t.is_cash())
            .map(|t| t.amount)
            .sum(),
    }
}

/// Cash carried into `month_idx`: a strict prefix sum of
/// `income - cash_expense` over the calendar months before it.
/// `running_balance(store, 0)` is always zero.
pub fn running_balance(store: &LedgerStore, month_idx: usize) -> Decimal {
    (0..month_idx)
        .map(|i| {
            let t = month_totals(store.bucket(i));
            t.income - t.cash_expense()
        })
        .sum()
}

/// `(previous_balance, balance)` for the month: what was carried in, and
/// what is left after this month's income and cash expense.
pub fn month_balance(store: &LedgerStore, month_idx: usize) -> (Decimal, Decimal) {
    let previous = running_balance(store, month_idx);
    let t = month_totals(store.bucket(month_idx));
    (previous, previous + t.income - t.cash_expense())
}

/// Variable spending grouped by category, uncategorized entries under the
/// fallback label.
pub fn category_breakdown(bucket: &MonthBucket) -> BTreeMap<String, Decimal> {
    let mut out: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in &bucket.variable {
        let cat = t
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(FALLBACK_CATEGORY);
        *out.entry(cat.to_string()).or_insert(Decimal::ZERO) += t.amount;
    }
    out
}

/// Per-month series for the dashboard. Expense here is gross (fixed plus
/// all variable, card-billed included) — deliberately not the cash figure
/// the running balance uses: the dashboard shows total spending, the
/// monthly view shows money movement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSeries {
    pub income: Vec<Decimal>,
    pub expense: Vec<Decimal>,
}

impl DashboardSeries {
    pub fn total_income(&self) -> Decimal {
        self.income.iter().copied().sum()
    }

    pub fn total_expense(&self) -> Decimal {
        self.expense.iter().copied().sum()
    }

    pub fn balance(&self) -> Decimal {
        self.total_income() - self.total_expense()
    }

    /// Share of income kept, as a percentage; zero when there is no income.
    pub fn savings_rate_pct(&self) -> Decimal {
        let income = self.total_income();
        if income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.balance() / income * Decimal::ONE_HUNDRED
    }
}

pub fn dashboard_series(store: &LedgerStore) -> DashboardSeries {
    let mut income = Vec::with_capacity(MONTHS.len());
    let mut expense = Vec::with_capacity(MONTHS.len());
    for i in 0..MONTHS.len() {
        let t = month_totals(store.bucket(i));
        income.push(t.income);
        expense.push(t.gross_expense());
    }
    DashboardSeries { income, expense }
}
