// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::aggregate::{
    category_breakdown, dashboard_series, month_balance, month_totals, running_balance,
};
use billfold::models::{LedgerStore, Transaction};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: &str, desc: &str, amount: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: desc.to_string(),
        amount: dec(amount),
        date: None,
        category: None,
        paid: None,
        payment_method: None,
    }
}

fn variable(id: &str, desc: &str, amount: &str, category: Option<&str>, method: Option<&str>) -> Transaction {
    Transaction {
        category: category.map(|c| c.to_string()),
        payment_method: method.map(|m| m.to_string()),
        ..tx(id, desc, amount)
    }
}

/// janeiro: income 1000, fixed 200, debit variable 100, card-billed 50.
fn seeded() -> LedgerStore {
    let mut store = LedgerStore::default();
    let jan = store.bucket_mut(0);
    jan.income.push(tx("i1", "Salary", "1000"));
    jan.fixed.push(tx("f1", "Rent", "200"));
    jan.variable
        .push(variable("v1", "Groceries", "100", Some("Food"), Some("debit")));
    jan.variable
        .push(variable("v2", "Shoes", "50", Some("Shopping"), Some("card_1")));
    store
}

#[test]
fn month_totals_sums_each_list() {
    let store = seeded();
    let t = month_totals(store.bucket(0));
    assert_eq!(t.income, dec("1000"));
    assert_eq!(t.fixed_expense, dec("200"));
    assert_eq!(t.variable_expense, dec("150"));
    assert_eq!(t.debit_variable_expense, dec("100"));
    assert_eq!(t.cash_expense(), dec("300"));
    assert_eq!(t.gross_expense(), dec("350"));
    assert!(t.income >= Decimal::ZERO);
}

#[test]
fn missing_method_counts_as_cash() {
    let mut store = LedgerStore::default();
    store
        .bucket_mut(0)
        .variable
        .push(variable("v1", "Market", "40", None, None));
    let t = month_totals(store.bucket(0));
    assert_eq!(t.debit_variable_expense, dec("40"));
}

#[test]
fn running_balance_starts_at_zero() {
    assert_eq!(running_balance(&seeded(), 0), Decimal::ZERO);
}

#[test]
fn running_balance_excludes_card_billed_spending() {
    // 1000 - (200 + 100); the card-billed 50 settles through an invoice
    let store = seeded();
    assert_eq!(running_balance(&store, 1), dec("700"));
}

#[test]
fn running_balance_recurrence_holds() {
    let mut store = seeded();
    let feb = store.bucket_mut(1);
    feb.income.push(tx("i2", "Salary", "1000"));
    feb.fixed.push(tx("f2", "Rent", "250"));
    let mar = store.bucket_mut(2);
    mar.variable
        .push(variable("v3", "Fuel", "80", Some("Transport"), None));

    for k in 0..4 {
        let t = month_totals(store.bucket(k));
        assert_eq!(
            running_balance(&store, k + 1),
            running_balance(&store, k) + t.income - t.cash_expense()
        );
    }
}

#[test]
fn month_balance_carries_previous_months() {
    let mut store = seeded();
    store.bucket_mut(1).income.push(tx("i2", "Bonus", "300"));
    let (previous, balance) = month_balance(&store, 1);
    assert_eq!(previous, dec("700"));
    assert_eq!(balance, dec("1000"));
}

#[test]
fn dashboard_expense_is_gross() {
    let store = seeded();
    let series = dashboard_series(&store);
    // the card-billed 50 is in the dashboard figure but not in cash flow
    assert_eq!(series.expense[0], dec("350"));
    assert_eq!(series.income[0], dec("1000"));
    assert_eq!(series.income.len(), 12);
    assert_eq!(series.expense.len(), 12);
    assert_eq!(series.balance(), dec("650"));
    assert_eq!(series.savings_rate_pct(), dec("65"));
}

#[test]
fn savings_rate_is_zero_without_income() {
    let store = LedgerStore::default();
    assert_eq!(dashboard_series(&store).savings_rate_pct(), Decimal::ZERO);
}

#[test]
fn breakdown_groups_by_category_with_fallback() {
    let mut store = seeded();
    store
        .bucket_mut(0)
        .variable
        .push(variable("v3", "Misc", "10", None, None));
    store
        .bucket_mut(0)
        .variable
        .push(variable("v4", "Snacks", "15", Some("Food"), None));

    let breakdown = category_breakdown(store.bucket(0));
    assert_eq!(breakdown["Food"], dec("115"));
    assert_eq!(breakdown["Shopping"], dec("50"));
    assert_eq!(breakdown["General"], dec("10"));
}
