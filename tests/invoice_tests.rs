// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::aggregate::month_balance;
use billfold::error::LedgerError;
use billfold::invoice::{card_statement, invoice_total};
use billfold::models::{Card, LedgerStore, Transaction, PAYMENTS_CATEGORY};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn billed(id: &str, desc: &str, amount: &str, date: Option<NaiveDate>, method: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: desc.to_string(),
        amount: dec(amount),
        date,
        category: Some("Shopping".to_string()),
        paid: None,
        payment_method: Some(method.to_string()),
    }
}

fn card(closing: u32, limit: &str) -> Card {
    Card {
        id: "card_1".to_string(),
        name: "Violet".to_string(),
        limit: dec(limit),
        closing,
        color: "#111".to_string(),
    }
}

fn store_with_card(closing: u32, limit: &str) -> LedgerStore {
    let mut store = LedgerStore::default();
    store.cards.push(card(closing, limit));
    store
}

// marco/abril indexes in the fixed calendar
const MARCO: usize = 2;
const ABRIL: usize = 3;

#[test]
fn statement_spans_two_months_split_at_closing_day() {
    let mut store = store_with_card(20, "1000");
    let mar = store.bucket_mut(MARCO);
    mar.variable
        .push(billed("a", "Market", "50", Some(date(2025, 3, 15)), "card_1"));
    mar.variable
        .push(billed("b", "Shoes", "30", Some(date(2025, 3, 25)), "card_1"));
    store
        .bucket_mut(ABRIL)
        .variable
        .push(billed("c", "Books", "40", Some(date(2025, 4, 10)), "card_1"));

    let card = store.cards[0].clone();
    // 30 carried over from marco (day > 20) + 40 from abril (day <= 20)
    assert_eq!(invoice_total(&store, &card, ABRIL), dec("70"));
    assert_eq!(invoice_total(&store, &card, MARCO), dec("50"));
}

#[test]
fn transaction_on_closing_day_bills_current_cycle() {
    let mut store = store_with_card(20, "1000");
    store
        .bucket_mut(ABRIL)
        .variable
        .push(billed("a", "Market", "25", Some(date(2025, 4, 20)), "card_1"));

    let card = store.cards[0].clone();
    assert_eq!(invoice_total(&store, &card, ABRIL), dec("25"));
    // and never the next statement
    assert_eq!(invoice_total(&store, &card, ABRIL + 1), Decimal::ZERO);
}

#[test]
fn day_after_closing_bills_the_following_month() {
    let mut store = store_with_card(20, "1000");
    store
        .bucket_mut(MARCO)
        .variable
        .push(billed("a", "Market", "33", Some(date(2025, 3, 21)), "card_1"));

    let card = store.cards[0].clone();
    assert_eq!(invoice_total(&store, &card, MARCO), Decimal::ZERO);
    assert_eq!(invoice_total(&store, &card, ABRIL), dec("33"));
}

#[test]
fn december_carries_into_january() {
    let mut store = store_with_card(10, "1000");
    store
        .bucket_mut(11)
        .variable
        .push(billed("a", "Gifts", "120", Some(date(2024, 12, 15)), "card_1"));

    let card = store.cards[0].clone();
    assert_eq!(invoice_total(&store, &card, 0), dec("120"));
}

#[test]
fn undated_and_foreign_entries_never_bill() {
    let mut store = store_with_card(20, "1000");
    let mar = store.bucket_mut(MARCO);
    mar.variable
        .push(billed("a", "No date", "10", None, "card_1"));
    mar.variable
        .push(billed("b", "Other card", "20", Some(date(2025, 3, 5)), "card_2"));
    mar.variable
        .push(billed("c", "Cash", "30", Some(date(2025, 3, 5)), "debit"));

    let card = store.cards[0].clone();
    assert_eq!(invoice_total(&store, &card, MARCO), Decimal::ZERO);
}

#[test]
fn unset_closing_day_closes_at_month_end() {
    let mut store = store_with_card(0, "1000");
    store
        .bucket_mut(MARCO)
        .variable
        .push(billed("a", "Market", "45", Some(date(2025, 3, 31)), "card_1"));

    let card = store.cards[0].clone();
    assert_eq!(invoice_total(&store, &card, MARCO), dec("45"));
    assert_eq!(invoice_total(&store, &card, ABRIL), Decimal::ZERO);
}

#[test]
fn statement_reports_available_credit_and_utilization() {
    let mut store = store_with_card(20, "1000");
    store
        .bucket_mut(ABRIL)
        .variable
        .push(billed("a", "Market", "250", Some(date(2025, 4, 5)), "card_1"));

    let card = store.cards[0].clone();
    let st = card_statement(&store, &card, ABRIL);
    assert_eq!(st.invoice_total, dec("250"));
    assert_eq!(st.available_credit, dec("750"));
    assert_eq!(st.utilization_pct, dec("25"));
}

#[test]
fn utilization_is_capped_at_one_hundred() {
    let mut store = store_with_card(20, "100");
    store
        .bucket_mut(ABRIL)
        .variable
        .push(billed("a", "Market", "250", Some(date(2025, 4, 5)), "card_1"));

    let card = store.cards[0].clone();
    let st = card_statement(&store, &card, ABRIL);
    assert_eq!(st.utilization_pct, dec("100"));
    assert_eq!(st.available_credit, dec("-150"));
}

#[test]
fn zero_limit_reads_as_fully_used_once_billed() {
    let mut store = store_with_card(20, "0");
    let card = store.cards[0].clone();
    assert_eq!(
        card_statement(&store, &card, ABRIL).utilization_pct,
        Decimal::ZERO
    );

    store
        .bucket_mut(ABRIL)
        .variable
        .push(billed("a", "Market", "10", Some(date(2025, 4, 5)), "card_1"));
    assert_eq!(
        card_statement(&store, &card, ABRIL).utilization_pct,
        dec("100")
    );
}

#[test]
fn pay_invoice_appends_a_debit_payment() {
    let mut store = store_with_card(20, "1000");
    store
        .bucket_mut(ABRIL)
        .variable
        .push(billed("a", "Market", "70", Some(date(2025, 4, 10)), "card_1"));

    let (_, before) = month_balance(&store, ABRIL);
    store
        .pay_invoice("card_1", ABRIL, dec("70"), date(2025, 4, 22))
        .unwrap();

    let payment = store.bucket(ABRIL).variable.last().unwrap();
    assert_eq!(payment.description, "Card payment Violet");
    assert_eq!(payment.category.as_deref(), Some(PAYMENTS_CATEGORY));
    assert_eq!(payment.payment_method.as_deref(), Some("debit"));
    assert!(payment.is_cash());

    let (_, after) = month_balance(&store, ABRIL);
    assert_eq!(after, before - dec("70"));

    // the billed transactions stay put, so the cycle recomputes unchanged
    let card = store.cards[0].clone();
    assert_eq!(invoice_total(&store, &card, ABRIL), dec("70"));
}

#[test]
fn paying_twice_records_two_independent_payments() {
    let mut store = store_with_card(20, "1000");
    store
        .bucket_mut(ABRIL)
        .variable
        .push(billed("a", "Market", "70", Some(date(2025, 4, 10)), "card_1"));

    let (_, before) = month_balance(&store, ABRIL);
    store
        .pay_invoice("card_1", ABRIL, dec("70"), date(2025, 4, 22))
        .unwrap();
    store
        .pay_invoice("card_1", ABRIL, dec("70"), date(2025, 4, 23))
        .unwrap();

    let payments: Vec<_> = store
        .bucket(ABRIL)
        .variable
        .iter()
        .filter(|t| t.category.as_deref() == Some(PAYMENTS_CATEGORY))
        .collect();
    assert_eq!(payments.len(), 2);
    assert_ne!(payments[0].id, payments[1].id);

    let (_, after) = month_balance(&store, ABRIL);
    assert_eq!(after, before - dec("140"));
}

#[test]
fn pay_invoice_rejects_an_empty_invoice() {
    let mut store = store_with_card(20, "1000");
    let before = store.clone();
    let err = store
        .pay_invoice("card_1", ABRIL, Decimal::ZERO, date(2025, 4, 22))
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert_eq!(store, before);
}

#[test]
fn pay_invoice_requires_a_known_card() {
    let mut store = LedgerStore::default();
    let err = store
        .pay_invoice("card_9", ABRIL, dec("10"), date(2025, 4, 22))
        .unwrap_err();
    assert_eq!(err, LedgerError::CardNotFound("card_9".to_string()));
}
