// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billfold::error::LedgerError;
use billfold::ledger::TransactionInput;
use billfold::models::{LedgerStore, TransactionKind};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn fixed_input(desc: &str, amount: &str, months: &[usize]) -> TransactionInput {
    TransactionInput {
        description: desc.to_string(),
        amount: dec(amount),
        selected_months: Some(months.to_vec()),
        ..TransactionInput::default()
    }
}

fn add_fixed(store: &mut LedgerStore, desc: &str, amount: &str, months: &[usize]) {
    store
        .add_or_update_transaction(months[0], TransactionKind::Fixed, fixed_input(desc, amount, months))
        .unwrap();
}

#[test]
fn creating_a_fixed_expense_fills_every_selected_month() {
    let mut store = LedgerStore::default();
    add_fixed(&mut store, "Rent", "900", &[0, 1]);

    assert_eq!(store.bucket(0).fixed.len(), 1);
    assert_eq!(store.bucket(1).fixed.len(), 1);
    assert_eq!(store.bucket(2).fixed.len(), 0);
    assert_eq!(store.bucket(0).fixed[0].paid, Some(false));
    // independent entries, not shared ids
    assert_ne!(store.bucket(0).fixed[0].id, store.bucket(1).fixed[0].id);
}

#[test]
fn deselecting_a_month_removes_its_entry_even_after_a_rename() {
    let mut store = LedgerStore::default();
    add_fixed(&mut store, "Rent", "900", &[0, 1]);
    let jan_id = store.bucket(0).fixed[0].id.clone();

    store
        .add_or_update_transaction(
            0,
            TransactionKind::Fixed,
            TransactionInput {
                id: Some(jan_id.clone()),
                description: "Rent + utilities".to_string(),
                amount: dec("950"),
                paid: true,
                selected_months: Some(vec![0]),
                original_description: Some("Rent".to_string()),
                ..TransactionInput::default()
            },
        )
        .unwrap();

    assert!(store.bucket(1).fixed.is_empty());
    let jan = &store.bucket(0).fixed[0];
    assert_eq!(jan.id, jan_id);
    assert_eq!(jan.description, "Rent + utilities");
    assert_eq!(jan.amount, dec("950"));
    assert_eq!(jan.paid, Some(true));
}

#[test]
fn renames_propagate_via_the_original_description_snapshot() {
    let mut store = LedgerStore::default();
    add_fixed(&mut store, "Internet", "120", &[0, 1, 2]);
    let jan_id = store.bucket(0).fixed[0].id.clone();
    // fevereiro was already settled this month
    store.bucket_mut(1).fixed[0].paid = Some(true);

    store
        .add_or_update_transaction(
            0,
            TransactionKind::Fixed,
            TransactionInput {
                id: Some(jan_id),
                description: "Fiber internet".to_string(),
                amount: dec("130"),
                paid: false,
                selected_months: Some(vec![0, 1, 2]),
                original_description: Some("Internet".to_string()),
                ..TransactionInput::default()
            },
        )
        .unwrap();

    for idx in 0..3 {
        assert_eq!(store.bucket(idx).fixed[0].description, "Fiber internet");
        assert_eq!(store.bucket(idx).fixed[0].amount, dec("130"));
    }
    // each month keeps its own payment status; only the edited month
    // takes the form's flag
    assert_eq!(store.bucket(0).fixed[0].paid, Some(false));
    assert_eq!(store.bucket(1).fixed[0].paid, Some(true));
    assert_eq!(store.bucket(2).fixed[0].paid, Some(false));
}

#[test]
fn selecting_a_new_month_inserts_a_pending_entry() {
    let mut store = LedgerStore::default();
    add_fixed(&mut store, "Gym", "80", &[0]);
    let jan_id = store.bucket(0).fixed[0].id.clone();

    store
        .add_or_update_transaction(
            0,
            TransactionKind::Fixed,
            TransactionInput {
                id: Some(jan_id),
                description: "Gym".to_string(),
                amount: dec("85"),
                paid: true,
                selected_months: Some(vec![0, 5]),
                original_description: Some("Gym".to_string()),
                ..TransactionInput::default()
            },
        )
        .unwrap();

    assert_eq!(store.bucket(5).fixed.len(), 1);
    assert_eq!(store.bucket(5).fixed[0].amount, dec("85"));
    assert_eq!(store.bucket(5).fixed[0].paid, Some(false));
    assert_eq!(store.bucket(0).fixed[0].paid, Some(true));
}

#[test]
fn creating_without_a_snapshot_leaves_other_months_alone() {
    let mut store = LedgerStore::default();
    add_fixed(&mut store, "Rent", "900", &[1]);
    // a second, unrelated creation selecting only janeiro must not delete
    // fevereiro's entry
    add_fixed(&mut store, "Rent", "900", &[0]);

    assert_eq!(store.bucket(0).fixed.len(), 1);
    assert_eq!(store.bucket(1).fixed.len(), 1);
}

#[test]
fn duplicate_descriptions_match_first_entry_only() {
    let mut store = LedgerStore::default();
    add_fixed(&mut store, "Streaming", "30", &[0, 1]);
    // a second fevereiro entry sharing the description
    add_fixed(&mut store, "Streaming", "45", &[1]);
    assert_eq!(store.bucket(1).fixed.len(), 2);
    let second_id = store.bucket(1).fixed[1].id.clone();

    let jan_id = store.bucket(0).fixed[0].id.clone();
    store
        .add_or_update_transaction(
            0,
            TransactionKind::Fixed,
            TransactionInput {
                id: Some(jan_id),
                description: "Streaming".to_string(),
                amount: dec("35"),
                paid: false,
                selected_months: Some(vec![0]),
                original_description: Some("Streaming".to_string()),
                ..TransactionInput::default()
            },
        )
        .unwrap();

    // only the first fevereiro match was removed
    assert_eq!(store.bucket(1).fixed.len(), 1);
    assert_eq!(store.bucket(1).fixed[0].id, second_id);
}

#[test]
fn validation_rejects_bad_input_without_mutating() {
    let mut store = LedgerStore::default();
    add_fixed(&mut store, "Rent", "900", &[0]);
    let before = store.clone();

    let err = store
        .add_or_update_transaction(0, TransactionKind::Fixed, fixed_input("  ", "50", &[0]))
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    let err = store
        .add_or_update_transaction(0, TransactionKind::Fixed, fixed_input("Water", "0", &[0]))
        .unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));

    assert_eq!(store, before);
}
