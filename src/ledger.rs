// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::models::{
    Card, Goal, LedgerStore, Transaction, TransactionKind, DEFAULT_CARD_COLOR, DEFAULT_GOAL_ICON,
    FALLBACK_CATEGORY, MONTHS, PAYMENTS_CATEGORY,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Everything the entry form knows when a transaction is saved. Built by
/// the CLI layer and handed over wholesale; ledger operations never read
/// ambient state.
///
/// For fixed expenses, `selected_months` is the checkbox selection over the
/// twelve calendar months (defaulting to just the target month) and
/// `original_description` is the description snapshot taken when the edit
/// began — the cross-month matching key, even after a rename.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub id: Option<String>,
    pub description: String,
    pub amount: Decimal,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub paid: bool,
    pub payment_method: Option<String>,
    pub selected_months: Option<Vec<usize>>,
    pub original_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GoalInput {
    pub id: Option<String>,
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    pub deadline: Option<NaiveDate>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CardInput {
    pub id: Option<String>,
    pub name: String,
    pub limit: Decimal,
    pub closing: u32,
    pub color: Option<String>,
}

impl LedgerStore {
    pub fn add_or_update_transaction(
        &mut self,
        month_idx: usize,
        kind: TransactionKind,
        input: TransactionInput,
    ) -> Result<(), LedgerError> {
        if input.description.trim().is_empty() {
            return Err(LedgerError::validation("description must not be empty"));
        }
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::validation("amount must be greater than zero"));
        }
        if let Some(method) = input.payment_method.as_deref() {
            if method != "debit" && self.card(method).is_none() {
                return Err(LedgerError::CardNotFound(method.to_string()));
            }
        }

        match kind {
            TransactionKind::Fixed => {
                self.sync_fixed_expense(month_idx, &input);
                Ok(())
            }
            TransactionKind::Variable => self.upsert_variable(month_idx, input),
            TransactionKind::Income => self.upsert_income(month_idx, input),
        }
    }

    /// Reconcile one fixed expense against the month selection.
    ///
    /// Per calendar month, the existing entry is located by id (only in the
    /// month being edited) or by the original description snapshot. Selected
    /// months are updated in place or receive a fresh entry with
    /// `paid = false`; deselected months lose their entry. The `paid` flag
    /// from the form only ever lands on the month being edited — every other
    /// month keeps its own payment status.
    ///
    /// The description is the matching key across months; when two entries
    /// in one month share it, the first wins. `doctor` flags the duplicates.
    fn sync_fixed_expense(&mut self, edit_month: usize, input: &TransactionInput) {
        let selected = input
            .selected_months
            .clone()
            .unwrap_or_else(|| vec![edit_month]);

        for idx in 0..MONTHS.len() {
            let is_selected = selected.contains(&idx);
            let list = &mut self.bucket_mut(idx).fixed;

            let pos = if input.id.is_some() && idx == edit_month {
                list.iter().position(|t| Some(&t.id) == input.id.as_ref())
            } else if let Some(original) = input.original_description.as_deref() {
                list.iter().position(|t| t.description == original)
            } else {
                None
            };

            match (is_selected, pos) {
                (true, Some(p)) => {
                    list[p].description = input.description.clone();
                    list[p].amount = input.amount;
                    if idx == edit_month {
                        list[p].paid = Some(input.paid);
                    }
                }
                (true, None) => list.push(Transaction {
                    id: new_id(),
                    description: input.description.clone(),
                    amount: input.amount,
                    date: None,
                    category: None,
                    paid: Some(false),
                    payment_method: None,
                }),
                (false, Some(p)) => {
                    list.remove(p);
                }
                (false, None) => {}
            }
        }
    }

    fn upsert_variable(
        &mut self,
        month_idx: usize,
        input: TransactionInput,
    ) -> Result<(), LedgerError> {
        let category = Some(
            input
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
        );
        let list = &mut self.bucket_mut(month_idx).variable;
        if let Some(id) = input.id {
            let item = list
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(LedgerError::TransactionNotFound {
                    kind: "variable",
                    id: id.clone(),
                })?;
            item.description = input.description;
            item.amount = input.amount;
            item.date = input.date;
            item.category = category;
            item.payment_method = input.payment_method;
        } else {
            list.push(Transaction {
                id: new_id(),
                description: input.description,
                amount: input.amount,
                date: input.date,
                category,
                paid: None,
                payment_method: input.payment_method,
            });
        }
        Ok(())
    }

    fn upsert_income(
        &mut self,
        month_idx: usize,
        input: TransactionInput,
    ) -> Result<(), LedgerError> {
        let list = &mut self.bucket_mut(month_idx).income;
        if let Some(id) = input.id {
            let item = list
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(LedgerError::TransactionNotFound {
                    kind: "income",
                    id: id.clone(),
                })?;
            item.description = input.description;
            item.amount = input.amount;
        } else {
            list.push(Transaction {
                id: new_id(),
                description: input.description,
                amount: input.amount,
                date: None,
                category: None,
                paid: None,
                payment_method: None,
            });
        }
        Ok(())
    }

    pub fn delete_transaction(
        &mut self,
        month_idx: usize,
        kind: TransactionKind,
        index: usize,
    ) -> Result<Transaction, LedgerError> {
        let list = self.bucket_mut(month_idx).list_mut(kind);
        if index >= list.len() {
            return Err(LedgerError::IndexOutOfRange {
                kind: kind.as_str(),
                index,
            });
        }
        Ok(list.remove(index))
    }

    /// Flip a fixed expense's paid status; returns the new state.
    pub fn toggle_fixed_paid(
        &mut self,
        month_idx: usize,
        index: usize,
    ) -> Result<bool, LedgerError> {
        let list = &mut self.bucket_mut(month_idx).fixed;
        let item = list.get_mut(index).ok_or(LedgerError::IndexOutOfRange {
            kind: "fixed",
            index,
        })?;
        let next = !item.paid.unwrap_or(false);
        item.paid = Some(next);
        Ok(next)
    }

    pub fn add_or_update_goal(&mut self, input: GoalInput) -> Result<String, LedgerError> {
        if input.name.trim().is_empty() {
            return Err(LedgerError::validation("goal name must not be empty"));
        }
        if input.target <= Decimal::ZERO {
            return Err(LedgerError::validation(
                "goal target must be greater than zero",
            ));
        }
        let icon = input
            .icon
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GOAL_ICON.to_string());
        if let Some(id) = input.id {
            let goal = self
                .goals
                .iter_mut()
                .find(|g| g.id == id)
                .ok_or_else(|| LedgerError::GoalNotFound(id.clone()))?;
            goal.name = input.name;
            goal.target = input.target;
            goal.current = input.current;
            goal.deadline = input.deadline;
            goal.icon = icon;
            Ok(id)
        } else {
            let id = new_id();
            self.goals.push(Goal {
                id: id.clone(),
                name: input.name,
                target: input.target,
                current: input.current,
                deadline: input.deadline,
                icon,
            });
            Ok(id)
        }
    }

    pub fn delete_goal(&mut self, id: &str) -> Result<Goal, LedgerError> {
        let pos = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| LedgerError::GoalNotFound(id.to_string()))?;
        Ok(self.goals.remove(pos))
    }

    pub fn add_or_update_card(&mut self, input: CardInput) -> Result<String, LedgerError> {
        if input.name.trim().is_empty() {
            return Err(LedgerError::validation("card name must not be empty"));
        }
        if input.limit < Decimal::ZERO {
            return Err(LedgerError::validation("credit limit must not be negative"));
        }
        if !(1..=31).contains(&input.closing) {
            return Err(LedgerError::validation(
                "closing day must be between 1 and 31",
            ));
        }
        let color = input
            .color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CARD_COLOR.to_string());
        if let Some(id) = input.id {
            let card = self
                .cards
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| LedgerError::CardNotFound(id.clone()))?;
            card.name = input.name;
            card.limit = input.limit;
            card.closing = input.closing;
            card.color = color;
            Ok(id)
        } else {
            let id = new_id();
            self.cards.push(Card {
                id: id.clone(),
                name: input.name,
                limit: input.limit,
                closing: input.closing,
                color,
            });
            Ok(id)
        }
    }

    pub fn delete_card(&mut self, id: &str) -> Result<Card, LedgerError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LedgerError::CardNotFound(id.to_string()))?;
        Ok(self.cards.remove(pos))
    }

    /// Record money leaving the account to settle a card invoice: a debit
    /// variable transaction in the reference month, categorized under
    /// payments. The billed transactions themselves are left alone — the
    /// cycle recomputes to the same invoice on the next view, by design.
    /// A non-positive amount means there is nothing to pay and is rejected
    /// as validation, not as a failure.
    pub fn pay_invoice(
        &mut self,
        card_id: &str,
        month_idx: usize,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::validation("invoice is zero, nothing to pay"));
        }
        let card_name = self
            .card(card_id)
            .ok_or_else(|| LedgerError::CardNotFound(card_id.to_string()))?
            .name
            .clone();
        self.bucket_mut(month_idx).variable.push(Transaction {
            id: new_id(),
            description: format!("Card payment {}", card_name),
            amount,
            date: Some(date),
            category: Some(PAYMENTS_CATEGORY.to_string()),
            paid: None,
            payment_method: Some("debit".to_string()),
        });
        Ok(())
    }
}
