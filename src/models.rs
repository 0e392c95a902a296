// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The twelve fixed ledger buckets. These lowercase names are the keys of
/// the serialized `months` object and must stay byte-identical to the
/// legacy backup format ("marco" is intentionally unaccented).
pub const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "marco",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Suggested categories for variable spending, with their display icons.
pub const DEFAULT_CATEGORIES: [(&str, &str); 9] = [
    ("Food", "fa-utensils"),
    ("Housing", "fa-home"),
    ("Transport", "fa-car"),
    ("Leisure", "fa-gamepad"),
    ("Health", "fa-heartbeat"),
    ("Education", "fa-graduation-cap"),
    ("Shopping", "fa-shopping-bag"),
    ("Services", "fa-tools"),
    ("Travel", "fa-plane"),
];

/// Label applied when a variable transaction is saved without a category.
pub const FALLBACK_CATEGORY: &str = "General";

/// Category assigned to the debit transaction created by an invoice payment.
pub const PAYMENTS_CATEGORY: &str = "Payments";

pub const DEFAULT_GOAL_ICON: &str = "fa-bullseye";
pub const DEFAULT_CARD_COLOR: &str = "#111";

pub fn month_index(name: &str) -> Option<usize> {
    let needle = name.trim().to_lowercase();
    MONTHS.iter().position(|m| *m == needle)
}

/// Circular predecessor over the 12-month calendar; January wraps to
/// December, which is what lets a statement span the year boundary.
pub fn prev_month_index(idx: usize) -> usize {
    (idx + MONTHS.len() - 1) % MONTHS.len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Fixed,
    Variable,
    Income,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "variable" => Some(Self::Variable),
            "income" => Some(Self::Income),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Variable => "variable",
            Self::Income => "income",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "val")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "cat", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(rename = "method", default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl Transaction {
    /// Cash transactions count toward the month's balance; card-billed ones
    /// surface later through the invoice engine instead.
    pub fn is_cash(&self) -> bool {
        matches!(self.payment_method.as_deref(), None | Some("debit"))
    }

    pub fn billed_to(&self, card_id: &str) -> bool {
        self.payment_method.as_deref() == Some(card_id)
    }

    pub fn day_of_month(&self) -> Option<u32> {
        self.date.map(|d| d.day())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    #[serde(default)]
    pub fixed: Vec<Transaction>,
    #[serde(default)]
    pub variable: Vec<Transaction>,
    #[serde(default)]
    pub income: Vec<Transaction>,
}

impl MonthBucket {
    pub fn list(&self, kind: TransactionKind) -> &Vec<Transaction> {
        match kind {
            TransactionKind::Fixed => &self.fixed,
            TransactionKind::Variable => &self.variable,
            TransactionKind::Income => &self.income,
        }
    }

    pub fn list_mut(&mut self, kind: TransactionKind) -> &mut Vec<Transaction> {
        match kind {
            TransactionKind::Fixed => &mut self.fixed,
            TransactionKind::Variable => &mut self.variable,
            TransactionKind::Income => &mut self.income,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    #[serde(rename = "date", default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub icon: String,
}

impl Goal {
    pub fn remaining(&self) -> Decimal {
        self.target - self.current
    }

    pub fn progress_pct(&self) -> Decimal {
        if self.target <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.current / self.target * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    }

    /// How much to put aside per whole month left until the deadline.
    /// `None` when the goal is already reached, has no deadline, or the
    /// deadline month has passed.
    pub fn monthly_suggestion(&self, today: NaiveDate) -> Option<Decimal> {
        if self.remaining() <= Decimal::ZERO {
            return None;
        }
        let deadline = self.deadline?;
        let months =
            (deadline.year() - today.year()) * 12 + deadline.month() as i32 - today.month() as i32;
        if months <= 0 {
            return None;
        }
        Some(self.remaining() / Decimal::from(months))
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.deadline {
            Some(deadline) if self.remaining() > Decimal::ZERO => {
                let months = (deadline.year() - today.year()) * 12 + deadline.month() as i32
                    - today.month() as i32;
                months <= 0
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub limit: Decimal,
    pub closing: u32,
    pub color: String,
}

impl Card {
    /// Effective statement boundary. Legacy backups may carry 0 for "never
    /// set", which closes the statement at the end of the month.
    pub fn closing_day(&self) -> u32 {
        if self.closing == 0 || self.closing > 31 {
            31
        } else {
            self.closing
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStore {
    pub months: BTreeMap<String, MonthBucket>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Default for LedgerStore {
    fn default() -> Self {
        let mut months = BTreeMap::new();
        for m in MONTHS {
            months.insert(m.to_string(), MonthBucket::default());
        }
        Self {
            months,
            goals: Vec::new(),
            cards: Vec::new(),
        }
    }
}

impl LedgerStore {
    /// Restore the bucket invariant after a load or import: all twelve
    /// calendar months present, nothing else.
    pub fn normalize(&mut self) {
        self.months.retain(|name, _| month_index(name).is_some());
        for m in MONTHS {
            self.months.entry(m.to_string()).or_default();
        }
    }

    pub fn bucket(&self, month_idx: usize) -> &MonthBucket {
        self.months
            .get(MONTHS[month_idx])
            .expect("all twelve month buckets are initialized")
    }

    pub fn bucket_mut(&mut self, month_idx: usize) -> &mut MonthBucket {
        self.months
            .get_mut(MONTHS[month_idx])
            .expect("all twelve month buckets are initialized")
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Resolve a card by id or (case-insensitive) name, in that order.
    pub fn find_card(&self, key: &str) -> Option<&Card> {
        self.card(key)
            .or_else(|| self.cards.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }
}
