// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors surfaced by ledger operations. Every variant leaves the store
/// untouched: operations validate before they mutate.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("{0}")]
    Validation(String),

    #[error("unknown month '{0}'")]
    UnknownMonth(String),

    #[error("card '{0}' not found")]
    CardNotFound(String),

    #[error("goal '{0}' not found")]
    GoalNotFound(String),

    #[error("no {kind} entry with id '{id}'")]
    TransactionNotFound { kind: &'static str, id: String },

    #[error("no {kind} entry at index {index}")]
    IndexOutOfRange { kind: &'static str, index: usize },
}

impl LedgerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
