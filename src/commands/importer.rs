// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::LedgerStore;
use anyhow::{anyhow, Context, Result};
use std::fs;

/// Replace the whole store from a backup document. Validation happens
/// before anything is touched: a rejected import leaves the current store
/// exactly as it was.
pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let raw = fs::read_to_string(path).with_context(|| format!("Open backup {}", path))?;
    let parsed: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("Parse backup {}", path))?;
    if parsed.get("months").is_none() {
        return Err(anyhow!("Backup {} has no 'months' key", path));
    }
    let mut incoming: LedgerStore = serde_json::from_value(parsed)
        .with_context(|| format!("Backup {} does not match the store format", path))?;
    incoming.normalize();
    *store = incoming;
    println!("Imported store from {}", path);
    Ok(())
}
