// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::LedgerStore;
use anyhow::{Context, Result};
use std::fs;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let out = m.get_one::<String>("out").unwrap();
    let json = serde_json::to_string_pretty(store)?;
    fs::write(out, json).with_context(|| format!("Write backup {}", out))?;
    println!("Exported store to {}", out);
    Ok(())
}
