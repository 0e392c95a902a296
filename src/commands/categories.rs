// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let mut rows: Vec<Vec<String>> = DEFAULT_CATEGORIES
        .iter()
        .map(|(name, icon)| vec![name.to_string(), icon.to_string()])
        .collect();
    rows.push(vec![FALLBACK_CATEGORY.to_string(), "(fallback)".to_string()]);
    println!("{}", pretty_table(&["Category", "Icon"], rows));
    Ok(())
}
