// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::LedgerStore;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Billfold", "billfold"));

/// Location of the persisted store. `BILLFOLD_STORE` overrides the
/// platform data dir (used by tests and scripted setups).
pub fn store_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("BILLFOLD_STORE") {
        return Ok(PathBuf::from(path));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("billfold.json"))
}

/// `None` when no store has ever been saved at `path`. Loaded stores are
/// normalized so all twelve month buckets exist even after a partial or
/// hand-edited document.
pub fn load_from(path: &Path) -> Result<Option<LedgerStore>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read store at {}", path.display()))?;
    let mut store: LedgerStore = serde_json::from_str(&raw)
        .with_context(|| format!("Parse store at {}", path.display()))?;
    store.normalize();
    Ok(Some(store))
}

pub fn load_or_init() -> Result<LedgerStore> {
    Ok(load_from(&store_path()?)?.unwrap_or_default())
}

/// Pretty 2-space JSON, written to a temp file and renamed into place so a
/// failed write leaves the previous document intact.
pub fn save_to(store: &LedgerStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Create store dir {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(store)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("Write store at {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Replace store at {}", path.display()))?;
    Ok(())
}

pub fn save(store: &LedgerStore) -> Result<()> {
    save_to(store, &store_path()?)
}
