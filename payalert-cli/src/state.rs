use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$PAYALERT_HOME`, or `~/.payalert`.
pub fn payalert_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PAYALERT_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".payalert"))
}

pub fn ensure_payalert_home() -> Result<PathBuf> {
    let dir = payalert_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// `LedgerStore::save` creates the directory on first write.
pub fn ledger_path() -> Result<PathBuf> {
    Ok(payalert_home()?.join("transactions.json"))
}
