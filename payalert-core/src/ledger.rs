//! Ordered collection of recorded credits plus its JSON file store.
//!
//! Records are only ever created and listed. New records go to the front;
//! "newest first" in views is by timestamp, not insertion order.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::fs;
use std::path::{Path, PathBuf};

use crate::time::local_date;
use crate::transaction::Transaction;

/// Number of records shown by the recent view.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Prepend a record.
    pub fn record(&mut self, tx: Transaction) {
        self.transactions.insert(0, tx);
    }

    /// All records in stored order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Up to `limit` records, latest timestamp first.
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        let mut view: Vec<&Transaction> = self.transactions.iter().collect();
        // Stable sort keeps stored order for equal timestamps.
        view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        view.truncate(limit);
        view
    }

    /// Sum of amounts whose timestamp falls on `day` in `tz`.
    pub fn total_for_day(&self, day: NaiveDate, tz: Tz) -> f64 {
        self.on_day(day, tz).fold(0.0, |acc, t| acc + t.amount)
    }

    /// Number of records whose timestamp falls on `day` in `tz`.
    pub fn count_for_day(&self, day: NaiveDate, tz: Tz) -> usize {
        self.on_day(day, tz).count()
    }

    fn on_day(&self, day: NaiveDate, tz: Tz) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions
            .iter()
            .filter(move |t| local_date(t.timestamp, tz) == day)
    }
}

/// JSON-file persistence for a [`Ledger`].
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger; a missing file is an empty ledger.
    pub fn load(&self) -> Result<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }
        let s = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let transactions: Vec<Transaction> = serde_json::from_str(&s)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(Ledger::from_transactions(transactions))
    }

    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(ledger.transactions())?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
