//! Credit/debit polarity by keyword containment.
//!
//! Debit keywords win outright: "payment failed, Rs.200 credited back" is
//! not a credit. Matching is plain substring containment on the lowercased
//! text, so "discredited" counts as "credit".

use std::fmt;

/// Outgoing or failed transaction markers. Checked first.
pub const DEBIT_KEYWORDS: &[&str] = &[
    "debited",
    "debit",
    "paid",
    "sent",
    "withdrawn",
    "failed",
    "declined",
    "rejected",
];

/// Successful incoming payment markers.
pub const CREDIT_KEYWORDS: &[&str] = &[
    "credited",
    "received",
    "deposited",
    "credit",
    "added",
    "success",
    "successful",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Credit,
    Debit,
    Indeterminate,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Polarity::Credit => "credit",
            Polarity::Debit => "debit",
            Polarity::Indeterminate => "indeterminate",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    debit: &'static [&'static str],
    credit: &'static [&'static str],
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_keywords(DEBIT_KEYWORDS, CREDIT_KEYWORDS)
    }

    /// Keywords are expected in lowercase.
    pub fn with_keywords(debit: &'static [&'static str], credit: &'static [&'static str]) -> Self {
        Self { debit, credit }
    }

    pub fn classify(&self, message: &str) -> Polarity {
        let lower = message.to_lowercase();

        if self.debit.iter().any(|k| lower.contains(k)) {
            return Polarity::Debit;
        }
        if self.credit.iter().any(|k| lower.contains(k)) {
            return Polarity::Credit;
        }
        Polarity::Indeterminate
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
