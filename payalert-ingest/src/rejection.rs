//! Reasons a message yields no transaction.

use crate::classifier::Polarity;

/// Why a message was not turned into a transaction.
///
/// Callers of [`crate::MessageParser::parse`] only see absence; the reason
/// is for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("empty message")]
    EmptyMessage,
    #[error("not a credit message ({0})")]
    NotCredit(Polarity),
    #[error("no currency amount found")]
    NoAmount,
    #[error("amount {0} is not positive")]
    NonPositiveAmount(f64),
}
