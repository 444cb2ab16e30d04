//! payalert-ingest: turns free-text bank/UPI credit alerts into structured
//! transactions.
//!
//! The engine is a fixed pipeline: classify polarity, extract the amount,
//! then identify the source, sender and date. Every failure is a plain
//! rejection; nothing here panics or performs I/O.

pub mod classifier;
pub mod extract;
pub mod parser;
pub mod rejection;

pub use classifier::{CREDIT_KEYWORDS, Classifier, DEBIT_KEYWORDS, Polarity};
pub use extract::{AmountExtractor, SenderExtractor, SourceTable, TimestampExtractor};
pub use parser::{MessageParser, parse_transaction_message};
pub use rejection::Rejection;
