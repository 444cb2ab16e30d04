//! payalert-core: shared types for parsed credit alerts, the transaction ledger,
//! announcement text and timezone helpers.

pub mod announce;
pub mod ledger;
pub mod source;
pub mod time;
pub mod transaction;

pub use announce::{TEST_ANNOUNCEMENT, announcement};
pub use ledger::{DEFAULT_RECENT_LIMIT, Ledger, LedgerStore};
pub use source::Source;
pub use transaction::{ParsedTransaction, Transaction};
