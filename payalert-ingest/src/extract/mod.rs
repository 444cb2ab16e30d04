//! Field extractors. Each holds its compiled, ordered pattern table and
//! tries entries in order; the first entry that matches and yields a valid
//! value wins.

pub mod amount;
pub mod sender;
pub mod source;
pub mod timestamp;

pub use amount::AmountExtractor;
pub use sender::SenderExtractor;
pub use source::{SOURCE_SIGNATURES, SourceTable};
pub use timestamp::TimestampExtractor;
