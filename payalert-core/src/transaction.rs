//! Parse results and the stored transaction record built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::source::Source;

/// Fields extracted from a message classified as a successful credit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedTransaction {
    /// Always > 0.
    pub amount: f64,
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    /// Date found in the message text. `None` does not mean "now".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A recorded credit. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub source: Source,
    /// Original message, verbatim.
    pub raw_text: String,
}

impl Transaction {
    /// Wrap a parse result into a record with a fresh id.
    ///
    /// `now` stands in for the timestamp when the message carried no date.
    pub fn from_parsed(
        parsed: ParsedTransaction,
        raw_text: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            amount: parsed.amount,
            sender: parsed.sender,
            timestamp: parsed.timestamp.unwrap_or(now),
            source: parsed.source,
            raw_text: raw_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parsed(timestamp: Option<DateTime<Utc>>) -> ParsedTransaction {
        ParsedTransaction {
            amount: 200.0,
            source: Source::Upi,
            sender: Some("Rahul Sharma".to_string()),
            timestamp,
        }
    }

    #[test]
    fn test_from_parsed_falls_back_to_now() {
        let now = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let tx = Transaction::from_parsed(parsed(None), "raw", now);
        assert_eq!(tx.timestamp, now);
        assert_eq!(tx.raw_text, "raw");
        assert_eq!(tx.sender.as_deref(), Some("Rahul Sharma"));
    }

    #[test]
    fn test_from_parsed_keeps_extracted_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let extracted = Utc.with_ymd_and_hms(2026, 2, 10, 18, 30, 0).unwrap();
        let tx = Transaction::from_parsed(parsed(Some(extracted)), "raw", now);
        assert_eq!(tx.timestamp, extracted);
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Utc::now();
        let a = Transaction::from_parsed(parsed(None), "a", now);
        let b = Transaction::from_parsed(parsed(None), "a", now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_json_shape() {
        let now = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
        let mut p = parsed(None);
        p.sender = None;
        let tx = Transaction::from_parsed(p, "Rs 10 credited", now);
        let v = serde_json::to_value(&tx).unwrap();
        assert_eq!(v["rawText"], "Rs 10 credited");
        assert_eq!(v["source"], "UPI");
        assert!(v.get("sender").is_none());
        assert!(v.get("id").is_some());
    }
}
