//! Payment channel identification by an ordered signature table.
//!
//! Order resolves overlaps: "UPI/GPay" is GPay because GPay is checked
//! before UPI, wherever the words sit in the message.

use anyhow::Result;
use payalert_core::Source;
use regex::Regex;

/// Channel signatures, highest priority first. Matched case-insensitively.
pub const SOURCE_SIGNATURES: &[(&str, Source)] = &[
    (r"gpay|google\s*pay", Source::GPay),
    (r"phonepe|phone\s*pe", Source::PhonePe),
    (r"paytm", Source::Paytm),
    (r"amazon\s*pay", Source::AmazonPay),
    (r"upi", Source::Upi),
    (r"bank|a/c|account", Source::BankSms),
];

#[derive(Debug, Clone)]
struct Signature {
    regex: Regex,
    source: Source,
}

#[derive(Debug, Clone)]
pub struct SourceTable {
    signatures: Vec<Signature>,
}

impl SourceTable {
    pub fn new() -> Result<Self> {
        let signatures = SOURCE_SIGNATURES
            .iter()
            .map(|(pattern, source)| -> Result<Signature> {
                Ok(Signature {
                    regex: Regex::new(&format!("(?i){pattern}"))?,
                    source: *source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { signatures })
    }

    /// Sources in priority order.
    pub fn priority(&self) -> impl Iterator<Item = Source> + '_ {
        self.signatures.iter().map(|s| s.source)
    }

    /// Never absent: falls back to [`Source::Unknown`].
    pub fn identify(&self, message: &str) -> Source {
        self.signatures
            .iter()
            .find(|s| s.regex.is_match(message))
            .map(|s| s.source)
            .unwrap_or(Source::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identify(msg: &str) -> Source {
        SourceTable::new().unwrap().identify(msg)
    }

    #[test]
    fn test_each_channel() {
        assert_eq!(identify("via Google Pay"), Source::GPay);
        assert_eq!(identify("GPAY txn"), Source::GPay);
        assert_eq!(identify("Phone Pe transfer"), Source::PhonePe);
        assert_eq!(identify("Paytm wallet"), Source::Paytm);
        assert_eq!(identify("AmazonPay balance"), Source::AmazonPay);
        assert_eq!(identify("UPI ref 1234"), Source::Upi);
        assert_eq!(identify("A/c XX1234"), Source::BankSms);
        assert_eq!(identify("your Account"), Source::BankSms);
        assert_eq!(identify("HDFC Bank"), Source::BankSms);
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(identify("₹200 received from Rahul"), Source::Unknown);
        assert_eq!(identify(""), Source::Unknown);
    }

    #[test]
    fn test_priority_ignores_position() {
        assert_eq!(identify("UPI/GPay/9876543210"), Source::GPay);
        assert_eq!(identify("A/c XX1 via UPI from Paytm"), Source::Paytm);
        assert_eq!(identify("Bank account credit via PhonePe"), Source::PhonePe);
    }

    #[test]
    fn test_priority_order_is_fixed() {
        let table = SourceTable::new().unwrap();
        let order: Vec<_> = table.priority().collect();
        assert_eq!(
            order,
            vec![
                Source::GPay,
                Source::PhonePe,
                Source::Paytm,
                Source::AmazonPay,
                Source::Upi,
                Source::BankSms,
            ]
        );
    }
}
