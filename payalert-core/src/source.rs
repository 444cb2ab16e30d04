//! Payment channel labels recognised in credit alerts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment rail or app a credit arrived through.
///
/// `Unknown` is the fallback when no channel signature matches; it is a
/// label like the others, never an absence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Source {
    #[serde(rename = "GPay")]
    GPay,
    #[serde(rename = "PhonePe")]
    PhonePe,
    #[serde(rename = "Paytm")]
    Paytm,
    #[serde(rename = "Amazon Pay")]
    AmazonPay,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank SMS")]
    BankSms,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Source {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Source::GPay => "GPay",
            Source::PhonePe => "PhonePe",
            Source::Paytm => "Paytm",
            Source::AmazonPay => "Amazon Pay",
            Source::Upi => "UPI",
            Source::BankSms => "Bank SMS",
            Source::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matches_serialized_form() {
        for source in [
            Source::GPay,
            Source::PhonePe,
            Source::Paytm,
            Source::AmazonPay,
            Source::Upi,
            Source::BankSms,
            Source::Unknown,
        ] {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.label()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::AmazonPay.to_string(), "Amazon Pay");
        assert_eq!(Source::BankSms.to_string(), "Bank SMS");
    }
}
