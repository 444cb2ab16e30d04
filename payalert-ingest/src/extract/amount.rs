//! Currency amount in one of three notations: `₹200`, `Rs. 200.00`, `INR 1,250`.

use anyhow::Result;
use regex::Regex;

/// Tried in this order.
const AMOUNT_PATTERNS: &[&str] = &[
    r"(?i)₹\s*([0-9,]+(?:\.[0-9]{2})?)",
    r"(?i)Rs\.?\s*([0-9,]+(?:\.[0-9]{2})?)",
    r"(?i)INR\s*([0-9,]+(?:\.[0-9]{2})?)",
];

#[derive(Debug, Clone)]
pub struct AmountExtractor {
    patterns: Vec<Regex>,
}

impl AmountExtractor {
    pub fn new() -> Result<Self> {
        let patterns = AMOUNT_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// First amount that both matches and parses to a finite number.
    ///
    /// A match like "Rs ," that does not parse falls through to the next
    /// notation. Zero is returned as-is; rejecting it is the caller's call.
    pub fn extract(&self, message: &str) -> Option<f64> {
        self.patterns.iter().find_map(|re| {
            let caps = re.captures(message)?;
            parse_amount(&caps[1])
        })
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.replace(',', "").parse().ok()?;
    amount.is_finite().then_some(amount)
}
