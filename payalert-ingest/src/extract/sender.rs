//! Best-effort sender name from "from NAME" / "by NAME" or "Sender: NAME".

use anyhow::Result;
use regex::Regex;

/// Tried in this order.
const SENDER_PATTERNS: &[&str] = &[
    r"(?i)(?:from|by)\s+([A-Za-z\s]+?)(?:\s+on|\s+to|\s+via|$)",
    r"(?i)(?:sender|payer):\s*([A-Za-z\s]+?)(?:\s|$)",
];

/// Accepted names are strictly longer than this many chars...
pub const SENDER_MIN_EXCLUSIVE: usize = 2;
/// ...and strictly shorter than this many.
pub const SENDER_MAX_EXCLUSIVE: usize = 50;

#[derive(Debug, Clone)]
pub struct SenderExtractor {
    patterns: Vec<Regex>,
}

impl SenderExtractor {
    pub fn new() -> Result<Self> {
        let patterns = SENDER_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// A candidate outside the length band falls through to the next pattern.
    pub fn extract(&self, message: &str) -> Option<String> {
        self.patterns.iter().find_map(|re| {
            let caps = re.captures(message)?;
            let name = caps[1].trim();
            is_plausible_name(name).then(|| name.to_string())
        })
    }
}

fn is_plausible_name(name: &str) -> bool {
    let len = name.chars().count();
    len > SENDER_MIN_EXCLUSIVE && len < SENDER_MAX_EXCLUSIVE
}
