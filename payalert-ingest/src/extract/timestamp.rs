//! Embedded transaction date: `11-Feb-26` style first, then `01/03/25`.
//!
//! Numeric dates are read month-first (`01/03/25` is 3 Jan 2025), so a
//! day-first date like `13/02/25` is invalid. Two-digit years go through
//! [`expand_two_digit_year`]; three-digit years are rejected. A date is
//! taken as local midnight in the configured timezone.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use payalert_core::time::{expand_two_digit_year, local_midnight_to_utc};
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateShape {
    /// DD-MMM-YY(YY)
    MonthName,
    /// MM/DD/YY(YY)
    Numeric,
}

/// Tried in this order; only the first occurrence of each is considered.
const DATE_PATTERNS: &[(&str, DateShape)] = &[
    (r"[0-9]{1,2}[-/][A-Za-z]{3}[-/][0-9]{2,4}", DateShape::MonthName),
    (r"[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{2,4}", DateShape::Numeric),
];

#[derive(Debug, Clone)]
pub struct TimestampExtractor {
    patterns: Vec<(Regex, DateShape)>,
    tz: Tz,
}

impl TimestampExtractor {
    pub fn new(tz: Tz) -> Result<Self> {
        let patterns = DATE_PATTERNS
            .iter()
            .map(|(p, shape)| -> Result<(Regex, DateShape)> { Ok((Regex::new(p)?, *shape)) })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns, tz })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// An invalid calendar date moves on to the next pattern.
    pub fn extract(&self, message: &str) -> Option<DateTime<Utc>> {
        self.patterns.iter().find_map(|(re, shape)| {
            let m = re.find(message)?;
            let date = parse_date(m.as_str(), *shape)?;
            local_midnight_to_utc(date, self.tz)
        })
    }
}

fn parse_date(s: &str, shape: DateShape) -> Option<NaiveDate> {
    let mut parts = s.split(['-', '/']);
    let first = parts.next()?;
    let second = parts.next()?;
    let year = parse_year(parts.next()?)?;

    let (month, day) = match shape {
        DateShape::MonthName => (month_from_abbrev(second)?, first.parse().ok()?),
        DateShape::Numeric => (first.parse().ok()?, second.parse().ok()?),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_from_abbrev(s: &str) -> Option<u32> {
    let month = match s.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn parse_year(s: &str) -> Option<i32> {
    match s.len() {
        2 => Some(expand_two_digit_year(s.parse().ok()?)),
        4 => s.parse().ok(),
        _ => None,
    }
}
