//! Time utilities: timezone-aware calendar dates and two-digit year expansion.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Timezone bank alerts are written in unless configured otherwise.
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Two-digit years at or below this resolve to 20xx, above it to 19xx.
pub const TWO_DIGIT_YEAR_PIVOT: u32 = 69;

/// Parse an IANA timezone name like "Asia/Kolkata".
pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// 00-69 -> 2000-2069, 70-99 -> 1970-1999.
pub fn expand_two_digit_year(yy: u32) -> i32 {
    if yy <= TWO_DIGIT_YEAR_PIVOT {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Local midnight of `date` in `tz`, as UTC.
///
/// Returns `None` when midnight does not exist locally (DST gap); an
/// ambiguous midnight resolves to the earlier instant.
pub fn local_midnight_to_utc(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    let ndt = date.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&ndt)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Calendar date of a UTC instant as seen in `tz`.
pub fn local_date(dt: DateTime<Utc>, tz: Tz) -> NaiveDate {
    dt.with_timezone(&tz).date_naive()
}

/// Human-readable local time, e.g. "11 Feb 2026, 00:00".
pub fn format_local(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format("%d %b %Y, %H:%M").to_string()
}
