//! Plain-text rendering of recorded credits.

use chrono_tz::Tz;
use payalert_core::Transaction;
use payalert_core::time::format_local;

/// One row of the recent view, e.g.
/// `[GPay] from Priya | 11 Feb 2026, 00:00 | ₹500.00`.
pub fn transaction_line(tx: &Transaction, tz: Tz) -> String {
    let mut line = format!("[{}]", tx.source);
    if let Some(sender) = &tx.sender {
        line.push_str(" from ");
        line.push_str(sender);
    }
    format!("{line} | {} | ₹{:.2}", format_local(tx.timestamp, tz), tx.amount)
}

/// Today's total and how many credits made it up.
pub fn today_line(total: f64, count: usize) -> String {
    format!("Today's credits: ₹{total:.2} ({count} transaction(s) today)")
}
