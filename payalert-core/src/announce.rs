//! Spoken announcement text for recorded credits.

/// Phrase used to check that voice output works.
pub const TEST_ANNOUNCEMENT: &str = "Money credited. Rupees 200 received in your account.";

/// Announcement for a credit of `amount` rupees.
///
/// Whole amounts are spoken without a fractional part ("Rupees 500").
pub fn announcement(amount: f64) -> String {
    format!("Money credited. Rupees {amount} received in your account.")
}
