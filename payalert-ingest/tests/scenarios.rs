use chrono::{TimeZone, Utc};
use payalert_core::Source;
use payalert_ingest::{CREDIT_KEYWORDS, DEBIT_KEYWORDS, MessageParser, SourceTable};

fn parser() -> MessageParser {
    MessageParser::new().unwrap()
}

#[test]
fn test_bank_sms_with_gpay_reference() {
    let msg = "Rs.500.00 credited to A/c XX1234 on 11-Feb-26 by UPI/GPay/9876543210";
    let parsed = parser().parse(msg).unwrap();

    assert_eq!(parsed.amount, 500.0);
    assert_eq!(parsed.source, Source::GPay);
    assert_eq!(parsed.sender, None);
    // Midnight 11 Feb 2026 in Kolkata.
    assert_eq!(
        parsed.timestamp,
        Some(Utc.with_ymd_and_hms(2026, 2, 10, 18, 30, 0).unwrap())
    );
}

#[test]
fn test_rupee_sign_with_sender_and_no_channel() {
    let parsed = parser().parse("₹200 received from Rahul Sharma").unwrap();

    assert_eq!(parsed.amount, 200.0);
    assert_eq!(parsed.source, Source::Unknown);
    assert_eq!(parsed.sender.as_deref(), Some("Rahul Sharma"));
    assert_eq!(parsed.timestamp, None);
}

#[test]
fn test_failed_payment_is_rejected() {
    assert_eq!(parser().parse("INR 1,250.00 payment failed"), None);
}

#[test]
fn test_empty_message_is_rejected() {
    assert_eq!(parser().parse(""), None);
}

#[test]
fn test_zero_amount_is_rejected() {
    assert_eq!(parser().parse("Paytm: Rs 0.00 credited"), None);
}

#[test]
fn test_amazon_pay_with_sender_and_numeric_date() {
    let parsed = parser()
        .parse("Amazon Pay: ₹75 added successfully by Priya on 01/03/25")
        .unwrap();

    assert_eq!(parsed.amount, 75.0);
    assert_eq!(parsed.source, Source::AmazonPay);
    assert_eq!(parsed.sender.as_deref(), Some("Priya"));
    // Month-first: 3 January 2025, Kolkata midnight.
    assert_eq!(
        parsed.timestamp,
        Some(Utc.with_ymd_and_hms(2025, 1, 2, 18, 30, 0).unwrap())
    );
}

#[test]
fn test_day_first_date_leaves_timestamp_absent() {
    let parsed = parser().parse("₹500 received from Kavya on 13/02/25").unwrap();
    assert_eq!(parsed.sender.as_deref(), Some("Kavya"));
    assert_eq!(parsed.timestamp, None);
}

#[test]
fn test_parse_is_idempotent() {
    let p = parser();
    let messages = [
        "Rs.500.00 credited to A/c XX1234 on 11-Feb-26 by UPI/GPay/9876543210",
        "₹200 received from Rahul Sharma",
        "INR 1,250.00 payment failed",
        "",
        "Hello there",
    ];
    for msg in messages {
        assert_eq!(p.parse(msg), p.parse(msg), "not idempotent for {msg:?}");
    }
}

#[test]
fn test_debit_keyword_always_wins() {
    let p = parser();
    for debit in DEBIT_KEYWORDS {
        for credit in CREDIT_KEYWORDS {
            let msg = format!("₹100 {credit} {debit}");
            assert_eq!(p.parse(&msg), None, "accepted {msg:?}");
        }
    }
}

#[test]
fn test_every_accepted_amount_is_positive() {
    let p = parser();
    let messages = [
        "₹1 credited",
        "Rs 0.01 received",
        "INR 1,00,000.00 deposited",
        "Rs. 0 credited",
        "₹,, credited",
    ];
    for msg in messages {
        if let Some(parsed) = p.parse(msg) {
            assert!(parsed.amount > 0.0, "{msg:?} gave {}", parsed.amount);
        }
    }
}

#[test]
fn test_source_table_priority_regardless_of_position() {
    let table = SourceTable::new().unwrap();
    assert_eq!(table.identify("UPI credit, ref GPay"), Source::GPay);
    assert_eq!(table.identify("GPay credit, ref UPI"), Source::GPay);
    assert_eq!(table.identify("nothing recognisable"), Source::Unknown);
}

#[test]
fn test_parsed_transaction_json_omits_absent_fields() {
    let parsed = parser().parse("₹200 received from Rahul Sharma").unwrap();
    let v = serde_json::to_value(&parsed).unwrap();
    assert_eq!(v["amount"], 200.0);
    assert_eq!(v["source"], "Unknown");
    assert_eq!(v["sender"], "Rahul Sharma");
    assert!(v.get("timestamp").is_none());
}
