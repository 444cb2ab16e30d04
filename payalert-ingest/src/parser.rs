//! The credit-alert pipeline: classify, then extract amount, source,
//! sender and timestamp.

use anyhow::Result;
use chrono_tz::Tz;
use payalert_core::ParsedTransaction;
use payalert_core::time::{DEFAULT_TIMEZONE, parse_timezone};
use std::sync::OnceLock;
use tracing::{debug, error, trace};

use crate::classifier::{Classifier, Polarity};
use crate::extract::{AmountExtractor, SenderExtractor, SourceTable, TimestampExtractor};
use crate::rejection::Rejection;

/// Compiled pattern tables for every stage. Immutable after construction,
/// so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct MessageParser {
    classifier: Classifier,
    amounts: AmountExtractor,
    sources: SourceTable,
    senders: SenderExtractor,
    timestamps: TimestampExtractor,
}

impl MessageParser {
    /// Parser reading dates in [`DEFAULT_TIMEZONE`].
    pub fn new() -> Result<Self> {
        Self::with_timezone(parse_timezone(DEFAULT_TIMEZONE)?)
    }

    pub fn with_timezone(tz: Tz) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new(),
            amounts: AmountExtractor::new()?,
            sources: SourceTable::new()?,
            senders: SenderExtractor::new()?,
            timestamps: TimestampExtractor::new(tz)?,
        })
    }

    pub fn timezone(&self) -> Tz {
        self.timestamps.timezone()
    }

    /// Parse a message; `None` means "record nothing".
    pub fn parse(&self, message: &str) -> Option<ParsedTransaction> {
        match self.parse_detailed(message) {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                debug!(%reason, "message rejected");
                None
            }
        }
    }

    /// Same as [`parse`](Self::parse) but says why a message was rejected.
    pub fn parse_detailed(&self, message: &str) -> Result<ParsedTransaction, Rejection> {
        if message.trim().is_empty() {
            return Err(Rejection::EmptyMessage);
        }

        let polarity = self.classifier.classify(message);
        trace!(%polarity, "classified");
        if polarity != Polarity::Credit {
            return Err(Rejection::NotCredit(polarity));
        }

        let amount = self.amounts.extract(message).ok_or(Rejection::NoAmount)?;
        if amount <= 0.0 {
            return Err(Rejection::NonPositiveAmount(amount));
        }

        let source = self.sources.identify(message);
        let sender = self.senders.extract(message);
        let timestamp = self.timestamps.extract(message);
        trace!(amount, %source, ?sender, ?timestamp, "extracted");

        Ok(ParsedTransaction {
            amount,
            source,
            sender,
            timestamp,
        })
    }
}

static DEFAULT_PARSER: OnceLock<Option<MessageParser>> = OnceLock::new();

/// Parse with a shared parser in the default timezone.
pub fn parse_transaction_message(message: &str) -> Option<ParsedTransaction> {
    DEFAULT_PARSER
        .get_or_init(|| build_logged(MessageParser::new()))
        .as_ref()?
        .parse(message)
}

/// Keep a built parser, or log why it could not be built. Every later call
/// through the shared parser then yields `None`.
fn build_logged(built: Result<MessageParser>) -> Option<MessageParser> {
    match built {
        Ok(parser) => Some(parser),
        Err(e) => {
            error!(error = %format!("{e:#}"), "failed to build message parser");
            None
        }
    }
}
