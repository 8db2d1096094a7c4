use crate::core::{AppError, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

/// Prefix carried by every reference this gateway issues
pub const REFERENCE_PREFIX: &str = "CLDLP";

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Current Unix time in milliseconds, bumped so no two calls in this process
/// ever return the same value
fn next_stamp() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_STAMP.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// Reference handed to the checkout widget and echoed back on the callback.
///
/// Rendered as `CLDLP_<invoiceId>_<timestamp>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionReference {
    invoice_id: u64,
    timestamp: i64,
}

impl TransactionReference {
    /// Issue a fresh reference for an invoice
    pub fn generate(invoice_id: u64) -> Self {
        Self {
            invoice_id,
            timestamp: next_stamp(),
        }
    }

    pub fn invoice_id(&self) -> u64 {
        self.invoice_id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// When the reference was issued. References from older installs carry
    /// seconds rather than milliseconds; both are recognised.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp < 100_000_000_000 {
            DateTime::from_timestamp(self.timestamp, 0)
        } else {
            DateTime::from_timestamp_millis(self.timestamp)
        }
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", REFERENCE_PREFIX, self.invoice_id, self.timestamp)
    }
}

impl FromStr for TransactionReference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AppError::validation(format!("Invalid transaction reference: {}", s));

        let mut parts = s.splitn(3, '_');
        if parts.next() != Some(REFERENCE_PREFIX) {
            return Err(invalid());
        }

        let invoice_id = parts
            .next()
            .and_then(|p| p.parse::<u64>().ok())
            .ok_or_else(invalid)?;
        let timestamp = parts
            .next()
            .and_then(|p| p.parse::<i64>().ok())
            .filter(|t| *t > 0)
            .ok_or_else(invalid)?;

        Ok(Self {
            invoice_id,
            timestamp,
        })
    }
}
