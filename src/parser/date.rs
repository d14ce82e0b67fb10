//! Conversion between ledger-epoch seconds and calendar time

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::types::*;

/// Seconds between the Unix epoch and the ledger epoch (2000-01-01T00:00:00Z)
pub const LEDGER_EPOCH_OFFSET: i64 = 946_684_800;

/// A point in time expressed in ledger-epoch seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LedgerDate(u32);

impl LedgerDate {
    pub fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    /// Ledger-epoch seconds
    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// Parse a raw JSON field; only non-negative integers that fit in 32 bits are accepted
    pub fn from_value(value: &Value) -> LedgerResult<Self> {
        let seconds = value.as_u64().ok_or_else(|| {
            LedgerError::InvalidLedgerTimestamp(format!("expected an integer, got {}", value))
        })?;
        Self::from_i64(seconds as i64)
    }

    pub fn from_i64(seconds: i64) -> LedgerResult<Self> {
        u32::try_from(seconds).map(Self).map_err(|_| {
            LedgerError::InvalidLedgerTimestamp(format!("{} is out of range", seconds))
        })
    }

    pub fn to_datetime(&self) -> LedgerResult<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(i64::from(self.0) + LEDGER_EPOCH_OFFSET, 0).ok_or_else(
            || LedgerError::InvalidLedgerTimestamp(format!("{} is out of range", self.0)),
        )
    }

    /// UTC calendar string with millisecond precision, e.g. `2020-03-30T16:48:10.000Z`
    pub fn to_iso8601(&self) -> LedgerResult<String> {
        Ok(self
            .to_datetime()?
            .to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> LedgerResult<Self> {
        Self::from_i64(datetime.timestamp() - LEDGER_EPOCH_OFFSET)
    }

    /// Inverse of [`LedgerDate::to_iso8601`]; any RFC 3339 offset is accepted
    pub fn from_iso8601(value: &str) -> LedgerResult<Self> {
        let parsed = DateTime::parse_from_rfc3339(value)
            .map_err(|error| LedgerError::InvalidLedgerTimestamp(format!("'{}': {}", value, error)))?;
        Self::from_datetime(parsed.with_timezone(&Utc))
    }
}

/// Convert ledger-epoch seconds to an ISO-8601 UTC string
pub fn ledger_time_to_iso8601(seconds: i64) -> LedgerResult<String> {
    LedgerDate::from_i64(seconds)?.to_iso8601()
}

/// Convert an ISO-8601 string to ledger-epoch seconds
pub fn iso8601_to_ledger_time(value: &str) -> LedgerResult<u32> {
    Ok(LedgerDate::from_iso8601(value)?.seconds())
}
