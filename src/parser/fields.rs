//! Typed optional-field access over raw records
//!
//! Every accessor documents its absence behavior: a missing field or a field of
//! the wrong JSON type is `None`; amounts and timestamps that are present but
//! malformed are errors.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::parser::amount::parse_amount;
use crate::parser::date::LedgerDate;
use crate::types::*;

pub(crate) fn str_field<'a>(record: &'a RawRecord, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

pub(crate) fn u32_field(record: &RawRecord, key: &str) -> Option<u32> {
    record
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
}

pub(crate) fn u64_field(record: &RawRecord, key: &str) -> Option<u64> {
    record.get(key).and_then(Value::as_u64)
}

pub(crate) fn amount_field(record: &RawRecord, key: &str) -> LedgerResult<Option<Amount>> {
    record.get(key).map(parse_amount).transpose()
}

pub(crate) fn ledger_date_field(record: &RawRecord, key: &str) -> LedgerResult<Option<LedgerDate>> {
    record.get(key).map(LedgerDate::from_value).transpose()
}

pub(crate) fn date_field(record: &RawRecord, key: &str) -> LedgerResult<Option<String>> {
    ledger_date_field(record, key)?
        .map(|date| date.to_iso8601())
        .transpose()
}

/// True when the timestamp under `key` lies strictly before `now`
///
/// An absent field is never in the past; an unparsable one is logged and
/// treated the same way.
pub(crate) fn is_past(record: &RawRecord, key: &str, now: DateTime<Utc>) -> bool {
    match ledger_date_field(record, key).and_then(|date| date.map(|d| d.to_datetime()).transpose()) {
        Ok(Some(at)) => at < now,
        Ok(None) => false,
        Err(error) => {
            warn!("Ignoring unparsable {}: {}", key, error);
            false
        }
    }
}

/// Structured party built from an address field and its companion tag/name fields
pub(crate) fn party_field(
    record: &RawRecord,
    address_key: &str,
    tag_key: &str,
    name_key: &str,
) -> Option<Party> {
    let address = str_field(record, address_key)?;

    let tag = match record.get(tag_key) {
        None => None,
        Some(raw) => {
            let tag = raw.as_u64().and_then(|value| u32::try_from(value).ok());
            if tag.is_none() {
                warn!("Dropping malformed {} {}", tag_key, raw);
            }
            tag
        }
    };

    Some(Party {
        address: address.to_string(),
        tag,
        name: str_field(record, name_key).map(str::to_string),
    })
}

/// Decode a hex-encoded text field, keeping the hex when it is not UTF-8
pub(crate) fn hex_text(value: Option<&Value>) -> Option<String> {
    let encoded = value?.as_str()?;
    match hex::decode(encoded) {
        Ok(bytes) => Some(String::from_utf8(bytes).unwrap_or_else(|_| encoded.to_string())),
        Err(_) => Some(encoded.to_string()),
    }
}
