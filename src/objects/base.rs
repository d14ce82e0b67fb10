//! Base ledger object shared by every entry kind

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::parser::fields;
use crate::traits::LedgerObject;
use crate::types::*;

/// Ledger state entry kinds known to this crate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerEntryType {
    Check,
    Escrow,
    /// Any other `LedgerEntryType`, kept verbatim
    Unrecognized(String),
}

impl LedgerEntryType {
    pub fn as_str(&self) -> &str {
        match self {
            LedgerEntryType::Check => "Check",
            LedgerEntryType::Escrow => "Escrow",
            LedgerEntryType::Unrecognized(tag) => tag,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Check" => LedgerEntryType::Check,
            "Escrow" => LedgerEntryType::Escrow,
            other => LedgerEntryType::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger state entry; unlike transactions it carries no metadata
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLedgerObject {
    object: RawRecord,
    entry_type: LedgerEntryType,
}

impl BaseLedgerObject {
    /// Wrap an entry of any kind, taking the type from its `LedgerEntryType` tag
    pub fn new(object: RawRecord) -> Self {
        let entry_type = LedgerEntryType::from_tag(
            fields::str_field(&object, "LedgerEntryType").unwrap_or_default(),
        );
        Self { object, entry_type }
    }

    /// Wrap an entry for a known kind; a conflicting tag is a [`LedgerError::TypeMismatch`]
    pub fn with_expected_type(expected: LedgerEntryType, object: RawRecord) -> LedgerResult<Self> {
        match object.get("LedgerEntryType") {
            None => {}
            Some(Value::String(tag)) if tag == expected.as_str() => {}
            Some(other) => {
                return Err(LedgerError::TypeMismatch {
                    expected: expected.to_string(),
                    found: other
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| other.to_string()),
                })
            }
        }
        Ok(Self {
            object,
            entry_type: expected,
        })
    }

    pub fn entry_type(&self) -> &LedgerEntryType {
        &self.entry_type
    }

    /// Ledger index (object id) of the entry
    pub fn index(&self) -> Option<&str> {
        self.str_field("index")
    }

    pub(crate) fn str_field(&self, key: &str) -> Option<&str> {
        fields::str_field(&self.object, key)
    }

    pub(crate) fn u32_field(&self, key: &str) -> Option<u32> {
        fields::u32_field(&self.object, key)
    }

    pub(crate) fn amount_field(&self, key: &str) -> LedgerResult<Option<Amount>> {
        fields::amount_field(&self.object, key)
    }

    pub(crate) fn date_field(&self, key: &str) -> LedgerResult<Option<String>> {
        fields::date_field(&self.object, key)
    }

    pub(crate) fn is_past(&self, key: &str, now: DateTime<Utc>) -> bool {
        fields::is_past(&self.object, key, now)
    }

    pub(crate) fn party(&self, address_key: &str, tag_key: &str, name_key: &str) -> Option<Party> {
        fields::party_field(&self.object, address_key, tag_key, name_key)
    }
}

impl LedgerObject for BaseLedgerObject {
    fn base(&self) -> &BaseLedgerObject {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_entry_type_from_tag() {
        let object = BaseLedgerObject::new(
            into_record(json!({"LedgerEntryType": "RippleState", "index": "AB"})).unwrap(),
        );
        assert_eq!(
            object.entry_type(),
            &LedgerEntryType::Unrecognized("RippleState".to_string())
        );
        assert_eq!(object.index(), Some("AB"));
    }

    #[test]
    fn test_conflicting_tag_is_a_mismatch() {
        let result = BaseLedgerObject::with_expected_type(
            LedgerEntryType::Check,
            into_record(json!({"LedgerEntryType": "Escrow"})).unwrap(),
        );
        assert!(matches!(result, Err(LedgerError::TypeMismatch { .. })));
    }

    #[test]
    fn test_expiration_without_field() {
        let object = BaseLedgerObject::new(into_record(json!({"LedgerEntryType": "Check"})).unwrap());
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(object.expiration().unwrap(), None);
        assert!(!object.is_expired_at(now));
    }
}
