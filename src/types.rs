//! Core types and data structures shared by transactions and ledger objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped record exactly as received from the ledger interface.
///
/// Parsed wrappers own their copy and never mutate it.
pub type RawRecord = Map<String, Value>;

/// Outcome code the ledger reports for a successfully applied transaction
pub const SUCCESS_CODE: &str = "tesSUCCESS";

/// Currency code used for the native asset
pub const NATIVE_CURRENCY: &str = "XRP";

/// A party taking part in a transaction (sender, destination, owner, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    /// Classic address of the account
    pub address: String,
    /// Optional source/destination tag. Absent means "no tag", never zero.
    pub tag: Option<u32>,
    /// Optional display name attached by the application
    pub name: Option<String>,
}

impl Party {
    /// Create a party with only an address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            tag: None,
            name: None,
        }
    }

    /// Attach a tag to the party
    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// Canonical currency amount
///
/// `value` is always an exact decimal string in the major unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// Currency code, `XRP` for the native asset
    pub currency: String,
    /// Exact decimal string
    pub value: String,
    /// Issuer of a non-native currency
    pub issuer: Option<String>,
}

impl Amount {
    /// Create a native amount from an already canonical major-unit value
    pub fn native(value: impl Into<String>) -> Self {
        Self {
            currency: NATIVE_CURRENCY.to_string(),
            value: value.into(),
            issuer: None,
        }
    }

    /// Create an issued-currency amount
    pub fn issued(
        currency: impl Into<String>,
        value: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
            issuer: Some(issuer.into()),
        }
    }

    /// Whether this amount is denominated in the native currency
    pub fn is_native(&self) -> bool {
        self.currency == NATIVE_CURRENCY && self.issuer.is_none()
    }
}

/// Decoded transaction memo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub memo_type: Option<String>,
    pub data: Option<String>,
    pub format: Option<String>,
}

/// Settlement outcome taken from transaction metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    /// True iff `code` equals [`SUCCESS_CODE`]
    pub success: bool,
    /// Raw outcome code, e.g. `tesSUCCESS` or `tecNO_DST`
    pub code: String,
}

impl TransactionResult {
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            success: code == SUCCESS_CODE,
            code,
        }
    }
}

/// Errors that can occur while parsing ledger records
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Type mismatch: expected {expected}, record carries {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("Invalid ledger entry: {0}")]
    InvalidLedgerEntry(String),
    #[error("Malformed amount: {0}")]
    MalformedAmount(String),
    #[error("Invalid ledger timestamp: {0}")]
    InvalidLedgerTimestamp(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ledger parsing operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Turn a JSON value into a [`RawRecord`], rejecting anything but an object
pub fn into_record(value: Value) -> LedgerResult<RawRecord> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(LedgerError::InvalidLedgerEntry(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
