//! Validation utilities

use serde_json::Value;

use crate::types::*;

/// Version byte of a classic account address
const ACCOUNT_ID_VERSION: u8 = 0;
/// Version byte plus the 20-byte account id
const ACCOUNT_ID_PAYLOAD_LEN: usize = 21;

/// Check that a string is a well-formed classic address
///
/// Classic addresses are base58 (ripple alphabet) encodings of a version byte
/// and a 20-byte account id, followed by a double-SHA256 checksum.
pub fn is_valid_address(address: &str) -> bool {
    if !address.starts_with('r') || !(25..=35).contains(&address.len()) {
        return false;
    }

    bs58::decode(address)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(Some(ACCOUNT_ID_VERSION))
        .into_vec()
        .map(|payload| payload.len() == ACCOUNT_ID_PAYLOAD_LEN)
        .unwrap_or(false)
}

/// Validate that an address field is well-formed
pub fn validate_address(field: &str, address: &str) -> LedgerResult<()> {
    if address.trim().is_empty() {
        return Err(LedgerError::Validation(format!("{} cannot be empty", field)));
    }

    if !is_valid_address(address) {
        return Err(LedgerError::Validation(format!(
            "{} '{}' is not a valid address",
            field, address
        )));
    }

    Ok(())
}

/// Validate an optional tag field: absent is fine, present must fit in 32 bits
pub fn validate_tag(field: &str, value: Option<&Value>) -> LedgerResult<()> {
    match value {
        None => Ok(()),
        Some(value) => match value.as_u64() {
            Some(tag) if u32::try_from(tag).is_ok() => Ok(()),
            _ => Err(LedgerError::Validation(format!(
                "{} must be an unsigned 32-bit integer, got {}",
                field, value
            ))),
        },
    }
}

/// Validate that a field holds an even-length hex string
pub fn validate_hex(field: &str, value: &str) -> LedgerResult<()> {
    if value.len() % 2 != 0 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LedgerError::Validation(format!(
            "{} must be a hex string",
            field
        )));
    }
    Ok(())
}

/// Validate that exactly one of two mutually exclusive fields is set
pub fn validate_exactly_one<T>(
    first: (&str, Option<T>),
    second: (&str, Option<T>),
) -> LedgerResult<()> {
    match (first.1.is_some(), second.1.is_some()) {
        (true, false) | (false, true) => Ok(()),
        (true, true) => Err(LedgerError::Validation(format!(
            "{} and {} cannot both be set",
            first.0, second.0
        ))),
        (false, false) => Err(LedgerError::Validation(format!(
            "one of {} or {} must be set",
            first.0, second.0
        ))),
    }
}

/// Turn an absent required field into a validation error
pub fn require<T>(field: &str, value: Option<T>) -> LedgerResult<T> {
    value.ok_or_else(|| LedgerError::Validation(format!("{} is required", field)))
}
