//! Amount normalization between wire format and canonical decimal strings
//!
//! Native amounts travel as integer strings of drops; issued amounts travel as
//! `{currency, value, issuer}` objects. All arithmetic is done on
//! [`BigDecimal`], so no value ever goes through a float.

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;
use serde_json::Value;
use std::str::FromStr;

use crate::types::*;

/// Number of decimal places between drops and the major unit
pub const DROPS_SCALE: i64 = 6;

/// Significant digits kept when rendering issued-currency values
pub const ISSUED_PRECISION: u64 = 15;

/// Total supply of the native currency, in drops (10^17)
pub const MAX_DROPS: u64 = 100_000_000_000_000_000;
const MAX_DROPS_EXPONENT: i64 = 17;

/// Exponent range of the ledger's issued-currency encoding
pub const MIN_ISSUED_EXPONENT: i64 = -96;
pub const MAX_ISSUED_EXPONENT: i64 = 80;

/// Digits in the issued-currency mantissa
const ISSUED_MANTISSA_DIGITS: i64 = 16;

fn parse_decimal(value: &str) -> LedgerResult<BigDecimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MalformedAmount(
            "amount is an empty string".to_string(),
        ));
    }

    BigDecimal::from_str(trimmed)
        .map_err(|error| LedgerError::MalformedAmount(format!("'{}': {}", value, error)))
}

/// Power of ten of the leading digit (zero counts as 0)
///
/// Read from the unscaled digits so that a huge exponent is never expanded.
/// `None` when the exponent does not fit in an `i64`.
pub(crate) fn leading_exponent(value: &BigDecimal) -> Option<i64> {
    let (digits, scale) = value.as_bigint_and_exponent();
    if digits.sign() == Sign::NoSign {
        return Some(0);
    }
    i64::try_from(value.digits())
        .ok()?
        .checked_sub(1)?
        .checked_sub(scale)
}

fn check_drops_range(drops: &BigDecimal, original: &str) -> LedgerResult<()> {
    let in_range = leading_exponent(drops).is_some_and(|exponent| exponent <= MAX_DROPS_EXPONENT)
        && drops.abs() <= drops_decimal(MAX_DROPS);
    if !in_range {
        return Err(LedgerError::MalformedAmount(format!(
            "'{}' exceeds {} drops",
            original, MAX_DROPS
        )));
    }
    Ok(())
}

fn is_integral(value: &BigDecimal) -> bool {
    let (_, scale) = value.normalized().as_bigint_and_exponent();
    scale <= 0
}

/// Render a decimal in plain notation with trailing zeros removed
pub fn format_decimal(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let mut rendered = digits.magnitude().to_string();

    if scale <= 0 {
        if rendered != "0" {
            rendered.push_str(&"0".repeat(scale.unsigned_abs() as usize));
        }
    } else {
        let scale = scale as usize;
        if rendered.len() <= scale {
            rendered = format!("{}{}", "0".repeat(scale - rendered.len() + 1), rendered);
        }
        rendered.insert(rendered.len() - scale, '.');
    }

    if digits.sign() == Sign::Minus {
        rendered.insert(0, '-');
    }
    rendered
}

/// Parse an integer drops string into an exact decimal
pub fn parse_drops(drops: &str) -> LedgerResult<BigDecimal> {
    let value = parse_decimal(drops)?;
    if !is_integral(&value) {
        return Err(LedgerError::MalformedAmount(format!(
            "'{}' is not a whole number of drops",
            drops
        )));
    }
    check_drops_range(&value, drops)?;
    Ok(value)
}

/// Convert a drops string to a canonical native value, e.g. `"1500000"` to `"1.5"`
pub fn drops_to_native(drops: &str) -> LedgerResult<String> {
    let (digits, scale) = parse_drops(drops)?.as_bigint_and_exponent();
    Ok(format_decimal(&BigDecimal::new(digits, scale + DROPS_SCALE)))
}

/// Convert a canonical native value back to drops, e.g. `"1.5"` to `"1500000"`
///
/// Fails if the value carries more precision than one drop.
pub fn native_to_drops(value: &str) -> LedgerResult<String> {
    let (digits, scale) = parse_decimal(value)?.as_bigint_and_exponent();
    let drops = BigDecimal::new(digits, scale - DROPS_SCALE);
    if !is_integral(&drops) {
        return Err(LedgerError::MalformedAmount(format!(
            "'{}' has more precision than one drop",
            value
        )));
    }
    check_drops_range(&drops, value)?;
    Ok(format_decimal(&drops))
}

/// Re-render an issued-currency value without exponent notation
///
/// Values outside the ledger's representable range are rejected.
pub fn canonical_issued_value(value: &str) -> LedgerResult<String> {
    let rounded = parse_decimal(value)?.with_prec(ISSUED_PRECISION);
    let lowest = MIN_ISSUED_EXPONENT + ISSUED_MANTISSA_DIGITS - 1;
    let highest = MAX_ISSUED_EXPONENT + ISSUED_MANTISSA_DIGITS - 1;
    if !leading_exponent(&rounded).is_some_and(|exponent| (lowest..=highest).contains(&exponent)) {
        return Err(LedgerError::MalformedAmount(format!(
            "'{}' is outside the issued-currency range",
            value
        )));
    }
    Ok(format_decimal(&rounded))
}

/// Round a non-negative decimal up to the next whole number
pub fn ceil_decimal(value: &BigDecimal) -> BigDecimal {
    let truncated = value.with_scale(0);
    if &truncated < value {
        truncated + BigDecimal::from(1)
    } else {
        truncated
    }
}

/// Parse a wire amount (drops string or issued object) into an [`Amount`]
pub fn parse_amount(raw: &Value) -> LedgerResult<Amount> {
    match raw {
        Value::String(drops) => Ok(Amount::native(drops_to_native(drops)?)),
        Value::Object(fields) => {
            let currency = fields
                .get("currency")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    LedgerError::MalformedAmount("issued amount has no currency".to_string())
                })?;
            let value = match fields.get("value") {
                Some(Value::String(value)) => canonical_issued_value(value)?,
                Some(Value::Number(number)) => canonical_issued_value(&number.to_string())?,
                _ => {
                    return Err(LedgerError::MalformedAmount(
                        "issued amount has no value".to_string(),
                    ))
                }
            };
            let issuer = fields
                .get("issuer")
                .and_then(Value::as_str)
                .map(str::to_string);

            Ok(Amount {
                currency: currency.to_string(),
                value,
                issuer,
            })
        }
        other => Err(LedgerError::MalformedAmount(format!(
            "expected drops string or amount object, got {}",
            json_kind(other)
        ))),
    }
}

/// Express an amount back in wire format
pub fn amount_to_wire(amount: &Amount) -> LedgerResult<Value> {
    if amount.is_native() {
        return Ok(Value::String(native_to_drops(&amount.value)?));
    }

    let mut fields = RawRecord::new();
    fields.insert("currency".to_string(), Value::from(amount.currency.clone()));
    fields.insert(
        "value".to_string(),
        Value::from(canonical_issued_value(&amount.value)?),
    );
    if let Some(issuer) = &amount.issuer {
        fields.insert("issuer".to_string(), Value::from(issuer.clone()));
    }
    Ok(Value::Object(fields))
}

/// Human-readable currency code
///
/// 160-bit hex currency codes are decoded to ASCII when they hold printable
/// text; everything else is returned unchanged.
pub fn normalize_currency_code(code: &str) -> String {
    if code.len() != 40 {
        return code.to_string();
    }

    match hex::decode(code) {
        Ok(bytes) => {
            let text: Vec<u8> = bytes.into_iter().filter(|byte| *byte != 0).collect();
            if !text.is_empty() && text.iter().all(|byte| byte.is_ascii_graphic() || *byte == b' ') {
                String::from_utf8_lossy(&text).trim().to_string()
            } else {
                code.to_string()
            }
        }
        Err(_) => code.to_string(),
    }
}

/// Exact decimal from an integer count of drops
pub fn drops_decimal(drops: u64) -> BigDecimal {
    BigDecimal::new(BigInt::from(drops), 0)
}
