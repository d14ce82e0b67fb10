//! Fee schedule configuration

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::parser::amount::{ceil_decimal, drops_decimal, leading_exponent, native_to_drops};
use crate::types::*;

/// Load factors are reported as 32-bit integers scaled by the base load
const MAX_LOAD_FACTOR_EXPONENT: i64 = 9;

/// Network fee parameters used by `calculate_fee`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Cost of the cheapest transaction, in drops
    pub reference_fee_drops: u64,
    /// Current load multiplier applied to the reference fee
    pub load_factor: BigDecimal,
    /// Owner reserve increment, in drops; charged by `AccountDelete`
    pub owner_reserve_drops: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            reference_fee_drops: 10,
            load_factor: BigDecimal::from(1),
            owner_reserve_drops: 2_000_000,
        }
    }
}

impl FeeSchedule {
    /// Parse a schedule from a JSON document; missing keys keep their defaults
    pub fn from_json(document: &str) -> LedgerResult<Self> {
        let schedule: Self = serde_json::from_str(document)?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Build a schedule from a node's `server_info` / `server_state` result
    ///
    /// Reads `validated_ledger.base_fee_xrp`, `validated_ledger.reserve_inc_xrp`
    /// and the top-level `load_factor`. Both the bare `info` object and the
    /// wrapping `{"info": ...}` shape are accepted.
    pub fn from_server_info(server_info: &Value) -> LedgerResult<Self> {
        let info = server_info.get("info").unwrap_or(server_info);
        let ledger = info.get("validated_ledger").ok_or_else(|| {
            LedgerError::Validation("server info has no validated_ledger".to_string())
        })?;

        let mut schedule = Self::default();
        if let Some(base_fee) = ledger.get("base_fee_xrp") {
            schedule.reference_fee_drops = native_value_to_drops("base_fee_xrp", base_fee)?;
        }
        if let Some(reserve) = ledger.get("reserve_inc_xrp") {
            schedule.owner_reserve_drops = native_value_to_drops("reserve_inc_xrp", reserve)?;
        }
        if let Some(load_factor) = info.get("load_factor") {
            schedule.load_factor = BigDecimal::from_str(&numeric_text("load_factor", load_factor)?)
                .map_err(|error| {
                    LedgerError::Validation(format!("invalid load_factor: {}", error))
                })?;
        }

        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> LedgerResult<()> {
        if self.reference_fee_drops == 0 {
            return Err(LedgerError::Validation(
                "reference fee must be positive".to_string(),
            ));
        }
        if !leading_exponent(&self.load_factor)
            .is_some_and(|exponent| (0..=MAX_LOAD_FACTOR_EXPONENT).contains(&exponent))
        {
            return Err(LedgerError::Validation(
                "load factor is out of range".to_string(),
            ));
        }
        if self.load_factor < BigDecimal::from(1) {
            return Err(LedgerError::Validation(
                "load factor cannot be below 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Reference fee scaled by the load factor, rounded up to whole drops
    pub fn scaled_fee(&self, multiplier: &BigDecimal) -> BigDecimal {
        ceil_decimal(&(drops_decimal(self.reference_fee_drops) * &self.load_factor * multiplier))
    }
}

fn numeric_text(field: &str, value: &Value) -> LedgerResult<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(LedgerError::Validation(format!(
            "{} must be numeric, got {}",
            field, other
        ))),
    }
}

fn native_value_to_drops(field: &str, value: &Value) -> LedgerResult<u64> {
    native_to_drops(&numeric_text(field, value)?)?
        .parse::<u64>()
        .map_err(|error| LedgerError::Validation(format!("{}: {}", field, error)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_schedule() {
        let schedule = FeeSchedule::default();
        assert_eq!(schedule.reference_fee_drops, 10);
        assert_eq!(schedule.scaled_fee(&BigDecimal::from(1)), BigDecimal::from(10));
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_from_json_keeps_defaults() {
        let schedule = FeeSchedule::from_json(r#"{"load_factor": "1.5"}"#).unwrap();
        assert_eq!(schedule.reference_fee_drops, 10);
        assert_eq!(schedule.owner_reserve_drops, 2_000_000);
        assert_eq!(schedule.scaled_fee(&BigDecimal::from(1)), BigDecimal::from(15));
    }

    #[test]
    fn test_from_json_rejects_zero_reference_fee() {
        assert!(FeeSchedule::from_json(r#"{"reference_fee_drops": 0}"#).is_err());
        assert!(FeeSchedule::from_json("not json").is_err());
    }

    #[test]
    fn test_from_server_info() {
        let info = json!({
            "info": {
                "load_factor": 2,
                "validated_ledger": {
                    "base_fee_xrp": 0.00001,
                    "reserve_base_xrp": 10,
                    "reserve_inc_xrp": 2
                }
            }
        });

        let schedule = FeeSchedule::from_server_info(&info).unwrap();
        assert_eq!(schedule.reference_fee_drops, 10);
        assert_eq!(schedule.owner_reserve_drops, 2_000_000);
        assert_eq!(schedule.load_factor, BigDecimal::from(2));
        assert_eq!(schedule.scaled_fee(&BigDecimal::from(1)), BigDecimal::from(20));
    }

    #[test]
    fn test_load_factor_must_be_in_range() {
        for load_factor in ["1e100000000000", "1e-100000000000", "0.5", "0"] {
            let schedule = FeeSchedule {
                load_factor: BigDecimal::from_str(load_factor).unwrap(),
                ..FeeSchedule::default()
            };
            assert!(matches!(schedule.validate(), Err(LedgerError::Validation(_))));
        }
        assert!(FeeSchedule::from_json(r#"{"load_factor": "1e100000000000"}"#).is_err());
    }

    #[test]
    fn test_from_server_info_requires_validated_ledger() {
        assert!(FeeSchedule::from_server_info(&json!({"info": {}})).is_err());
    }
}
