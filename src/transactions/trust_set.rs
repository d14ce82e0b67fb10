//! Trust line creation, modification and removal

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TrustSet {
    base: BaseTransaction,
}

impl TrustSet {
    pub const TYPE: TransactionType = TransactionType::TrustSet;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    pub fn limit_amount(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("LimitAmount")
    }

    pub fn currency(&self) -> LedgerResult<Option<String>> {
        Ok(self.limit_amount()?.map(|amount| amount.currency))
    }

    pub fn issuer(&self) -> LedgerResult<Option<String>> {
        Ok(self.limit_amount()?.and_then(|amount| amount.issuer))
    }

    /// Maximum balance the account is willing to hold
    pub fn limit(&self) -> LedgerResult<Option<String>> {
        Ok(self.limit_amount()?.map(|amount| amount.value))
    }

    /// A zero limit removes the trust line
    pub fn is_removal(&self) -> LedgerResult<bool> {
        match self.limit()? {
            Some(limit) => BigDecimal::from_str(&limit)
                .map(|limit| limit == BigDecimal::from(0))
                .map_err(|error| LedgerError::MalformedAmount(error.to_string())),
            None => Ok(false),
        }
    }

    pub fn quality_in(&self) -> Option<u32> {
        self.base.u32_field("QualityIn")
    }

    pub fn quality_out(&self) -> Option<u32> {
        self.base.u32_field("QualityOut")
    }
}

impl LedgerTransaction for TrustSet {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        let limit = require("LimitAmount", self.limit_amount()?)?;
        let issuer = limit.issuer.as_deref().ok_or_else(|| {
            LedgerError::Validation("LimitAmount must be an issued currency".to_string())
        })?;
        validate_address("LimitAmount.issuer", issuer)?;
        if limit.value.starts_with('-') {
            return Err(LedgerError::Validation(
                "LimitAmount cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const ISSUER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

    fn trust_set(limit: serde_json::Value) -> TrustSet {
        TrustSet::new(
            into_record(json!({"Account": ACCOUNT, "LimitAmount": limit})).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_limit_fields() {
        let tx = trust_set(json!({"currency": "USD", "value": "100", "issuer": ISSUER}));
        assert_eq!(tx.currency().unwrap().as_deref(), Some("USD"));
        assert_eq!(tx.issuer().unwrap().as_deref(), Some(ISSUER));
        assert_eq!(tx.limit().unwrap().as_deref(), Some("100"));
        assert!(!tx.is_removal().unwrap());
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_removal() {
        let tx = trust_set(json!({"currency": "USD", "value": "0", "issuer": ISSUER}));
        assert!(tx.is_removal().unwrap());
    }

    #[test]
    fn test_native_limit_is_rejected() {
        let tx = trust_set(json!("1000000"));
        assert!(matches!(tx.validate(), Err(LedgerError::Validation(_))));
    }
}
