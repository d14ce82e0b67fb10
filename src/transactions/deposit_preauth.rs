//! Deposit authorization grants and revocations

use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

/// Grants (`Authorize`) or revokes (`Unauthorize`) another account's
/// permission to send payments to `Account`
#[derive(Debug, Clone, PartialEq)]
pub struct DepositPreauth {
    base: BaseTransaction,
}

impl DepositPreauth {
    pub const TYPE: TransactionType = TransactionType::DepositPreauth;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    pub fn authorize(&self) -> Option<&str> {
        self.base.str_field("Authorize")
    }

    pub fn unauthorize(&self) -> Option<&str> {
        self.base.str_field("Unauthorize")
    }
}

impl LedgerTransaction for DepositPreauth {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        validate_exactly_one(
            ("Authorize", self.authorize()),
            ("Unauthorize", self.unauthorize()),
        )?;

        let (field, target) = match (self.authorize(), self.unauthorize()) {
            (Some(target), _) => ("Authorize", target),
            (_, Some(target)) => ("Unauthorize", target),
            (None, None) => return Ok(()),
        };
        validate_address(field, target)?;

        if Some(target) == self.base.str_field("Account") {
            return Err(LedgerError::Validation(format!(
                "an account cannot {} itself",
                field.to_lowercase()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const OTHER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

    fn preauth(value: serde_json::Value) -> DepositPreauth {
        DepositPreauth::new(into_record(value).unwrap(), None).unwrap()
    }

    #[test]
    fn test_authorize_only() {
        let tx = preauth(json!({"Account": ACCOUNT, "Authorize": OTHER}));
        assert_eq!(tx.transaction_type(), &TransactionType::DepositPreauth);
        assert_eq!(tx.authorize(), Some(OTHER));
        assert_eq!(tx.unauthorize(), None);
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_unauthorize_only() {
        let tx = preauth(json!({"Account": ACCOUNT, "Unauthorize": OTHER}));
        assert_eq!(tx.unauthorize(), Some(OTHER));
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_both_or_neither_fail() {
        let both = preauth(json!({"Account": ACCOUNT, "Authorize": OTHER, "Unauthorize": OTHER}));
        assert!(matches!(both.validate(), Err(LedgerError::Validation(_))));

        let neither = preauth(json!({"Account": ACCOUNT}));
        assert!(matches!(neither.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_self_authorization_fails() {
        let tx = preauth(json!({"Account": ACCOUNT, "Authorize": ACCOUNT}));
        assert!(matches!(tx.validate(), Err(LedgerError::Validation(_))));
    }
}
