//! Regular key rotation

use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

/// Assigns, changes or (without `RegularKey`) removes an account's regular key
#[derive(Debug, Clone, PartialEq)]
pub struct SetRegularKey {
    base: BaseTransaction,
}

impl SetRegularKey {
    pub const TYPE: TransactionType = TransactionType::SetRegularKey;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    pub fn regular_key(&self) -> Option<&str> {
        self.base.str_field("RegularKey")
    }
}

impl LedgerTransaction for SetRegularKey {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        if let Some(key) = self.regular_key() {
            validate_address("RegularKey", key)?;
            if Some(key) == self.base.str_field("Account") {
                return Err(LedgerError::Validation(
                    "RegularKey cannot be the account's own master key".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_is_set_without_tag() {
        let tx = SetRegularKey::new(into_record(json!({})).unwrap(), None).unwrap();
        assert_eq!(tx.transaction_type(), &TransactionType::SetRegularKey);
        assert_eq!(tx.transaction_type().as_str(), "SetRegularKey");
    }

    #[test]
    fn test_parsed_values() {
        let tx = SetRegularKey::new(
            into_record(json!({
                "TransactionType": "SetRegularKey",
                "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
                "RegularKey": "rAR8rR8sUkBoCZFawhkWzY4Y5YoyuznwD"
            }))
            .unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(tx.regular_key(), Some("rAR8rR8sUkBoCZFawhkWzY4Y5YoyuznwD"));
    }

    #[test]
    fn test_removing_the_key_is_valid() {
        let tx = SetRegularKey::new(
            into_record(json!({"Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"})).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(tx.regular_key(), None);
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_key_equal_to_account_is_invalid() {
        let tx = SetRegularKey::new(
            into_record(json!({
                "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
                "RegularKey": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
            }))
            .unwrap(),
            None,
        )
        .unwrap();
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_conflicting_tag_is_a_mismatch() {
        let result = SetRegularKey::new(
            into_record(json!({"TransactionType": "Payment"})).unwrap(),
            None,
        );
        assert!(matches!(result, Err(LedgerError::TypeMismatch { .. })));
    }
}
