//! Account deletion

use bigdecimal::BigDecimal;

use crate::config::FeeSchedule;
use crate::parser::amount::{drops_decimal, format_decimal};
use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

/// Removes `Account` from the ledger and sends its remaining balance to `Destination`
#[derive(Debug, Clone, PartialEq)]
pub struct AccountDelete {
    base: BaseTransaction,
}

impl AccountDelete {
    pub const TYPE: TransactionType = TransactionType::AccountDelete;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }
}

impl LedgerTransaction for AccountDelete {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn destination(&self) -> Option<Party> {
        self.base
            .party("Destination", "DestinationTag", "DestinationName")
    }

    /// Balance handed to the destination; only known once validated
    fn amount(&self) -> LedgerResult<Option<Amount>> {
        self.base.delivered_amount()
    }

    /// Deleting an account burns one owner reserve increment instead of the
    /// reference fee.
    fn calculate_fee(&self, schedule: &FeeSchedule) -> LedgerResult<String> {
        let reserve = drops_decimal(schedule.owner_reserve_drops);
        let reference = schedule.scaled_fee(&BigDecimal::from(1));
        Ok(format_decimal(if reserve > reference {
            &reserve
        } else {
            &reference
        }))
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        let destination = require("Destination", self.destination())?;
        if Some(destination.address.as_str()) == self.base.str_field("Account") {
            return Err(LedgerError::Validation(
                "Destination must differ from Account".to_string(),
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
    const DESTINATION: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

    #[test]
    fn test_fee_is_owner_reserve() {
        let tx = AccountDelete::new(
            into_record(json!({"Account": ACCOUNT, "Destination": DESTINATION})).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(tx.calculate_fee(&FeeSchedule::default()).unwrap(), "2000000");
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_amount_comes_from_metadata() {
        let tx = AccountDelete::new(
            into_record(json!({"Account": ACCOUNT, "Destination": DESTINATION})).unwrap(),
            Some(
                into_record(json!({
                    "TransactionResult": "tesSUCCESS",
                    "delivered_amount": "18000000"
                }))
                .unwrap(),
            ),
        )
        .unwrap();
        assert_eq!(tx.amount().unwrap(), Some(Amount::native("18")));
    }

    #[test]
    fn test_cannot_delete_into_itself() {
        let tx = AccountDelete::new(
            into_record(json!({"Account": ACCOUNT, "Destination": ACCOUNT})).unwrap(),
            None,
        )
        .unwrap();
        assert!(tx.validate().is_err());
    }
}
