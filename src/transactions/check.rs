//! Deferred payments: check creation, cashing and cancellation

use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckCreate {
    base: BaseTransaction,
}

impl CheckCreate {
    pub const TYPE: TransactionType = TransactionType::CheckCreate;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    /// Maximum the check may debit from the sender
    pub fn send_max(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("SendMax")
    }

    pub fn expiration(&self) -> LedgerResult<Option<String>> {
        self.base.date_field("Expiration")
    }

    pub fn invoice_id(&self) -> Option<&str> {
        self.base.str_field("InvoiceID")
    }
}

impl LedgerTransaction for CheckCreate {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn destination(&self) -> Option<Party> {
        self.base
            .party("Destination", "DestinationTag", "DestinationName")
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        let destination = require("Destination", self.destination())?;
        if Some(destination.address.as_str()) == self.base.str_field("Account") {
            return Err(LedgerError::Validation(
                "a check cannot be written to its own sender".to_string(),
            ));
        }
        require("SendMax", self.send_max()?)?;
        self.expiration()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckCash {
    base: BaseTransaction,
}

impl CheckCash {
    pub const TYPE: TransactionType = TransactionType::CheckCash;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    pub fn check_id(&self) -> Option<&str> {
        self.base.str_field("CheckID")
    }

    /// Minimum amount to receive, cashing as much as possible
    pub fn deliver_min(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("DeliverMin")
    }
}

impl LedgerTransaction for CheckCash {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    /// Exact amount to receive
    fn amount(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("Amount")
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        validate_hex("CheckID", require("CheckID", self.check_id())?)?;
        validate_exactly_one(
            ("Amount", self.amount()?),
            ("DeliverMin", self.deliver_min()?),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckCancel {
    base: BaseTransaction,
}

impl CheckCancel {
    pub const TYPE: TransactionType = TransactionType::CheckCancel;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    pub fn check_id(&self) -> Option<&str> {
        self.base.str_field("CheckID")
    }
}

impl LedgerTransaction for CheckCancel {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        validate_hex("CheckID", require("CheckID", self.check_id())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SENDER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const RECEIVER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";
    const CHECK_ID: &str = "49647F0D748DC3FE26BDACBC57F251AADEFFF391403EC9BF87C97F67E9977FB0";

    #[test]
    fn test_check_create() {
        let tx = CheckCreate::new(
            into_record(json!({
                "TransactionType": "CheckCreate",
                "Account": SENDER,
                "Destination": RECEIVER,
                "SendMax": "100000000",
                "Expiration": 570113521,
                "InvoiceID": "6F1DFD1D0FE8A32E40E1F2C05CF1C15545BAB56B617F9C6C2D63A6B704BEF59B"
            }))
            .unwrap(),
            None,
        )
        .unwrap();

        assert_eq!(tx.send_max().unwrap(), Some(Amount::native("100")));
        assert_eq!(tx.destination(), Some(Party::new(RECEIVER)));
        assert!(tx.expiration().unwrap().is_some());
        assert!(tx.invoice_id().is_some());
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_check_create_to_self_is_invalid() {
        let tx = CheckCreate::new(
            into_record(json!({"Account": SENDER, "Destination": SENDER, "SendMax": "1"})).unwrap(),
            None,
        )
        .unwrap();
        assert!(matches!(tx.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_check_cash_needs_exactly_one_amount() {
        let cash = |fields: serde_json::Value| {
            let mut record = into_record(json!({"Account": RECEIVER, "CheckID": CHECK_ID})).unwrap();
            record.extend(into_record(fields).unwrap());
            CheckCash::new(record, None).unwrap()
        };

        assert!(cash(json!({"Amount": "100"})).validate().is_ok());
        assert!(cash(json!({"DeliverMin": "100"})).validate().is_ok());
        assert!(cash(json!({"Amount": "100", "DeliverMin": "50"})).validate().is_err());
        assert!(cash(json!({})).validate().is_err());
        assert_eq!(cash(json!({})).check_id(), Some(CHECK_ID));
    }

    #[test]
    fn test_check_cancel() {
        let tx = CheckCancel::new(
            into_record(json!({"Account": SENDER, "CheckID": CHECK_ID})).unwrap(),
            None,
        )
        .unwrap();
        assert!(tx.validate().is_ok());

        let missing = CheckCancel::new(into_record(json!({"Account": SENDER})).unwrap(), None)
            .unwrap();
        assert!(missing.validate().is_err());
    }
}
