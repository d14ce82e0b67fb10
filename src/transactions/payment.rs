//! Payment transactions

use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

/// Transfer of value from `Account` to `Destination`
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    base: BaseTransaction,
}

impl Payment {
    pub const TYPE: TransactionType = TransactionType::Payment;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    /// Upper bound on what the sender is willing to spend
    pub fn send_max(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("SendMax")
    }

    /// Lower bound on the delivered amount for partial payments
    pub fn deliver_min(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("DeliverMin")
    }

    pub fn invoice_id(&self) -> Option<&str> {
        self.base.str_field("InvoiceID")
    }
}

impl LedgerTransaction for Payment {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn destination(&self) -> Option<Party> {
        self.base
            .party("Destination", "DestinationTag", "DestinationName")
    }

    /// Amount the sender instructed to deliver
    fn amount(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("Amount")
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        require("Destination", self.destination())?;
        require("Amount", self.amount()?)?;
        self.send_max()?;
        self.deliver_min()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SENDER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const RECEIVER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

    fn payment(value: serde_json::Value) -> Payment {
        Payment::new(into_record(value).unwrap(), None).unwrap()
    }

    #[test]
    fn test_parsed_values() {
        let tx = payment(json!({
            "TransactionType": "Payment",
            "Account": SENDER,
            "Destination": RECEIVER,
            "DestinationTag": 123,
            "Amount": {
                "currency": "USD",
                "value": "1.10",
                "issuer": SENDER
            },
            "SendMax": "1500000",
            "Fee": "12"
        }));

        assert_eq!(tx.transaction_type(), &TransactionType::Payment);
        assert_eq!(tx.destination(), Some(Party::new(RECEIVER).with_tag(123)));
        assert_eq!(tx.amount().unwrap(), Some(Amount::issued("USD", "1.1", SENDER)));
        assert_eq!(tx.send_max().unwrap(), Some(Amount::native("1.5")));
        assert_eq!(tx.deliver_min().unwrap(), None);
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_requires_destination_and_amount() {
        let tx = payment(json!({"Account": SENDER, "Amount": "10"}));
        assert!(matches!(tx.validate(), Err(LedgerError::Validation(_))));

        let tx = payment(json!({"Account": SENDER, "Destination": RECEIVER}));
        assert!(matches!(tx.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_malformed_amount_is_surfaced() {
        let tx = payment(json!({"Account": SENDER, "Destination": RECEIVER, "Amount": "ten"}));
        assert!(matches!(tx.amount(), Err(LedgerError::MalformedAmount(_))));
        assert!(matches!(tx.validate(), Err(LedgerError::MalformedAmount(_))));
    }
}
