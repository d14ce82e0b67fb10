//! Escrow creation, release and cancellation

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use serde_json::Value;

use crate::config::FeeSchedule;
use crate::parser::amount::format_decimal;
use crate::parser::fields;
use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

/// Reference-fee multiples charged for any escrow release carrying a fulfillment
pub const FULFILLMENT_BASE_MULTIPLIER: u64 = 33;

/// Extra reference fee charged per fulfillment byte (one reference fee per 16 bytes)
fn per_byte_multiplier() -> BigDecimal {
    BigDecimal::new(BigInt::from(625), 4)
}

/// Byte length of a hex-encoded field, counting a dangling nibble as a byte
pub fn hex_byte_len(hex: &str) -> u64 {
    (hex.len() as u64).div_ceil(2)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EscrowCreate {
    base: BaseTransaction,
}

impl EscrowCreate {
    pub const TYPE: TransactionType = TransactionType::EscrowCreate;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    pub fn condition(&self) -> Option<&str> {
        self.base.str_field("Condition")
    }

    /// Time after which the escrow can be cancelled
    pub fn cancel_after(&self) -> LedgerResult<Option<String>> {
        self.base.date_field("CancelAfter")
    }

    /// Time after which the escrow can be finished
    pub fn finish_after(&self) -> LedgerResult<Option<String>> {
        self.base.date_field("FinishAfter")
    }
}

impl LedgerTransaction for EscrowCreate {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn destination(&self) -> Option<Party> {
        self.base
            .party("Destination", "DestinationTag", "DestinationName")
    }

    fn amount(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("Amount")
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        require("Destination", self.destination())?;

        let amount = require("Amount", self.amount()?)?;
        if !amount.is_native() {
            return Err(LedgerError::Validation(
                "only the native currency can be escrowed".to_string(),
            ));
        }

        if let Some(condition) = self.condition() {
            validate_hex("Condition", condition)?;
        }

        let finish_after = self.base.ledger_date_field("FinishAfter")?;
        let cancel_after = self.base.ledger_date_field("CancelAfter")?;
        match (finish_after, cancel_after) {
            (None, None) => {
                return Err(LedgerError::Validation(
                    "one of FinishAfter or CancelAfter must be set".to_string(),
                ))
            }
            (Some(finish), Some(cancel)) if cancel <= finish => {
                return Err(LedgerError::Validation(
                    "CancelAfter must be later than FinishAfter".to_string(),
                ))
            }
            _ => {}
        }

        if finish_after.is_none() && self.condition().is_none() {
            return Err(LedgerError::Validation(
                "one of FinishAfter or Condition must be set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Releases escrowed funds to their destination
#[derive(Debug, Clone, PartialEq)]
pub struct EscrowFinish {
    base: BaseTransaction,
}

impl EscrowFinish {
    pub const TYPE: TransactionType = TransactionType::EscrowFinish;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    /// Account that created the escrow
    pub fn owner(&self) -> Option<&str> {
        self.base.str_field("Owner")
    }

    /// Sequence of the `EscrowCreate` that funded the escrow
    pub fn offer_sequence(&self) -> Option<u32> {
        self.base.u32_field("OfferSequence")
    }

    pub fn condition(&self) -> Option<&str> {
        self.base.str_field("Condition")
    }

    pub fn fulfillment(&self) -> Option<&str> {
        self.base.str_field("Fulfillment")
    }

    /// Final state of the escrow object removed by this transaction
    fn released_escrow(&self) -> Option<&RawRecord> {
        self.base
            .meta()?
            .get("AffectedNodes")?
            .as_array()?
            .iter()
            .filter_map(|node| node.get("DeletedNode"))
            .find(|node| node.get("LedgerEntryType").and_then(Value::as_str) == Some("Escrow"))?
            .get("FinalFields")?
            .as_object()
    }
}

impl LedgerTransaction for EscrowFinish {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    /// Receiver of the released funds; only known once validated
    fn destination(&self) -> Option<Party> {
        fields::party_field(
            self.released_escrow()?,
            "Destination",
            "DestinationTag",
            "DestinationName",
        )
    }

    /// Released amount; only known once validated
    fn amount(&self) -> LedgerResult<Option<Amount>> {
        match self.released_escrow() {
            Some(escrow) => fields::amount_field(escrow, "Amount"),
            None => Ok(None),
        }
    }

    /// With a fulfillment the cost is
    /// `reference × load × (33 + fulfillment_bytes / 16)`, rounded up.
    fn calculate_fee(&self, schedule: &FeeSchedule) -> LedgerResult<String> {
        let Some(fulfillment) = self.fulfillment() else {
            return Ok(self.base.reference_fee(schedule));
        };

        let multiplier = BigDecimal::from(FULFILLMENT_BASE_MULTIPLIER)
            + BigDecimal::from(hex_byte_len(fulfillment)) * per_byte_multiplier();
        Ok(format_decimal(&schedule.scaled_fee(&multiplier)))
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        validate_address("Owner", require("Owner", self.owner())?)?;
        require("OfferSequence", self.offer_sequence())?;

        match (self.condition(), self.fulfillment()) {
            (Some(condition), Some(fulfillment)) => {
                validate_hex("Condition", condition)?;
                validate_hex("Fulfillment", fulfillment)
            }
            (None, None) => Ok(()),
            _ => Err(LedgerError::Validation(
                "Condition and Fulfillment must be provided together".to_string(),
            )),
        }
    }
}

/// Returns escrowed funds to their owner after expiry
#[derive(Debug, Clone, PartialEq)]
pub struct EscrowCancel {
    base: BaseTransaction,
}

impl EscrowCancel {
    pub const TYPE: TransactionType = TransactionType::EscrowCancel;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    pub fn owner(&self) -> Option<&str> {
        self.base.str_field("Owner")
    }

    pub fn offer_sequence(&self) -> Option<u32> {
        self.base.u32_field("OfferSequence")
    }
}

impl LedgerTransaction for EscrowCancel {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        validate_address("Owner", require("Owner", self.owner())?)?;
        require("OfferSequence", self.offer_sequence())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FINISHER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";
    const OWNER: &str = "rrrrrrrrrrrrrrrrrrrrrhoLvTp";
    const CONDITION: &str =
        "A025802082764414E879B0B4CDE4CD1E0B065765398DE27A5A1D275FA71352D64C57396181016F";
    const FULFILLMENT: &str = "A071806F6E340B9CFFB37A989CA544E6BB780A2C78901D3FB33738768511A30617AFA01D4BF5122F344554C53BDE2EBB8CD2B7E3D1600AD631C385A5D7CCE23C7785459ADBC1B4C900FFE48D575B5DA5C638040125F65DB0FE3E24494B76EA986457D986084FED08B978AF4D7D196A7446A86B";

    fn finish_record() -> RawRecord {
        into_record(json!({
            "TransactionType": "EscrowFinish",
            "Account": FINISHER,
            "Owner": OWNER,
            "OfferSequence": 7,
            "Condition": CONDITION,
            "Fulfillment": FULFILLMENT,
            "Fee": "402"
        }))
        .unwrap()
    }

    fn finish_meta() -> RawRecord {
        into_record(json!({
            "TransactionResult": "tesSUCCESS",
            "AffectedNodes": [
                {"ModifiedNode": {"LedgerEntryType": "AccountRoot", "FinalFields": {}}},
                {"DeletedNode": {
                    "LedgerEntryType": "Escrow",
                    "FinalFields": {
                        "Account": OWNER,
                        "Destination": OWNER,
                        "DestinationTag": 1337,
                        "Amount": "500000000"
                    }
                }}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_hex_byte_len() {
        assert_eq!(hex_byte_len(FULFILLMENT), 115);
        assert_eq!(hex_byte_len("ABC"), 2);
        assert_eq!(hex_byte_len(""), 0);
    }

    #[test]
    fn test_finish_values() {
        let tx = EscrowFinish::new(finish_record(), Some(finish_meta())).unwrap();

        assert_eq!(tx.owner(), Some(OWNER));
        assert_eq!(tx.offer_sequence(), Some(7));
        assert_eq!(tx.condition(), Some(CONDITION));
        assert_eq!(tx.fulfillment(), Some(FULFILLMENT));
        assert_eq!(tx.destination(), Some(Party::new(OWNER).with_tag(1337)));
        assert_eq!(tx.amount().unwrap(), Some(Amount::native("500")));
        assert!(tx.transaction_result().unwrap().success);
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_finish_fee_with_fulfillment() {
        let tx = EscrowFinish::new(finish_record(), None).unwrap();
        assert_eq!(tx.calculate_fee(&FeeSchedule::default()).unwrap(), "402");
    }

    #[test]
    fn test_finish_fee_without_fulfillment() {
        let tx = EscrowFinish::new(
            into_record(json!({"Account": FINISHER, "Owner": OWNER, "OfferSequence": 7})).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(tx.calculate_fee(&FeeSchedule::default()).unwrap(), "10");
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_finish_without_metadata_has_no_result() {
        let tx = EscrowFinish::new(finish_record(), None).unwrap();
        assert_eq!(tx.transaction_result(), None);
        assert_eq!(tx.destination(), None);
        assert_eq!(tx.amount().unwrap(), None);
    }

    #[test]
    fn test_finish_requires_condition_with_fulfillment() {
        let mut record = finish_record();
        record.remove("Condition");
        let tx = EscrowFinish::new(record, None).unwrap();
        assert!(matches!(tx.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_create_rules() {
        let create = |fields: Value| {
            let mut record = into_record(json!({
                "Account": OWNER,
                "Destination": FINISHER,
                "Amount": "10000000"
            }))
            .unwrap();
            record.extend(into_record(fields).unwrap());
            EscrowCreate::new(record, None).unwrap()
        };

        let timed = create(json!({"FinishAfter": 533257958, "CancelAfter": 533344358}));
        assert!(timed.validate().is_ok());
        assert_eq!(timed.amount().unwrap(), Some(Amount::native("10")));
        assert!(timed.finish_after().unwrap().is_some());

        let conditional = create(json!({"Condition": CONDITION, "CancelAfter": 533344358}));
        assert!(conditional.validate().is_ok());

        assert!(create(json!({})).validate().is_err());
        assert!(create(json!({"CancelAfter": 533344358})).validate().is_err());
        assert!(create(json!({"FinishAfter": 533344358, "CancelAfter": 533257958}))
            .validate()
            .is_err());
    }

    #[test]
    fn test_cancel() {
        let tx = EscrowCancel::new(
            into_record(json!({"Account": FINISHER, "Owner": OWNER, "OfferSequence": 7})).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(tx.owner(), Some(OWNER));
        assert!(tx.validate().is_ok());
    }
}
