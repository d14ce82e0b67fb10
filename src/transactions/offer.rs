//! Offer placement and cancellation on the decentralized exchange

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::parser::amount::{format_decimal, ISSUED_PRECISION};
use crate::traits::LedgerTransaction;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;
use crate::utils::validation::*;

#[derive(Debug, Clone, PartialEq)]
pub struct OfferCreate {
    base: BaseTransaction,
}

impl OfferCreate {
    pub const TYPE: TransactionType = TransactionType::OfferCreate;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    /// What the offer creator pays
    pub fn taker_gets(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("TakerGets")
    }

    /// What the offer creator receives
    pub fn taker_pays(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("TakerPays")
    }

    /// Sequence of an existing offer this one replaces
    pub fn offer_sequence(&self) -> Option<u32> {
        self.base.u32_field("OfferSequence")
    }

    pub fn expiration(&self) -> LedgerResult<Option<String>> {
        self.base.date_field("Expiration")
    }

    /// Exchange rate `TakerPays / TakerGets`
    ///
    /// `None` when either side is missing or `TakerGets` is zero.
    pub fn rate(&self) -> LedgerResult<Option<String>> {
        let (Some(gets), Some(pays)) = (self.taker_gets()?, self.taker_pays()?) else {
            return Ok(None);
        };

        let parse = |amount: &Amount| {
            BigDecimal::from_str(&amount.value)
                .map_err(|error| LedgerError::MalformedAmount(error.to_string()))
        };
        let gets = parse(&gets)?;
        if gets == BigDecimal::from(0) {
            return Ok(None);
        }

        let rate = parse(&pays)? / gets;
        Ok(Some(format_decimal(&rate.with_prec(ISSUED_PRECISION))))
    }
}

impl LedgerTransaction for OfferCreate {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        let gets = require("TakerGets", self.taker_gets()?)?;
        let pays = require("TakerPays", self.taker_pays()?)?;
        if gets.is_native() && pays.is_native() {
            return Err(LedgerError::Validation(
                "an offer cannot exchange the native currency for itself".to_string(),
            ));
        }
        self.expiration()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferCancel {
    base: BaseTransaction,
}

impl OfferCancel {
    pub const TYPE: TransactionType = TransactionType::OfferCancel;

    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> LedgerResult<Self> {
        BaseTransaction::with_expected_type(Self::TYPE, tx, meta).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseTransaction) -> Self {
        Self { base }
    }

    /// Sequence of the offer to cancel
    pub fn offer_sequence(&self) -> Option<u32> {
        self.base.u32_field("OfferSequence")
    }
}

impl LedgerTransaction for OfferCancel {
    fn base(&self) -> &BaseTransaction {
        &self.base
    }

    fn validate(&self) -> LedgerResult<()> {
        self.base.validate_structure()?;
        require("OfferSequence", self.offer_sequence())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    #[test]
    fn test_offer_create_values() {
        let tx = OfferCreate::new(
            into_record(json!({
                "TransactionType": "OfferCreate",
                "Account": ACCOUNT,
                "TakerGets": "50000000",
                "TakerPays": {"currency": "USD", "value": "25", "issuer": ACCOUNT},
                "OfferSequence": 8,
                "Expiration": 638902090
            }))
            .unwrap(),
            None,
        )
        .unwrap();

        assert_eq!(tx.taker_gets().unwrap(), Some(Amount::native("50")));
        assert_eq!(tx.rate().unwrap().as_deref(), Some("0.5"));
        assert_eq!(tx.offer_sequence(), Some(8));
        assert_eq!(
            tx.expiration().unwrap().as_deref(),
            Some("2020-03-30T16:48:10.000Z")
        );
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_offer_create_requires_both_sides() {
        let tx = OfferCreate::new(
            into_record(json!({"Account": ACCOUNT, "TakerGets": "1"})).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(tx.rate().unwrap(), None);
        assert!(matches!(tx.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_offer_cancel() {
        let tx = OfferCancel::new(
            into_record(json!({"Account": ACCOUNT, "OfferSequence": 6})).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(tx.transaction_type(), &TransactionType::OfferCancel);
        assert_eq!(tx.offer_sequence(), Some(6));
        assert!(tx.validate().is_ok());

        let missing = OfferCancel::new(into_record(json!({"Account": ACCOUNT})).unwrap(), None)
            .unwrap();
        assert!(missing.validate().is_err());
    }
}
