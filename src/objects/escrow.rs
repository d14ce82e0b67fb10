//! Escrow entries holding native funds until released or cancelled

use chrono::{DateTime, Utc};

use crate::objects::{BaseLedgerObject, LedgerEntryType};
use crate::traits::LedgerObject;
use crate::types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Escrow {
    base: BaseLedgerObject,
}

impl Escrow {
    pub const TYPE: LedgerEntryType = LedgerEntryType::Escrow;

    pub fn new(object: RawRecord) -> LedgerResult<Self> {
        BaseLedgerObject::with_expected_type(Self::TYPE, object).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseLedgerObject) -> Self {
        Self { base }
    }

    pub fn amount(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("Amount")
    }

    /// Crypto-condition the finisher must fulfil, hex encoded
    pub fn condition(&self) -> Option<&str> {
        self.base.str_field("Condition")
    }

    pub fn finish_after(&self) -> LedgerResult<Option<String>> {
        self.base.date_field("FinishAfter")
    }

    pub fn cancel_after(&self) -> LedgerResult<Option<String>> {
        self.base.date_field("CancelAfter")
    }
}

impl LedgerObject for Escrow {
    fn base(&self) -> &BaseLedgerObject {
        &self.base
    }

    /// Escrows expire once they become cancellable
    fn expiration(&self) -> LedgerResult<Option<String>> {
        self.cancel_after()
    }

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.base.is_past("CancelAfter", now)
    }
}
