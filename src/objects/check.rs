//! Pending check entries

use crate::objects::{BaseLedgerObject, LedgerEntryType};
use crate::traits::LedgerObject;
use crate::types::*;

/// A check waiting to be cashed or cancelled
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    base: BaseLedgerObject,
}

impl Check {
    pub const TYPE: LedgerEntryType = LedgerEntryType::Check;

    pub fn new(object: RawRecord) -> LedgerResult<Self> {
        BaseLedgerObject::with_expected_type(Self::TYPE, object).map(Self::from_base)
    }

    pub(crate) fn from_base(base: BaseLedgerObject) -> Self {
        Self { base }
    }

    /// Maximum amount the check can debit the sender
    pub fn send_max(&self) -> LedgerResult<Option<Amount>> {
        self.base.amount_field("SendMax")
    }

    pub fn invoice_id(&self) -> Option<&str> {
        self.base.str_field("InvoiceID")
    }

    /// Sequence of the CheckCreate that produced the entry
    pub fn sequence(&self) -> Option<u32> {
        self.base.u32_field("Sequence")
    }
}

impl LedgerObject for Check {
    fn base(&self) -> &BaseLedgerObject {
        &self.base
    }
}
