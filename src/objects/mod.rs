//! Ledger state entries and the tagged variant over them

mod base;
mod check;
mod escrow;

pub use base::*;
pub use check::*;
pub use escrow::*;

use chrono::{DateTime, Utc};

use crate::traits::LedgerObject;
use crate::types::LedgerResult;

/// A parsed ledger object of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLedgerObject {
    Check(Check),
    Escrow(Escrow),
    Unrecognized(BaseLedgerObject),
}

impl ParsedLedgerObject {
    fn inner(&self) -> &dyn LedgerObject {
        match self {
            ParsedLedgerObject::Check(object) => object,
            ParsedLedgerObject::Escrow(object) => object,
            ParsedLedgerObject::Unrecognized(object) => object,
        }
    }

    pub fn entry_type(&self) -> &LedgerEntryType {
        self.base().entry_type()
    }
}

impl LedgerObject for ParsedLedgerObject {
    fn base(&self) -> &BaseLedgerObject {
        self.inner().base()
    }

    fn expiration(&self) -> LedgerResult<Option<String>> {
        self.inner().expiration()
    }

    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.inner().is_expired_at(now)
    }
}
