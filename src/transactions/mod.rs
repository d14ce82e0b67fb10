//! Transaction kinds and the tagged variant over all of them

pub mod account_delete;
pub mod base;
pub mod check;
pub mod deposit_preauth;
pub mod escrow;
pub mod offer;
pub mod payment;
pub mod set_regular_key;
pub mod trust_set;

pub use account_delete::*;
pub use base::*;
pub use check::*;
pub use deposit_preauth::*;
pub use escrow::*;
pub use offer::*;
pub use payment::*;
pub use set_regular_key::*;
pub use trust_set::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::FeeSchedule;
use crate::traits::{LedgerTransaction, Localize, TransactionInfo};
use crate::types::*;

/// Closed set of transaction kinds, plus a catch-all for tags this crate does not know
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Payment,
    OfferCreate,
    OfferCancel,
    TrustSet,
    CheckCreate,
    CheckCash,
    CheckCancel,
    AccountDelete,
    /// Grants or revokes deposit authorization
    DepositPreauth,
    EscrowCreate,
    EscrowFinish,
    EscrowCancel,
    SetRegularKey,
    /// Any other tag, kept verbatim (empty when the record had none)
    Unrecognized(String),
}

impl TransactionType {
    /// Every known kind, in registry order
    pub const KNOWN: [TransactionType; 13] = [
        TransactionType::Payment,
        TransactionType::OfferCreate,
        TransactionType::OfferCancel,
        TransactionType::TrustSet,
        TransactionType::CheckCreate,
        TransactionType::CheckCash,
        TransactionType::CheckCancel,
        TransactionType::AccountDelete,
        TransactionType::DepositPreauth,
        TransactionType::EscrowCreate,
        TransactionType::EscrowFinish,
        TransactionType::EscrowCancel,
        TransactionType::SetRegularKey,
    ];

    /// Wire tag of the kind
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Payment => "Payment",
            TransactionType::OfferCreate => "OfferCreate",
            TransactionType::OfferCancel => "OfferCancel",
            TransactionType::TrustSet => "TrustSet",
            TransactionType::CheckCreate => "CheckCreate",
            TransactionType::CheckCash => "CheckCash",
            TransactionType::CheckCancel => "CheckCancel",
            TransactionType::AccountDelete => "AccountDelete",
            TransactionType::DepositPreauth => "DepositPreauth",
            TransactionType::EscrowCreate => "EscrowCreate",
            TransactionType::EscrowFinish => "EscrowFinish",
            TransactionType::EscrowCancel => "EscrowCancel",
            TransactionType::SetRegularKey => "SetRegularKey",
            TransactionType::Unrecognized(tag) => tag,
        }
    }

    /// Map a wire tag to its kind; unknown tags become [`TransactionType::Unrecognized`]
    pub fn from_tag(tag: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|kind| kind.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| TransactionType::Unrecognized(tag.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TransactionType::Unrecognized(_))
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed transaction of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    Payment(Payment),
    OfferCreate(OfferCreate),
    OfferCancel(OfferCancel),
    TrustSet(TrustSet),
    CheckCreate(CheckCreate),
    CheckCash(CheckCash),
    CheckCancel(CheckCancel),
    AccountDelete(AccountDelete),
    DepositPreauth(DepositPreauth),
    EscrowCreate(EscrowCreate),
    EscrowFinish(EscrowFinish),
    EscrowCancel(EscrowCancel),
    SetRegularKey(SetRegularKey),
    /// Kind not known to this crate; exposes the common fields only
    Unrecognized(BaseTransaction),
}

impl Transaction {
    fn inner(&self) -> &dyn LedgerTransaction {
        match self {
            Transaction::Payment(tx) => tx,
            Transaction::OfferCreate(tx) => tx,
            Transaction::OfferCancel(tx) => tx,
            Transaction::TrustSet(tx) => tx,
            Transaction::CheckCreate(tx) => tx,
            Transaction::CheckCash(tx) => tx,
            Transaction::CheckCancel(tx) => tx,
            Transaction::AccountDelete(tx) => tx,
            Transaction::DepositPreauth(tx) => tx,
            Transaction::EscrowCreate(tx) => tx,
            Transaction::EscrowFinish(tx) => tx,
            Transaction::EscrowCancel(tx) => tx,
            Transaction::SetRegularKey(tx) => tx,
            Transaction::Unrecognized(tx) => tx,
        }
    }

    fn info(&self) -> &dyn TransactionInfo {
        match self {
            Transaction::Payment(tx) => tx,
            Transaction::OfferCreate(tx) => tx,
            Transaction::OfferCancel(tx) => tx,
            Transaction::TrustSet(tx) => tx,
            Transaction::CheckCreate(tx) => tx,
            Transaction::CheckCash(tx) => tx,
            Transaction::CheckCancel(tx) => tx,
            Transaction::AccountDelete(tx) => tx,
            Transaction::DepositPreauth(tx) => tx,
            Transaction::EscrowCreate(tx) => tx,
            Transaction::EscrowFinish(tx) => tx,
            Transaction::EscrowCancel(tx) => tx,
            Transaction::SetRegularKey(tx) => tx,
            Transaction::Unrecognized(tx) => tx,
        }
    }
}

impl LedgerTransaction for Transaction {
    fn base(&self) -> &BaseTransaction {
        self.inner().base()
    }

    fn destination(&self) -> Option<Party> {
        self.inner().destination()
    }

    fn amount(&self) -> LedgerResult<Option<Amount>> {
        self.inner().amount()
    }

    fn calculate_fee(&self, schedule: &FeeSchedule) -> LedgerResult<String> {
        self.inner().calculate_fee(schedule)
    }

    fn validate(&self) -> LedgerResult<()> {
        self.inner().validate()
    }
}

impl TransactionInfo for Transaction {
    fn label(&self, locale: &dyn Localize) -> String {
        self.info().label(locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        self.info().description(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in TransactionType::KNOWN.iter() {
            assert_eq!(&TransactionType::from_tag(kind.as_str()), kind);
            assert!(kind.is_known());
        }
    }

    #[test]
    fn test_unknown_tag_is_kept_verbatim() {
        let kind = TransactionType::from_tag("NFTokenMint");
        assert_eq!(kind, TransactionType::Unrecognized("NFTokenMint".to_string()));
        assert_eq!(kind.to_string(), "NFTokenMint");
        assert!(!kind.is_known());
    }
}
