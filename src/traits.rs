//! Capability traits shared by every transaction kind and ledger object

use chrono::{DateTime, Utc};

use crate::config::FeeSchedule;
use crate::objects::BaseLedgerObject;
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;

/// Common contract of every parsed transaction
///
/// Implementors only provide [`LedgerTransaction::base`]; the common field
/// accessors are read from the wrapped record. Kinds with extra rules override
/// [`LedgerTransaction::calculate_fee`] and [`LedgerTransaction::validate`].
pub trait LedgerTransaction {
    /// The wrapped record and metadata
    fn base(&self) -> &BaseTransaction;

    fn transaction_type(&self) -> &TransactionType {
        self.base().transaction_type()
    }

    /// Sending account, with its source tag when present
    fn account(&self) -> Option<Party> {
        self.base().party("Account", "SourceTag", "AccountName")
    }

    /// Receiving party; `None` for kinds without one
    fn destination(&self) -> Option<Party> {
        None
    }

    /// Principal amount the transaction moves; `None` for kinds without one
    fn amount(&self) -> LedgerResult<Option<Amount>> {
        Ok(None)
    }

    /// Fee paid, in the native currency
    fn fee(&self) -> LedgerResult<Option<Amount>> {
        self.base().fee()
    }

    fn sequence(&self) -> Option<u32> {
        self.base().u32_field("Sequence")
    }

    fn flags(&self) -> Option<u32> {
        self.base().u32_field("Flags")
    }

    fn last_ledger_sequence(&self) -> Option<u32> {
        self.base().u32_field("LastLedgerSequence")
    }

    /// Decoded memos, `None` when the record carries no memo list
    fn memos(&self) -> Option<Vec<Memo>> {
        self.base().memos()
    }

    /// Close time of the ledger that included the transaction, as ISO-8601
    fn date(&self) -> LedgerResult<Option<String>> {
        self.base().date_field("date")
    }

    fn hash(&self) -> Option<&str> {
        self.base().str_field("hash")
    }

    fn ledger_index(&self) -> Option<u64> {
        self.base().ledger_index()
    }

    /// Settlement outcome; defined iff metadata was supplied
    fn transaction_result(&self) -> Option<TransactionResult> {
        self.base().transaction_result()
    }

    /// Amount actually delivered, as reported by metadata
    fn delivered_amount(&self) -> LedgerResult<Option<Amount>> {
        self.base().delivered_amount()
    }

    /// Required network fee in drops, as a decimal string
    fn calculate_fee(&self, schedule: &FeeSchedule) -> LedgerResult<String> {
        Ok(self.base().reference_fee(schedule))
    }

    /// Structural checks; kinds extend this with their semantic rules
    fn validate(&self) -> LedgerResult<()> {
        self.base().validate_structure()
    }
}

/// Common contract of every parsed ledger object
pub trait LedgerObject {
    fn base(&self) -> &BaseLedgerObject;

    fn account(&self) -> Option<Party> {
        self.base().party("Account", "SourceTag", "AccountName")
    }

    fn destination(&self) -> Option<Party> {
        self.base()
            .party("Destination", "DestinationTag", "DestinationName")
    }

    /// Expiration as ISO-8601; kinds without an `Expiration` field override this
    fn expiration(&self) -> LedgerResult<Option<String>> {
        self.base().date_field("Expiration")
    }

    /// Whether the expiration lies before `now`; objects without one never expire
    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.base().is_past("Expiration", now)
    }

    fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Lookup of localized strings: `(key, params) -> text`
pub trait Localize {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str, &[(&str, &str)]) -> String,
{
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        self(key, params)
    }
}

/// Human-readable label and description of a transaction
pub trait TransactionInfo {
    /// Short localized name of the transaction kind
    fn label(&self, locale: &dyn Localize) -> String;

    /// Multi-line narrative built from the typed accessors
    fn description(&self, locale: &dyn Localize) -> LedgerResult<String>;
}
