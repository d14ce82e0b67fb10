//! Tag-driven construction of transactions and ledger objects
//!
//! Dispatch is a single lookup in a table built on first use. Registering a
//! new kind means adding one row; unknown tags fall back to the generic
//! wrapper so that records from newer ledger versions still parse.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::objects::*;
use crate::transactions::*;
use crate::types::*;

type Constructor = fn(BaseTransaction) -> Transaction;

static REGISTRY: LazyLock<HashMap<TransactionType, Constructor>> = LazyLock::new(|| {
    let entries: [(TransactionType, Constructor); 13] = [
        (Payment::TYPE, |base| Transaction::Payment(Payment::from_base(base))),
        (OfferCreate::TYPE, |base| Transaction::OfferCreate(OfferCreate::from_base(base))),
        (OfferCancel::TYPE, |base| Transaction::OfferCancel(OfferCancel::from_base(base))),
        (TrustSet::TYPE, |base| Transaction::TrustSet(TrustSet::from_base(base))),
        (CheckCreate::TYPE, |base| Transaction::CheckCreate(CheckCreate::from_base(base))),
        (CheckCash::TYPE, |base| Transaction::CheckCash(CheckCash::from_base(base))),
        (CheckCancel::TYPE, |base| Transaction::CheckCancel(CheckCancel::from_base(base))),
        (AccountDelete::TYPE, |base| {
            Transaction::AccountDelete(AccountDelete::from_base(base))
        }),
        (DepositPreauth::TYPE, |base| {
            Transaction::DepositPreauth(DepositPreauth::from_base(base))
        }),
        (EscrowCreate::TYPE, |base| Transaction::EscrowCreate(EscrowCreate::from_base(base))),
        (EscrowFinish::TYPE, |base| Transaction::EscrowFinish(EscrowFinish::from_base(base))),
        (EscrowCancel::TYPE, |base| Transaction::EscrowCancel(EscrowCancel::from_base(base))),
        (SetRegularKey::TYPE, |base| {
            Transaction::SetRegularKey(SetRegularKey::from_base(base))
        }),
    ];
    entries.into_iter().collect()
});

/// Builds [`Transaction`] values from raw records
pub struct TransactionFactory;

impl TransactionFactory {
    /// Construct the kind named by the record's `TransactionType` tag
    ///
    /// Never fails: an unknown or missing tag yields [`Transaction::Unrecognized`].
    pub fn get_transaction(tx: RawRecord, meta: Option<RawRecord>) -> Transaction {
        let base = BaseTransaction::new(tx, meta);

        match REGISTRY.get(base.transaction_type()) {
            Some(constructor) => {
                debug!("Parsing {} transaction", base.transaction_type());
                constructor(base)
            }
            None => {
                debug!(
                    "Unrecognized transaction type [{}], using generic transaction",
                    base.transaction_type()
                );
                Transaction::Unrecognized(base)
            }
        }
    }

    /// Construct a validated transaction from a `{tx | tx_json, meta}` wrapper
    ///
    /// Both parts are required; a missing or non-object part is a
    /// [`LedgerError::InvalidLedgerEntry`].
    pub fn from_ledger_entry(mut entry: RawRecord) -> LedgerResult<Transaction> {
        let tx = match entry.remove("tx").or_else(|| entry.remove("tx_json")) {
            Some(Value::Object(tx)) => tx,
            Some(other) => {
                return Err(LedgerError::InvalidLedgerEntry(format!(
                    "tx must be an object, got {}",
                    json_kind(&other)
                )))
            }
            None => {
                return Err(LedgerError::InvalidLedgerEntry(
                    "ledger entry has no tx".to_string(),
                ))
            }
        };

        let meta = match entry.remove("meta") {
            Some(Value::Object(meta)) => meta,
            Some(other) => {
                return Err(LedgerError::InvalidLedgerEntry(format!(
                    "meta must be an object, got {}",
                    json_kind(&other)
                )))
            }
            None => {
                return Err(LedgerError::InvalidLedgerEntry(
                    "ledger entry has no meta".to_string(),
                ))
            }
        };

        Ok(Self::get_transaction(tx, Some(meta)))
    }

    /// Construct an unvalidated (proposed or signed-only) transaction
    pub fn from_raw_transaction(tx: RawRecord) -> Transaction {
        Self::get_transaction(tx, None)
    }

    /// Parse JSON text holding either a ledger entry wrapper or a bare transaction
    pub fn from_json_str(text: &str) -> LedgerResult<Transaction> {
        let record = into_record(serde_json::from_str(text)?)?;
        if record.contains_key("tx") || record.contains_key("tx_json") || record.contains_key("meta") {
            Self::from_ledger_entry(record)
        } else {
            Ok(Self::from_raw_transaction(record))
        }
    }
}

/// Builds [`ParsedLedgerObject`] values from raw ledger entries
pub struct LedgerObjectFactory;

impl LedgerObjectFactory {
    /// Construct the kind named by the entry's `LedgerEntryType` tag
    pub fn from_object(object: RawRecord) -> ParsedLedgerObject {
        let base = BaseLedgerObject::new(object);
        debug!("Parsing {} ledger object", base.entry_type());

        match base.entry_type() {
            LedgerEntryType::Check => ParsedLedgerObject::Check(Check::from_base(base)),
            LedgerEntryType::Escrow => ParsedLedgerObject::Escrow(Escrow::from_base(base)),
            LedgerEntryType::Unrecognized(_) => ParsedLedgerObject::Unrecognized(base),
        }
    }
}
