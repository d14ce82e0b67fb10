//! Base transaction shared by every kind, also used for unrecognized kinds

use bigdecimal::BigDecimal;
use serde_json::Value;

use crate::config::FeeSchedule;
use crate::parser::amount::{format_decimal, parse_amount};
use crate::parser::fields;
use crate::traits::LedgerTransaction;
use crate::transactions::TransactionType;
use crate::types::*;
use crate::utils::validation::*;

/// A transaction record plus optional metadata
///
/// The record is owned and never mutated; every accessor reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseTransaction {
    tx: RawRecord,
    meta: Option<RawRecord>,
    transaction_type: TransactionType,
}

impl BaseTransaction {
    /// Wrap a record of any kind, taking the type from its `TransactionType` tag
    pub fn new(tx: RawRecord, meta: Option<RawRecord>) -> Self {
        let transaction_type = fields::str_field(&tx, "TransactionType")
            .map(TransactionType::from_tag)
            .unwrap_or_else(|| TransactionType::Unrecognized(String::new()));

        Self {
            tx,
            meta,
            transaction_type,
        }
    }

    /// Wrap a record for a known kind
    ///
    /// A missing tag defaults to `expected`; a different tag is a
    /// [`LedgerError::TypeMismatch`].
    pub fn with_expected_type(
        expected: TransactionType,
        tx: RawRecord,
        meta: Option<RawRecord>,
    ) -> LedgerResult<Self> {
        match tx.get("TransactionType") {
            None => {}
            Some(Value::String(tag)) if tag == expected.as_str() => {}
            Some(other) => {
                return Err(LedgerError::TypeMismatch {
                    expected: expected.to_string(),
                    found: other
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| other.to_string()),
                })
            }
        }

        Ok(Self {
            tx,
            meta,
            transaction_type: expected,
        })
    }

    pub fn transaction_type(&self) -> &TransactionType {
        &self.transaction_type
    }

    /// Whether metadata was supplied, i.e. the transaction was validated
    pub fn is_validated(&self) -> bool {
        self.meta.is_some()
    }

    pub(crate) fn meta(&self) -> Option<&RawRecord> {
        self.meta.as_ref()
    }

    pub(crate) fn field(&self, key: &str) -> Option<&Value> {
        self.tx.get(key)
    }

    pub(crate) fn str_field(&self, key: &str) -> Option<&str> {
        fields::str_field(&self.tx, key)
    }

    pub(crate) fn u32_field(&self, key: &str) -> Option<u32> {
        fields::u32_field(&self.tx, key)
    }

    pub(crate) fn amount_field(&self, key: &str) -> LedgerResult<Option<Amount>> {
        fields::amount_field(&self.tx, key)
    }

    pub(crate) fn date_field(&self, key: &str) -> LedgerResult<Option<String>> {
        fields::date_field(&self.tx, key)
    }

    pub(crate) fn ledger_date_field(&self, key: &str) -> LedgerResult<Option<crate::parser::LedgerDate>> {
        fields::ledger_date_field(&self.tx, key)
    }

    pub(crate) fn party(&self, address_key: &str, tag_key: &str, name_key: &str) -> Option<Party> {
        fields::party_field(&self.tx, address_key, tag_key, name_key)
    }

    pub(crate) fn fee(&self) -> LedgerResult<Option<Amount>> {
        match self.tx.get("Fee") {
            None => Ok(None),
            Some(raw @ Value::String(_)) => parse_amount(raw).map(Some),
            Some(other) => Err(LedgerError::MalformedAmount(format!(
                "Fee must be a drops string, got {}",
                other
            ))),
        }
    }

    pub(crate) fn memos(&self) -> Option<Vec<Memo>> {
        let entries = self.tx.get("Memos")?.as_array()?;
        Some(
            entries
                .iter()
                .filter_map(|entry| entry.get("Memo"))
                .map(|memo| Memo {
                    memo_type: fields::hex_text(memo.get("MemoType")),
                    data: fields::hex_text(memo.get("MemoData")),
                    format: fields::hex_text(memo.get("MemoFormat")),
                })
                .collect(),
        )
    }

    pub(crate) fn ledger_index(&self) -> Option<u64> {
        fields::u64_field(&self.tx, "ledger_index")
            .or_else(|| fields::u64_field(&self.tx, "inLedger"))
    }

    pub(crate) fn transaction_result(&self) -> Option<TransactionResult> {
        let meta = self.meta.as_ref()?;
        let code = fields::str_field(meta, "TransactionResult").unwrap_or_default();
        Some(TransactionResult::from_code(code))
    }

    pub(crate) fn delivered_amount(&self) -> LedgerResult<Option<Amount>> {
        let Some(meta) = self.meta.as_ref() else {
            return Ok(None);
        };

        match meta.get("delivered_amount").or_else(|| meta.get("DeliveredAmount")) {
            None => Ok(None),
            Some(Value::String(marker)) if marker == "unavailable" => Ok(None),
            Some(raw) => parse_amount(raw).map(Some),
        }
    }

    /// Fee of a plain transaction: reference fee times load factor
    pub(crate) fn reference_fee(&self, schedule: &FeeSchedule) -> String {
        format_decimal(&schedule.scaled_fee(&BigDecimal::from(1)))
    }

    /// Required fields present and address/tag fields well-formed
    pub(crate) fn validate_structure(&self) -> LedgerResult<()> {
        let account = require("Account", self.str_field("Account"))?;
        validate_address("Account", account)?;

        if let Some(destination) = self.field("Destination") {
            let destination = destination.as_str().ok_or_else(|| {
                LedgerError::Validation("Destination must be an address string".to_string())
            })?;
            validate_address("Destination", destination)?;
        }

        validate_tag("SourceTag", self.field("SourceTag"))?;
        validate_tag("DestinationTag", self.field("DestinationTag"))?;

        self.fee()?;
        Ok(())
    }
}

impl LedgerTransaction for BaseTransaction {
    fn base(&self) -> &BaseTransaction {
        self
    }
}
