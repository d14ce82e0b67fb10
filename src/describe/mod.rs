//! Localized labels and narrative descriptions of transactions
//!
//! Descriptions are assembled line by line from the typed accessors of each
//! kind, so they never read the raw record directly.

pub mod locale;
mod narratives;

pub use locale::*;

use crate::parser::amount::normalize_currency_code;
use crate::traits::{LedgerTransaction, Localize, TransactionInfo};
use crate::transactions::{BaseTransaction, TransactionType};
use crate::types::*;

/// Locale key of the label for a known kind, e.g. `transactions.offerCreate`
pub fn label_key(kind: &TransactionType) -> Option<String> {
    if !kind.is_known() {
        return None;
    }
    let tag = kind.as_str();
    let mut chars = tag.chars();
    let first = chars.next()?.to_ascii_lowercase();
    Some(format!("transactions.{}{}", first, chars.as_str()))
}

fn label_for(kind: &TransactionType, locale: &dyn Localize) -> String {
    match label_key(kind) {
        Some(key) => locale.translate(&key, &[]),
        None => kind.as_str().to_string(),
    }
}

/// Amount rendered as value plus display currency
fn amount_params(amount: &Amount) -> (String, String) {
    (amount.value.clone(), normalize_currency_code(&amount.currency))
}

/// Source and destination tag lines for the given subject
fn tag_lines(
    locale: &dyn Localize,
    subject_key: &str,
    source: Option<&Party>,
    destination: Option<&Party>,
) -> Vec<String> {
    let subject = locale.translate(subject_key, &[]);
    let mut lines = Vec::new();

    if let Some(tag) = source.and_then(|party| party.tag) {
        lines.push(locale.translate(
            "description.sourceTag",
            &[("subject", &subject), ("tag", &tag.to_string())],
        ));
    }
    if let Some(tag) = destination.and_then(|party| party.tag) {
        lines.push(locale.translate(
            "description.destinationTag",
            &[("subject", &subject), ("tag", &tag.to_string())],
        ));
    }
    lines
}

fn account_address(tx: &dyn LedgerTransaction) -> String {
    tx.account().map(|party| party.address).unwrap_or_default()
}

/// Fallback narrative for kinds without a dedicated description
pub fn generic_description(kind: &TransactionType, locale: &dyn Localize) -> String {
    locale.translate("description.generic", &[("type", kind.as_str())])
}

impl TransactionInfo for BaseTransaction {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        Ok(generic_description(self.transaction_type(), locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_keys() {
        assert_eq!(
            label_key(&TransactionType::OfferCreate).as_deref(),
            Some("transactions.offerCreate")
        );
        assert_eq!(label_key(&TransactionType::Unrecognized("AMMBid".into())), None);
    }

    #[test]
    fn test_unrecognized_kind_uses_generic_text() {
        let base = BaseTransaction::new(
            into_record(json!({"TransactionType": "AMMBid"})).unwrap(),
            None,
        );
        assert_eq!(base.label(&EnglishLocale), "AMMBid");
        assert_eq!(
            base.description(&EnglishLocale).unwrap(),
            "This is a AMMBid transaction"
        );
    }

    #[test]
    fn test_tag_lines() {
        let source = Party::new("rA").with_tag(7);
        let destination = Party::new("rB").with_tag(9);
        let lines = tag_lines(
            &EnglishLocale,
            "subject.payment",
            Some(&source),
            Some(&destination),
        );
        assert_eq!(
            lines,
            vec![
                "The payment has a source tag: 7".to_string(),
                "The payment has a destination tag: 9".to_string(),
            ]
        );
    }
}
