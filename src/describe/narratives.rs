//! Per-kind labels and descriptions

use super::{account_address, amount_params, label_for, tag_lines};
use crate::traits::{LedgerTransaction, Localize, TransactionInfo};
use crate::transactions::*;
use crate::types::*;

fn from_to_line(
    locale: &dyn Localize,
    key: &str,
    from: Option<&Party>,
    to: Option<&Party>,
) -> Option<String> {
    let (from, to) = (from?, to?);
    Some(locale.translate(key, &[("from", &from.address), ("to", &to.address)]))
}

fn amount_line(locale: &dyn Localize, key: &str, amount: &Amount) -> String {
    let (value, currency) = amount_params(amount);
    locale.translate(key, &[("value", &value), ("currency", &currency)])
}

impl TransactionInfo for Payment {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let account = self.account();
        let destination = self.destination();
        let mut lines = Vec::new();

        lines.extend(from_to_line(
            locale,
            "description.payment.fromTo",
            account.as_ref(),
            destination.as_ref(),
        ));
        lines.extend(tag_lines(
            locale,
            "subject.payment",
            account.as_ref(),
            destination.as_ref(),
        ));

        if let Some(amount) = self.amount()? {
            let mut line = amount_line(locale, "description.payment.deliver", &amount);
            if let Some(send_max) = self.send_max()? {
                line.push(' ');
                line.push_str(&amount_line(locale, "description.payment.sendMax", &send_max));
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}

impl TransactionInfo for OfferCreate {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let account = account_address(self);
        let mut lines = Vec::new();

        if let (Some(gets), Some(pays)) = (self.taker_gets()?, self.taker_pays()?) {
            let (give_value, give_currency) = amount_params(&gets);
            let (receive_value, receive_currency) = amount_params(&pays);
            lines.push(locale.translate(
                "description.offerCreate.offer",
                &[
                    ("account", &account),
                    ("giveValue", &give_value),
                    ("giveCurrency", &give_currency),
                    ("receiveValue", &receive_value),
                    ("receiveCurrency", &receive_currency),
                ],
            ));
            if let Some(rate) = self.rate()? {
                lines.push(locale.translate(
                    "description.offerCreate.rate",
                    &[
                        ("rate", &rate),
                        ("giveCurrency", &give_currency),
                        ("receiveCurrency", &receive_currency),
                    ],
                ));
            }
        }

        if let Some(sequence) = self.offer_sequence() {
            lines.push(locale.translate(
                "description.offerCreate.replaces",
                &[("account", &account), ("sequence", &sequence.to_string())],
            ));
        }
        if let Some(date) = self.expiration()? {
            lines.push(locale.translate("description.offerCreate.expires", &[("date", &date)]));
        }
        Ok(lines.join("\n"))
    }
}

impl TransactionInfo for OfferCancel {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let sequence = self
            .offer_sequence()
            .map(|sequence| sequence.to_string())
            .unwrap_or_default();
        Ok(locale.translate(
            "description.offerCancel",
            &[("account", &account_address(self)), ("sequence", &sequence)],
        ))
    }
}

impl TransactionInfo for TrustSet {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let Some(limit) = self.limit_amount()? else {
            return Ok(String::new());
        };
        let (value, currency) = amount_params(&limit);
        let issuer = limit.issuer.clone().unwrap_or_default();

        if self.is_removal()? {
            return Ok(locale.translate(
                "description.trustSet.removed",
                &[("currency", &currency), ("issuer", &issuer)],
            ));
        }
        Ok(locale.translate(
            "description.trustSet.limit",
            &[
                ("limit", &value),
                ("currency", &currency),
                ("issuer", &issuer),
                ("account", &account_address(self)),
            ],
        ))
    }
}

impl TransactionInfo for CheckCreate {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let account = self.account();
        let destination = self.destination();
        let mut lines = Vec::new();

        lines.extend(from_to_line(
            locale,
            "description.checkCreate.fromTo",
            account.as_ref(),
            destination.as_ref(),
        ));
        lines.extend(tag_lines(
            locale,
            "subject.check",
            account.as_ref(),
            destination.as_ref(),
        ));
        if let Some(send_max) = self.send_max()? {
            lines.push(amount_line(locale, "description.checkCreate.sendMax", &send_max));
        }
        if let Some(date) = self.expiration()? {
            lines.push(locale.translate("description.checkCreate.expires", &[("date", &date)]));
        }
        Ok(lines.join("\n"))
    }
}

impl TransactionInfo for CheckCash {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let check_id = self.check_id().unwrap_or_default();
        let amount = match self.amount()? {
            Some(amount) => Some(amount),
            None => self.deliver_min()?,
        };

        Ok(match amount {
            Some(amount) => {
                let (value, currency) = amount_params(&amount);
                locale.translate(
                    "description.checkCash",
                    &[
                        ("value", &value),
                        ("currency", &currency),
                        ("account", &account_address(self)),
                        ("checkId", check_id),
                    ],
                )
            }
            None => locale.translate("description.checkCash.noAmount", &[("checkId", check_id)]),
        })
    }
}

impl TransactionInfo for CheckCancel {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        Ok(locale.translate(
            "description.checkCancel",
            &[("checkId", self.check_id().unwrap_or_default())],
        ))
    }
}

impl TransactionInfo for AccountDelete {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let destination = self.destination();
        let to = destination
            .as_ref()
            .map(|party| party.address.clone())
            .unwrap_or_default();
        let mut lines = vec![locale.translate(
            "description.accountDelete.deleted",
            &[("account", &account_address(self))],
        )];

        lines.push(locale.translate("description.accountDelete.deliver", &[("to", &to)]));
        lines.extend(tag_lines(
            locale,
            "subject.transaction",
            None,
            destination.as_ref(),
        ));
        if let Some(amount) = self.amount()? {
            let (value, currency) = amount_params(&amount);
            lines.push(locale.translate(
                "description.accountDelete.delivered",
                &[("value", &value), ("currency", &currency), ("to", &to)],
            ));
        }
        Ok(lines.join("\n"))
    }
}

impl TransactionInfo for DepositPreauth {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let mut lines = Vec::new();
        if let Some(address) = self.authorize() {
            lines.push(locale.translate(
                "description.depositPreauth.authorize",
                &[("address", address)],
            ));
        }
        if let Some(address) = self.unauthorize() {
            lines.push(locale.translate(
                "description.depositPreauth.unauthorize",
                &[("address", address)],
            ));
        }
        Ok(lines.join("\n"))
    }
}

impl TransactionInfo for EscrowCreate {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let account = self.account();
        let destination = self.destination();
        let mut lines = Vec::new();

        lines.extend(from_to_line(
            locale,
            "description.escrowCreate.fromTo",
            account.as_ref(),
            destination.as_ref(),
        ));
        lines.extend(tag_lines(
            locale,
            "subject.escrow",
            account.as_ref(),
            destination.as_ref(),
        ));
        if let Some(amount) = self.amount()? {
            lines.push(amount_line(locale, "description.escrowCreate.amount", &amount));
        }
        if let Some(date) = self.finish_after()? {
            lines.push(locale.translate("description.escrowCreate.finishAfter", &[("date", &date)]));
        }
        if let Some(date) = self.cancel_after()? {
            lines.push(locale.translate("description.escrowCreate.cancelAfter", &[("date", &date)]));
        }
        if let Some(condition) = self.condition() {
            lines.push(locale.translate(
                "description.escrowCreate.condition",
                &[("condition", condition)],
            ));
        }
        Ok(lines.join("\n"))
    }
}

impl TransactionInfo for EscrowFinish {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let destination = self.destination();
        let mut lines = vec![locale.translate(
            "description.escrowFinish.triggered",
            &[("account", &account_address(self))],
        )];

        if let (Some(amount), Some(to)) = (self.amount()?, destination.as_ref()) {
            let (value, currency) = amount_params(&amount);
            lines.push(locale.translate(
                "description.escrowFinish.delivered",
                &[("value", &value), ("currency", &currency), ("to", &to.address)],
            ));
        }
        lines.extend(tag_lines(locale, "subject.escrow", None, destination.as_ref()));
        if let Some(owner) = self.owner() {
            lines.push(locale.translate("description.escrowFinish.createdBy", &[("owner", owner)]));
        }
        Ok(lines.join("\n"))
    }
}

impl TransactionInfo for EscrowCancel {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let sequence = self
            .offer_sequence()
            .map(|sequence| sequence.to_string())
            .unwrap_or_default();
        Ok(locale.translate(
            "description.escrowCancel",
            &[
                ("sequence", &sequence),
                ("owner", self.owner().unwrap_or_default()),
            ],
        ))
    }
}

impl TransactionInfo for SetRegularKey {
    fn label(&self, locale: &dyn Localize) -> String {
        label_for(self.transaction_type(), locale)
    }

    fn description(&self, locale: &dyn Localize) -> LedgerResult<String> {
        let account = account_address(self);
        Ok(match self.regular_key() {
            Some(key) => locale.translate(
                "description.setRegularKey.set",
                &[("account", &account), ("key", key)],
            ),
            None => locale.translate("description.setRegularKey.removed", &[("account", &account)]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::EnglishLocale;
    use serde_json::json;

    const ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const OTHER: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

    fn record(value: serde_json::Value) -> RawRecord {
        into_record(value).unwrap()
    }

    #[test]
    fn test_payment_description() {
        let tx = Payment::new(
            record(json!({
                "Account": ACCOUNT,
                "Destination": OTHER,
                "DestinationTag": 42,
                "Amount": {"currency": "USD", "value": "12.5", "issuer": ACCOUNT},
                "SendMax": "13000000"
            })),
            None,
        )
        .unwrap();

        assert_eq!(tx.label(&EnglishLocale), "Payment");
        assert_eq!(
            tx.description(&EnglishLocale).unwrap(),
            format!(
                "The payment is from {ACCOUNT} to {OTHER}\n\
                 The payment has a destination tag: 42\n\
                 It was instructed to deliver 12.5 USD by spending up to 13 XRP"
            )
        );
    }

    #[test]
    fn test_offer_description() {
        let tx = OfferCreate::new(
            record(json!({
                "Account": ACCOUNT,
                "TakerGets": "2000000",
                "TakerPays": {"currency": "USD", "value": "1", "issuer": OTHER},
                "OfferSequence": 3
            })),
            None,
        )
        .unwrap();

        let description = tx.description(&EnglishLocale).unwrap();
        let lines: Vec<&str> = description.lines().collect();
        assert_eq!(
            lines[0],
            format!("{ACCOUNT} offered to pay 2 XRP in order to receive 1 USD")
        );
        assert_eq!(lines[1], "The exchange rate for this offer is 0.5 USD/XRP");
        assert_eq!(
            lines[2],
            format!("The transaction will also cancel {ACCOUNT}'s existing offer #3")
        );
    }

    #[test]
    fn test_trust_set_removal() {
        let tx = TrustSet::new(
            record(json!({
                "Account": ACCOUNT,
                "LimitAmount": {"currency": "EUR", "value": "0", "issuer": OTHER}
            })),
            None,
        )
        .unwrap();
        assert_eq!(
            tx.description(&EnglishLocale).unwrap(),
            format!("It removed the trust line for EUR issued by {OTHER}")
        );
    }

    #[test]
    fn test_check_cash_without_amount() {
        let tx = CheckCash::new(record(json!({"Account": ACCOUNT, "CheckID": "AB12"})), None)
            .unwrap();
        assert_eq!(
            tx.description(&EnglishLocale).unwrap(),
            "It cashes the check with ID AB12"
        );
    }

    #[test]
    fn test_set_regular_key_removal() {
        let tx = SetRegularKey::new(record(json!({"Account": ACCOUNT})), None).unwrap();
        assert_eq!(tx.label(&EnglishLocale), "Set Regular Key");
        assert_eq!(
            tx.description(&EnglishLocale).unwrap(),
            format!("It removes the regular key of {ACCOUNT}")
        );
    }

    #[test]
    fn test_custom_locale_receives_keys() {
        let tx = CheckCancel::new(record(json!({"CheckID": "AB12"})), None).unwrap();
        let keys = |key: &str, params: &[(&str, &str)]| format!("{key}:{}", params.len());
        assert_eq!(tx.label(&keys), "transactions.checkCancel:0");
        assert_eq!(tx.description(&keys).unwrap(), "description.checkCancel:1");
    }
}
