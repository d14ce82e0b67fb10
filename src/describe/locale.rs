//! Built-in English strings for labels and descriptions

use crate::traits::Localize;

/// English locale used when the application supplies no lookup of its own
///
/// Unknown keys are returned verbatim, which is also what most localization
/// backends do for missing translations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

fn template(key: &str) -> Option<&'static str> {
    let text = match key {
        "transactions.payment" => "Payment",
        "transactions.offerCreate" => "Create Offer",
        "transactions.offerCancel" => "Cancel Offer",
        "transactions.trustSet" => "Update Trust Line",
        "transactions.checkCreate" => "Create Check",
        "transactions.checkCash" => "Cash Check",
        "transactions.checkCancel" => "Cancel Check",
        "transactions.accountDelete" => "Delete Account",
        "transactions.depositPreauth" => "Deposit Authorization",
        "transactions.escrowCreate" => "Create Escrow",
        "transactions.escrowFinish" => "Finish Escrow",
        "transactions.escrowCancel" => "Cancel Escrow",
        "transactions.setRegularKey" => "Set Regular Key",

        "subject.payment" => "payment",
        "subject.check" => "check",
        "subject.escrow" => "escrow",
        "subject.transaction" => "transaction",
        "description.sourceTag" => "The {subject} has a source tag: {tag}",
        "description.destinationTag" => "The {subject} has a destination tag: {tag}",
        "description.generic" => "This is a {type} transaction",

        "description.payment.fromTo" => "The payment is from {from} to {to}",
        "description.payment.deliver" => "It was instructed to deliver {value} {currency}",
        "description.payment.sendMax" => "by spending up to {value} {currency}",

        "description.offerCreate.offer" => {
            "{account} offered to pay {giveValue} {giveCurrency} in order to receive {receiveValue} {receiveCurrency}"
        }
        "description.offerCreate.rate" => {
            "The exchange rate for this offer is {rate} {receiveCurrency}/{giveCurrency}"
        }
        "description.offerCreate.replaces" => {
            "The transaction will also cancel {account}'s existing offer #{sequence}"
        }
        "description.offerCreate.expires" => {
            "The offer expires at {date} unless canceled or consumed before then."
        }
        "description.offerCancel" => "The transaction will cancel {account}'s offer #{sequence}",

        "description.trustSet.removed" => "It removed the trust line for {currency} issued by {issuer}",
        "description.trustSet.limit" => {
            "It establishes {limit} as the maximum amount of {currency} from {issuer} that {account} is willing to hold."
        }

        "description.checkCreate.fromTo" => "The check is from {from} to {to}",
        "description.checkCreate.sendMax" => {
            "The maximum amount the check is allowed to debit the sender is {value} {currency}"
        }
        "description.checkCreate.expires" => "The check expires at {date}",
        "description.checkCash" => {
            "It was instructed to deliver {value} {currency} to {account} by cashing check with ID {checkId}"
        }
        "description.checkCash.noAmount" => "It cashes the check with ID {checkId}",
        "description.checkCancel" => "The transaction will cancel check with ID {checkId}",

        "description.accountDelete.deleted" => "It deleted account {account}",
        "description.accountDelete.deliver" => {
            "It was instructed to deliver the remaining balance to {to}"
        }
        "description.accountDelete.delivered" => {
            "The remaining balance of {value} {currency} was delivered to {to}"
        }

        "description.depositPreauth.authorize" => {
            "It grants authorization to {address} to send payments to this account"
        }
        "description.depositPreauth.unauthorize" => {
            "It revokes authorization for {address} to send payments to this account"
        }

        "description.escrowCreate.fromTo" => "The escrow is from {from} to {to}",
        "description.escrowCreate.amount" => "The escrowed amount is {value} {currency}",
        "description.escrowCreate.finishAfter" => "It can be finished after {date}",
        "description.escrowCreate.cancelAfter" => "It can be cancelled after {date}",
        "description.escrowCreate.condition" => "It can only be finished with the fulfillment of condition {condition}",
        "description.escrowFinish.triggered" => "Completion was triggered by {account}",
        "description.escrowFinish.delivered" => {
            "The escrowed amount of {value} {currency} was delivered to {to}"
        }
        "description.escrowFinish.createdBy" => "The escrow was created by {owner}",
        "description.escrowCancel" => {
            "The transaction will cancel escrow #{sequence} created by {owner}"
        }

        "description.setRegularKey.set" => "It sets the regular key of {account} to {key}",
        "description.setRegularKey.removed" => "It removes the regular key of {account}",
        _ => return None,
    };
    Some(text)
}

/// Replace every `{name}` placeholder with its parameter
///
/// The template is scanned once, so inserted values are never re-expanded.
/// Placeholders without a parameter are left as they are.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        text.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            rest = &rest[start..];
            break;
        };

        let name = &after[..end];
        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => text.push_str(value),
            None => text.push_str(&rest[start..start + end + 2]),
        }
        rest = &after[end + 1..];
    }

    text.push_str(rest);
    text
}

impl Localize for EnglishLocale {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        match template(key) {
            Some(text) => interpolate(text, params),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation() {
        assert_eq!(
            EnglishLocale.translate("description.checkCancel", &[("checkId", "ABC")]),
            "The transaction will cancel check with ID ABC"
        );
    }

    #[test]
    fn test_inserted_values_are_not_expanded() {
        assert_eq!(
            interpolate("{currency} to {to}", &[("to", "X"), ("currency", "{to}")]),
            "{to} to X"
        );
        assert_eq!(interpolate("{missing} and {", &[("to", "X")]), "{missing} and {");
    }

    #[test]
    fn test_unknown_key_is_returned() {
        assert_eq!(EnglishLocale.translate("missing.key", &[]), "missing.key");
    }

    #[test]
    fn test_closure_locale() {
        let upper = |key: &str, _: &[(&str, &str)]| key.to_uppercase();
        assert_eq!(upper.translate("abc", &[]), "ABC");
    }
}
