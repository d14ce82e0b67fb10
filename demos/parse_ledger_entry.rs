//! Parsing a validated ledger entry example

use ledger_records::{
    EnglishLocale, LedgerObject, LedgerObjectFactory, LedgerTransaction, TransactionFactory,
    TransactionInfo,
};

const ENTRY: &str = r#"{
    "tx": {
        "TransactionType": "Payment",
        "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
        "Destination": "rrrrrrrrrrrrrrrrrrrrBZbvji",
        "DestinationTag": 42,
        "Amount": {
            "currency": "USD",
            "value": "250.75",
            "issuer": "rrrrrrrrrrrrrrrrrrrrrhoLvTp"
        },
        "SendMax": "300000000",
        "Fee": "12",
        "Sequence": 18,
        "date": 638902090,
        "Memos": [{"Memo": {"MemoType": "696E766F696365", "MemoData": "4E6F2E203432"}}]
    },
    "meta": {
        "TransactionResult": "tesSUCCESS",
        "delivered_amount": {
            "currency": "USD",
            "value": "250.75",
            "issuer": "rrrrrrrrrrrrrrrrrrrrrhoLvTp"
        }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Ledger Records - Parsing a ledger entry\n");

    let tx = TransactionFactory::from_json_str(ENTRY)?;
    println!("Type:        {}", tx.label(&EnglishLocale));
    if let Some(account) = tx.account() {
        println!("Account:     {}", account.address);
    }
    if let Some(fee) = tx.fee()? {
        println!("Fee:         {} {}", fee.value, fee.currency);
    }
    if let Some(date) = tx.date()? {
        println!("Date:        {}", date);
    }
    if let Some(result) = tx.transaction_result() {
        println!("Result:      {} (success: {})", result.code, result.success);
    }
    if let Some(delivered) = tx.delivered_amount()? {
        println!("Delivered:   {} {}", delivered.value, delivered.currency);
    }
    for memo in tx.memos().unwrap_or_default() {
        println!(
            "Memo:        {} = {}",
            memo.memo_type.unwrap_or_default(),
            memo.data.unwrap_or_default()
        );
    }

    match tx.validate() {
        Ok(()) => println!("Validation:  ok"),
        Err(error) => println!("Validation:  {}", error),
    }

    println!("\n{}\n", tx.description(&EnglishLocale)?);

    // Ledger state entries go through their own factory
    let check = LedgerObjectFactory::from_object(ledger_records::into_record(
        serde_json::json!({
            "LedgerEntryType": "Check",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Destination": "rrrrrrrrrrrrrrrrrrrrBZbvji",
            "SendMax": "100000000",
            "Expiration": 570113521
        }),
    )?);
    println!(
        "Check {} expires at {} (expired: {})",
        check.entry_type(),
        check.expiration()?.unwrap_or_default(),
        check.is_expired()
    );

    Ok(())
}
