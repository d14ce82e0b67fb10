//! Fee estimation example

use ledger_records::{into_record, FeeSchedule, LedgerTransaction, TransactionFactory};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("Ledger Records - Fee Estimation\n");

    // Schedule as reported by a node under load
    let schedule = FeeSchedule::from_server_info(&json!({
        "info": {
            "load_factor": 1.25,
            "validated_ledger": {
                "base_fee_xrp": 0.00001,
                "reserve_inc_xrp": 2
            }
        }
    }))?;
    println!(
        "Reference fee: {} drops, load factor {}, owner reserve {} drops\n",
        schedule.reference_fee_drops, schedule.load_factor, schedule.owner_reserve_drops
    );

    let records = [
        json!({
            "TransactionType": "Payment",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Destination": "rrrrrrrrrrrrrrrrrrrrBZbvji",
            "Amount": "1000000"
        }),
        json!({
            "TransactionType": "EscrowFinish",
            "Account": "rrrrrrrrrrrrrrrrrrrrBZbvji",
            "Owner": "rrrrrrrrrrrrrrrrrrrrrhoLvTp",
            "OfferSequence": 7,
            "Condition": "A025802082764414E879B0B4CDE4CD1E0B065765398DE27A5A1D275FA71352D64C57396181016F",
            "Fulfillment": "A0228020AED2C5FE4D147D310D3CFEBD9BFA81AD0F63CE1ADD92E00379DDDAF8E090E24C"
        }),
        json!({
            "TransactionType": "AccountDelete",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "Destination": "rrrrrrrrrrrrrrrrrrrrBZbvji"
        }),
        json!({
            "TransactionType": "AMMCreate",
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"
        }),
    ];

    for raw in records {
        let tx = TransactionFactory::from_raw_transaction(into_record(raw)?);
        let default_fee = tx.calculate_fee(&FeeSchedule::default())?;
        let loaded_fee = tx.calculate_fee(&schedule)?;
        println!(
            "  {:<14} default: {:>8} drops   under load: {:>8} drops",
            tx.transaction_type().as_str(),
            default_fee,
            loaded_fee
        );
    }

    Ok(())
}
