//! # Ledger Records
//!
//! Strongly typed views over the loosely typed transaction and ledger-object
//! records emitted by an XRP Ledger node.
//!
//! ## Features
//!
//! - **Tag dispatch**: records are routed to a concrete kind by their type tag,
//!   with a generic fallback for kinds this crate does not know
//! - **Exact amounts**: drops and issued-currency values are handled as decimals
//! - **Ledger time**: conversion between ledger-epoch seconds and ISO-8601
//! - **Fees and validation**: per-kind fee rules and semantic checks
//! - **Descriptions**: localized labels and narratives for every kind
//!
//! ## Quick Start
//!
//! ```rust
//! use ledger_records::{into_record, FeeSchedule, LedgerTransaction, TransactionFactory};
//! use serde_json::json;
//!
//! let record = into_record(json!({
//!     "TransactionType": "Payment",
//!     "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
//!     "Destination": "rrrrrrrrrrrrrrrrrrrrBZbvji",
//!     "Amount": "1000000",
//!     "Fee": "12"
//! }))
//! .unwrap();
//!
//! let tx = TransactionFactory::from_raw_transaction(record);
//! assert_eq!(tx.transaction_type().as_str(), "Payment");
//! assert_eq!(tx.calculate_fee(&FeeSchedule::default()).unwrap(), "10");
//! ```

pub mod config;
pub mod describe;
pub mod factory;
pub mod objects;
pub mod parser;
pub mod traits;
pub mod transactions;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use describe::*;
pub use factory::*;
pub use objects::*;
pub use parser::*;
pub use traits::*;
pub use transactions::*;
pub use types::*;
