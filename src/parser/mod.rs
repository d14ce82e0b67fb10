//! Leaf parsers for amounts and ledger timestamps

pub mod amount;
pub mod date;
pub(crate) mod fields;

pub use amount::*;
pub use date::*;
