pub mod ledger;
pub mod types;

pub use ledger::InventoryLedger;
pub use types::{CategorySlot, LedgerEntry, LedgerSeqNo};
