use serde::{Deserialize, Serialize};

use crate::types::{CategoryCode, RequestId};

pub type LedgerSeqNo = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlot {
    pub category: CategoryCode,
    pub capacity: u32,
    pub remaining: u32,
}

impl CategorySlot {
    pub fn assigned(&self) -> u32 {
        self.capacity.saturating_sub(self.remaining)
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub seq_no: LedgerSeqNo,
    pub category: CategoryCode,
    pub request_id: RequestId,
    pub remaining_after: u32,
}
