use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    inventory::InventoryLedger,
    types::{CategoryCode, Request},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRow {
    pub category: CategoryCode,
    pub demand: u32,
    pub remaining: u32,
}

impl DemandRow {
    pub fn excess(&self) -> u32 {
        self.demand.saturating_sub(self.remaining)
    }

    pub fn is_over_demanded(&self) -> bool {
        self.demand > self.remaining
    }
}

/// Requested demand against remaining units, one row per requested
/// category, sorted by category code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemandSnapshot {
    pub rows: Vec<DemandRow>,
}

impl DemandSnapshot {
    pub fn compute<'a>(
        requests: impl IntoIterator<Item = &'a Request>,
        ledger: &InventoryLedger,
    ) -> Self {
        let mut demand: BTreeMap<&str, u32> = BTreeMap::new();
        for request in requests {
            let count = demand
                .entry(request.requested_category.as_str())
                .or_default();
            *count = count.saturating_add(1);
        }

        let rows = demand
            .into_iter()
            .map(|(category, demand)| DemandRow {
                category: category.to_string(),
                demand,
                remaining: ledger.remaining(category),
            })
            .collect();
        Self { rows }
    }

    pub fn over_demanded(&self) -> BTreeSet<CategoryCode> {
        self.rows
            .iter()
            .filter(|row| row.is_over_demanded())
            .map(|row| row.category.clone())
            .collect()
    }

    pub fn row(&self, category: &str) -> Option<&DemandRow> {
        self.rows.iter().find(|row| row.category == category)
    }

    pub fn total_demand(&self) -> u64 {
        self.rows.iter().map(|row| row.demand as u64).sum()
    }

    pub fn total_excess(&self) -> u64 {
        self.rows.iter().map(|row| row.excess() as u64).sum()
    }
}
