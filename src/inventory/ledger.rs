use std::collections::BTreeMap;

use crate::{
    error::{AllocationError, capacity_exhausted, invalid_policy, invariant_violation},
    inventory::types::{CategorySlot, LedgerEntry, LedgerSeqNo},
    types::CategoryCode,
};

/// Remaining units per category for a single pass.
///
/// Slots keep configuration order so that "any category" scans are
/// deterministic. A ledger is never shared between passes.
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    slots: Vec<CategorySlot>,
    index: BTreeMap<CategoryCode, usize>,
    next_sequence: LedgerSeqNo,
    entries: Vec<LedgerEntry>,
}

impl InventoryLedger {
    pub fn new(
        capacities: impl IntoIterator<Item = (CategoryCode, u32)>,
    ) -> Result<Self, AllocationError> {
        let mut slots = Vec::new();
        let mut index = BTreeMap::new();
        for (category, capacity) in capacities {
            if index.contains_key(&category) {
                return Err(invalid_policy(format!(
                    "duplicate category '{}' in inventory",
                    category
                )));
            }
            index.insert(category.clone(), slots.len());
            slots.push(CategorySlot {
                category,
                capacity,
                remaining: capacity,
            });
        }

        Ok(Self {
            slots,
            index,
            next_sequence: 0,
            entries: Vec::new(),
        })
    }

    pub fn remaining(&self, category: &str) -> u32 {
        self.slot(category).map(|slot| slot.remaining).unwrap_or(0)
    }

    pub fn capacity(&self, category: &str) -> u32 {
        self.slot(category).map(|slot| slot.capacity).unwrap_or(0)
    }

    pub fn assigned(&self, category: &str) -> u32 {
        self.slot(category).map(CategorySlot::assigned).unwrap_or(0)
    }

    pub fn has_remaining(&self, category: &str) -> bool {
        self.remaining(category) > 0
    }

    pub fn total_remaining(&self) -> u64 {
        self.slots.iter().map(|slot| slot.remaining as u64).sum()
    }

    /// Categories that still have units, in configuration order.
    pub fn available_categories(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|slot| slot.has_remaining())
            .map(|slot| slot.category.as_str())
    }

    pub fn reserve(
        &mut self,
        category: &str,
        request_id: &str,
    ) -> Result<LedgerSeqNo, AllocationError> {
        let slot_index = *self.index.get(category).ok_or_else(|| {
            capacity_exhausted(format!("category '{}' has no inventory", category))
        })?;

        let slot = &mut self.slots[slot_index];
        if slot.remaining == 0 {
            return Err(capacity_exhausted(format!(
                "category '{}' exhausted: capacity={}, request={}",
                category, slot.capacity, request_id
            )));
        }
        slot.remaining -= 1;
        let remaining_after = slot.remaining;

        self.next_sequence = self
            .next_sequence
            .checked_add(1)
            .ok_or_else(|| invariant_violation("ledger sequence overflow"))?;

        self.entries.push(LedgerEntry {
            seq_no: self.next_sequence,
            category: category.to_string(),
            request_id: request_id.to_string(),
            remaining_after,
        });

        tracing::trace!(
            target: "inventory",
            seq_no = self.next_sequence,
            category = %category,
            request_id = %request_id,
            remaining_after = remaining_after,
            "unit_reserved"
        );

        Ok(self.next_sequence)
    }

    pub fn snapshot(&self) -> BTreeMap<CategoryCode, u32> {
        self.slots
            .iter()
            .map(|slot| (slot.category.clone(), slot.remaining))
            .collect()
    }

    pub fn slots(&self) -> &[CategorySlot] {
        &self.slots
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    fn slot(&self, category: &str) -> Option<&CategorySlot> {
        self.index.get(category).map(|&index| &self.slots[index])
    }
}
