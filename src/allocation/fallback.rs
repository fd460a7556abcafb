//! Substitute-category search for a request whose booked category is
//! exhausted.
//!
//! Tiers are tried strictly in order and the first category with a
//! remaining unit wins:
//!
//! 1. same-class upgrades that are not reserved,
//! 2. same-class upgrades that are reserved,
//! 3. cross-class substitutions,
//! 4. any category that is not reserved (configuration order),
//! 5. any category at all.
//!
//! The search only reads the ledger; the engine reserves the unit.

use serde::{Deserialize, Serialize};

use crate::{
    allocation::types::{AssignmentReason, WarningCode, WarningSeverity},
    catalog::CategoryGraph,
    inventory::InventoryLedger,
    types::CategoryCode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTier {
    SameClass,
    SameClassReserved,
    CrossClass,
    AnyUnreserved,
    AnyIncludingReserved,
}

impl FallbackTier {
    pub const ORDER: [FallbackTier; 5] = [
        FallbackTier::SameClass,
        FallbackTier::SameClassReserved,
        FallbackTier::CrossClass,
        FallbackTier::AnyUnreserved,
        FallbackTier::AnyIncludingReserved,
    ];

    pub fn reason(&self) -> AssignmentReason {
        match self {
            FallbackTier::SameClass => AssignmentReason::SameClassUpgrade,
            FallbackTier::SameClassReserved => AssignmentReason::ReservedCategoryUpgrade,
            FallbackTier::CrossClass => AssignmentReason::CrossClassSubstitution,
            FallbackTier::AnyUnreserved => AssignmentReason::EmergencyPlacement,
            FallbackTier::AnyIncludingReserved => AssignmentReason::EmergencyReservedPlacement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCandidate {
    pub tier: FallbackTier,
    pub category: CategoryCode,
}

impl FallbackCandidate {
    /// Warning owed for taking this candidate, if any. Breaking an
    /// accessible booking through a cross-class edge escalates to alert.
    pub fn warning(
        &self,
        graph: &CategoryGraph,
        booked: &str,
    ) -> Option<(WarningSeverity, WarningCode)> {
        match self.tier {
            FallbackTier::SameClass => None,
            FallbackTier::SameClassReserved => {
                Some((WarningSeverity::Info, WarningCode::ReservedCategoryUsed))
            }
            FallbackTier::CrossClass => {
                if graph.is_accessibility(booked) && !graph.is_accessibility(&self.category) {
                    Some((WarningSeverity::Alert, WarningCode::AccessibilityDowngrade))
                } else {
                    Some((WarningSeverity::Info, WarningCode::CrossClassConsentRequired))
                }
            }
            FallbackTier::AnyUnreserved => {
                Some((WarningSeverity::Alert, WarningCode::EmergencyPlacement))
            }
            FallbackTier::AnyIncludingReserved => {
                Some((WarningSeverity::Critical, WarningCode::EmergencyReservedPlacement))
            }
        }
    }
}

pub fn find_fallback(
    graph: &CategoryGraph,
    ledger: &InventoryLedger,
    booked: &str,
) -> Option<FallbackCandidate> {
    FallbackTier::ORDER.into_iter().find_map(|tier| {
        candidate_in_tier(graph, ledger, booked, tier).map(|category| FallbackCandidate {
            tier,
            category: category.to_string(),
        })
    })
}

pub fn candidate_in_tier<'a>(
    graph: &'a CategoryGraph,
    ledger: &'a InventoryLedger,
    booked: &str,
    tier: FallbackTier,
) -> Option<&'a str> {
    match tier {
        FallbackTier::SameClass => graph
            .preferred_upgrades(booked)
            .iter()
            .map(String::as_str)
            .find(|category| !graph.is_reserved(category) && ledger.has_remaining(category)),
        FallbackTier::SameClassReserved => graph
            .preferred_upgrades(booked)
            .iter()
            .map(String::as_str)
            .find(|category| graph.is_reserved(category) && ledger.has_remaining(category)),
        FallbackTier::CrossClass => graph
            .cross_class_upgrades(booked)
            .iter()
            .map(String::as_str)
            .find(|category| ledger.has_remaining(category)),
        FallbackTier::AnyUnreserved => ledger
            .available_categories()
            .find(|category| !graph.is_reserved(category)),
        FallbackTier::AnyIncludingReserved => ledger.available_categories().next(),
    }
}
