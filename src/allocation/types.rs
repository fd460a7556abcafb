use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    allocation::demand::DemandSnapshot,
    inventory::LedgerSeqNo,
    types::{CategoryCode, LoyaltyTier, RequestId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentReason {
    AsBooked,
    AccessibilityAsBooked,
    AccessibilityException,
    SameClassUpgrade,
    ReservedCategoryUpgrade,
    CrossClassSubstitution,
    EmergencyPlacement,
    EmergencyReservedPlacement,
}

impl AssignmentReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentReason::AsBooked => "as-booked",
            AssignmentReason::AccessibilityAsBooked => "accessibility as-booked",
            AssignmentReason::AccessibilityException => "accessibility exception",
            AssignmentReason::SameClassUpgrade => "same-class upgrade",
            AssignmentReason::ReservedCategoryUpgrade => "reserved-category upgrade",
            AssignmentReason::CrossClassSubstitution => "cross-class substitution",
            AssignmentReason::EmergencyPlacement => "emergency placement, full-occupancy",
            AssignmentReason::EmergencyReservedPlacement => {
                "emergency placement into reserved inventory"
            }
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(
            self,
            AssignmentReason::EmergencyPlacement | AssignmentReason::EmergencyReservedPlacement
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionDirection {
    Upgrade,
    Lateral,
    Downgrade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub assignment_id: String,
    pub ledger_seq_no: LedgerSeqNo,
    pub request_id: RequestId,
    pub guest_name: String,
    pub loyalty: LoyaltyTier,
    pub nights: u32,
    pub special_requests: String,
    pub needs_accessibility: bool,
    pub wants_connecting: bool,
    pub requested_category: CategoryCode,
    pub assigned_category: CategoryCode,
    pub reason: AssignmentReason,
    pub reason_detail: String,
    pub direction: SubstitutionDirection,
}

impl Assignment {
    pub fn changed_category(&self) -> bool {
        self.requested_category != self.assigned_category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Info,
    Alert,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    AccessibilityShortfall,
    ReservedCategoryUsed,
    CrossClassConsentRequired,
    AccessibilityDowngrade,
    EmergencyPlacement,
    EmergencyReservedPlacement,
    Unplaceable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub severity: WarningSeverity,
    pub code: WarningCode,
    pub request_id: RequestId,
    pub guest_name: String,
    pub requested_category: CategoryCode,
    #[serde(default)]
    pub assigned_category: Option<CategoryCode>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOutput {
    pub arrival_date: Date,
    pub arrivals: usize,
    /// Processing order, not input order.
    pub assignments: Vec<Assignment>,
    /// Emission order.
    pub warnings: Vec<Warning>,
    /// Assigned requests flagged for connecting rooms; resolved by the
    /// manager on duty outside the engine.
    pub connecting_requests: Vec<RequestId>,
    pub unplaced: Vec<RequestId>,
    pub initial_demand: DemandSnapshot,
    pub reconciled_demand: DemandSnapshot,
    pub remaining: BTreeMap<CategoryCode, u32>,
}

impl PassOutput {
    pub fn assignment_for(&self, request_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.request_id == request_id)
    }

    pub fn warnings_for(&self, request_id: &str) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(move |warning| warning.request_id == request_id)
    }

    pub fn warnings_with_severity(
        &self,
        severity: WarningSeverity,
    ) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .filter(move |warning| warning.severity == severity)
    }

    pub fn has_critical(&self) -> bool {
        self.warnings
            .iter()
            .any(|warning| warning.severity == WarningSeverity::Critical)
    }
}
