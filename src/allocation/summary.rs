use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    allocation::types::{AssignmentReason, PassOutput, SubstitutionDirection, WarningSeverity},
    types::LoyaltyTier,
};

/// Aggregate figures over one pass, for reporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    pub arrival_date: Date,
    pub arrivals: usize,
    pub assigned: usize,
    pub unplaced: usize,
    pub category_changes: usize,
    pub upgrades: usize,
    pub downgrades: usize,
    pub by_loyalty: BTreeMap<LoyaltyTier, usize>,
    pub by_reason: BTreeMap<AssignmentReason, usize>,
    pub warnings_by_severity: BTreeMap<WarningSeverity, usize>,
    pub connecting_requests: usize,
    pub remaining_units: u64,
}

impl PassSummary {
    pub fn from_output(output: &PassOutput) -> Self {
        let mut by_loyalty = BTreeMap::new();
        let mut by_reason = BTreeMap::new();
        let mut category_changes = 0;
        let mut upgrades = 0;
        let mut downgrades = 0;

        for assignment in &output.assignments {
            *by_loyalty.entry(assignment.loyalty).or_insert(0) += 1;
            *by_reason.entry(assignment.reason).or_insert(0) += 1;
            if assignment.changed_category() {
                category_changes += 1;
            }
            match assignment.direction {
                SubstitutionDirection::Upgrade => upgrades += 1,
                SubstitutionDirection::Downgrade => downgrades += 1,
                SubstitutionDirection::Lateral => {}
            }
        }

        let mut warnings_by_severity = BTreeMap::new();
        for warning in &output.warnings {
            *warnings_by_severity.entry(warning.severity).or_insert(0) += 1;
        }

        Self {
            arrival_date: output.arrival_date,
            arrivals: output.arrivals,
            assigned: output.assignments.len(),
            unplaced: output.unplaced.len(),
            category_changes,
            upgrades,
            downgrades,
            by_loyalty,
            by_reason,
            warnings_by_severity,
            connecting_requests: output.connecting_requests.len(),
            remaining_units: output.remaining.values().map(|units| *units as u64).sum(),
        }
    }

    pub fn warnings(&self, severity: WarningSeverity) -> usize {
        self.warnings_by_severity
            .get(&severity)
            .copied()
            .unwrap_or_default()
    }

    pub fn assigned_for(&self, loyalty: LoyaltyTier) -> usize {
        self.by_loyalty.get(&loyalty).copied().unwrap_or_default()
    }
}
