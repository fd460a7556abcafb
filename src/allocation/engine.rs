use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use sha2::{Digest, Sha256};
use time::Date;

use crate::{
    allocation::{
        demand::DemandSnapshot,
        fallback::{FallbackCandidate, FallbackTier, find_fallback},
        types::{
            Assignment, AssignmentReason, PassOutput, SubstitutionDirection, Warning, WarningCode,
            WarningSeverity,
        },
    },
    catalog::{CategoryGraph, PolicyConfig},
    config::Config,
    error::{AllocationError, invalid_request, invariant_violation},
    inventory::{InventoryLedger, LedgerSeqNo},
    ranking::{DeterministicPriorityRanker, PriorityRanker, RankingContext, RankingWeights},
    types::{Request, RequestId},
};

const LONG_STAY_NOTE_MIN_NIGHTS: u32 = 3;

/// Runs allocation passes against a fixed policy.
///
/// The engine holds no mutable state: every pass builds its own ledger, so
/// passes for different arrival dates may run concurrently.
pub struct AllocationEngine {
    graph: CategoryGraph,
    ranker: Arc<dyn PriorityRanker>,
}

impl AllocationEngine {
    pub fn new(graph: CategoryGraph, ranker: Arc<dyn PriorityRanker>) -> Self {
        Self { graph, ranker }
    }

    pub fn from_policy(
        policy: &PolicyConfig,
        weights: RankingWeights,
    ) -> Result<Self, AllocationError> {
        Ok(Self::new(
            CategoryGraph::from_policy(policy)?,
            Arc::new(DeterministicPriorityRanker::new(weights)),
        ))
    }

    pub fn from_config(config: &Config) -> Result<Self, AllocationError> {
        Self::from_policy(&config.policy, config.ranking.clone())
    }

    pub fn with_defaults(policy: &PolicyConfig) -> Result<Self, AllocationError> {
        Self::from_policy(policy, RankingWeights::default())
    }

    pub fn graph(&self) -> &CategoryGraph {
        &self.graph
    }

    #[tracing::instrument(
        name = "allocation_pass",
        target = "allocation",
        skip_all,
        fields(arrival_date = %arrival_date, requests = requests.len())
    )]
    pub fn run_pass(
        &self,
        arrival_date: Date,
        requests: &[Request],
    ) -> Result<PassOutput, AllocationError> {
        let arrivals: Vec<&Request> = requests
            .iter()
            .filter(|request| request.arrival_date == arrival_date)
            .collect();
        validate_arrivals(&arrivals)?;

        let skipped = requests.len() - arrivals.len();
        if skipped > 0 {
            tracing::debug!(
                target: "allocation",
                skipped = skipped,
                "requests_outside_arrival_date_ignored"
            );
        }

        let mut pass = PassState::new(arrival_date, &self.graph)?;
        tracing::info!(
            target: "allocation",
            arrivals = arrivals.len(),
            total_capacity = self.graph.total_capacity(),
            "pass_started"
        );

        let initial_demand = DemandSnapshot::compute(arrivals.iter().copied(), &pass.ledger);
        for row in initial_demand.rows.iter().filter(|row| row.is_over_demanded()) {
            tracing::info!(
                target: "allocation",
                category = %row.category,
                demand = row.demand,
                remaining = row.remaining,
                excess = row.excess(),
                "category_overbooked"
            );
        }

        self.assign_accessibility(&mut pass, &arrivals)?;

        let unassigned: Vec<&Request> = arrivals
            .iter()
            .copied()
            .filter(|request| !pass.is_assigned(&request.id))
            .collect();
        let reconciled_demand = DemandSnapshot::compute(unassigned.iter().copied(), &pass.ledger);
        let over_demanded = reconciled_demand.over_demanded();
        let ranked = self.ranker.rank(
            &unassigned,
            &RankingContext {
                over_demanded: &over_demanded,
            },
        );

        for entry in ranked {
            self.assign_ranked(&mut pass, entry.request, entry.score)?;
        }

        let connecting_requests = pass.connecting_requests();
        if !connecting_requests.is_empty() {
            tracing::info!(
                target: "allocation",
                count = connecting_requests.len(),
                "connecting_requests_pending_review"
            );
        }

        let output = pass.finish(
            arrivals.len(),
            connecting_requests,
            initial_demand,
            reconciled_demand,
        );
        tracing::info!(
            target: "allocation",
            assigned = output.assignments.len(),
            unplaced = output.unplaced.len(),
            warnings = output.warnings.len(),
            "pass_completed"
        );
        Ok(output)
    }

    fn assign_accessibility(
        &self,
        pass: &mut PassState<'_>,
        arrivals: &[&Request],
    ) -> Result<(), AllocationError> {
        for request in arrivals.iter().copied().filter(|r| r.needs_accessibility) {
            let booked = request.requested_category.as_str();
            if self.graph.is_accessibility(booked) && pass.ledger.has_remaining(booked) {
                pass.assign(
                    request,
                    booked,
                    AssignmentReason::AccessibilityAsBooked,
                    "Accessibility - assigned as booked".to_string(),
                )?;
                tracing::debug!(
                    target: "allocation",
                    request_id = %request.id,
                    assigned = %booked,
                    "accessibility_assigned"
                );
                continue;
            }

            let available = self
                .graph
                .accessibility_categories()
                .iter()
                .find(|category| pass.ledger.has_remaining(category))
                .cloned();
            match available {
                Some(category) => {
                    pass.assign(
                        request,
                        &category,
                        AssignmentReason::AccessibilityException,
                        format!("Accessibility - moved from {}", booked),
                    )?;
                    tracing::info!(
                        target: "allocation",
                        request_id = %request.id,
                        booked = %booked,
                        assigned = %category,
                        "accessibility_assigned"
                    );
                }
                None => {
                    pass.warn(
                        request,
                        WarningSeverity::Critical,
                        WarningCode::AccessibilityShortfall,
                        None,
                        format!(
                            "No accessible category available for {} (legal requirement)",
                            request.guest_name
                        ),
                    );
                }
            }
        }

        Ok(())
    }

    fn assign_ranked(
        &self,
        pass: &mut PassState<'_>,
        request: &Request,
        score: u32,
    ) -> Result<(), AllocationError> {
        let booked = request.requested_category.as_str();
        match pass.assign(
            request,
            booked,
            AssignmentReason::AsBooked,
            "Assigned as booked".to_string(),
        ) {
            Ok(()) => return Ok(()),
            Err(err) if err.is_capacity_exhausted() => {
                tracing::debug!(
                    target: "allocation.fallback",
                    request_id = %request.id,
                    booked = %booked,
                    score = score,
                    reason = %err,
                    "booked_category_exhausted"
                );
            }
            Err(err) => return Err(err),
        }

        let Some(candidate) = find_fallback(&self.graph, &pass.ledger, booked) else {
            tracing::warn!(
                target: "allocation.fallback",
                request_id = %request.id,
                booked = %booked,
                score = score,
                "request_unplaced"
            );
            pass.unplaced.push(request.id.clone());
            pass.warn(
                request,
                WarningSeverity::Critical,
                WarningCode::Unplaceable,
                None,
                format!(
                    "Could not assign {} - capacity exhausted, no placement found",
                    request.guest_name
                ),
            );
            return Ok(());
        };

        pass.assign(
            request,
            &candidate.category,
            candidate.tier.reason(),
            fallback_detail(&self.graph, request, &candidate),
        )
        .map_err(|err| {
            if err.is_capacity_exhausted() {
                invariant_violation(format!(
                    "fallback candidate '{}' had no remaining unit: {}",
                    candidate.category, err
                ))
            } else {
                err
            }
        })?;

        if let Some((severity, code)) = candidate.warning(&self.graph, booked) {
            let message = fallback_warning_message(code, request, &candidate.category);
            pass.warn(request, severity, code, Some(candidate.category.as_str()), message);
        }

        tracing::info!(
            target: "allocation.fallback",
            request_id = %request.id,
            booked = %booked,
            assigned = %candidate.category,
            tier = ?candidate.tier,
            score = score,
            "fallback_assigned"
        );
        Ok(())
    }
}

struct PassState<'g> {
    arrival_date: Date,
    graph: &'g CategoryGraph,
    ledger: InventoryLedger,
    assignments: Vec<Assignment>,
    warnings: Vec<Warning>,
    assigned: BTreeSet<RequestId>,
    unplaced: Vec<RequestId>,
}

impl<'g> PassState<'g> {
    fn new(arrival_date: Date, graph: &'g CategoryGraph) -> Result<Self, AllocationError> {
        Ok(Self {
            arrival_date,
            graph,
            ledger: InventoryLedger::new(graph.capacities())?,
            assignments: Vec::new(),
            warnings: Vec::new(),
            assigned: BTreeSet::new(),
            unplaced: Vec::new(),
        })
    }

    fn is_assigned(&self, request_id: &str) -> bool {
        self.assigned.contains(request_id)
    }

    fn assign(
        &mut self,
        request: &Request,
        category: &str,
        reason: AssignmentReason,
        reason_detail: String,
    ) -> Result<(), AllocationError> {
        if self.is_assigned(&request.id) {
            return Err(invariant_violation(format!(
                "request '{}' is already assigned",
                request.id
            )));
        }

        let ledger_seq_no = self.ledger.reserve(category, &request.id)?;
        let direction = substitution_direction(self.graph, &request.requested_category, category);

        if category != request.requested_category {
            tracing::info!(
                target: "allocation",
                request_id = %request.id,
                booked = %request.requested_category,
                assigned = %category,
                reason = reason.as_str(),
                direction = ?direction,
                "category_changed"
            );
        }

        self.assignments.push(Assignment {
            assignment_id: derive_assignment_id(self.arrival_date, &request.id, ledger_seq_no),
            ledger_seq_no,
            request_id: request.id.clone(),
            guest_name: request.guest_name.clone(),
            loyalty: request.loyalty,
            nights: request.nights,
            special_requests: request.special_requests.clone(),
            needs_accessibility: request.needs_accessibility,
            wants_connecting: request.wants_connecting,
            requested_category: request.requested_category.clone(),
            assigned_category: category.to_string(),
            reason,
            reason_detail,
            direction,
        });
        self.assigned.insert(request.id.clone());
        Ok(())
    }

    fn warn(
        &mut self,
        request: &Request,
        severity: WarningSeverity,
        code: WarningCode,
        assigned_category: Option<&str>,
        message: String,
    ) {
        match severity {
            WarningSeverity::Info => tracing::info!(
                target: "allocation.warning",
                request_id = %request.id,
                code = ?code,
                message = %message,
                "policy_exception"
            ),
            WarningSeverity::Alert | WarningSeverity::Critical => tracing::warn!(
                target: "allocation.warning",
                request_id = %request.id,
                severity = ?severity,
                code = ?code,
                message = %message,
                "policy_exception"
            ),
        }

        self.warnings.push(Warning {
            severity,
            code,
            request_id: request.id.clone(),
            guest_name: request.guest_name.clone(),
            requested_category: request.requested_category.clone(),
            assigned_category: assigned_category.map(str::to_string),
            message,
        });
    }

    fn connecting_requests(&self) -> Vec<RequestId> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.wants_connecting)
            .map(|assignment| assignment.request_id.clone())
            .collect()
    }

    fn finish(
        self,
        arrivals: usize,
        connecting_requests: Vec<RequestId>,
        initial_demand: DemandSnapshot,
        reconciled_demand: DemandSnapshot,
    ) -> PassOutput {
        let remaining: BTreeMap<_, _> = self.ledger.snapshot();
        PassOutput {
            arrival_date: self.arrival_date,
            arrivals,
            assignments: self.assignments,
            warnings: self.warnings,
            connecting_requests,
            unplaced: self.unplaced,
            initial_demand,
            reconciled_demand,
            remaining,
        }
    }
}

fn validate_arrivals(arrivals: &[&Request]) -> Result<(), AllocationError> {
    let mut seen = BTreeSet::new();
    for request in arrivals {
        if request.id.trim().is_empty() {
            return Err(invalid_request("request id cannot be empty"));
        }
        if request.nights == 0 {
            return Err(invalid_request(format!(
                "request '{}' has a zero-night stay",
                request.id
            )));
        }
        if !seen.insert(request.id.as_str()) {
            return Err(invalid_request(format!(
                "duplicate request id '{}'",
                request.id
            )));
        }
    }
    Ok(())
}

fn substitution_direction(
    graph: &CategoryGraph,
    requested: &str,
    assigned: &str,
) -> SubstitutionDirection {
    if requested == assigned {
        return SubstitutionDirection::Lateral;
    }
    match graph
        .quality_tier(assigned)
        .cmp(&graph.quality_tier(requested))
    {
        Ordering::Greater => SubstitutionDirection::Upgrade,
        Ordering::Equal => SubstitutionDirection::Lateral,
        Ordering::Less => SubstitutionDirection::Downgrade,
    }
}

fn fallback_detail(
    graph: &CategoryGraph,
    request: &Request,
    candidate: &FallbackCandidate,
) -> String {
    let booked = &request.requested_category;
    let loyalty = request.loyalty;
    match candidate.tier {
        FallbackTier::SameClass => {
            let mut detail = format!("Upgrade from {} (overbooked) - {}", booked, loyalty);
            if request.nights >= LONG_STAY_NOTE_MIN_NIGHTS {
                detail.push_str(&format!(" [{} nights]", request.nights));
            }
            detail
        }
        FallbackTier::SameClassReserved => format!(
            "Upgrade from {} (overbooked - named suite used) - {}",
            booked, loyalty
        ),
        FallbackTier::CrossClass
            if graph.is_accessibility(booked) && !graph.is_accessibility(&candidate.category) =>
        {
            format!(
                "Cross-category from {} (accessible inventory exhausted) - {}",
                booked, loyalty
            )
        }
        FallbackTier::CrossClass => {
            format!("Cross-category from {} (avoid walk) - {}", booked, loyalty)
        }
        FallbackTier::AnyUnreserved => format!(
            "Emergency assignment from {} (100% capacity) - {}",
            booked, loyalty
        ),
        FallbackTier::AnyIncludingReserved => format!(
            "Named suite emergency assignment from {} - {}",
            booked, loyalty
        ),
    }
}

fn fallback_warning_message(code: WarningCode, request: &Request, assigned: &str) -> String {
    let guest = &request.guest_name;
    let booked = &request.requested_category;
    match code {
        WarningCode::ReservedCategoryUsed => {
            format!("Named suite {} used for {}", assigned, guest)
        }
        WarningCode::CrossClassConsentRequired => format!(
            "Cross-category: {} {} -> {} (requires guest approval)",
            guest, booked, assigned
        ),
        WarningCode::AccessibilityDowngrade => format!(
            "Accessibility alert: {} assigned to {} (non-accessible) - requires accessibility review",
            guest, assigned
        ),
        WarningCode::EmergencyPlacement => format!(
            "Emergency: {} {} -> {} (requires immediate guest contact)",
            guest, booked, assigned
        ),
        WarningCode::EmergencyReservedPlacement => format!(
            "Critical: {} assigned to named suite {} (emergency only)",
            guest, assigned
        ),
        WarningCode::AccessibilityShortfall | WarningCode::Unplaceable => {
            format!("{} {} -> {}", guest, booked, assigned)
        }
    }
}

/// Stable identifier for an assignment within a pass.
pub fn derive_assignment_id(
    arrival_date: Date,
    request_id: &str,
    ledger_seq_no: LedgerSeqNo,
) -> String {
    let canonical = serde_json::json!({
        "arrival_date": arrival_date.to_string(),
        "request_id": request_id,
        "ledger_seq_no": ledger_seq_no,
    });

    let mut hasher = Sha256::new();
    hasher.update(canonicalize_json(&canonical).to_string().as_bytes());
    let digest = hasher.finalize();
    let hex = format!("{:x}", digest);
    format!("asg:{}", &hex[..24])
}

fn canonicalize_json(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys = map.keys().cloned().collect::<Vec<_>>();
            keys.sort();
            let mut sorted = serde_json::Map::new();
            for key in keys {
                if let Some(item) = map.get(&key) {
                    sorted.insert(key, canonicalize_json(item));
                }
            }
            serde_json::Value::Object(sorted)
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(canonicalize_json).collect())
        }
        primitive => primitive.clone(),
    }
}
