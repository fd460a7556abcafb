use room_balancer::{
    allocation::{
        AssignmentReason, FallbackTier, WarningCode, WarningSeverity, candidate_in_tier,
        find_fallback,
    },
    catalog::{CategoryGraph, PolicyConfig},
    inventory::InventoryLedger,
    types::LoyaltyTier,
};

use crate::{category, plain, request, run};

/// `A` is exhausted; every tier has exactly one candidate with a unit.
fn tiered_policy() -> PolicyConfig {
    PolicyConfig::new(vec![
        category("A", 0, 1),
        category("B", 1, 2),
        category("S", 1, 4).reserved(),
        category("C", 1, 1),
        category("D", 1, 1),
    ])
    .with_preferred_upgrades("A", &["B", "S"])
    .with_cross_class_upgrades("A", &["C"])
}

fn ledger_for(graph: &CategoryGraph) -> InventoryLedger {
    InventoryLedger::new(graph.capacities()).expect("ledger should build")
}

#[test]
fn given_every_tier_open_when_searching_then_candidates_follow_tier_order() {
    let graph = CategoryGraph::from_policy(&tiered_policy()).expect("policy should be valid");
    let ledger = ledger_for(&graph);

    let per_tier: Vec<Option<&str>> = FallbackTier::ORDER
        .into_iter()
        .map(|tier| candidate_in_tier(&graph, &ledger, "A", tier))
        .collect();
    assert_eq!(
        per_tier,
        vec![Some("B"), Some("S"), Some("C"), Some("B"), Some("B")]
    );

    let found = find_fallback(&graph, &ledger, "A").expect("fallback should exist");
    assert_eq!(found.tier, FallbackTier::SameClass);
    assert_eq!(found.category, "B");
    assert!(found.warning(&graph, "A").is_none());
}

#[test]
fn given_tiers_exhausted_one_by_one_when_pass_runs_then_each_tier_is_used_in_order() {
    let requests: Vec<_> = (1..=6)
        .map(|index| plain(&format!("r{index}"), "A"))
        .collect();

    let output = run(tiered_policy(), &requests);

    let placed: Vec<(&str, AssignmentReason)> = output
        .assignments
        .iter()
        .map(|assignment| (assignment.assigned_category.as_str(), assignment.reason))
        .collect();
    assert_eq!(
        placed,
        vec![
            ("B", AssignmentReason::SameClassUpgrade),
            ("S", AssignmentReason::ReservedCategoryUpgrade),
            ("C", AssignmentReason::CrossClassSubstitution),
            ("D", AssignmentReason::EmergencyPlacement),
        ]
    );
    assert_eq!(output.unplaced, vec!["r5".to_string(), "r6".to_string()]);

    let codes: Vec<(WarningSeverity, WarningCode)> = output
        .warnings
        .iter()
        .map(|warning| (warning.severity, warning.code))
        .collect();
    assert_eq!(
        codes,
        vec![
            (WarningSeverity::Info, WarningCode::ReservedCategoryUsed),
            (WarningSeverity::Info, WarningCode::CrossClassConsentRequired),
            (WarningSeverity::Alert, WarningCode::EmergencyPlacement),
            (WarningSeverity::Critical, WarningCode::Unplaceable),
            (WarningSeverity::Critical, WarningCode::Unplaceable),
        ]
    );
    assert_eq!(output.warnings[0].message, "Named suite S used for Guest r2");
    assert_eq!(
        output.warnings[1].message,
        "Cross-category: Guest r3 A -> C (requires guest approval)"
    );
    assert_eq!(output.warnings[1].assigned_category.as_deref(), Some("C"));
}

#[test]
fn given_only_reserved_inventory_left_when_pass_runs_then_reserved_emergency_is_critical() {
    let policy = PolicyConfig::new(vec![
        category("A", 0, 1),
        category("B", 0, 1),
        category("S", 1, 4).reserved(),
    ]);

    let output = run(policy, &[request("r1", "A", LoyaltyTier::Blue, 2)]);

    let assignment = output.assignment_for("r1").expect("r1 should be placed");
    assert_eq!(assignment.assigned_category, "S");
    assert_eq!(assignment.reason, AssignmentReason::EmergencyReservedPlacement);
    assert!(assignment.reason.is_emergency());
    assert_eq!(
        assignment.reason_detail,
        "Named suite emergency assignment from A - Blue"
    );
    assert!(output.has_critical());
    assert_eq!(
        output.warnings[0].message,
        "Critical: Guest r1 assigned to named suite S (emergency only)"
    );
}

#[test]
fn given_reserved_same_class_target_when_unreserved_target_open_then_unreserved_is_preferred() {
    let policy = PolicyConfig::new(vec![
        category("A", 0, 1),
        category("S", 1, 4).reserved(),
        category("B", 1, 2),
    ])
    .with_preferred_upgrades("A", &["S", "B"]);

    let output = run(policy, &[plain("r1", "A")]);

    let assignment = output.assignment_for("r1").expect("r1 should be placed");
    assert_eq!(assignment.assigned_category, "B");
    assert_eq!(assignment.reason, AssignmentReason::SameClassUpgrade);
    assert_eq!(output.remaining.get("S"), Some(&1));
}

#[test]
fn given_exhausted_ledger_when_searching_then_no_candidate_is_found() {
    let graph = CategoryGraph::from_policy(&tiered_policy()).expect("policy should be valid");
    let mut ledger = ledger_for(&graph);
    for (index, category) in ["B", "S", "C", "D"].into_iter().enumerate() {
        ledger
            .reserve(category, &format!("fill-{index}"))
            .expect("unit should reserve");
    }

    assert!(find_fallback(&graph, &ledger, "A").is_none());
    assert_eq!(
        candidate_in_tier(&graph, &ledger, "A", FallbackTier::AnyIncludingReserved),
        None
    );
}
