use room_balancer::{
    AllocationErrorKind, remaining_capacity,
    catalog::{CategoryGraph, PolicyConfig, reference_property_policy},
};

use crate::{category, plain, run};

#[test]
fn given_pass_output_when_recomputing_remaining_then_it_matches_the_ledger() {
    let policy = reference_property_policy();
    let graph = CategoryGraph::from_policy(&policy).expect("policy should be valid");
    let requests: Vec<_> = (0..12)
        .map(|index| plain(&format!("r{index}"), ["KEXN", "NKSP", "TCSN"][index % 3]))
        .collect();

    let output = run(policy, &requests);
    let recomputed =
        remaining_capacity(&graph, &output.assignments).expect("assignments should fit");

    assert_eq!(recomputed, output.remaining);
    assert_eq!(recomputed.get("KEXN"), Some(&0));
    assert_eq!(recomputed.get("NKSP"), Some(&0));
}

#[test]
fn given_assignments_beyond_capacity_when_recomputing_remaining_then_error() {
    let policy = PolicyConfig::new(vec![category("A", 2, 1), category("B", 0, 1)]);
    let mut output = run(policy.clone(), &[plain("r1", "A"), plain("r2", "A")]);
    let graph = CategoryGraph::from_policy(&policy).expect("policy should be valid");

    let mut extra = output.assignments[0].clone();
    extra.request_id = "r3".to_string();
    output.assignments.push(extra);

    let err = remaining_capacity(&graph, &output.assignments)
        .expect_err("third assignment exceeds capacity");
    assert_eq!(err.kind, AllocationErrorKind::InvariantViolation);
    assert!(err.message.contains("'A'"));
}

#[test]
fn given_assignment_into_unknown_category_when_recomputing_remaining_then_error() {
    let policy = PolicyConfig::new(vec![category("A", 2, 1)]);
    let mut output = run(policy.clone(), &[plain("r1", "A")]);
    let graph = CategoryGraph::from_policy(&policy).expect("policy should be valid");
    output.assignments[0].assigned_category = "GONE".to_string();

    let err = remaining_capacity(&graph, &output.assignments)
        .expect_err("unknown category must be rejected");
    assert_eq!(err.kind, AllocationErrorKind::InvalidRequest);
}

#[test]
fn given_no_assignments_when_recomputing_remaining_then_full_capacity_is_reported() {
    let graph =
        CategoryGraph::from_policy(&reference_property_policy()).expect("policy should be valid");

    let remaining = remaining_capacity(&graph, &[]).expect("empty set should fit");

    assert_eq!(remaining.len(), 16);
    assert_eq!(remaining.values().map(|units| *units as u64).sum::<u64>(), 321);
}
