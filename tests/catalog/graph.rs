use room_balancer::{
    AllocationErrorKind,
    catalog::{
        CategoryConfig, CategoryGraph, PolicyConfig, SubstitutionTier, reference_property_policy,
    },
};

fn small_policy() -> PolicyConfig {
    PolicyConfig::new(vec![
        CategoryConfig::new("A", 2).with_quality_tier(1),
        CategoryConfig::new("B", 1).with_quality_tier(2),
        CategoryConfig::new("S", 1).with_quality_tier(4).reserved(),
        CategoryConfig::new("ADA", 1).with_quality_tier(1).accessible(),
    ])
    .with_preferred_upgrades("A", &["B", "S"])
    .with_cross_class_upgrades("ADA", &["A"])
}

#[test]
fn given_reference_policy_when_graph_built_then_tables_and_flags_are_loaded() {
    let graph = CategoryGraph::from_policy(&reference_property_policy())
        .expect("reference policy should be valid");

    assert_eq!(graph.total_capacity(), 321);
    assert_eq!(graph.categories().count(), 16);
    assert_eq!(graph.capacity("TDBN"), 126);
    assert_eq!(graph.label("KSPN"), Some("Presidential Suite"));
    assert_eq!(
        graph.preferred_upgrades("KNGN"),
        ["KSVN", "KEXN", "NKSP", "NKSPK", "NKSCJ"]
    );
    assert_eq!(graph.cross_class_upgrades("NKSQA"), ["KNGN", "KSVN"]);
    assert_eq!(graph.accessibility_categories(), ["NKSQA", "NKSQB", "NKSPD"]);
    for suite in ["KSPN", "KOTN", "KSLN"] {
        assert!(graph.is_reserved(suite), "{suite} should be reserved");
        assert!(!graph.is_accessibility(suite));
    }
    assert!(graph.quality_tier("KSPN") > graph.quality_tier("KNGN"));
}

#[test]
fn given_category_without_edges_when_queried_then_lists_are_empty_and_flags_cleared() {
    let graph = CategoryGraph::from_policy(&small_policy()).expect("policy should be valid");

    assert!(graph.preferred_upgrades("B").is_empty());
    assert!(graph.cross_class_upgrades("A").is_empty());
    assert!(graph.preferred_upgrades("MISSING").is_empty());
    assert!(!graph.contains("MISSING"));
    assert!(!graph.is_reserved("MISSING"));
    assert!(!graph.is_accessibility("MISSING"));
    assert_eq!(graph.capacity("MISSING"), 0);
}

#[test]
fn given_policy_edges_when_flattened_then_tiers_and_order_are_preserved() {
    let graph = CategoryGraph::from_policy(&small_policy()).expect("policy should be valid");
    let edges = graph.edges();

    assert_eq!(edges.len(), 3);
    assert_eq!((edges[0].from.as_str(), edges[0].to.as_str()), ("A", "B"));
    assert_eq!(edges[0].tier, SubstitutionTier::PreferredSameClass);
    assert_eq!((edges[1].from.as_str(), edges[1].to.as_str()), ("A", "S"));
    assert_eq!(edges[2].tier, SubstitutionTier::CrossClass);
    assert_eq!(
        graph.upgrades("ADA", SubstitutionTier::CrossClass),
        ["A".to_string()]
    );
}

#[test]
fn given_invalid_policies_when_graph_built_then_each_is_rejected_as_invalid_policy() {
    let cases = vec![
        ("empty table", PolicyConfig::new(Vec::new())),
        (
            "duplicate code",
            PolicyConfig::new(vec![CategoryConfig::new("A", 1), CategoryConfig::new("A", 2)]),
        ),
        (
            "blank code",
            PolicyConfig::new(vec![CategoryConfig::new("  ", 1)]),
        ),
        (
            "unknown source",
            small_policy().with_preferred_upgrades("Q", &["A"]),
        ),
        (
            "unknown target",
            small_policy().with_cross_class_upgrades("B", &["Q"]),
        ),
        (
            "self edge",
            small_policy().with_preferred_upgrades("B", &["B"]),
        ),
        (
            "duplicate target",
            small_policy().with_cross_class_upgrades("B", &["A", "A"]),
        ),
    ];

    for (name, policy) in cases {
        let err = CategoryGraph::from_policy(&policy)
            .expect_err(&format!("{name} should be rejected"));
        assert_eq!(err.kind, AllocationErrorKind::InvalidPolicy, "{name}");
    }
}

#[test]
fn given_policy_config_when_roundtripped_through_json_then_defaults_fill_missing_fields() {
    let policy: PolicyConfig = serde_json::from_value(serde_json::json!({
        "categories": [
            { "code": "A", "capacity": 3 },
            { "code": "B", "capacity": 1, "reserved": true, "label": "Suite" }
        ],
        "preferred_upgrades": { "A": ["B"] }
    }))
    .expect("policy should deserialize");

    assert!(policy.cross_class_upgrades.is_empty());
    assert_eq!(policy.categories[0].quality_tier, 0);
    assert!(!policy.categories[0].accessibility);
    assert!(policy.categories[1].flags().is_reserved);

    let graph = CategoryGraph::try_from(&policy).expect("policy should be valid");
    assert_eq!(graph.label("B"), Some("Suite"));
}
