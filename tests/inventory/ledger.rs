use room_balancer::{AllocationErrorKind, inventory::InventoryLedger};

fn ledger(capacities: &[(&str, u32)]) -> InventoryLedger {
    InventoryLedger::new(
        capacities
            .iter()
            .map(|(category, capacity)| (category.to_string(), *capacity)),
    )
    .expect("ledger should build")
}

#[test]
fn given_fresh_ledger_when_reserve_then_remaining_decrements_and_entry_is_logged() {
    let mut ledger = ledger(&[("KNGN", 2), ("TDBN", 1)]);

    let first = ledger.reserve("KNGN", "r1").expect("first unit should reserve");
    let second = ledger.reserve("TDBN", "r2").expect("second unit should reserve");

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(ledger.remaining("KNGN"), 1);
    assert_eq!(ledger.assigned("KNGN"), 1);
    assert_eq!(ledger.capacity("KNGN"), 2);
    assert_eq!(ledger.total_remaining(), 1);

    let entries = ledger.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].category, "KNGN");
    assert_eq!(entries[0].request_id, "r1");
    assert_eq!(entries[0].remaining_after, 1);
    assert_eq!(entries[1].seq_no, 2);
    assert_eq!(entries[1].remaining_after, 0);
}

#[test]
fn given_exhausted_category_when_reserve_then_capacity_exhausted_and_ledger_unchanged() {
    let mut ledger = ledger(&[("KSPN", 1)]);
    ledger.reserve("KSPN", "r1").expect("only unit should reserve");

    let err = ledger
        .reserve("KSPN", "r2")
        .expect_err("second reserve must fail");
    assert_eq!(err.kind, AllocationErrorKind::CapacityExhausted);
    assert!(err.is_capacity_exhausted());
    assert!(err.message.contains("KSPN"));
    assert_eq!(ledger.remaining("KSPN"), 0);
    assert_eq!(ledger.entries().len(), 1);
}

#[test]
fn given_unknown_category_when_queried_or_reserved_then_it_has_no_units() {
    let mut ledger = ledger(&[("KNGN", 3)]);

    assert_eq!(ledger.remaining("ZZZZ"), 0);
    assert_eq!(ledger.capacity("ZZZZ"), 0);
    assert!(!ledger.has_remaining("ZZZZ"));

    let err = ledger
        .reserve("ZZZZ", "r1")
        .expect_err("unknown category cannot be reserved");
    assert!(err.is_capacity_exhausted());
    assert!(ledger.entries().is_empty());
}

#[test]
fn given_duplicate_category_when_ledger_built_then_policy_is_rejected() {
    let err = InventoryLedger::new([("KNGN".to_string(), 1), ("KNGN".to_string(), 2)])
        .expect_err("duplicate categories must be rejected");
    assert_eq!(err.kind, AllocationErrorKind::InvalidPolicy);
}

#[test]
fn given_partially_exhausted_ledger_when_listing_available_then_configuration_order_is_kept() {
    let mut ledger = ledger(&[("TDBN", 1), ("KNGN", 1), ("ADA", 0), ("KEXN", 2)]);
    ledger.reserve("KNGN", "r1").expect("unit should reserve");

    let available: Vec<&str> = ledger.available_categories().collect();
    assert_eq!(available, vec!["TDBN", "KEXN"]);

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.get("KNGN"), Some(&0));
    assert_eq!(snapshot.get("KEXN"), Some(&2));
    assert_eq!(snapshot.len(), 4);

    let slots = ledger.slots();
    assert_eq!(slots[1].assigned(), 1);
    assert!(!slots[2].has_remaining());
}
