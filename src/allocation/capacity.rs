use std::collections::BTreeMap;

use crate::{
    allocation::types::Assignment,
    catalog::CategoryGraph,
    error::{AllocationError, invalid_request, invariant_violation},
    types::CategoryCode,
};

/// Recomputes remaining units from configured capacity and a set of
/// assignments, without a ledger.
pub fn remaining_capacity(
    graph: &CategoryGraph,
    assignments: &[Assignment],
) -> Result<BTreeMap<CategoryCode, u32>, AllocationError> {
    let mut remaining: BTreeMap<CategoryCode, u32> = graph.capacities().collect();

    for assignment in assignments {
        let Some(units) = remaining.get_mut(&assignment.assigned_category) else {
            return Err(invalid_request(format!(
                "assignment '{}' references unknown category '{}'",
                assignment.request_id, assignment.assigned_category
            )));
        };
        *units = units.checked_sub(1).ok_or_else(|| {
            invariant_violation(format!(
                "assignments exceed capacity of category '{}'",
                assignment.assigned_category
            ))
        })?;
    }

    Ok(remaining)
}
