pub mod capacity;
pub mod demand;
pub mod engine;
pub mod fallback;
pub mod summary;
pub mod types;

pub use capacity::remaining_capacity;
pub use demand::{DemandRow, DemandSnapshot};
pub use engine::{AllocationEngine, derive_assignment_id};
pub use fallback::{FallbackCandidate, FallbackTier, candidate_in_tier, find_fallback};
pub use summary::PassSummary;
pub use types::{
    Assignment, AssignmentReason, PassOutput, SubstitutionDirection, Warning, WarningCode,
    WarningSeverity,
};
