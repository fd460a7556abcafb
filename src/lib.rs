pub mod allocation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod ranking;
pub mod types;

pub use allocation::{AllocationEngine, PassOutput, PassSummary, remaining_capacity};
pub use error::{AllocationError, AllocationErrorKind};
