use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationErrorKind {
    InvalidRequest,
    InvalidPolicy,
    CapacityExhausted,
    InvariantViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AllocationError {
    pub kind: AllocationErrorKind,
    pub message: String,
}

impl AllocationError {
    pub fn new(kind: AllocationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_capacity_exhausted(&self) -> bool {
        self.kind == AllocationErrorKind::CapacityExhausted
    }
}

pub fn invalid_request(message: impl Into<String>) -> AllocationError {
    AllocationError::new(AllocationErrorKind::InvalidRequest, message)
}

pub fn invalid_policy(message: impl Into<String>) -> AllocationError {
    AllocationError::new(AllocationErrorKind::InvalidPolicy, message)
}

pub fn capacity_exhausted(message: impl Into<String>) -> AllocationError {
    AllocationError::new(AllocationErrorKind::CapacityExhausted, message)
}

pub fn invariant_violation(message: impl Into<String>) -> AllocationError {
    AllocationError::new(AllocationErrorKind::InvariantViolation, message)
}
