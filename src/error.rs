use thiserror::Error;

use crate::access::{Capability, Role};
use crate::models::SlotStatus;
use crate::validation::ValidationError;

/// Business-rule rejection returned by the engine.
///
/// None of these are transient; callers surface them to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Slot not found: {0}")]
    SlotNotFound(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("User {user_id} ({role}) lacks {capability} on {target}")]
    Authorization {
        user_id: String,
        role: Role,
        capability: Capability,
        target: String,
    },

    #[error("Shift limit reached for employee {employee_id} ({limit} shifts)")]
    CapacityExceeded { employee_id: String, limit: u32 },

    #[error("Cannot {action} slot {slot_id} while it is {status}")]
    InvalidState {
        slot_id: String,
        status: SlotStatus,
        action: &'static str,
    },

    #[error("Invalid session setup: {} problem(s)", .0.len())]
    InvalidSetup(Vec<ValidationError>),

    #[error("Config error: {0}")]
    Config(String),
}

impl EngineError {
    /// Whether this is a missing slot or employee.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SlotNotFound(_) | Self::EmployeeNotFound(_))
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
