//! Condition vocabulary errors.

use super::{CheckResult, Condition, ConditionCategory};
use crate::error::{EngineError, ErrorSeverity};

/// Errors raised by the condition vocabulary and composite validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    /// A composite violates the single-valued-category invariant.
    #[error("condition validation failed: {0}")]
    ValidationFailed(CheckResult),

    /// No atom of the category maps to the raw value.
    #[error("no {category} condition maps to value {value}")]
    Unconvertible {
        category: ConditionCategory,
        value: i32,
    },

    /// The atom does not belong to the category it was converted with.
    #[error("condition {condition} does not belong to category {category}")]
    NotInCategory {
        category: ConditionCategory,
        condition: Condition,
    },
}

impl EngineError for ConditionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ConditionError::ValidationFailed(_) | ConditionError::NotInCategory { .. } => {
                ErrorSeverity::Validation
            }
            ConditionError::Unconvertible { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConditionError::ValidationFailed(_) => "CONDITION_VALIDATION_FAILED",
            ConditionError::Unconvertible { .. } => "CONDITION_UNCONVERTIBLE",
            ConditionError::NotInCategory { .. } => "CONDITION_NOT_IN_CATEGORY",
        }
    }
}
