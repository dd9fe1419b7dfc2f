//! Asset access errors.

use crate::error::{EngineError, ErrorSeverity};
use crate::types::{ActionConditionId, ActionId, BuffCountId, LimitGroupId, SkillId};

/// Errors that occur when looking up asset records.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    #[error("ActionOracle not available")]
    ActionsNotAvailable,

    #[error("HitAttributeOracle not available")]
    HitAttributesNotAvailable,

    #[error("ActionConditionOracle not available")]
    ActionConditionsNotAvailable,

    #[error("BuffCountOracle not available")]
    BuffCountsNotAvailable,

    #[error("AbilityLimitOracle not available")]
    LimitGroupsNotAvailable,

    #[error("skill data {0} not found")]
    SkillDataNotFound(SkillId),

    /// Officials ship partial data for some levels; callers traversing skill
    /// chains treat this as "skip".
    #[error("action data {action_id} not found at level {level}")]
    ActionDataNotFound { action_id: ActionId, level: u8 },

    #[error("hit attribute '{0}' not found")]
    HitAttributeNotFound(String),

    #[error("action condition {0} not found")]
    ActionConditionNotFound(ActionConditionId),

    #[error("buff count data {0} not found")]
    BuffCountNotFound(BuffCountId),

    #[error("ability limit group {0} not found")]
    LimitGroupNotFound(LimitGroupId),
}

impl EngineError for AssetError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use AssetError::*;
        match self {
            SkillsNotAvailable => "ASSET_SKILLS_NOT_AVAILABLE",
            ActionsNotAvailable => "ASSET_ACTIONS_NOT_AVAILABLE",
            HitAttributesNotAvailable => "ASSET_HIT_ATTRIBUTES_NOT_AVAILABLE",
            ActionConditionsNotAvailable => "ASSET_ACTION_CONDITIONS_NOT_AVAILABLE",
            BuffCountsNotAvailable => "ASSET_BUFF_COUNTS_NOT_AVAILABLE",
            LimitGroupsNotAvailable => "ASSET_LIMIT_GROUPS_NOT_AVAILABLE",
            SkillDataNotFound(_) => "ASSET_SKILL_DATA_NOT_FOUND",
            ActionDataNotFound { .. } => "ASSET_ACTION_DATA_NOT_FOUND",
            HitAttributeNotFound(_) => "ASSET_HIT_ATTRIBUTE_NOT_FOUND",
            ActionConditionNotFound(_) => "ASSET_ACTION_CONDITION_NOT_FOUND",
            BuffCountNotFound(_) => "ASSET_BUFF_COUNT_NOT_FOUND",
            LimitGroupNotFound(_) => "ASSET_LIMIT_GROUP_NOT_FOUND",
        }
    }
}
