//! Skill transformation errors.

use crate::asset::AssetError;
use crate::condition::ConditionError;
use crate::error::{EngineError, ErrorSeverity};
use crate::types::SkillId;

/// Errors raised while building hit data, computing modifiers or building
/// effect units.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SkillError {
    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The composite asks for a bullet hit past the bullet lifetime.
    #[error("bullet hit {requested} of '{label}' is past the bullet lifetime of {lifetime} hits")]
    BulletEndOfLife {
        label: String,
        requested: u8,
        lifetime: u8,
    },

    /// Self damage flagged with neither a fixed nor a consume ratio.
    #[error("self damage of '{label}' has no handled mode")]
    UnhandledSelfDamage { label: String },

    /// A raw asset code has no counterpart in the engine enums.
    #[error("cannot convert {kind} code {value} of '{label}'")]
    EnumConversion {
        kind: &'static str,
        value: u8,
        label: String,
    },

    /// The skill has no level with action data.
    #[error("skill {0} has no level with action data")]
    NoLevels(SkillId),
}

impl EngineError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        use SkillError::*;
        match self {
            Condition(err) => err.severity(),
            Asset(err) => err.severity(),
            BulletEndOfLife { .. } => ErrorSeverity::Validation,
            UnhandledSelfDamage { .. } | EnumConversion { .. } => ErrorSeverity::Internal,
            NoLevels(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use SkillError::*;
        match self {
            Condition(err) => err.error_code(),
            Asset(err) => err.error_code(),
            BulletEndOfLife { .. } => "SKILL_BULLET_END_OF_LIFE",
            UnhandledSelfDamage { .. } => "SKILL_UNHANDLED_SELF_DAMAGE",
            EnumConversion { .. } => "SKILL_ENUM_CONVERSION",
            NoLevels(_) => "SKILL_NO_LEVELS",
        }
    }
}
