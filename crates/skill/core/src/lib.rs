//! Condition-aware skill transformation engine.
//!
//! `skill-core` derives condition-dependent combat numbers from static skill
//! assets: it discovers every combination of conditions under which a skill
//! behaves differently, recomputes the damage matrix or buff set for each of
//! them, and builds the buff, debuff, affliction and cancel units a skill
//! applies. Everything here is a pure function over immutable asset
//! snapshots read through the oracles of [`asset`].
pub mod asset;
pub mod condition;
pub mod config;
pub mod effect;
pub mod error;
pub mod hit;
pub mod skill;
pub mod types;

pub use asset::{
    AbilityLimitGroup, AbilityLimitOracle, ActionComponent, ActionCondition,
    ActionConditionOracle, ActionOracle, AssetEnv, AssetError, AssetSnapshot, BuffCountData,
    BuffCountOracle, BuffRates, HitAttribute, HitAttributeOracle, SkillOracle, SkillRecord,
};
pub use condition::{CheckResult, Condition, ConditionCategory, ConditionComposite, ConditionError};
pub use config::{CrisisAxis, EngineConfig};
pub use effect::{AfflictionEffectUnit, BuffEffectUnit};
pub use error::{EngineError, ErrorSeverity};
pub use hit::{HitData, ModifierContext, ModifierOutcome, calculate_modifiers};
pub use skill::{
    AttackingSkillData, AttackingSkillEntry, SkillCancelUnit, SkillError, SkillTransformer,
    SkillVariant, SupportiveSkillData, SupportiveSkillEntry,
};
pub use types::{
    ActionConditionId, ActionId, AfflictionStatus, BuffCountId, BuffParameter, Element,
    ElementFlags, LimitGroupId, SkillId, TargetSimple,
};
