//! Traits describing read-only asset data.
//!
//! Oracles expose skill records, action components, hit attributes, action
//! conditions and buff-count boosts. The [`AssetEnv`] aggregate bundles them
//! so hit builders and transformers can access everything they need without
//! hard coupling to concrete implementations.
mod action;
mod action_cond;
mod buff_count;
mod error;
mod hit_attr;
mod skill;
mod snapshot;

pub use action::{
    ActionComponent, ActionOracle, BulletDeterioration, CancelDeclaration, PreConditionKind,
    PreConditionRaw, RepeatDeclaration, RepeatSource,
};
pub use action_cond::{ActionCondition, ActionConditionOracle, BuffRates};
pub use buff_count::{AbilityLimitGroup, AbilityLimitOracle, BuffCountData, BuffCountOracle};
pub use error::AssetError;
pub use hit_attr::{HitAttribute, HitAttributeOracle, PunisherDeclaration};
pub use skill::{SkillOracle, SkillRecord};
pub use snapshot::AssetSnapshot;

use crate::types::{ActionConditionId, ActionId, BuffCountId, LimitGroupId, SkillId};

/// Aggregates the read-only oracles used to build hit data.
#[derive(Clone, Copy)]
pub struct AssetEnv<'a> {
    skills: Option<&'a dyn SkillOracle>,
    actions: Option<&'a dyn ActionOracle>,
    hit_attributes: Option<&'a dyn HitAttributeOracle>,
    action_conditions: Option<&'a dyn ActionConditionOracle>,
    buff_counts: Option<&'a dyn BuffCountOracle>,
    limit_groups: Option<&'a dyn AbilityLimitOracle>,
}

impl<'a> AssetEnv<'a> {
    pub fn new(
        skills: Option<&'a dyn SkillOracle>,
        actions: Option<&'a dyn ActionOracle>,
        hit_attributes: Option<&'a dyn HitAttributeOracle>,
        action_conditions: Option<&'a dyn ActionConditionOracle>,
        buff_counts: Option<&'a dyn BuffCountOracle>,
        limit_groups: Option<&'a dyn AbilityLimitOracle>,
    ) -> Self {
        Self {
            skills,
            actions,
            hit_attributes,
            action_conditions,
            buff_counts,
            limit_groups,
        }
    }

    pub fn with_all(
        skills: &'a dyn SkillOracle,
        actions: &'a dyn ActionOracle,
        hit_attributes: &'a dyn HitAttributeOracle,
        action_conditions: &'a dyn ActionConditionOracle,
        buff_counts: &'a dyn BuffCountOracle,
        limit_groups: &'a dyn AbilityLimitOracle,
    ) -> Self {
        Self::new(
            Some(skills),
            Some(actions),
            Some(hit_attributes),
            Some(action_conditions),
            Some(buff_counts),
            Some(limit_groups),
        )
    }

    pub fn empty() -> Self {
        Self {
            skills: None,
            actions: None,
            hit_attributes: None,
            action_conditions: None,
            buff_counts: None,
            limit_groups: None,
        }
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a dyn SkillOracle, AssetError> {
        self.skills.ok_or(AssetError::SkillsNotAvailable)
    }

    /// Returns the ActionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::ActionsNotAvailable` if no action oracle was provided.
    pub fn actions(&self) -> Result<&'a dyn ActionOracle, AssetError> {
        self.actions.ok_or(AssetError::ActionsNotAvailable)
    }

    /// Returns the HitAttributeOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::HitAttributesNotAvailable` if no hit attribute
    /// oracle was provided.
    pub fn hit_attributes(&self) -> Result<&'a dyn HitAttributeOracle, AssetError> {
        self.hit_attributes
            .ok_or(AssetError::HitAttributesNotAvailable)
    }

    /// Returns the ActionConditionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::ActionConditionsNotAvailable` if no action
    /// condition oracle was provided.
    pub fn action_conditions(&self) -> Result<&'a dyn ActionConditionOracle, AssetError> {
        self.action_conditions
            .ok_or(AssetError::ActionConditionsNotAvailable)
    }

    /// Returns the BuffCountOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::BuffCountsNotAvailable` if no buff count oracle was
    /// provided.
    pub fn buff_counts(&self) -> Result<&'a dyn BuffCountOracle, AssetError> {
        self.buff_counts.ok_or(AssetError::BuffCountsNotAvailable)
    }

    /// Returns the AbilityLimitOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::LimitGroupsNotAvailable` if no limit group oracle
    /// was provided.
    pub fn limit_groups(&self) -> Result<&'a dyn AbilityLimitOracle, AssetError> {
        self.limit_groups.ok_or(AssetError::LimitGroupsNotAvailable)
    }

    // ===== record lookups =====

    pub fn skill(&self, id: SkillId) -> Result<SkillRecord, AssetError> {
        self.skills()?
            .skill(id)
            .ok_or(AssetError::SkillDataNotFound(id))
    }

    pub fn action_components(
        &self,
        action_id: ActionId,
        level: u8,
    ) -> Result<Vec<ActionComponent>, AssetError> {
        self.actions()?
            .components(action_id, level)
            .ok_or(AssetError::ActionDataNotFound { action_id, level })
    }

    pub fn hit_attribute(&self, label: &str) -> Result<HitAttribute, AssetError> {
        self.hit_attributes()?
            .hit_attribute(label)
            .ok_or_else(|| AssetError::HitAttributeNotFound(label.to_owned()))
    }

    pub fn action_condition(&self, id: ActionConditionId) -> Result<ActionCondition, AssetError> {
        self.action_conditions()?
            .action_condition(id)
            .ok_or(AssetError::ActionConditionNotFound(id))
    }

    pub fn buff_count(&self, id: BuffCountId) -> Result<BuffCountData, AssetError> {
        self.buff_counts()?
            .buff_count(id)
            .ok_or(AssetError::BuffCountNotFound(id))
    }

    pub fn limit_group(&self, id: LimitGroupId) -> Result<AbilityLimitGroup, AssetError> {
        self.limit_groups()?
            .limit_group(id)
            .ok_or(AssetError::LimitGroupNotFound(id))
    }
}

impl std::fmt::Debug for AssetEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetEnv")
            .field("skills", &self.skills.is_some())
            .field("actions", &self.actions.is_some())
            .field("hit_attributes", &self.hit_attributes.is_some())
            .field("action_conditions", &self.action_conditions.is_some())
            .field("buff_counts", &self.buff_counts.is_some())
            .field("limit_groups", &self.limit_groups.is_some())
            .finish()
    }
}
