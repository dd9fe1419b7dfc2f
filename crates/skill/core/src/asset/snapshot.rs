//! In-memory asset tables implementing every oracle.
//!
//! Snapshots are the concrete backing store used by loaders and tests. They
//! are plain ordered maps, so lookups are deterministic and the whole snapshot
//! can be shared across threads.

use std::collections::BTreeMap;

use super::{
    AbilityLimitGroup, AbilityLimitOracle, ActionComponent, ActionCondition,
    ActionConditionOracle, ActionOracle, AssetEnv, BuffCountData, BuffCountOracle, HitAttribute,
    HitAttributeOracle, SkillOracle, SkillRecord,
};
use crate::types::{ActionConditionId, ActionId, BuffCountId, LimitGroupId, SkillId};

/// Complete snapshot of the asset tables the engine reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetSnapshot {
    pub skills: BTreeMap<SkillId, SkillRecord>,
    pub actions: BTreeMap<(ActionId, u8), Vec<ActionComponent>>,
    pub hit_attributes: BTreeMap<String, HitAttribute>,
    pub action_conditions: BTreeMap<ActionConditionId, ActionCondition>,
    pub buff_counts: BTreeMap<BuffCountId, BuffCountData>,
    pub limit_groups: BTreeMap<LimitGroupId, AbilityLimitGroup>,
}

impl AssetSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_skill(mut self, skill: SkillRecord) -> Self {
        self.skills.insert(skill.id, skill);
        self
    }

    /// Registers the components of `action_id` at `level`.
    #[must_use]
    pub fn with_action(
        mut self,
        action_id: ActionId,
        level: u8,
        components: Vec<ActionComponent>,
    ) -> Self {
        self.actions.insert((action_id, level), components);
        self
    }

    #[must_use]
    pub fn with_hit_attribute(mut self, attribute: HitAttribute) -> Self {
        self.hit_attributes
            .insert(attribute.label.clone(), attribute);
        self
    }

    #[must_use]
    pub fn with_action_condition(mut self, condition: ActionCondition) -> Self {
        self.action_conditions.insert(condition.id, condition);
        self
    }

    #[must_use]
    pub fn with_buff_count(mut self, data: BuffCountData) -> Self {
        self.buff_counts.insert(data.id, data);
        self
    }

    #[must_use]
    pub fn with_limit_group(mut self, group: AbilityLimitGroup) -> Self {
        self.limit_groups.insert(group.id, group);
        self
    }

    /// Borrows every table of this snapshot as an [`AssetEnv`].
    pub fn env(&self) -> AssetEnv<'_> {
        AssetEnv::with_all(self, self, self, self, self, self)
    }
}

impl SkillOracle for AssetSnapshot {
    fn skill(&self, id: SkillId) -> Option<SkillRecord> {
        self.skills.get(&id).cloned()
    }
}

impl ActionOracle for AssetSnapshot {
    fn components(&self, action_id: ActionId, level: u8) -> Option<Vec<ActionComponent>> {
        self.actions.get(&(action_id, level)).cloned()
    }
}

impl HitAttributeOracle for AssetSnapshot {
    fn hit_attribute(&self, label: &str) -> Option<HitAttribute> {
        self.hit_attributes.get(label).cloned()
    }
}

impl ActionConditionOracle for AssetSnapshot {
    fn action_condition(&self, id: ActionConditionId) -> Option<ActionCondition> {
        self.action_conditions.get(&id).cloned()
    }
}

impl BuffCountOracle for AssetSnapshot {
    fn buff_count(&self, id: BuffCountId) -> Option<BuffCountData> {
        self.buff_counts.get(&id).cloned()
    }
}

impl AbilityLimitOracle for AssetSnapshot {
    fn limit_group(&self, id: LimitGroupId) -> Option<AbilityLimitGroup> {
        self.limit_groups.get(&id).cloned()
    }
}
