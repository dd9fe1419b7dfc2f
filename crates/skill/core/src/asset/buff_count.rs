//! Buff-count boost data and ability limit groups.

use crate::types::{ActionConditionId, BuffCountId, LimitGroupId};

/// Oracle providing buff-count boost records.
pub trait BuffCountOracle: Send + Sync {
    fn buff_count(&self, id: BuffCountId) -> Option<BuffCountData>;
}

/// Oracle providing ability limit groups.
pub trait AbilityLimitOracle: Send + Sync {
    fn limit_group(&self, id: LimitGroupId) -> Option<AbilityLimitGroup>;
}

/// Damage boost scaling with the caster's buff count.
///
/// The boost rate is `rate_base × buff_count` plus `rate_per_linked_stack ×
/// stacks` of the linked action condition, capped at `rate_limit`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuffCountData {
    pub id: BuffCountId,
    pub rate_base: f64,
    /// Cap of the combined rate. Zero or negative means uncapped.
    pub rate_limit: f64,
    pub linked_action_condition_id: Option<ActionConditionId>,
    pub rate_per_linked_stack: f64,
    /// Group capping the cumulative linked-stack rate.
    pub limit_group_id: Option<LimitGroupId>,
}

/// Cap on a cumulative value shared by abilities of one group.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityLimitGroup {
    pub id: LimitGroupId,
    pub max_value: f64,
}
