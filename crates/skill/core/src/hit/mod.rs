//! Hit data: one row per hit of an action component at one skill level.
//!
//! Rows are built from the asset oracles by [`build_hits`] and consumed by
//! [`calculate_modifiers`] and the effect-unit builders. They never change
//! after construction.

mod builder;
mod modifier;

pub use builder::{build_hits, resolve_pre_condition};
pub use modifier::{ModifierContext, ModifierOutcome, calculate_modifiers};

use crate::asset::{
    ActionCondition, BulletDeterioration, HitAttribute, PunisherDeclaration, RepeatDeclaration,
};
use crate::condition::Condition;
use crate::types::{ActionId, AfflictionStatus, Element, ElementFlags, TargetSimple};

/// Buff-count boost resolved from the buff-count record, its linked action
/// condition and its limit group.
#[derive(Clone, Debug, PartialEq)]
pub struct BuffBoost {
    pub rate_base: f64,
    /// Zero or negative means uncapped.
    pub rate_limit: f64,
    pub linked: Option<LinkedStackBoost>,
}

/// Boost per stack of a linked action condition (e.g. cards).
#[derive(Clone, Debug, PartialEq)]
pub struct LinkedStackBoost {
    pub rate_per_stack: f64,
    pub max_stacks: u32,
    /// Cap of the cumulative stack boost shared by the limit group.
    pub group_cap: Option<f64>,
}

impl BuffBoost {
    pub fn new(rate_base: f64, rate_limit: f64) -> Self {
        Self {
            rate_base,
            rate_limit,
            linked: None,
        }
    }

    #[must_use]
    pub fn with_linked(mut self, rate_per_stack: f64, max_stacks: u32, group_cap: Option<f64>) -> Self {
        self.linked = Some(LinkedStackBoost {
            rate_per_stack,
            max_stacks,
            group_cap,
        });
        self
    }

    /// Boost rate for `buffs` active buffs and `stacks` linked stacks.
    pub fn rate(&self, buffs: i32, stacks: i32) -> f64 {
        let mut rate = self.rate_base * f64::from(buffs);
        if let Some(linked) = &self.linked {
            let stack_rate = linked.rate_per_stack * f64::from(stacks);
            rate += linked.group_cap.map_or(stack_rate, |cap| stack_rate.min(cap));
        }
        if self.rate_limit > 0.0 {
            rate = rate.min(self.rate_limit);
        }
        rate
    }

    /// Highest stack count worth enumerating.
    pub fn max_stacks(&self) -> Option<u32> {
        self.linked
            .as_ref()
            .filter(|linked| linked.rate_per_stack != 0.0)
            .map(|linked| linked.max_stacks)
    }
}

/// One hit of an action component at one level.
#[derive(Clone, Debug, PartialEq)]
pub struct HitData {
    pub label: String,
    pub action_id: ActionId,
    pub action_time: f64,
    /// Base damage modifier.
    pub modifier: f64,
    pub target: TargetSimple,
    /// Condition required for the hit to be active at all.
    pub pre_condition: Option<Condition>,
    pub punishers: Vec<PunisherDeclaration>,
    /// Multiplier reached at 1 HP.
    pub crisis: Option<f64>,
    pub buff_boost: Option<BuffBoost>,
    pub deterioration: Option<BulletDeterioration>,
    pub repeat: Option<RepeatDeclaration>,
    pub elemental_restriction: ElementFlags,
    pub skill_element: Element,
    pub attribute: HitAttribute,
    pub action_condition: Option<ActionCondition>,
}

impl HitData {
    /// Plain hit carrying only a base modifier.
    pub fn new(label: impl Into<String>, modifier: f64, target: TargetSimple) -> Self {
        let label = label.into();
        Self {
            attribute: HitAttribute {
                label: label.clone(),
                damage_modifier: modifier,
                ..HitAttribute::default()
            },
            label,
            action_id: ActionId::default(),
            action_time: 0.0,
            modifier,
            target,
            pre_condition: None,
            punishers: Vec::new(),
            crisis: None,
            buff_boost: None,
            deterioration: None,
            repeat: None,
            elemental_restriction: ElementFlags::empty(),
            skill_element: Element::None,
            action_condition: None,
        }
    }

    #[must_use]
    pub fn with_timing(mut self, action_id: ActionId, action_time: f64) -> Self {
        self.action_id = action_id;
        self.action_time = action_time;
        self
    }

    #[must_use]
    pub fn with_pre_condition(mut self, condition: Condition) -> Self {
        self.pre_condition = Some(condition);
        self
    }

    #[must_use]
    pub fn with_punisher(mut self, states: Vec<AfflictionStatus>, rate: f64) -> Self {
        self.punishers.push(PunisherDeclaration { states, rate });
        self
    }

    #[must_use]
    pub fn with_crisis(mut self, crisis: f64) -> Self {
        self.crisis = Some(crisis);
        self
    }

    #[must_use]
    pub fn with_buff_boost(mut self, boost: BuffBoost) -> Self {
        self.buff_boost = Some(boost);
        self
    }

    #[must_use]
    pub fn with_deterioration(mut self, rate: f64, max_hit_count: u8) -> Self {
        self.deterioration = Some(BulletDeterioration {
            rate,
            max_hit_count,
        });
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatDeclaration) -> Self {
        self.repeat = Some(repeat);
        self
    }

    #[must_use]
    pub fn with_element(mut self, skill_element: Element, restriction: ElementFlags) -> Self {
        self.skill_element = skill_element;
        self.elemental_restriction = restriction;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: HitAttribute) -> Self {
        self.attribute = attribute;
        self
    }

    #[must_use]
    pub fn with_action_condition(mut self, condition: ActionCondition) -> Self {
        self.elemental_restriction = condition.elemental_target;
        self.action_condition = Some(condition);
        self
    }

    /// Every affliction status any punisher of this hit reacts to.
    pub fn punisher_states(&self) -> impl Iterator<Item = AfflictionStatus> + '_ {
        self.punishers
            .iter()
            .flat_map(|punisher| punisher.states.iter().copied())
    }

    pub fn is_deteriorating(&self) -> bool {
        self.deterioration.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_rate_is_capped() {
        let boost = BuffBoost::new(0.05, 0.8).with_linked(0.2, 3, None);
        assert!((boost.rate(2, 1) - 0.3).abs() < 1e-9);
        assert!((boost.rate(50, 3) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn non_positive_limit_is_uncapped() {
        let boost = BuffBoost::new(0.1, 0.0);
        assert!((boost.rate(20, 0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn group_cap_limits_stack_part_only() {
        let boost = BuffBoost::new(0.1, 0.0).with_linked(0.2, 5, Some(0.5));
        assert!((boost.rate(1, 5) - 0.6).abs() < 1e-9);
    }
}
