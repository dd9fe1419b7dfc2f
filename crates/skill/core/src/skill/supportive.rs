//! Buffing skills.

use std::collections::BTreeSet;

use super::attacking::level_slot;
use super::discovery::{expand_axes, pre_condition_axis};
use super::{SkillCancelUnit, SkillError, SkillVariant};
use crate::condition::ConditionComposite;
use crate::config::EngineConfig;
use crate::effect::{BuffEffectUnit, build_buff_units, normalize_units};
use crate::hit::HitData;
use crate::types::SkillId;

/// Buff-bearing hits of one skill with its discovered composites.
#[derive(Clone, Debug)]
pub struct SupportiveSkillData {
    skill_id: SkillId,
    levels: Vec<Vec<HitData>>,
    possible_conditions: BTreeSet<ConditionComposite>,
    cancel_units: Vec<Vec<SkillCancelUnit>>,
}

impl SupportiveSkillData {
    /// # Errors
    ///
    /// Returns `SkillError::NoLevels` when `levels` is empty.
    pub fn new(
        skill_id: SkillId,
        levels: Vec<Vec<HitData>>,
        config: &EngineConfig,
    ) -> Result<Self, SkillError> {
        if levels.is_empty() {
            return Err(SkillError::NoLevels(skill_id));
        }
        let axes = [pre_condition_axis(levels.iter().flatten())];
        let possible_conditions = expand_axes(&axes, config);
        Ok(Self {
            skill_id,
            levels,
            possible_conditions,
            cancel_units: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_cancel_units(mut self, cancel_units: Vec<Vec<SkillCancelUnit>>) -> Self {
        self.cancel_units = cancel_units;
        self
    }

    pub fn skill_id(&self) -> SkillId {
        self.skill_id
    }

    pub fn hits(&self, level: u8) -> &[HitData] {
        level_slot(&self.levels, level)
    }

    pub fn cancel_units(&self, level: u8) -> &[SkillCancelUnit] {
        level_slot(&self.cancel_units, level)
    }
}

impl SkillVariant for SupportiveSkillData {
    type Entry = SupportiveSkillEntry;

    fn possible_conditions(&self) -> &BTreeSet<ConditionComposite> {
        &self.possible_conditions
    }

    fn with_conditions(
        &self,
        composite: &ConditionComposite,
    ) -> Result<SupportiveSkillEntry, SkillError> {
        composite.check()?;
        let mut buffs = Vec::with_capacity(self.levels.len());
        for hits in &self.levels {
            let mut units = Vec::new();
            for hit in hits {
                if hit
                    .pre_condition
                    .is_some_and(|pre_condition| !composite.contains(pre_condition))
                {
                    continue;
                }
                units.extend(build_buff_units(hit)?);
            }
            normalize_units(&mut units);
            buffs.push(units);
        }
        Ok(SupportiveSkillEntry {
            condition_comp: composite.clone(),
            buffs,
            max_level: self.max_level(),
        })
    }

    /// Every level of a supportive skill is reported; the last one is the max.
    fn max_level(&self) -> u8 {
        u8::try_from(self.levels.len()).unwrap_or(u8::MAX)
    }
}

/// Buff units of one supportive skill under one composite.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportiveSkillEntry {
    pub condition_comp: ConditionComposite,
    /// `buffs[n]` holds the units of level `n + 1`.
    pub buffs: Vec<Vec<BuffEffectUnit>>,
    pub max_level: u8,
}

impl SupportiveSkillEntry {
    pub fn buffs_at_max(&self) -> &[BuffEffectUnit] {
        level_slot(&self.buffs, self.max_level)
    }
}
