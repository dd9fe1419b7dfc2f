//! Damage-dealing skills.

use std::collections::BTreeSet;

use super::discovery::{attacking_axes, expand_axes};
use super::{SkillCancelUnit, SkillError, SkillVariant};
use crate::condition::ConditionComposite;
use crate::config::EngineConfig;
use crate::effect::{
    AfflictionEffectUnit, BuffEffectUnit, build_affliction_unit, build_debuff_units,
    normalize_units,
};
use crate::hit::{HitData, ModifierContext, ModifierOutcome, calculate_modifiers};
use crate::types::SkillId;

/// Hit matrix of one attacking skill with its discovered composites.
#[derive(Clone, Debug)]
pub struct AttackingSkillData {
    skill_id: SkillId,
    /// `levels[n]` holds the hits of level `n + 1`.
    levels: Vec<Vec<HitData>>,
    ctx: ModifierContext,
    possible_conditions: BTreeSet<ConditionComposite>,
    max_level: u8,
    cancel_units: Vec<Vec<SkillCancelUnit>>,
}

impl AttackingSkillData {
    /// Discovers the possible composites and the max level of the skill.
    ///
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
        let ctx = ModifierContext::from_hits(levels.iter().flatten());
        let possible_conditions = expand_axes(&attacking_axes(levels.iter().flatten(), config), config);

        let mut data = Self {
            skill_id,
            levels,
            ctx,
            possible_conditions,
            max_level: 1,
            cancel_units: Vec::new(),
        };
        let base = data.with_conditions(&ConditionComposite::empty())?;
        data.max_level = pick_max_level(&base.total_mod());

        tracing::debug!(
            skill = %skill_id,
            levels = data.levels.len(),
            max_level = data.max_level,
            composites = data.possible_conditions.len(),
            "built attacking skill data"
        );
        Ok(data)
    }

    #[must_use]
    pub fn with_cancel_units(mut self, cancel_units: Vec<Vec<SkillCancelUnit>>) -> Self {
        self.cancel_units = cancel_units;
        self
    }

    pub fn skill_id(&self) -> SkillId {
        self.skill_id
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Hits of `level` (1-based).
    pub fn hits(&self, level: u8) -> &[HitData] {
        level_slot(&self.levels, level)
    }

    /// Cancel units of `level` (1-based).
    pub fn cancel_units(&self, level: u8) -> &[SkillCancelUnit] {
        level_slot(&self.cancel_units, level)
    }

    fn compute_level(
        &self,
        hits: &[HitData],
        composite: &ConditionComposite,
    ) -> Result<LevelOutcome, SkillError> {
        let mut outcome = LevelOutcome::default();
        let mut tracks: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut track_position: Option<usize> = None;

        for hit in hits {
            let modifiers = calculate_modifiers(hit, composite, &self.ctx)?;
            if modifiers == ModifierOutcome::NotApplicable {
                continue;
            }
            outcome.afflictions.extend(build_affliction_unit(hit)?);
            outcome.debuffs.extend(build_debuff_units(hit));

            // Non-damaging hits only carry effects.
            if hit.modifier == 0.0 {
                continue;
            }
            let crisis = hit.crisis.unwrap_or(1.0);
            match modifiers {
                ModifierOutcome::Hits(values) => {
                    if hit.repeat.is_some() {
                        outcome.counter_mods.extend(values.iter().copied());
                    }
                    outcome
                        .crisis_mods
                        .extend(std::iter::repeat_n(crisis, values.len()));
                    outcome.mods.extend(values);
                }
                ModifierOutcome::BulletTrack(values) => {
                    track_position.get_or_insert(outcome.mods.len());
                    tracks.push(values.into_iter().map(|value| (value, crisis)).collect());
                }
                ModifierOutcome::NotApplicable => {}
            }
        }

        if let Some(position) = track_position {
            let (mods, crisis_mods): (Vec<f64>, Vec<f64>) = interleave(&tracks).into_iter().unzip();
            outcome.mods.splice(position..position, mods);
            outcome.crisis_mods.splice(position..position, crisis_mods);
        }
        normalize_units(&mut outcome.afflictions);
        normalize_units(&mut outcome.debuffs);
        Ok(outcome)
    }

    /// Rejects a bullet hit count past the longest bullet lifetime, whether or
    /// not the bullet itself is active under `composite`.
    fn check_bullet_lifetime(&self, composite: &ConditionComposite) -> Result<(), SkillError> {
        let Some(condition) = composite.bullet_hit_count() else {
            return Ok(());
        };
        let Some(bullet) = self.levels.iter().flatten().find(|hit| hit.is_deteriorating()) else {
            return Ok(());
        };
        let requested = u8::try_from(condition.value()).unwrap_or(u8::MAX);
        if requested > self.ctx.bullet_lifetime {
            return Err(SkillError::BulletEndOfLife {
                label: bullet.label.clone(),
                requested,
                lifetime: self.ctx.bullet_lifetime,
            });
        }
        Ok(())
    }
}

impl SkillVariant for AttackingSkillData {
    type Entry = AttackingSkillEntry;

    fn possible_conditions(&self) -> &BTreeSet<ConditionComposite> {
        &self.possible_conditions
    }

    fn with_conditions(
        &self,
        composite: &ConditionComposite,
    ) -> Result<AttackingSkillEntry, SkillError> {
        composite.check()?;
        self.check_bullet_lifetime(composite)?;
        let mut entry = AttackingSkillEntry {
            condition_comp: composite.clone(),
            mods: Vec::with_capacity(self.levels.len()),
            crisis_mods: Vec::with_capacity(self.levels.len()),
            counter_mods: Vec::with_capacity(self.levels.len()),
            max_level: self.max_level,
            afflictions: Vec::with_capacity(self.levels.len()),
            debuffs: Vec::with_capacity(self.levels.len()),
        };
        for hits in &self.levels {
            let level = self.compute_level(hits, composite)?;
            entry.mods.push(level.mods);
            entry.crisis_mods.push(level.crisis_mods);
            entry.counter_mods.push(level.counter_mods);
            entry.afflictions.push(level.afflictions);
            entry.debuffs.push(level.debuffs);
        }
        Ok(entry)
    }

    fn max_level(&self) -> u8 {
        self.max_level
    }
}

#[derive(Default)]
struct LevelOutcome {
    mods: Vec<f64>,
    crisis_mods: Vec<f64>,
    counter_mods: Vec<f64>,
    afflictions: Vec<AfflictionEffectUnit>,
    debuffs: Vec<BuffEffectUnit>,
}

/// Modifier matrix and effects of one attacking skill under one composite.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackingSkillEntry {
    pub condition_comp: ConditionComposite,
    /// `mods[n][i]` is the modifier of hit `i` at level `n + 1`.
    pub mods: Vec<Vec<f64>>,
    /// `crisis_mods[n][i]` is the 1 HP multiplier of hit `i` at level `n + 1`,
    /// 1.0 when the hit does not scale with HP.
    pub crisis_mods: Vec<Vec<f64>>,
    /// Modifiers of the hits repeated per additional input or combo count.
    pub counter_mods: Vec<Vec<f64>>,
    pub max_level: u8,
    pub afflictions: Vec<Vec<AfflictionEffectUnit>>,
    pub debuffs: Vec<Vec<BuffEffectUnit>>,
}

impl AttackingSkillEntry {
    pub fn hit_count(&self) -> Vec<usize> {
        self.mods.iter().map(Vec::len).collect()
    }

    pub fn total_mod(&self) -> Vec<f64> {
        self.mods.iter().map(|level| level.iter().sum()).collect()
    }

    pub fn mods_at_max(&self) -> &[f64] {
        level_slot(&self.mods, self.max_level)
    }

    pub fn hit_count_at_max(&self) -> usize {
        self.mods_at_max().len()
    }

    pub fn total_mod_at_max(&self) -> f64 {
        self.mods_at_max().iter().sum()
    }

    /// Highest 1 HP multiplier per level.
    pub fn max_crisis_mod(&self) -> Vec<f64> {
        self.crisis_mods
            .iter()
            .map(|level| level.iter().copied().fold(1.0, f64::max))
            .collect()
    }

    /// Total modifier reached at 1 HP per level.
    pub fn crisis_total_mod(&self) -> Vec<f64> {
        self.mods
            .iter()
            .zip(&self.crisis_mods)
            .map(|(mods, crisis)| mods.iter().zip(crisis).map(|(m, c)| m * c).sum())
            .collect()
    }

    pub fn crisis_mods_at_max(&self) -> &[f64] {
        level_slot(&self.crisis_mods, self.max_level)
    }

    pub fn counter_hit_count(&self) -> Vec<usize> {
        self.counter_mods.iter().map(Vec::len).collect()
    }

    pub fn counter_total_mod(&self) -> Vec<f64> {
        self.counter_mods.iter().map(|level| level.iter().sum()).collect()
    }

    pub fn counter_mods_at_max(&self) -> &[f64] {
        level_slot(&self.counter_mods, self.max_level)
    }

    pub fn afflictions_at_max(&self) -> &[AfflictionEffectUnit] {
        level_slot(&self.afflictions, self.max_level)
    }

    pub fn debuffs_at_max(&self) -> &[BuffEffectUnit] {
        level_slot(&self.debuffs, self.max_level)
    }
}

/// Slot of a 1-based level in a per-level table.
pub(super) fn level_slot<T>(table: &[Vec<T>], level: u8) -> &[T] {
    usize::from(level)
        .checked_sub(1)
        .and_then(|idx| table.get(idx))
        .map_or(&[], Vec::as_slice)
}

/// Level with the strictly greatest total; ties go to the higher level.
fn pick_max_level(totals: &[f64]) -> u8 {
    let mut best = 0usize;
    let mut best_total = f64::NEG_INFINITY;
    for (idx, total) in totals.iter().enumerate() {
        if *total >= best_total {
            best = idx;
            best_total = *total;
        }
    }
    u8::try_from(best + 1).unwrap_or(u8::MAX)
}

/// Interleaves bullet tracks index by index; exhausted tracks drop out.
fn interleave<T: Copy>(tracks: &[Vec<T>]) -> Vec<T> {
    let longest = tracks.iter().map(Vec::len).max().unwrap_or_default();
    (0..longest)
        .flat_map(|idx| tracks.iter().filter_map(move |track| track.get(idx).copied()))
        .collect()
}
