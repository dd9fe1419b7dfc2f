//! Effective modifier of one hit under one condition composite.

use super::HitData;
use crate::asset::RepeatSource;
use crate::condition::{Condition, ConditionComposite};
use crate::skill::SkillError;

/// Result of evaluating a hit under a composite.
#[derive(Clone, Debug, PartialEq)]
pub enum ModifierOutcome {
    /// The hit does not exist under the composite.
    NotApplicable,
    /// Modifiers appended to the level's hit list in order.
    Hits(Vec<f64>),
    /// Decaying modifiers of one bullet, interleaved with the level's other
    /// bullet tracks.
    BulletTrack(Vec<f64>),
}

impl ModifierOutcome {
    pub fn values(&self) -> &[f64] {
        match self {
            ModifierOutcome::NotApplicable => &[],
            ModifierOutcome::Hits(values) | ModifierOutcome::BulletTrack(values) => values,
        }
    }
}

/// Per-level facts the modifier of a single hit depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModifierContext {
    /// Longest bullet lifetime among the deteriorating hits of the skill.
    pub bullet_lifetime: u8,
}

impl ModifierContext {
    pub fn from_hits<'a>(hits: impl IntoIterator<Item = &'a HitData>) -> Self {
        let bullet_lifetime = hits
            .into_iter()
            .filter_map(|hit| hit.deterioration)
            .map(|deterioration| deterioration.max_hit_count)
            .max()
            .unwrap_or_default();
        Self { bullet_lifetime }
    }
}

/// Computes the effective modifiers of `hit` under `composite`.
///
/// Factors apply in order: pre-condition gate, elemental bonus, crisis,
/// buff-count boost, punishers, bullet deterioration, repeat expansion.
///
/// # Errors
///
/// Returns `SkillError::Condition` if the composite is invalid, and
/// `SkillError::BulletEndOfLife` if the composite asks for a bullet hit past
/// the bullet lifetime in `ctx`.
pub fn calculate_modifiers(
    hit: &HitData,
    composite: &ConditionComposite,
    ctx: &ModifierContext,
) -> Result<ModifierOutcome, SkillError> {
    composite.check()?;

    if hit
        .pre_condition
        .is_some_and(|pre_condition| !composite.contains(pre_condition))
    {
        return Ok(ModifierOutcome::NotApplicable);
    }

    let mut modifier = hit.modifier;

    if !hit.elemental_restriction.is_empty() {
        modifier *= match composite.target_element() {
            Some(target) if hit.elemental_restriction.contains(target.flag()) => {
                hit.skill_element.multiplier_against(target)
            }
            _ => 0.0,
        };
    }

    if let Some(crisis) = hit.crisis {
        let hp_rate = f64::from(composite.hp_status().map_or(100, Condition::value)) / 100.0;
        modifier *= 1.0 + (crisis - 1.0) * (1.0 - hp_rate).powi(2);
    }

    if let Some(boost) = &hit.buff_boost {
        let buffs = composite.buff_count().map_or(0, Condition::value);
        let stacks = composite.stack_count().map_or(0, Condition::value);
        modifier *= 1.0 + boost.rate(buffs, stacks);
    }

    let afflictions = composite.afflictions();
    for punisher in &hit.punishers {
        if punisher
            .states
            .iter()
            .any(|status| afflictions.contains(status))
        {
            modifier *= punisher.rate;
        }
    }

    if let Some(deterioration) = hit.deterioration {
        let landed = match composite.bullet_hit_count() {
            Some(condition) => {
                let requested = u8::try_from(condition.value()).unwrap_or(u8::MAX);
                if requested > ctx.bullet_lifetime {
                    return Err(SkillError::BulletEndOfLife {
                        label: hit.label.clone(),
                        requested,
                        lifetime: ctx.bullet_lifetime,
                    });
                }
                requested.min(deterioration.max_hit_count)
            }
            None => deterioration.max_hit_count,
        };
        let track = (0..i32::from(landed))
            .map(|idx| modifier * deterioration.rate.powi(idx))
            .collect();
        return Ok(ModifierOutcome::BulletTrack(track));
    }

    if let Some(repeat) = hit.repeat {
        let counter = match repeat.source {
            RepeatSource::AdditionalInput => composite.additional_input(),
            RepeatSource::Combo => composite.combo_count(),
        };
        let value = u32::try_from(counter.map_or(0, Condition::value)).unwrap_or_default();
        let copies = (value / repeat.step.max(1)).min(u32::from(repeat.max_repeats));
        if copies == 0 {
            return Ok(ModifierOutcome::NotApplicable);
        }
        return Ok(ModifierOutcome::Hits(vec![modifier; copies as usize]));
    }

    Ok(ModifierOutcome::Hits(vec![modifier]))
}
