use super::{EffectUnit, normalize_units};
use crate::config::time_key;
use crate::hit::HitData;
use crate::skill::SkillError;
use crate::types::{ActionConditionId, BuffParameter, SpRecoveryTarget, TargetSimple};

/// One buff, debuff, self damage or gauge charge applied by a hit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffEffectUnit {
    pub time: f64,
    pub target: TargetSimple,
    pub parameter: BuffParameter,
    pub rate: f64,
    pub probability_pct: f64,
    pub duration_sec: f64,
    pub duration_count: u32,
    pub max_stack_count: u32,
    pub hit_label: String,
    pub action_condition_id: Option<ActionConditionId>,
}

impl BuffEffectUnit {
    /// Instant unit without duration, always applied.
    fn instant(hit: &HitData, target: TargetSimple, parameter: BuffParameter, rate: f64) -> Self {
        Self {
            time: hit.action_time,
            target,
            parameter,
            rate,
            probability_pct: 100.0,
            duration_sec: 0.0,
            duration_count: 0,
            max_stack_count: 0,
            hit_label: hit.label.clone(),
            action_condition_id: None,
        }
    }
}

impl EffectUnit for BuffEffectUnit {
    type Key = (i64, String, BuffParameter);

    fn key(&self) -> Self::Key {
        (time_key(self.time), self.hit_label.clone(), self.parameter)
    }
}

/// Builds the units a hit applies to its caster or allies.
///
/// Covers self damage, instant SP charge and every non-zero rate of the
/// linked action condition when the hit does not target enemies.
///
/// # Errors
///
/// Returns `SkillError::UnhandledSelfDamage` when self damage is flagged
/// without a ratio, and `SkillError::EnumConversion` for an unmapped SP
/// recovery target.
pub fn build_buff_units(hit: &HitData) -> Result<Vec<BuffEffectUnit>, SkillError> {
    let mut units: Vec<BuffEffectUnit> = self_damage_units(hit)?.into_iter().collect();
    units.extend(sp_charge_unit(hit)?);
    if hit.target != TargetSimple::Enemy {
        units.extend(rate_units(hit));
    }
    normalize_units(&mut units);
    Ok(units)
}

/// Builds the units a hit applies to enemies.
pub fn build_debuff_units(hit: &HitData) -> Vec<BuffEffectUnit> {
    if hit.target != TargetSimple::Enemy {
        return Vec::new();
    }
    let mut units: Vec<BuffEffectUnit> = rate_units(hit).collect();
    normalize_units(&mut units);
    units
}

fn self_damage_units(hit: &HitData) -> Result<Option<BuffEffectUnit>, SkillError> {
    let attribute = &hit.attribute;
    if !attribute.self_damage {
        return Ok(None);
    }
    // Fixed damage takes precedence when both modes are set.
    let (parameter, pct) = if attribute.self_damage_fixed_pct != 0.0 {
        (
            BuffParameter::SelfDamageFixedMaxHp,
            attribute.self_damage_fixed_pct,
        )
    } else if attribute.self_damage_consume_pct != 0.0 {
        (
            BuffParameter::SelfDamageConsumeMaxHp,
            attribute.self_damage_consume_pct,
        )
    } else {
        return Err(SkillError::UnhandledSelfDamage {
            label: hit.label.clone(),
        });
    };
    Ok(Some(BuffEffectUnit::instant(
        hit,
        TargetSimple::SelfOnly,
        parameter,
        pct / 100.0,
    )))
}

fn sp_charge_unit(hit: &HitData) -> Result<Option<BuffEffectUnit>, SkillError> {
    let attribute = &hit.attribute;
    if attribute.sp_recovery_ratio == 0.0 {
        return Ok(None);
    }
    // The second index wins whenever it is set.
    let target = match attribute.sp_recovery_skill_idx_2 {
        SpRecoveryTarget::None => attribute.sp_recovery_skill_idx,
        idx_2 => idx_2,
    };
    let parameter = match target {
        SpRecoveryTarget::None => return Ok(None),
        SpRecoveryTarget::S1 => BuffParameter::SpChargeS1,
        SpRecoveryTarget::S2 => BuffParameter::SpChargeS2,
        SpRecoveryTarget::Used => BuffParameter::SpChargeUsed,
        SpRecoveryTarget::Unknown(code) => {
            return Err(SkillError::EnumConversion {
                kind: "sp recovery target",
                value: code,
                label: hit.label.clone(),
            });
        }
    };
    Ok(Some(BuffEffectUnit::instant(
        hit,
        TargetSimple::SelfOnly,
        parameter,
        attribute.sp_recovery_ratio,
    )))
}

fn rate_units(hit: &HitData) -> impl Iterator<Item = BuffEffectUnit> + '_ {
    hit.action_condition.iter().flat_map(move |condition| {
        condition
            .rates
            .non_zero()
            .map(move |(parameter, rate)| BuffEffectUnit {
                time: hit.action_time,
                target: hit.target,
                parameter,
                rate,
                probability_pct: condition.probability_pct,
                duration_sec: condition.duration_sec,
                duration_count: condition.duration_count,
                max_stack_count: condition.max_stack_count,
                hit_label: hit.label.clone(),
                action_condition_id: Some(condition.id),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{ActionCondition, BuffRates, HitAttribute};
    use crate::types::HitTargetRaw;

    fn buff_hit(target: HitTargetRaw) -> HitData {
        let condition = ActionCondition::new(ActionConditionId(5))
            .with_duration(10.0)
            .with_rates(BuffRates {
                atk: 0.2,
                crit_rate: 0.1,
                ..BuffRates::default()
            });
        HitData::new("BUFF", 0.0, target.simplify())
            .with_timing(Default::default(), 1.25)
            .with_action_condition(condition)
    }

    #[test]
    fn non_zero_rates_become_units() {
        let units = build_buff_units(&buff_hit(HitTargetRaw::MyParty)).unwrap();
        let parameters: Vec<BuffParameter> = units.iter().map(|unit| unit.parameter).collect();
        assert_eq!(parameters, [BuffParameter::Atk, BuffParameter::CritRate]);
        assert!(units.iter().all(|unit| unit.target == TargetSimple::Team));
        assert_eq!(units[0].duration_sec, 10.0);
        assert_eq!(units[0].action_condition_id, Some(ActionConditionId(5)));
        assert!(build_debuff_units(&buff_hit(HitTargetRaw::MyParty)).is_empty());
    }

    #[test]
    fn enemy_rates_are_debuffs() {
        let hit = buff_hit(HitTargetRaw::Hostile);
        assert!(build_buff_units(&hit).unwrap().is_empty());
        assert_eq!(build_debuff_units(&hit).len(), 2);
    }

    #[test]
    fn self_damage_modes() {
        let attribute = HitAttribute::new("SD", 0.0, HitTargetRaw::Myself).with_self_damage(0.0, 15.0);
        let hit = HitData::new("SD", 0.0, TargetSimple::SelfOnly).with_attribute(attribute);
        let units = build_buff_units(&hit).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].parameter, BuffParameter::SelfDamageConsumeMaxHp);
        assert!((units[0].rate - 0.15).abs() < 1e-9);

        let attribute = HitAttribute::new("SD", 0.0, HitTargetRaw::Myself).with_self_damage(0.0, 0.0);
        let hit = HitData::new("SD", 0.0, TargetSimple::SelfOnly).with_attribute(attribute);
        assert_eq!(
            build_buff_units(&hit),
            Err(SkillError::UnhandledSelfDamage { label: "SD".into() })
        );
    }

    #[test]
    fn fixed_self_damage_wins_over_consume() {
        let attribute =
            HitAttribute::new("SD", 0.0, HitTargetRaw::Myself).with_self_damage(10.0, 15.0);
        let hit = HitData::new("SD", 0.0, TargetSimple::SelfOnly).with_attribute(attribute);
        let units = build_buff_units(&hit).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].parameter, BuffParameter::SelfDamageFixedMaxHp);
        assert_eq!(units[0].target, TargetSimple::SelfOnly);
        assert!((units[0].rate - 0.1).abs() < 1e-9);
    }

    /// Pinned against known character data: the second index is
    /// authoritative when both indices are set.
    #[test]
    fn sp_charge_prefers_second_index() {
        let attribute = HitAttribute::new("SP", 0.0, HitTargetRaw::Myself).with_sp_recovery(
            0.5,
            SpRecoveryTarget::S1,
            SpRecoveryTarget::S2,
        );
        let hit = HitData::new("SP", 0.0, TargetSimple::SelfOnly).with_attribute(attribute);
        let units = build_buff_units(&hit).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].parameter, BuffParameter::SpChargeS2);

        let attribute = HitAttribute::new("SP", 0.0, HitTargetRaw::Myself).with_sp_recovery(
            0.5,
            SpRecoveryTarget::Used,
            SpRecoveryTarget::None,
        );
        let hit = HitData::new("SP", 0.0, TargetSimple::SelfOnly).with_attribute(attribute);
        assert_eq!(
            build_buff_units(&hit).unwrap()[0].parameter,
            BuffParameter::SpChargeUsed
        );
    }

    #[test]
    fn unknown_sp_target_is_an_error() {
        let attribute = HitAttribute::new("SP", 0.0, HitTargetRaw::Myself).with_sp_recovery(
            0.5,
            SpRecoveryTarget::None,
            SpRecoveryTarget::Unknown(7),
        );
        let hit = HitData::new("SP", 0.0, TargetSimple::SelfOnly).with_attribute(attribute);
        assert!(matches!(
            build_buff_units(&hit),
            Err(SkillError::EnumConversion { value: 7, .. })
        ));
    }

    #[test]
    fn units_collapse_on_time_noise() {
        let mut units = build_buff_units(&buff_hit(HitTargetRaw::MyParty)).unwrap();
        let mut shifted = units.clone();
        for unit in &mut shifted {
            unit.time += 1e-9;
        }
        units.extend(shifted);
        normalize_units(&mut units);
        assert_eq!(units.len(), 2);
    }
}
