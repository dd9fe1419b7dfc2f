use super::EffectUnit;
use crate::config::time_key;
use crate::hit::HitData;
use crate::skill::SkillError;
use crate::types::{ActionConditionId, AfflictionStatus, TargetSimple};

/// Affliction applied to the enemy by one hit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AfflictionEffectUnit {
    pub time: f64,
    pub status: AfflictionStatus,
    pub probability_pct: f64,
    pub duration_sec: f64,
    /// Seconds between damage ticks.
    pub interval_sec: f64,
    /// Damage modifier of each tick.
    pub damage_modifier: f64,
    pub stackable: bool,
    pub max_stack_count: u32,
    pub hit_label: String,
    pub action_condition_id: ActionConditionId,
}

impl EffectUnit for AfflictionEffectUnit {
    type Key = (i64, String, AfflictionStatus);

    fn key(&self) -> Self::Key {
        (time_key(self.time), self.hit_label.clone(), self.status)
    }
}

/// Builds the affliction a hit applies, if any.
///
/// Only enemy-targeting hits whose action condition carries an abnormal
/// status produce a unit.
///
/// # Errors
///
/// Returns `SkillError::EnumConversion` when the status code is unmapped.
pub fn build_affliction_unit(hit: &HitData) -> Result<Option<AfflictionEffectUnit>, SkillError> {
    if hit.target != TargetSimple::Enemy {
        return Ok(None);
    }
    let Some(condition) = &hit.action_condition else {
        return Ok(None);
    };
    match condition.afflicted_status {
        AfflictionStatus::None => Ok(None),
        AfflictionStatus::Unknown(code) => Err(SkillError::EnumConversion {
            kind: "affliction status",
            value: code,
            label: hit.label.clone(),
        }),
        status => Ok(Some(AfflictionEffectUnit {
            time: hit.action_time,
            status,
            probability_pct: condition.probability_pct,
            duration_sec: condition.duration_sec,
            interval_sec: condition.slip_interval_sec,
            damage_modifier: condition.slip_damage_modifier,
            stackable: condition.stackable,
            max_stack_count: condition.max_stack_count,
            hit_label: hit.label.clone(),
            action_condition_id: condition.id,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ActionCondition;

    fn hit(target: TargetSimple, status: AfflictionStatus) -> HitData {
        HitData::new("AFF", 1.0, target).with_action_condition(
            ActionCondition::new(ActionConditionId(2)).with_affliction(status, 100.0, 12.0, 2.9, 0.4),
        )
    }

    #[test]
    fn only_enemy_hits_afflict() {
        assert!(
            build_affliction_unit(&hit(TargetSimple::Team, AfflictionStatus::Burn))
                .unwrap()
                .is_none()
        );
        let unit = build_affliction_unit(&hit(TargetSimple::Enemy, AfflictionStatus::Burn))
            .unwrap()
            .unwrap();
        assert_eq!(unit.status, AfflictionStatus::Burn);
        assert_eq!(unit.interval_sec, 2.9);
    }

    #[test]
    fn no_status_means_no_unit() {
        assert!(
            build_affliction_unit(&hit(TargetSimple::Enemy, AfflictionStatus::None))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn unknown_status_is_an_error() {
        assert!(matches!(
            build_affliction_unit(&hit(TargetSimple::Enemy, AfflictionStatus::Unknown(99))),
            Err(SkillError::EnumConversion { value: 99, .. })
        ));
    }
}
