//! Action conditions: buff rates, affliction payloads and restrictions.

use crate::types::{ActionConditionId, AfflictionStatus, BuffParameter, ElementFlags};

/// Oracle providing action conditions by id.
pub trait ActionConditionOracle: Send + Sync {
    fn action_condition(&self, id: ActionConditionId) -> Option<ActionCondition>;
}

/// Buff rates of an action condition. A zero rate means "not applicable".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuffRates {
    pub atk: f64,
    pub def: f64,
    pub crit_rate: f64,
    pub crit_damage: f64,
    pub skill_damage: f64,
    pub fs_damage: f64,
    pub attack_speed: f64,
    pub fs_speed: f64,
    pub sp_rate: f64,
    pub shield_by_damage: f64,
    pub shield_by_hp: f64,
    pub resist_flame: f64,
    pub resist_water: f64,
    pub resist_wind: f64,
    pub resist_light: f64,
    pub resist_shadow: f64,
}

impl BuffRates {
    /// Every rate paired with the parameter it affects, in parameter order.
    pub fn entries(&self) -> [(BuffParameter, f64); 16] {
        [
            (BuffParameter::Atk, self.atk),
            (BuffParameter::Def, self.def),
            (BuffParameter::CritRate, self.crit_rate),
            (BuffParameter::CritDamage, self.crit_damage),
            (BuffParameter::SkillDamage, self.skill_damage),
            (BuffParameter::FsDamage, self.fs_damage),
            (BuffParameter::AttackSpeed, self.attack_speed),
            (BuffParameter::FsSpeed, self.fs_speed),
            (BuffParameter::SpRate, self.sp_rate),
            (BuffParameter::ShieldByDamage, self.shield_by_damage),
            (BuffParameter::ShieldByHp, self.shield_by_hp),
            (BuffParameter::ResistFlame, self.resist_flame),
            (BuffParameter::ResistWater, self.resist_water),
            (BuffParameter::ResistWind, self.resist_wind),
            (BuffParameter::ResistLight, self.resist_light),
            (BuffParameter::ResistShadow, self.resist_shadow),
        ]
    }

    /// Non-zero rates only.
    pub fn non_zero(&self) -> impl Iterator<Item = (BuffParameter, f64)> {
        self.entries().into_iter().filter(|(_, rate)| *rate != 0.0)
    }
}

/// Action condition record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionCondition {
    pub id: ActionConditionId,
    pub afflicted_status: AfflictionStatus,
    /// Application probability in percent.
    pub probability_pct: f64,
    pub duration_sec: f64,
    pub duration_count: u32,
    /// Interval between affliction damage ticks.
    pub slip_interval_sec: f64,
    /// Damage modifier of each affliction tick.
    pub slip_damage_modifier: f64,
    pub stackable: bool,
    pub max_stack_count: u32,
    /// Elements the payload is restricted to. Empty means unrestricted.
    pub elemental_target: ElementFlags,
    pub rates: BuffRates,
}

impl ActionCondition {
    pub fn new(id: ActionConditionId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rates(mut self, rates: BuffRates) -> Self {
        self.rates = rates;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration_sec: f64) -> Self {
        self.duration_sec = duration_sec;
        self
    }

    #[must_use]
    pub fn with_affliction(
        mut self,
        status: AfflictionStatus,
        probability_pct: f64,
        duration_sec: f64,
        slip_interval_sec: f64,
        slip_damage_modifier: f64,
    ) -> Self {
        self.afflicted_status = status;
        self.probability_pct = probability_pct;
        self.duration_sec = duration_sec;
        self.slip_interval_sec = slip_interval_sec;
        self.slip_damage_modifier = slip_damage_modifier;
        self
    }

    #[must_use]
    pub fn with_stacking(mut self, stackable: bool, max_stack_count: u32) -> Self {
        self.stackable = stackable;
        self.max_stack_count = max_stack_count;
        self
    }

    #[must_use]
    pub fn with_elemental_target(mut self, elemental_target: ElementFlags) -> Self {
        self.elemental_target = elemental_target;
        self
    }
}
