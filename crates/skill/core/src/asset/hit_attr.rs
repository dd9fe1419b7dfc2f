//! Hit attributes: per-hit damage, punisher, crisis and side-effect fields.

use crate::types::{
    ActionConditionId, AfflictionStatus, BuffCountId, HitTargetRaw, SpRecoveryTarget,
};

/// Oracle providing hit attributes by label.
pub trait HitAttributeOracle: Send + Sync {
    fn hit_attribute(&self, label: &str) -> Option<HitAttribute>;
}

/// Punisher: damage multiplier against targets bearing any of `states`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PunisherDeclaration {
    pub states: Vec<AfflictionStatus>,
    pub rate: f64,
}

/// Hit attribute record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitAttribute {
    pub label: String,
    pub damage_modifier: f64,
    pub target: HitTargetRaw,
    pub punishers: Vec<PunisherDeclaration>,
    /// Multiplier reached at 1 HP. 0 and 1 both mean "no crisis scaling".
    pub crisis_modifier: f64,
    pub buff_count_id: Option<BuffCountId>,
    pub self_damage: bool,
    /// Self damage as a percentage of max HP.
    pub self_damage_fixed_pct: f64,
    /// Self damage consuming a percentage of max HP.
    pub self_damage_consume_pct: f64,
    pub sp_recovery_ratio: f64,
    pub sp_recovery_skill_idx: SpRecoveryTarget,
    pub sp_recovery_skill_idx_2: SpRecoveryTarget,
    pub action_condition_id: Option<ActionConditionId>,
}

impl HitAttribute {
    pub fn new(label: impl Into<String>, damage_modifier: f64, target: HitTargetRaw) -> Self {
        Self {
            label: label.into(),
            damage_modifier,
            target,
            ..Self::default()
        }
    }

    /// Crisis multiplier at 1 HP, if the hit scales with missing HP.
    pub fn crisis(&self) -> Option<f64> {
        (self.crisis_modifier != 0.0 && self.crisis_modifier != 1.0).then_some(self.crisis_modifier)
    }

    #[must_use]
    pub fn with_punisher(mut self, states: Vec<AfflictionStatus>, rate: f64) -> Self {
        self.punishers.push(PunisherDeclaration { states, rate });
        self
    }

    #[must_use]
    pub fn with_crisis(mut self, crisis_modifier: f64) -> Self {
        self.crisis_modifier = crisis_modifier;
        self
    }

    #[must_use]
    pub fn with_buff_count(mut self, id: BuffCountId) -> Self {
        self.buff_count_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_action_condition(mut self, id: ActionConditionId) -> Self {
        self.action_condition_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_self_damage(mut self, fixed_pct: f64, consume_pct: f64) -> Self {
        self.self_damage = true;
        self.self_damage_fixed_pct = fixed_pct;
        self.self_damage_consume_pct = consume_pct;
        self
    }

    #[must_use]
    pub fn with_sp_recovery(
        mut self,
        ratio: f64,
        idx: SpRecoveryTarget,
        idx_2: SpRecoveryTarget,
    ) -> Self {
        self.sp_recovery_ratio = ratio;
        self.sp_recovery_skill_idx = idx;
        self.sp_recovery_skill_idx_2 = idx_2;
        self
    }
}
