//! Buff parameters emitted by the effect-unit builders.

/// Parameter affected by a buff, debuff, self damage or gauge charge unit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BuffParameter {
    Atk,
    Def,
    CritRate,
    CritDamage,
    SkillDamage,
    FsDamage,
    AttackSpeed,
    FsSpeed,
    SpRate,
    ShieldByDamage,
    ShieldByHp,
    ResistFlame,
    ResistWater,
    ResistWind,
    ResistLight,
    ResistShadow,
    /// Self damage as a fixed percentage of max HP.
    SelfDamageFixedMaxHp,
    /// Self damage consuming a percentage of max HP.
    SelfDamageConsumeMaxHp,
    /// Instant SP charge of skill 1.
    SpChargeS1,
    /// Instant SP charge of skill 2.
    SpChargeS2,
    /// Instant SP charge of the skill being used.
    SpChargeUsed,
}

/// Skill targeted by an instant SP recovery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub enum SpRecoveryTarget {
    #[default]
    None,
    S1,
    S2,
    /// The skill currently being used.
    Used,
    Unknown(u8),
}

impl SpRecoveryTarget {
    pub const fn code(self) -> u8 {
        match self {
            SpRecoveryTarget::None => 0,
            SpRecoveryTarget::S1 => 1,
            SpRecoveryTarget::S2 => 2,
            SpRecoveryTarget::Used => 99,
            SpRecoveryTarget::Unknown(code) => code,
        }
    }
}

impl From<u8> for SpRecoveryTarget {
    fn from(code: u8) -> Self {
        match code {
            0 => SpRecoveryTarget::None,
            1 => SpRecoveryTarget::S1,
            2 => SpRecoveryTarget::S2,
            99 => SpRecoveryTarget::Used,
            other => SpRecoveryTarget::Unknown(other),
        }
    }
}

impl From<SpRecoveryTarget> for u8 {
    fn from(target: SpRecoveryTarget) -> Self {
        target.code()
    }
}
