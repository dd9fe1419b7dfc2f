//! Abnormal statuses (afflictions) appliable to a target.

/// Affliction status as encoded in action conditions.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
#[strum(serialize_all = "snake_case")]
pub enum AfflictionStatus {
    /// The action condition applies no affliction.
    #[default]
    None,
    Poison,
    Burn,
    Freeze,
    Paralysis,
    Blind,
    Stun,
    Curse,
    Bog,
    Sleep,
    Frostbite,
    Flashburn,
    Stormlash,
    Shadowblight,
    Scorchrent,
    /// Raw code with no mapping.
    Unknown(u8),
}

impl AfflictionStatus {
    /// Every recognized abnormal status, in code order.
    pub const ABNORMAL: [AfflictionStatus; 14] = [
        AfflictionStatus::Poison,
        AfflictionStatus::Burn,
        AfflictionStatus::Freeze,
        AfflictionStatus::Paralysis,
        AfflictionStatus::Blind,
        AfflictionStatus::Stun,
        AfflictionStatus::Curse,
        AfflictionStatus::Bog,
        AfflictionStatus::Sleep,
        AfflictionStatus::Frostbite,
        AfflictionStatus::Flashburn,
        AfflictionStatus::Stormlash,
        AfflictionStatus::Shadowblight,
        AfflictionStatus::Scorchrent,
    ];

    pub const fn code(self) -> u8 {
        match self {
            AfflictionStatus::None => 0,
            AfflictionStatus::Poison => 1,
            AfflictionStatus::Burn => 2,
            AfflictionStatus::Freeze => 3,
            AfflictionStatus::Paralysis => 4,
            AfflictionStatus::Blind => 5,
            AfflictionStatus::Stun => 6,
            AfflictionStatus::Curse => 7,
            AfflictionStatus::Bog => 8,
            AfflictionStatus::Sleep => 9,
            AfflictionStatus::Frostbite => 10,
            AfflictionStatus::Flashburn => 11,
            AfflictionStatus::Stormlash => 12,
            AfflictionStatus::Shadowblight => 13,
            AfflictionStatus::Scorchrent => 14,
            AfflictionStatus::Unknown(code) => code,
        }
    }

    /// Returns true for statuses that can be applied to an enemy.
    pub const fn is_abnormal(self) -> bool {
        !matches!(self, AfflictionStatus::None | AfflictionStatus::Unknown(_))
    }
}

impl From<u8> for AfflictionStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => AfflictionStatus::None,
            1..=14 => AfflictionStatus::ABNORMAL[code as usize - 1],
            other => AfflictionStatus::Unknown(other),
        }
    }
}

impl From<AfflictionStatus> for u8 {
    fn from(status: AfflictionStatus) -> Self {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_table() {
        for status in AfflictionStatus::ABNORMAL {
            assert_eq!(AfflictionStatus::from(status.code()), status);
            assert!(status.is_abnormal());
        }
        assert_eq!(AfflictionStatus::from(0), AfflictionStatus::None);
        assert_eq!(AfflictionStatus::from(77), AfflictionStatus::Unknown(77));
        assert!(!AfflictionStatus::Unknown(77).is_abnormal());
    }
}
