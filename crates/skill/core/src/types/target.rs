//! Hit targets as encoded in hit attributes, and their simplified form.

/// Raw target type of a hit attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub enum HitTargetRaw {
    Myself,
    AllyInRange,
    Hostile,
    DungeonObject,
    MyParty,
    AllyHpLowest,
    HostileAndDungeonObject,
    MyPartyExceptMyself,
    FixedObject,
    MyselfCheckCollision,
    Unknown(u8),
}

/// Simplified target used by the builders.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetSimple {
    SelfOnly,
    SelfSurrounding,
    Team,
    Enemy,
    Field,
    Unknown,
}

/// Raw code → raw target, mirroring the in-asset enum.
const RAW_TARGET_CODES: [(u8, HitTargetRaw); 10] = [
    (1, HitTargetRaw::Myself),
    (2, HitTargetRaw::AllyInRange),
    (3, HitTargetRaw::Hostile),
    (5, HitTargetRaw::DungeonObject),
    (6, HitTargetRaw::MyParty),
    (7, HitTargetRaw::AllyHpLowest),
    (10, HitTargetRaw::HostileAndDungeonObject),
    (12, HitTargetRaw::MyPartyExceptMyself),
    (15, HitTargetRaw::FixedObject),
    (16, HitTargetRaw::MyselfCheckCollision),
];

impl HitTargetRaw {
    pub fn code(self) -> u8 {
        match self {
            HitTargetRaw::Unknown(code) => code,
            known => RAW_TARGET_CODES
                .iter()
                .find(|(_, raw)| *raw == known)
                .map(|(code, _)| *code)
                .unwrap_or_default(),
        }
    }

    /// Collapses the raw target into the simplified target.
    pub const fn simplify(self) -> TargetSimple {
        match self {
            HitTargetRaw::Myself | HitTargetRaw::MyselfCheckCollision => TargetSimple::SelfOnly,
            HitTargetRaw::AllyInRange => TargetSimple::SelfSurrounding,
            HitTargetRaw::MyParty
            | HitTargetRaw::AllyHpLowest
            | HitTargetRaw::MyPartyExceptMyself => TargetSimple::Team,
            HitTargetRaw::Hostile
            | HitTargetRaw::DungeonObject
            | HitTargetRaw::HostileAndDungeonObject => TargetSimple::Enemy,
            HitTargetRaw::FixedObject => TargetSimple::Field,
            HitTargetRaw::Unknown(_) => TargetSimple::Unknown,
        }
    }
}

impl Default for HitTargetRaw {
    fn default() -> Self {
        HitTargetRaw::Unknown(0)
    }
}

impl From<u8> for HitTargetRaw {
    fn from(code: u8) -> Self {
        RAW_TARGET_CODES
            .iter()
            .find(|(raw_code, _)| *raw_code == code)
            .map(|(_, raw)| *raw)
            .unwrap_or(HitTargetRaw::Unknown(code))
    }
}

impl From<HitTargetRaw> for u8 {
    fn from(raw: HitTargetRaw) -> Self {
        raw.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplification_table() {
        assert_eq!(HitTargetRaw::from(1).simplify(), TargetSimple::SelfOnly);
        assert_eq!(HitTargetRaw::from(2).simplify(), TargetSimple::SelfSurrounding);
        assert_eq!(HitTargetRaw::from(3).simplify(), TargetSimple::Enemy);
        assert_eq!(HitTargetRaw::from(6).simplify(), TargetSimple::Team);
        assert_eq!(HitTargetRaw::from(15).simplify(), TargetSimple::Field);
        assert_eq!(HitTargetRaw::from(4), HitTargetRaw::Unknown(4));
        assert_eq!(HitTargetRaw::from(4).simplify(), TargetSimple::Unknown);
    }

    #[test]
    fn codes_survive_conversion() {
        for code in [1u8, 2, 3, 5, 6, 7, 10, 12, 15, 16, 99] {
            assert_eq!(u8::from(HitTargetRaw::from(code)), code);
        }
    }
}
