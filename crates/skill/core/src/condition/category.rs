//! Condition categories and their static conversion tables.

use super::composite::CheckResult;
use super::{Condition, ConditionError};

/// Group of mutually exclusive condition atoms.
///
/// Declaration order is the canonical category priority.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ConditionCategory {
    TargetAffliction,
    TargetElement,
    SelfHp,
    SelfBuffCount,
    SelfStackCount,
    BulletHitCount,
    AdditionalInput,
    ComboCount,
    ActionCancel,
    SkillVariant,
    SigilState,
}

use Condition::*;

/// Affliction atom → status code.
const TARGET_AFFLICTION: &[(Condition, i32)] = &[
    (TargetPoisoned, 1),
    (TargetBurned, 2),
    (TargetFrozen, 3),
    (TargetParalyzed, 4),
    (TargetBlinded, 5),
    (TargetStunned, 6),
    (TargetCursed, 7),
    (TargetBogged, 8),
    (TargetSleeping, 9),
    (TargetFrostbitten, 10),
    (TargetFlashburned, 11),
    (TargetStormlashed, 12),
    (TargetShadowblighted, 13),
    (TargetScorchrent, 14),
];

/// Element atom → element code.
const TARGET_ELEMENT: &[(Condition, i32)] = &[
    (TargetFlame, 1),
    (TargetWater, 2),
    (TargetWind, 3),
    (TargetLight, 4),
    (TargetShadow, 5),
];

/// HP atom → HP percentage. 1 HP is stored as 0%.
const SELF_HP: &[(Condition, i32)] = &[
    (SelfHp1, 0),
    (SelfHp10, 10),
    (SelfHp20, 20),
    (SelfHp30, 30),
    (SelfHp50, 50),
    (SelfHp70, 70),
    (SelfHpFull, 100),
];

const SELF_BUFF_COUNT: &[(Condition, i32)] = &[
    (SelfBuff0, 0),
    (SelfBuff1, 1),
    (SelfBuff2, 2),
    (SelfBuff3, 3),
    (SelfBuff4, 4),
    (SelfBuff5, 5),
    (SelfBuff6, 6),
    (SelfBuff7, 7),
    (SelfBuff8, 8),
    (SelfBuff9, 9),
    (SelfBuff10, 10),
    (SelfBuff15, 15),
    (SelfBuff20, 20),
    (SelfBuff25, 25),
    (SelfBuff30, 30),
    (SelfBuff35, 35),
    (SelfBuff40, 40),
    (SelfBuff45, 45),
    (SelfBuff50, 50),
];

const SELF_STACK_COUNT: &[(Condition, i32)] = &[
    (SelfStacks0, 0),
    (SelfStacks1, 1),
    (SelfStacks2, 2),
    (SelfStacks3, 3),
    (SelfStacks4, 4),
    (SelfStacks5, 5),
];

const BULLET_HIT_COUNT: &[(Condition, i32)] = &[
    (BulletHit1, 1),
    (BulletHit2, 2),
    (BulletHit3, 3),
    (BulletHit4, 4),
    (BulletHit5, 5),
    (BulletHit6, 6),
    (BulletHit7, 7),
    (BulletHit8, 8),
    (BulletHit9, 9),
    (BulletHit10, 10),
];

const ADDITIONAL_INPUT: &[(Condition, i32)] = &[
    (AddlInput1, 1),
    (AddlInput2, 2),
    (AddlInput3, 3),
    (AddlInput4, 4),
    (AddlInput5, 5),
];

const COMBO_COUNT: &[(Condition, i32)] = &[
    (Combo5, 5),
    (Combo10, 10),
    (Combo15, 15),
    (Combo20, 20),
    (Combo25, 25),
    (Combo30, 30),
    (Combo50, 50),
];

/// Cancel atom → code of the cancelled action (1 = force strike, 2 = roll).
const ACTION_CANCEL: &[(Condition, i32)] = &[(CancelAfterFs, 1), (CancelAfterRoll, 2)];

const SKILL_VARIANT: &[(Condition, i32)] =
    &[(MarkExploded, 1), (SelfEnergized, 2), (SelfInspired, 3)];

const SIGIL_STATE: &[(Condition, i32)] = &[(SigilLocked, 0), (SigilReleased, 1)];

impl ConditionCategory {
    /// Every category, in priority order.
    pub const ALL: [ConditionCategory; 11] = [
        ConditionCategory::TargetAffliction,
        ConditionCategory::TargetElement,
        ConditionCategory::SelfHp,
        ConditionCategory::SelfBuffCount,
        ConditionCategory::SelfStackCount,
        ConditionCategory::BulletHitCount,
        ConditionCategory::AdditionalInput,
        ConditionCategory::ComboCount,
        ConditionCategory::ActionCancel,
        ConditionCategory::SkillVariant,
        ConditionCategory::SigilState,
    ];

    const fn table(self) -> &'static [(Condition, i32)] {
        match self {
            ConditionCategory::TargetAffliction => TARGET_AFFLICTION,
            ConditionCategory::TargetElement => TARGET_ELEMENT,
            ConditionCategory::SelfHp => SELF_HP,
            ConditionCategory::SelfBuffCount => SELF_BUFF_COUNT,
            ConditionCategory::SelfStackCount => SELF_STACK_COUNT,
            ConditionCategory::BulletHitCount => BULLET_HIT_COUNT,
            ConditionCategory::AdditionalInput => ADDITIONAL_INPUT,
            ConditionCategory::ComboCount => COMBO_COUNT,
            ConditionCategory::ActionCancel => ACTION_CANCEL,
            ConditionCategory::SkillVariant => SKILL_VARIANT,
            ConditionCategory::SigilState => SIGIL_STATE,
        }
    }

    /// Position of this category in the canonical order.
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Returns true if several atoms of this category may be active at once.
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, ConditionCategory::TargetAffliction)
    }

    /// Validation result reported when two atoms of this category collide.
    pub const fn conflict(self) -> CheckResult {
        match self {
            ConditionCategory::TargetAffliction => CheckResult::Pass,
            ConditionCategory::TargetElement => CheckResult::MultipleTargetElement,
            ConditionCategory::SelfHp => CheckResult::MultipleHp,
            ConditionCategory::SelfBuffCount => CheckResult::MultipleBuffCount,
            ConditionCategory::SelfStackCount => CheckResult::MultipleStackCount,
            ConditionCategory::BulletHitCount => CheckResult::MultipleBulletHit,
            ConditionCategory::AdditionalInput => CheckResult::MultipleAddlInput,
            ConditionCategory::ComboCount => CheckResult::MultipleCombo,
            ConditionCategory::ActionCancel => CheckResult::MultipleActionCancel,
            ConditionCategory::SkillVariant => CheckResult::MultipleSkillVariant,
            ConditionCategory::SigilState => CheckResult::MultipleSigil,
        }
    }

    /// Every atom of this category, in declaration order.
    pub fn members(self) -> Vec<Condition> {
        self.table().iter().map(|(condition, _)| *condition).collect()
    }

    /// Atoms whose semantic value is lower than or equal to `max_value`.
    pub fn members_lte(self, max_value: i32) -> Vec<Condition> {
        self.table()
            .iter()
            .filter(|(_, value)| *value <= max_value)
            .map(|(condition, _)| *condition)
            .collect()
    }

    /// Semantic value of `condition`.
    ///
    /// # Errors
    ///
    /// Returns `ConditionError::NotInCategory` if the atom belongs to another
    /// category.
    pub fn convert(self, condition: Condition) -> Result<i32, ConditionError> {
        self.table()
            .iter()
            .find(|(member, _)| *member == condition)
            .map(|(_, value)| *value)
            .ok_or(ConditionError::NotInCategory {
                category: self,
                condition,
            })
    }

    /// Atom carrying the semantic value `value`.
    ///
    /// # Errors
    ///
    /// Returns `ConditionError::Unconvertible` if no atom maps to the value.
    /// This signals a vocabulary gap and must not be ignored.
    pub fn convert_reversed(self, value: i32) -> Result<Condition, ConditionError> {
        self.table()
            .iter()
            .find(|(_, member_value)| *member_value == value)
            .map(|(condition, _)| *condition)
            .ok_or(ConditionError::Unconvertible {
                category: self,
                value,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_buckets_convert_both_ways() {
        assert_eq!(ConditionCategory::SelfHp.convert(SelfHp1), Ok(0));
        assert_eq!(ConditionCategory::SelfHp.convert(SelfHpFull), Ok(100));
        assert_eq!(ConditionCategory::SelfHp.convert_reversed(70), Ok(SelfHp70));
    }

    #[test]
    fn unmapped_value_is_reported() {
        assert_eq!(
            ConditionCategory::SelfHp.convert_reversed(42),
            Err(ConditionError::Unconvertible {
                category: ConditionCategory::SelfHp,
                value: 42,
            })
        );
    }

    #[test]
    fn foreign_atom_is_rejected() {
        assert_eq!(
            ConditionCategory::SelfBuffCount.convert(SelfHpFull),
            Err(ConditionError::NotInCategory {
                category: ConditionCategory::SelfBuffCount,
                condition: SelfHpFull,
            })
        );
    }

    #[test]
    fn members_lte_is_ordered_and_bounded() {
        assert_eq!(
            ConditionCategory::BulletHitCount.members_lte(3),
            vec![BulletHit1, BulletHit2, BulletHit3]
        );
        assert_eq!(
            ConditionCategory::SelfStackCount.members_lte(2),
            vec![SelfStacks0, SelfStacks1, SelfStacks2]
        );
        assert!(ConditionCategory::ComboCount.members_lte(4).is_empty());
    }

    #[test]
    fn buff_count_buckets() {
        let values: Vec<i32> = ConditionCategory::SelfBuffCount
            .members()
            .into_iter()
            .map(Condition::value)
            .collect();
        assert_eq!(
            values,
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 25, 30, 35, 40, 45, 50]
        );
    }

    #[test]
    fn only_afflictions_are_multi_valued() {
        for category in ConditionCategory::ALL {
            assert_eq!(
                category.is_multi_valued(),
                category == ConditionCategory::TargetAffliction
            );
            assert_eq!(
                category.conflict() == CheckResult::Pass,
                category.is_multi_valued()
            );
        }
    }
}
