//! Condition vocabulary - atoms, categories and composites.
//!
//! A [`Condition`] is one indivisible predicate about the game state (self HP
//! bucket, target affliction, number of bullet hits landed, ...). Atoms are
//! grouped into [`ConditionCategory`] values; inside a single-valued category
//! at most one atom can describe a scenario. Target afflictions are the
//! exception: several may be active at once.
//!
//! A [`ConditionComposite`] is a validated set of atoms describing one full
//! scenario. Skill aggregates enumerate composites and recompute their numbers
//! for each of them.
//!
//! # Canonical Order
//!
//! The declaration order of [`Condition`] follows the category priority
//! (afflictions first). [`Ord`] for conditions sorts by category priority then
//! by declaration order, and composites compare their canonically sorted atom
//! lists lexicographically. Enumeration output relies on this order.

mod category;
mod composite;
mod error;

pub use category::ConditionCategory;
pub use composite::{CheckResult, ConditionComposite};
pub use error::ConditionError;

use std::cmp::Ordering;

use crate::types::{AfflictionStatus, Element};

/// One indivisible condition atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Condition {
    // ========================================================================
    // Target afflictions (multi-valued)
    // ========================================================================
    TargetPoisoned,
    TargetBurned,
    TargetFrozen,
    TargetParalyzed,
    TargetBlinded,
    TargetStunned,
    TargetCursed,
    TargetBogged,
    TargetSleeping,
    TargetFrostbitten,
    TargetFlashburned,
    TargetStormlashed,
    TargetShadowblighted,
    TargetScorchrent,

    // ========================================================================
    // Target element
    // ========================================================================
    TargetFlame,
    TargetWater,
    TargetWind,
    TargetLight,
    TargetShadow,

    // ========================================================================
    // Self HP
    // ========================================================================
    /// Exactly 1 HP left.
    SelfHp1,
    SelfHp10,
    SelfHp20,
    SelfHp30,
    SelfHp50,
    SelfHp70,
    SelfHpFull,

    // ========================================================================
    // Self buff count
    // ========================================================================
    SelfBuff0,
    SelfBuff1,
    SelfBuff2,
    SelfBuff3,
    SelfBuff4,
    SelfBuff5,
    SelfBuff6,
    SelfBuff7,
    SelfBuff8,
    SelfBuff9,
    SelfBuff10,
    SelfBuff15,
    SelfBuff20,
    SelfBuff25,
    SelfBuff30,
    SelfBuff35,
    SelfBuff40,
    SelfBuff45,
    SelfBuff50,

    // ========================================================================
    // Stacks of the boost-linked action condition (e.g. cards)
    // ========================================================================
    SelfStacks0,
    SelfStacks1,
    SelfStacks2,
    SelfStacks3,
    SelfStacks4,
    SelfStacks5,

    // ========================================================================
    // Bullet hit count
    // ========================================================================
    BulletHit1,
    BulletHit2,
    BulletHit3,
    BulletHit4,
    BulletHit5,
    BulletHit6,
    BulletHit7,
    BulletHit8,
    BulletHit9,
    BulletHit10,

    // ========================================================================
    // Additional inputs
    // ========================================================================
    AddlInput1,
    AddlInput2,
    AddlInput3,
    AddlInput4,
    AddlInput5,

    // ========================================================================
    // Combo count
    // ========================================================================
    Combo5,
    Combo10,
    Combo15,
    Combo20,
    Combo25,
    Combo30,
    Combo50,

    // ========================================================================
    // Action cancel
    // ========================================================================
    /// Skill triggered by cancelling a force strike.
    CancelAfterFs,
    /// Skill triggered by cancelling a roll.
    CancelAfterRoll,

    // ========================================================================
    // Misc skill variants
    // ========================================================================
    MarkExploded,
    SelfEnergized,
    SelfInspired,

    // ========================================================================
    // Sigil state
    // ========================================================================
    SigilLocked,
    SigilReleased,
}

impl Condition {
    /// Category this atom belongs to.
    pub const fn category(self) -> ConditionCategory {
        use Condition::*;
        match self {
            TargetPoisoned | TargetBurned | TargetFrozen | TargetParalyzed | TargetBlinded
            | TargetStunned | TargetCursed | TargetBogged | TargetSleeping | TargetFrostbitten
            | TargetFlashburned | TargetStormlashed | TargetShadowblighted | TargetScorchrent => {
                ConditionCategory::TargetAffliction
            }
            TargetFlame | TargetWater | TargetWind | TargetLight | TargetShadow => {
                ConditionCategory::TargetElement
            }
            SelfHp1 | SelfHp10 | SelfHp20 | SelfHp30 | SelfHp50 | SelfHp70 | SelfHpFull => {
                ConditionCategory::SelfHp
            }
            SelfBuff0 | SelfBuff1 | SelfBuff2 | SelfBuff3 | SelfBuff4 | SelfBuff5 | SelfBuff6
            | SelfBuff7 | SelfBuff8 | SelfBuff9 | SelfBuff10 | SelfBuff15 | SelfBuff20
            | SelfBuff25 | SelfBuff30 | SelfBuff35 | SelfBuff40 | SelfBuff45 | SelfBuff50 => {
                ConditionCategory::SelfBuffCount
            }
            SelfStacks0 | SelfStacks1 | SelfStacks2 | SelfStacks3 | SelfStacks4 | SelfStacks5 => {
                ConditionCategory::SelfStackCount
            }
            BulletHit1 | BulletHit2 | BulletHit3 | BulletHit4 | BulletHit5 | BulletHit6
            | BulletHit7 | BulletHit8 | BulletHit9 | BulletHit10 => {
                ConditionCategory::BulletHitCount
            }
            AddlInput1 | AddlInput2 | AddlInput3 | AddlInput4 | AddlInput5 => {
                ConditionCategory::AdditionalInput
            }
            Combo5 | Combo10 | Combo15 | Combo20 | Combo25 | Combo30 | Combo50 => {
                ConditionCategory::ComboCount
            }
            CancelAfterFs | CancelAfterRoll => ConditionCategory::ActionCancel,
            MarkExploded | SelfEnergized | SelfInspired => ConditionCategory::SkillVariant,
            SigilLocked | SigilReleased => ConditionCategory::SigilState,
        }
    }

    /// Canonical sort key: category priority, then declaration order.
    pub const fn sort_key(self) -> (u8, u8) {
        (self.category().priority(), self as u8)
    }

    /// Semantic value of this atom inside its own category.
    pub fn value(self) -> i32 {
        // Every atom appears in its own category table.
        self.category().convert(self).unwrap_or_default()
    }

    /// Affliction condition matching a status, if the status is abnormal.
    pub fn from_affliction(status: AfflictionStatus) -> Option<Condition> {
        if !status.is_abnormal() {
            return None;
        }
        ConditionCategory::TargetAffliction
            .convert_reversed(i32::from(status.code()))
            .ok()
    }

    /// Status represented by an affliction condition.
    pub fn affliction(self) -> Option<AfflictionStatus> {
        (self.category() == ConditionCategory::TargetAffliction)
            .then(|| AfflictionStatus::from(self.value() as u8))
    }

    /// Target element condition matching an element.
    pub fn from_element(element: Element) -> Option<Condition> {
        ConditionCategory::TargetElement
            .convert_reversed(i32::from(element.code()))
            .ok()
    }

    /// Element represented by a target element condition.
    pub fn element(self) -> Option<Element> {
        (self.category() == ConditionCategory::TargetElement)
            .then(|| Element::from(self.value() as u8))
    }
}

impl PartialOrd for Condition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Condition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_atom_belongs_to_its_category_table() {
        for condition in Condition::iter() {
            let category = condition.category();
            let value = category
                .convert(condition)
                .expect("atom missing from its category table");
            assert_eq!(category.convert_reversed(value), Ok(condition));
        }
    }

    #[test]
    fn declaration_order_matches_category_priority() {
        let declared: Vec<Condition> = Condition::iter().collect();
        let mut sorted = declared.clone();
        sorted.sort();
        assert_eq!(declared, sorted);
    }

    #[test]
    fn affliction_and_element_bridges() {
        assert_eq!(
            Condition::from_affliction(AfflictionStatus::Poison),
            Some(Condition::TargetPoisoned)
        );
        assert_eq!(
            Condition::TargetParalyzed.affliction(),
            Some(AfflictionStatus::Paralysis)
        );
        assert_eq!(Condition::from_affliction(AfflictionStatus::None), None);
        assert_eq!(
            Condition::from_element(Element::Shadow),
            Some(Condition::TargetShadow)
        );
        assert_eq!(Condition::TargetWind.element(), Some(Element::Wind));
        assert_eq!(Condition::SelfHpFull.element(), None);
    }
}
