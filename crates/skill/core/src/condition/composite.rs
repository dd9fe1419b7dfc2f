//! Validated condition composites.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Add;

use super::{Condition, ConditionCategory, ConditionError};
use crate::types::{AfflictionStatus, Element};

/// Outcome of validating a set of condition atoms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckResult {
    #[strum(to_string = "pass")]
    Pass,
    #[strum(to_string = "multiple HP conditions")]
    MultipleHp,
    #[strum(to_string = "multiple buff count conditions")]
    MultipleBuffCount,
    #[strum(to_string = "multiple stack count conditions")]
    MultipleStackCount,
    #[strum(to_string = "multiple bullet hit conditions")]
    MultipleBulletHit,
    #[strum(to_string = "multiple target element conditions")]
    MultipleTargetElement,
    #[strum(to_string = "multiple additional input conditions")]
    MultipleAddlInput,
    #[strum(to_string = "multiple combo count conditions")]
    MultipleCombo,
    #[strum(to_string = "multiple action cancel conditions")]
    MultipleActionCancel,
    #[strum(to_string = "multiple skill variant conditions")]
    MultipleSkillVariant,
    #[strum(to_string = "multiple sigil state conditions")]
    MultipleSigil,
}

impl CheckResult {
    pub const fn passed(self) -> bool {
        matches!(self, CheckResult::Pass)
    }
}

/// One fully specified scenario.
///
/// Atoms are stored deduplicated in canonical order, so derived equality,
/// hashing and ordering are all order-insensitive with respect to the input.
/// The empty composite is the "no special condition" base case.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Condition>", into = "Vec<Condition>")
)]
pub struct ConditionComposite {
    conditions: Vec<Condition>,
}

impl ConditionComposite {
    /// The "no condition" composite.
    pub const fn empty() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    /// Builds a composite from a single atom (always valid).
    pub fn single(condition: Condition) -> Self {
        Self {
            conditions: vec![condition],
        }
    }

    /// Builds a validated composite.
    ///
    /// # Errors
    ///
    /// Returns `ConditionError::ValidationFailed` when two distinct atoms of a
    /// single-valued category are present.
    pub fn new(conditions: impl IntoIterator<Item = Condition>) -> Result<Self, ConditionError> {
        let conditions = normalize(conditions);
        match Self::validate(&conditions) {
            CheckResult::Pass => Ok(Self { conditions }),
            failed => Err(ConditionError::ValidationFailed(failed)),
        }
    }

    /// Non-throwing validation of a list of atoms.
    ///
    /// Duplicate atoms are not a conflict. The first offending category in
    /// priority order decides the reported result.
    pub fn validate(conditions: &[Condition]) -> CheckResult {
        let distinct: BTreeSet<Condition> = conditions.iter().copied().collect();
        for category in ConditionCategory::ALL {
            if category.is_multi_valued() {
                continue;
            }
            let count = distinct
                .iter()
                .filter(|condition| condition.category() == category)
                .count();
            if count > 1 {
                return category.conflict();
            }
        }
        CheckResult::Pass
    }

    /// Re-validates an existing composite.
    ///
    /// # Errors
    ///
    /// Returns `ConditionError::ValidationFailed` if the invariant is broken.
    pub fn check(&self) -> Result<(), ConditionError> {
        match Self::validate(&self.conditions) {
            CheckResult::Pass => Ok(()),
            failed => Err(ConditionError::ValidationFailed(failed)),
        }
    }

    /// Merges two composites, re-validating the result.
    ///
    /// # Errors
    ///
    /// Returns `ConditionError::ValidationFailed` on a category collision.
    pub fn union(&self, other: &ConditionComposite) -> Result<Self, ConditionError> {
        Self::new(self.conditions.iter().chain(other.conditions.iter()).copied())
    }

    /// Returns true if `condition` is part of this scenario.
    pub fn contains(&self, condition: Condition) -> bool {
        self.conditions.binary_search(&condition).is_ok()
    }

    /// Returns true if every atom of `self` is present in `other`.
    pub fn is_subset_of(&self, other: &ConditionComposite) -> bool {
        self.conditions.iter().all(|condition| other.contains(*condition))
    }

    /// Atoms in canonical order.
    pub fn conditions_sorted(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn iter(&self) -> impl Iterator<Item = Condition> + '_ {
        self.conditions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn find(&self, category: ConditionCategory) -> Option<Condition> {
        self.iter().find(|condition| condition.category() == category)
    }

    pub fn hp_status(&self) -> Option<Condition> {
        self.find(ConditionCategory::SelfHp)
    }

    pub fn buff_count(&self) -> Option<Condition> {
        self.find(ConditionCategory::SelfBuffCount)
    }

    pub fn stack_count(&self) -> Option<Condition> {
        self.find(ConditionCategory::SelfStackCount)
    }

    pub fn bullet_hit_count(&self) -> Option<Condition> {
        self.find(ConditionCategory::BulletHitCount)
    }

    pub fn additional_input(&self) -> Option<Condition> {
        self.find(ConditionCategory::AdditionalInput)
    }

    pub fn combo_count(&self) -> Option<Condition> {
        self.find(ConditionCategory::ComboCount)
    }

    pub fn target_element_condition(&self) -> Option<Condition> {
        self.find(ConditionCategory::TargetElement)
    }

    /// Target element of the scenario, if specified.
    pub fn target_element(&self) -> Option<Element> {
        self.target_element_condition().and_then(Condition::element)
    }

    /// Affliction atoms of the scenario (several may be active at once).
    pub fn afflictions_condition(&self) -> BTreeSet<Condition> {
        self.iter()
            .filter(|condition| condition.category() == ConditionCategory::TargetAffliction)
            .collect()
    }

    /// Statuses the target is afflicted with.
    pub fn afflictions(&self) -> BTreeSet<AfflictionStatus> {
        self.iter().filter_map(Condition::affliction).collect()
    }
}

fn normalize(conditions: impl IntoIterator<Item = Condition>) -> Vec<Condition> {
    let mut conditions: Vec<Condition> = conditions.into_iter().collect();
    conditions.sort();
    conditions.dedup();
    conditions
}

impl TryFrom<Vec<Condition>> for ConditionComposite {
    type Error = ConditionError;

    fn try_from(conditions: Vec<Condition>) -> Result<Self, Self::Error> {
        Self::new(conditions)
    }
}

impl From<ConditionComposite> for Vec<Condition> {
    fn from(composite: ConditionComposite) -> Self {
        composite.conditions
    }
}

impl Add for &ConditionComposite {
    type Output = Result<ConditionComposite, ConditionError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for ConditionComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return f.write_str("(none)");
        }
        for (idx, condition) in self.conditions.iter().enumerate() {
            if idx > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}
