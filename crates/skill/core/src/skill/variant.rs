use std::collections::BTreeSet;

use super::SkillError;
use crate::condition::ConditionComposite;

/// Capability shared by the skill aggregates.
///
/// An aggregate discovers its possible composites once, at construction, and
/// recomputes an entry for any composite on demand.
pub trait SkillVariant {
    type Entry;

    /// Every composite under which the skill behaves differently.
    fn possible_conditions(&self) -> &BTreeSet<ConditionComposite>;

    /// Recomputes the entry of `composite`.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::Condition` for an invalid composite and
    /// `SkillError::BulletEndOfLife` for a bullet hit past the bullet lifetime.
    fn with_conditions(&self, composite: &ConditionComposite) -> Result<Self::Entry, SkillError>;

    /// Level (1-based) the entries report as the max level.
    fn max_level(&self) -> u8;

    /// Entries of every possible composite, in canonical composite order.
    ///
    /// # Errors
    ///
    /// Propagates the first error of [`SkillVariant::with_conditions`].
    fn get_all_possible_entries(&self) -> Result<Vec<Self::Entry>, SkillError> {
        self.possible_conditions()
            .iter()
            .map(|composite| self.with_conditions(composite))
            .collect()
    }
}
