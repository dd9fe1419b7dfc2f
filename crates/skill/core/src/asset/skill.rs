//! Skill records.

use crate::types::{ActionId, Element, SkillId};

/// Oracle providing basic skill records.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: SkillId) -> Option<SkillRecord>;
}

/// Basic skill record.
///
/// `action_ids[n]` is the action used at level `n + 1`. Levels past the end
/// of the list reuse the last action.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRecord {
    pub id: SkillId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Element,
    pub max_level: u8,
    pub action_ids: Vec<ActionId>,
    /// Skill this one transforms into after use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub trans_skill_id: Option<SkillId>,
    /// Follow-up phases of a multi-phase skill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase_skill_ids: Vec<SkillId>,
}

impl SkillRecord {
    pub fn new(id: SkillId, element: Element, max_level: u8, action_ids: Vec<ActionId>) -> Self {
        Self {
            id,
            name: String::new(),
            element,
            max_level,
            action_ids,
            trans_skill_id: None,
            phase_skill_ids: Vec::new(),
        }
    }

    /// Action used at `level` (1-based).
    pub fn action_id(&self, level: u8) -> Option<ActionId> {
        let idx = usize::from(level.saturating_sub(1));
        self.action_ids
            .get(idx)
            .or_else(|| self.action_ids.last())
            .copied()
    }

    /// Skill ids chained from this skill (transformation first, then phases).
    pub fn chained_skill_ids(&self) -> impl Iterator<Item = SkillId> + '_ {
        self.trans_skill_id
            .into_iter()
            .chain(self.phase_skill_ids.iter().copied())
    }
}
