use std::collections::{BTreeSet, VecDeque};

use super::SkillError;
use crate::asset::{AssetEnv, SkillRecord};
use crate::types::SkillId;

/// Skills reachable from `root` through transformation and phase links,
/// breadth-first, root included. Each skill appears once even when the
/// links form a cycle.
///
/// # Errors
///
/// Returns `SkillError::Asset` when a linked skill record is missing.
pub fn discover_skill_chain(
    env: &AssetEnv<'_>,
    root: SkillId,
) -> Result<Vec<SkillRecord>, SkillError> {
    let mut visited = BTreeSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut chain = Vec::new();

    while let Some(id) = queue.pop_front() {
        let record = env.skill(id)?;
        for next in record.chained_skill_ids() {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
        chain.push(record);
    }
    Ok(chain)
}
