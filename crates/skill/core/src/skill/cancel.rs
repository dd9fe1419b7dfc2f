use crate::asset::{AssetEnv, SkillRecord};
use crate::condition::Condition;
use crate::hit::resolve_pre_condition;
use crate::skill::SkillError;
use crate::types::ActionId;

/// Point of a skill action after which it can be cancelled into another
/// action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCancelUnit {
    /// Action the skill cancels into.
    pub action_id: ActionId,
    pub time: f64,
    pub pre_condition: Option<Condition>,
}

/// Cancel units of `skill` at `level`, ordered by time.
///
/// # Errors
///
/// Returns `SkillError::Asset` when the level has no action data and a
/// conversion error for an unmapped cancel pre-condition.
pub fn build_cancel_units(
    env: &AssetEnv<'_>,
    skill: &SkillRecord,
    level: u8,
) -> Result<Vec<SkillCancelUnit>, SkillError> {
    let Some(action_id) = skill.action_id(level) else {
        return Ok(Vec::new());
    };
    let mut units = Vec::new();
    for component in env.action_components(action_id, level)? {
        let Some(cancel) = component.cancel else {
            continue;
        };
        let pre_condition = cancel
            .condition
            .map(|raw| resolve_pre_condition(raw, action_id.to_string()))
            .transpose()?;
        units.push(SkillCancelUnit {
            action_id: cancel.action_id,
            time: component.start_time,
            pre_condition,
        });
    }
    units.sort_by(|a, b| a.time.total_cmp(&b.time));
    Ok(units)
}
