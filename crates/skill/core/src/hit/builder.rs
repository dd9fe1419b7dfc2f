//! Hit data construction from the asset oracles.

use super::{BuffBoost, HitData};
use crate::asset::{AssetEnv, HitAttribute, PreConditionKind, PreConditionRaw, SkillRecord};
use crate::condition::{Condition, ConditionCategory};
use crate::skill::SkillError;

/// Builds every hit of `skill` at `level`, in component then label order.
///
/// # Errors
///
/// Returns `SkillError::Asset` when the action data, a hit attribute or a
/// referenced record is missing, and a conversion error when a component
/// carries a pre-condition the vocabulary cannot express.
pub fn build_hits(
    env: &AssetEnv<'_>,
    skill: &SkillRecord,
    level: u8,
) -> Result<Vec<HitData>, SkillError> {
    let Some(action_id) = skill.action_id(level) else {
        return Ok(Vec::new());
    };
    let components = env.action_components(action_id, level)?;

    let mut hits = Vec::new();
    for component in &components {
        let pre_condition = component
            .condition
            .map(|raw| resolve_pre_condition(raw, action_id.to_string()))
            .transpose()?;

        for label in &component.hit_labels {
            let attribute = env.hit_attribute(label)?;
            let mut hit = HitData::new(
                label.clone(),
                attribute.damage_modifier,
                attribute.target.simplify(),
            )
            .with_timing(action_id, component.start_time);

            hit.pre_condition = pre_condition;
            hit.punishers = attribute.punishers.clone();
            hit.crisis = attribute.crisis();
            hit.buff_boost = resolve_buff_boost(env, &attribute)?;
            hit.deterioration = component.deterioration;
            hit.repeat = component.repeat;
            hit.skill_element = skill.element;
            if let Some(id) = attribute.action_condition_id {
                hit = hit.with_action_condition(env.action_condition(id)?);
            }
            hits.push(hit.with_attribute(attribute));
        }
    }

    tracing::trace!(skill = %skill.id, level, hits = hits.len(), "built hit data");
    Ok(hits)
}

/// Converts a raw component pre-condition into its condition atom.
///
/// # Errors
///
/// Returns `SkillError::EnumConversion` for unknown kinds and
/// `SkillError::Condition` when the value has no atom in its category.
pub fn resolve_pre_condition(
    raw: PreConditionRaw,
    origin: impl Into<String>,
) -> Result<Condition, SkillError> {
    let condition = match raw.kind {
        PreConditionKind::AdditionalInput => {
            ConditionCategory::AdditionalInput.convert_reversed(raw.value)?
        }
        PreConditionKind::ActionCanceled => {
            ConditionCategory::ActionCancel.convert_reversed(raw.value)?
        }
        PreConditionKind::MarkExploded => Condition::MarkExploded,
        PreConditionKind::SelfEnergized => Condition::SelfEnergized,
        PreConditionKind::SelfInspired => Condition::SelfInspired,
        PreConditionKind::SigilState => ConditionCategory::SigilState.convert_reversed(raw.value)?,
        PreConditionKind::Unknown(code) => {
            return Err(SkillError::EnumConversion {
                kind: "pre-condition",
                value: code,
                label: origin.into(),
            });
        }
    };
    Ok(condition)
}

fn resolve_buff_boost(
    env: &AssetEnv<'_>,
    attribute: &HitAttribute,
) -> Result<Option<BuffBoost>, SkillError> {
    let Some(id) = attribute.buff_count_id else {
        return Ok(None);
    };
    let data = env.buff_count(id)?;
    let mut boost = BuffBoost::new(data.rate_base, data.rate_limit);
    if let Some(linked_id) = data.linked_action_condition_id {
        let linked = env.action_condition(linked_id)?;
        let group_cap = data
            .limit_group_id
            .map(|group_id| env.limit_group(group_id))
            .transpose()?
            .map(|group| group.max_value);
        boost = boost.with_linked(data.rate_per_linked_stack, linked.max_stack_count, group_cap);
    }
    Ok(Some(boost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{
        AbilityLimitGroup, ActionComponent, ActionCondition, AssetError, AssetSnapshot,
        BuffCountData,
    };
    use crate::condition::ConditionError;
    use crate::types::{
        ActionConditionId, ActionId, BuffCountId, Element, ElementFlags, HitTargetRaw,
        LimitGroupId, SkillId, TargetSimple,
    };

    fn skill() -> SkillRecord {
        SkillRecord::new(SkillId(100), Element::Water, 1, vec![ActionId(7)])
    }

    #[test]
    fn hits_follow_component_and_label_order() {
        let snapshot = AssetSnapshot::new()
            .with_action(
                ActionId(7),
                1,
                vec![
                    ActionComponent::hits(0.1, ["A", "A"]),
                    ActionComponent::hits(0.4, ["B"]).with_condition(PreConditionRaw::new(
                        PreConditionKind::AdditionalInput,
                        2,
                    )),
                ],
            )
            .with_hit_attribute(HitAttribute::new("A", 1.0, HitTargetRaw::Hostile))
            .with_hit_attribute(HitAttribute::new("B", 2.0, HitTargetRaw::Myself));

        let hits = build_hits(&snapshot.env(), &skill(), 1).unwrap();
        let labels: Vec<&str> = hits.iter().map(|hit| hit.label.as_str()).collect();
        assert_eq!(labels, ["A", "A", "B"]);
        assert_eq!(hits[0].target, TargetSimple::Enemy);
        assert_eq!(hits[2].target, TargetSimple::SelfOnly);
        assert_eq!(hits[2].pre_condition, Some(Condition::AddlInput2));
        assert_eq!(hits[2].action_time, 0.4);
        assert_eq!(hits[0].skill_element, Element::Water);
    }

    #[test]
    fn buff_boost_resolves_linked_stacks_and_group_cap() {
        let snapshot = AssetSnapshot::new()
            .with_action(ActionId(7), 1, vec![ActionComponent::hits(0.0, ["A"])])
            .with_hit_attribute(
                HitAttribute::new("A", 1.0, HitTargetRaw::Hostile).with_buff_count(BuffCountId(3)),
            )
            .with_buff_count(BuffCountData {
                id: BuffCountId(3),
                rate_base: 0.05,
                rate_limit: 0.8,
                linked_action_condition_id: Some(ActionConditionId(9)),
                rate_per_linked_stack: 0.2,
                limit_group_id: Some(LimitGroupId(1)),
            })
            .with_action_condition(ActionCondition::new(ActionConditionId(9)).with_stacking(true, 3))
            .with_limit_group(AbilityLimitGroup {
                id: LimitGroupId(1),
                max_value: 0.4,
            });

        let hits = build_hits(&snapshot.env(), &skill(), 1).unwrap();
        let boost = hits[0].buff_boost.as_ref().unwrap();
        assert_eq!(boost.max_stacks(), Some(3));
        assert!((boost.rate(0, 3) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn restriction_comes_from_action_condition() {
        let snapshot = AssetSnapshot::new()
            .with_action(ActionId(7), 1, vec![ActionComponent::hits(0.0, ["A"])])
            .with_hit_attribute(
                HitAttribute::new("A", 1.0, HitTargetRaw::Hostile)
                    .with_action_condition(ActionConditionId(4)),
            )
            .with_action_condition(
                ActionCondition::new(ActionConditionId(4))
                    .with_elemental_target(ElementFlags::FLAME),
            );
        let hits = build_hits(&snapshot.env(), &skill(), 1).unwrap();
        assert_eq!(hits[0].elemental_restriction, ElementFlags::FLAME);
    }

    #[test]
    fn missing_records_are_reported() {
        let snapshot = AssetSnapshot::new()
            .with_action(ActionId(7), 1, vec![ActionComponent::hits(0.0, ["A"])]);
        assert_eq!(
            build_hits(&snapshot.env(), &skill(), 1),
            Err(SkillError::Asset(AssetError::HitAttributeNotFound("A".into())))
        );
        assert_eq!(
            build_hits(&snapshot.env(), &skill(), 2),
            Err(SkillError::Asset(AssetError::ActionDataNotFound {
                action_id: ActionId(7),
                level: 2,
            }))
        );
    }

    #[test]
    fn unmapped_pre_condition_value_fails_the_build() {
        let snapshot = AssetSnapshot::new()
            .with_action(
                ActionId(7),
                1,
                vec![
                    ActionComponent::hits(0.0, ["A"]).with_condition(PreConditionRaw::new(
                        PreConditionKind::AdditionalInput,
                        9,
                    )),
                ],
            )
            .with_hit_attribute(HitAttribute::new("A", 1.0, HitTargetRaw::Hostile));
        assert_eq!(
            build_hits(&snapshot.env(), &skill(), 1),
            Err(SkillError::Condition(ConditionError::Unconvertible {
                category: ConditionCategory::AdditionalInput,
                value: 9,
            }))
        );
    }

    #[test]
    fn unknown_pre_condition_kind_is_an_error() {
        let raw = PreConditionRaw::new(PreConditionKind::Unknown(42), 1);
        assert!(matches!(
            resolve_pre_condition(raw, "#7"),
            Err(SkillError::EnumConversion { value: 42, .. })
        ));
        let raw = PreConditionRaw::new(PreConditionKind::ActionCanceled, 2);
        assert_eq!(resolve_pre_condition(raw, "#7"), Ok(Condition::CancelAfterRoll));
    }
}
