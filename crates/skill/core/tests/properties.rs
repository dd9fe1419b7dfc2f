//! Invariants every skill aggregate upholds.

use skill_core::asset::{ActionComponent, PreConditionKind, PreConditionRaw, RepeatSource};
use skill_core::types::HitTargetRaw;
use skill_core::{
    ActionCondition, ActionConditionId, ActionId, AfflictionStatus, AssetError, AssetSnapshot,
    Condition, ConditionComposite, Element, ElementFlags, EngineConfig, HitAttribute, SkillError,
    SkillId, SkillRecord, SkillTransformer, SkillVariant,
};

/// Two-level skill mixing most sources of variation.
fn varied_snapshot() -> AssetSnapshot {
    let mut snapshot = AssetSnapshot::new()
        .with_skill(SkillRecord::new(
            SkillId(1),
            Element::Light,
            2,
            vec![ActionId(10), ActionId(11)],
        ))
        .with_hit_attribute(
            HitAttribute::new("MAIN", 4.0, HitTargetRaw::Hostile)
                .with_crisis(2.0)
                .with_punisher(vec![AfflictionStatus::Burn, AfflictionStatus::Curse], 1.3),
        )
        .with_hit_attribute(
            HitAttribute::new("WAVE", 1.0, HitTargetRaw::Hostile)
                .with_action_condition(ActionConditionId(3)),
        )
        .with_action_condition(
            ActionCondition::new(ActionConditionId(3))
                .with_elemental_target(ElementFlags::SHADOW | ElementFlags::LIGHT),
        )
        .with_hit_attribute(HitAttribute::new("TAP", 0.5, HitTargetRaw::Hostile))
        .with_hit_attribute(HitAttribute::new("MARK", 6.0, HitTargetRaw::Hostile));

    for (level, action_id) in [(1u8, 10u32), (2, 11)] {
        snapshot = snapshot.with_action(
            ActionId(action_id),
            level,
            vec![
                ActionComponent::hits(0.1, ["MAIN"]),
                ActionComponent::hits(0.4, ["WAVE", "WAVE"]),
                ActionComponent::hits(0.9, ["TAP"]).with_repeat(RepeatSource::AdditionalInput, 3, 1),
                ActionComponent::hits(1.2, ["MARK"])
                    .with_condition(PreConditionRaw::new(PreConditionKind::MarkExploded, 0)),
            ],
        );
    }
    snapshot
}

#[test]
fn entries_cover_exactly_the_possible_conditions_in_order() {
    let snapshot = varied_snapshot();
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();

    let entries = data.get_all_possible_entries().unwrap();
    let composites: Vec<&ConditionComposite> =
        entries.iter().map(|entry| &entry.condition_comp).collect();
    let expected: Vec<&ConditionComposite> = data.possible_conditions().iter().collect();
    assert_eq!(composites, expected);

    let mut sorted = composites.clone();
    sorted.sort();
    assert_eq!(composites, sorted);

    // pre-condition (2) × HP (7) × addl input (4) × afflictions (4) × element (3)
    assert_eq!(entries.len(), 2 * 7 * 4 * 4 * 3);
}

#[test]
fn totals_and_counts_derive_from_mods() {
    let snapshot = varied_snapshot();
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();

    for entry in data.get_all_possible_entries().unwrap() {
        let totals = entry.total_mod();
        let counts = entry.hit_count();
        for (level, mods) in entry.mods.iter().enumerate() {
            assert_eq!(totals[level], mods.iter().sum::<f64>());
            assert_eq!(counts[level], mods.len());
            assert_eq!(entry.crisis_mods[level].len(), mods.len());
            assert!(entry.counter_mods[level].len() <= mods.len());
        }
    }
}

#[test]
fn composites_round_trip_through_canonical_order() {
    let snapshot = varied_snapshot();
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();

    for composite in data.possible_conditions() {
        let rebuilt = ConditionComposite::new(composite.conditions_sorted().iter().copied());
        assert_eq!(rebuilt.as_ref(), Ok(composite));
    }
}

#[test]
fn with_conditions_is_idempotent() {
    let snapshot = varied_snapshot();
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();
    let composite = ConditionComposite::new([
        Condition::TargetBurned,
        Condition::TargetLight,
        Condition::SelfHp30,
        Condition::AddlInput2,
        Condition::MarkExploded,
    ])
    .unwrap();

    let first = data.with_conditions(&composite).unwrap();
    let second = data.with_conditions(&composite).unwrap();
    assert_eq!(first, second);
    // MAIN + 2 WAVE + 2 TAP + MARK
    assert_eq!(first.hit_count_at_max(), 6);
}

#[test]
fn tied_levels_prefer_the_higher_level() {
    let snapshot = AssetSnapshot::new()
        .with_skill(SkillRecord::new(
            SkillId(1),
            Element::Wind,
            3,
            vec![ActionId(1), ActionId(2), ActionId(3)],
        ))
        .with_action(ActionId(1), 1, vec![ActionComponent::hits(0.0, ["A"])])
        .with_action(ActionId(2), 2, vec![ActionComponent::hits(0.0, ["B"])])
        .with_action(ActionId(3), 3, vec![ActionComponent::hits(0.0, ["B"])])
        .with_hit_attribute(HitAttribute::new("A", 2.0, HitTargetRaw::Hostile))
        .with_hit_attribute(HitAttribute::new("B", 3.0, HitTargetRaw::Hostile));
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();
    assert_eq!(data.max_level(), 3);
}

#[test]
fn invalid_composite_is_rejected_at_construction() {
    assert!(matches!(
        ConditionComposite::new([Condition::SelfHp1, Condition::SelfHp70]),
        Err(skill_core::ConditionError::ValidationFailed(
            skill_core::CheckResult::MultipleHp
        ))
    ));
}

#[test]
fn chain_skips_skills_without_action_data() {
    let mut root = SkillRecord::new(SkillId(1), Element::Flame, 1, vec![ActionId(1)]);
    root.trans_skill_id = Some(SkillId(2));
    let snapshot = AssetSnapshot::new()
        .with_skill(root)
        .with_skill(SkillRecord::new(SkillId(2), Element::Flame, 1, vec![ActionId(2)]))
        .with_action(ActionId(1), 1, vec![ActionComponent::hits(0.0, ["A"])])
        .with_hit_attribute(HitAttribute::new("A", 1.0, HitTargetRaw::Hostile));
    let config = EngineConfig::default();
    let transformer = SkillTransformer::new(snapshot.env(), &config);

    let chain = transformer.attacking_chain(SkillId(1)).unwrap();
    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0].skill_id(), SkillId(1));

    assert_eq!(
        transformer.attacking(SkillId(2)).err(),
        Some(SkillError::Asset(AssetError::ActionDataNotFound {
            action_id: ActionId(2),
            level: 1,
        }))
    );
}
