//! Reference scenarios reproduced from real skill data.

use skill_core::asset::{ActionComponent, BuffCountData};
use skill_core::{
    ActionCondition, ActionConditionId, ActionId, AfflictionStatus, AssetSnapshot, BuffCountId,
    Condition, ConditionComposite, Element, EngineConfig, HitAttribute, SkillError, SkillId,
    SkillRecord, SkillTransformer, SkillVariant,
};
use skill_core::types::HitTargetRaw;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn composite(conditions: &[Condition]) -> ConditionComposite {
    ConditionComposite::new(conditions.iter().copied()).unwrap()
}

/// One-level skill whose action holds `components`.
fn one_level_skill(snapshot: AssetSnapshot, components: Vec<ActionComponent>) -> AssetSnapshot {
    snapshot
        .with_skill(SkillRecord::new(SkillId(1), Element::Flame, 1, vec![ActionId(100)]))
        .with_action(ActionId(100), 1, components)
}

#[test]
fn unconditioned_skill_picks_last_level() {
    let mut snapshot = AssetSnapshot::new().with_skill(SkillRecord::new(
        SkillId(1),
        Element::Water,
        3,
        vec![ActionId(101), ActionId(102), ActionId(103)],
    ));
    for (level, modifier) in [(1u8, 12.03), (2, 13.38), (3, 14.85)] {
        let label = format!("S1_LV{level:02}");
        snapshot = snapshot
            .with_action(
                ActionId(100 + u32::from(level)),
                level,
                vec![ActionComponent::hits(0.5, [label.clone()])],
            )
            .with_hit_attribute(HitAttribute::new(label, modifier, HitTargetRaw::Hostile));
    }
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();

    assert_eq!(
        data.possible_conditions().iter().collect::<Vec<_>>(),
        vec![&ConditionComposite::empty()]
    );
    let entry = data.with_conditions(&ConditionComposite::empty()).unwrap();
    assert_eq!(entry.total_mod(), vec![12.03, 13.38, 14.85]);
    assert_eq!(data.max_level(), 3);
}

#[test]
fn crisis_and_poison_punisher() {
    let snapshot = one_level_skill(
        AssetSnapshot::new().with_hit_attribute(
            HitAttribute::new("CRISIS", 24.77, HitTargetRaw::Hostile)
                .with_crisis(1.5)
                .with_punisher(vec![AfflictionStatus::Poison], 1.2),
        ),
        vec![ActionComponent::hits(0.2, ["CRISIS"])],
    );
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();

    let entries = data.get_all_possible_entries().unwrap();
    assert_eq!(entries.len(), 14);

    let total_at = |conditions: &[Condition]| {
        entries
            .iter()
            .find(|entry| entry.condition_comp == composite(conditions))
            .map(|entry| entry.total_mod_at_max())
            .unwrap()
    };
    assert_close(total_at(&[Condition::SelfHpFull]), 24.77);
    assert_close(total_at(&[Condition::SelfHp1]), 37.155);
    assert_close(
        total_at(&[Condition::TargetPoisoned, Condition::SelfHpFull]),
        29.724,
    );
    assert_close(
        total_at(&[Condition::TargetPoisoned, Condition::SelfHp1]),
        44.586,
    );

    let full = data
        .with_conditions(&composite(&[Condition::SelfHpFull]))
        .unwrap();
    assert_eq!(full.crisis_mods_at_max(), &[1.5]);
    assert_close(full.crisis_total_mod()[0], 37.155);
}

#[test]
fn deteriorating_bullets() {
    let snapshot = one_level_skill(
        AssetSnapshot::new().with_hit_attribute(
            HitAttribute::new("BULLET", 1.65, HitTargetRaw::Hostile)
                .with_punisher(vec![AfflictionStatus::Paralysis], 2.0),
        ),
        vec![ActionComponent::hits(0.0, ["BULLET", "BULLET", "BULLET"]).with_deterioration(0.55, 6)],
    );
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();

    for requested in [Condition::BulletHit7, Condition::BulletHit8] {
        assert!(matches!(
            data.with_conditions(&composite(&[requested])),
            Err(SkillError::BulletEndOfLife { lifetime: 6, .. })
        ));
    }

    let expected = 1.65 * 3.0 * (1.0 + 0.55 + 0.55 * 0.55);
    let entry = data
        .with_conditions(&composite(&[Condition::BulletHit3]))
        .unwrap();
    assert_eq!(entry.hit_count_at_max(), 9);
    assert_close(entry.total_mod_at_max(), expected);

    let paralyzed = data
        .with_conditions(&composite(&[Condition::TargetParalyzed, Condition::BulletHit3]))
        .unwrap();
    assert_close(paralyzed.total_mod_at_max(), expected * 2.0);

    assert_eq!(data.possible_conditions().len(), 12);
}

#[test]
fn buff_count_boost_clamps_at_rate_limit() {
    let snapshot = one_level_skill(
        AssetSnapshot::new()
            .with_hit_attribute(
                HitAttribute::new("BOOST", 10.0, HitTargetRaw::Hostile)
                    .with_buff_count(BuffCountId(1)),
            )
            .with_buff_count(BuffCountData {
                id: BuffCountId(1),
                rate_base: 0.05,
                rate_limit: 0.8,
                linked_action_condition_id: Some(ActionConditionId(77)),
                rate_per_linked_stack: 0.2,
                limit_group_id: None,
            })
            .with_action_condition(ActionCondition::new(ActionConditionId(77)).with_stacking(true, 3)),
        vec![ActionComponent::hits(0.0, ["BOOST"])],
    );
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();

    // 19 buff-count buckets × stacks 0..=3.
    assert_eq!(data.possible_conditions().len(), 19 * 4);

    let capped = data
        .with_conditions(&composite(&[Condition::SelfBuff50, Condition::SelfStacks3]))
        .unwrap();
    assert_close(capped.total_mod_at_max(), 10.0 * 1.8);

    let partial = data
        .with_conditions(&composite(&[Condition::SelfBuff2, Condition::SelfStacks1]))
        .unwrap();
    assert_close(partial.total_mod_at_max(), 10.0 * 1.3);
}

#[test]
fn attacking_only_at_final_level() {
    let mut snapshot = AssetSnapshot::new()
        .with_skill(SkillRecord::new(
            SkillId(1),
            Element::Shadow,
            4,
            vec![ActionId(1), ActionId(2), ActionId(3), ActionId(4)],
        ))
        .with_hit_attribute(
            HitAttribute::new("BUFF", 0.0, HitTargetRaw::Myself)
                .with_action_condition(ActionConditionId(5)),
        )
        .with_action_condition(ActionCondition::new(ActionConditionId(5)).with_duration(10.0))
        .with_hit_attribute(HitAttribute::new("SLASH", 1.5, HitTargetRaw::Hostile));
    for level in 1..=3u8 {
        snapshot = snapshot.with_action(
            ActionId(u32::from(level)),
            level,
            vec![ActionComponent::hits(0.0, ["BUFF"])],
        );
    }
    snapshot = snapshot.with_action(
        ActionId(4),
        4,
        vec![ActionComponent::hits(0.3, ["SLASH"; 5])],
    );

    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();
    let entry = data.with_conditions(&ConditionComposite::empty()).unwrap();

    assert_eq!(entry.hit_count(), vec![0, 0, 0, 5]);
    assert_eq!(entry.total_mod(), vec![0.0, 0.0, 0.0, 7.5]);
    assert_eq!(
        entry.mods,
        vec![Vec::new(), Vec::new(), Vec::new(), vec![1.5; 5]]
    );
    assert_eq!(data.max_level(), 4);
}

#[test]
fn affliction_units_reproduce_payload() {
    let snapshot = one_level_skill(
        AssetSnapshot::new()
            .with_hit_attribute(
                HitAttribute::new("POISON", 2.0, HitTargetRaw::Hostile)
                    .with_action_condition(ActionConditionId(9)),
            )
            .with_action_condition(
                ActionCondition::new(ActionConditionId(9))
                    .with_affliction(AfflictionStatus::Poison, 90.0, 15.0, 2.9, 0.28)
                    .with_stacking(true, 0),
            ),
        vec![
            ActionComponent::hits(1.8, ["POISON"]),
            ActionComponent::hits(0.6, ["POISON"]),
        ],
    );
    let config = EngineConfig::default();
    let data = SkillTransformer::new(snapshot.env(), &config)
        .attacking(SkillId(1))
        .unwrap();
    let entry = data.with_conditions(&ConditionComposite::empty()).unwrap();

    let units = entry.afflictions_at_max();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].time, 0.6);
    assert_eq!(units[1].time, 1.8);
    for unit in units {
        assert_eq!(unit.status, AfflictionStatus::Poison);
        assert_eq!(unit.probability_pct, 90.0);
        assert_eq!(unit.duration_sec, 15.0);
        assert_eq!(unit.damage_modifier, 0.28);
        assert!(unit.stackable);
        assert_eq!(unit.hit_label, "POISON");
    }
}
