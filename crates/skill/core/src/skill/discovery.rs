//! Condition discovery shared by the skill aggregates.
//!
//! Each axis lists the alternatives of one independent dimension of variation
//! (HP bucket, afflictions present, bullet hits landed, ...). An alternative
//! is a set of atoms, possibly empty. The possible composites are the
//! Cartesian product of the non-empty axes, with invalid combinations skipped.

use std::collections::{BTreeMap, BTreeSet};

use crate::asset::RepeatSource;
use crate::condition::{Condition, ConditionCategory, ConditionComposite};
use crate::config::{CrisisAxis, EngineConfig};
use crate::hit::HitData;
use crate::types::{AfflictionStatus, ElementFlags};

/// Dimension of variation an axis enumerates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AxisKind {
    PreCondition,
    SelfHp,
    SelfBuffCount,
    SelfStackCount,
    BulletHit,
    Repeat(RepeatSource),
    Affliction,
    TargetElement,
}

/// Alternatives of one dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    pub kind: AxisKind,
    pub alternatives: Vec<Vec<Condition>>,
}

impl Axis {
    fn new(kind: AxisKind, alternatives: Vec<Vec<Condition>>) -> Self {
        Self { kind, alternatives }
    }

    /// Axis of single atoms.
    fn singles(kind: AxisKind, atoms: impl IntoIterator<Item = Condition>) -> Self {
        Self::new(kind, atoms.into_iter().map(|atom| vec![atom]).collect())
    }

    /// Axis of single atoms plus the empty alternative.
    fn singles_or_none(kind: AxisKind, atoms: impl IntoIterator<Item = Condition>) -> Self {
        let mut axis = Self::singles(kind, atoms);
        axis.alternatives.push(Vec::new());
        axis
    }

    /// An axis without atoms adds no variation.
    pub fn is_trivial(&self) -> bool {
        self.alternatives.iter().all(Vec::is_empty)
    }
}

/// Pre-condition axis: every distinct pre-condition of the hits, plus "none"
/// when one of them is an optional variant of the skill.
pub fn pre_condition_axis<'a>(hits: impl IntoIterator<Item = &'a HitData>) -> Axis {
    let pre_conditions: BTreeSet<Condition> =
        hits.into_iter().filter_map(|hit| hit.pre_condition).collect();
    let optional = pre_conditions.iter().any(|condition| {
        matches!(
            condition.category(),
            ConditionCategory::AdditionalInput
                | ConditionCategory::ActionCancel
                | ConditionCategory::SkillVariant
        )
    });
    if optional {
        Axis::singles_or_none(AxisKind::PreCondition, pre_conditions)
    } else {
        Axis::singles(AxisKind::PreCondition, pre_conditions)
    }
}

/// Axes every damage-dealing skill varies along.
pub fn attacking_axes<'a>(
    hits: impl IntoIterator<Item = &'a HitData> + Clone,
    config: &EngineConfig,
) -> Vec<Axis> {
    let mut axes = vec![pre_condition_axis(hits.clone())];

    let mut crisis = false;
    let mut buff_count = false;
    let mut max_stacks: Option<u32> = None;
    let mut bullet_lifetime: Option<u8> = None;
    let mut repeats: BTreeMap<RepeatSource, u32> = BTreeMap::new();
    let mut afflictions: BTreeSet<AfflictionStatus> = BTreeSet::new();
    let mut elements = ElementFlags::empty();

    for hit in hits {
        crisis |= hit.crisis.is_some();
        if let Some(boost) = &hit.buff_boost {
            buff_count |= boost.rate_base != 0.0;
            if let Some(stacks) = boost.max_stacks() {
                max_stacks = max_stacks.max(Some(stacks));
            }
        }
        if let Some(deterioration) = hit.deterioration {
            bullet_lifetime = bullet_lifetime.max(Some(deterioration.max_hit_count));
        }
        if let Some(repeat) = hit.repeat {
            let reach = u32::from(repeat.max_repeats) * repeat.step.max(1);
            let entry = repeats.entry(repeat.source).or_default();
            *entry = (*entry).max(reach);
        }
        afflictions.extend(hit.punisher_states().filter(|status| status.is_abnormal()));
        elements |= hit.elemental_restriction;
    }

    if crisis {
        let buckets = match config.crisis_axis {
            CrisisAxis::AllBuckets => ConditionCategory::SelfHp.members(),
            CrisisAxis::FullAndOne => vec![Condition::SelfHpFull, Condition::SelfHp1],
        };
        axes.push(Axis::singles(AxisKind::SelfHp, buckets));
    }
    if buff_count {
        axes.push(Axis::singles(
            AxisKind::SelfBuffCount,
            ConditionCategory::SelfBuffCount.members(),
        ));
    }
    if let Some(stacks) = max_stacks {
        let limit = i32::try_from(stacks).unwrap_or(i32::MAX);
        axes.push(Axis::singles(
            AxisKind::SelfStackCount,
            ConditionCategory::SelfStackCount.members_lte(limit),
        ));
    }
    if let Some(lifetime) = bullet_lifetime {
        axes.push(Axis::singles(
            AxisKind::BulletHit,
            ConditionCategory::BulletHitCount
                .members_lte(i32::from(lifetime.min(EngineConfig::MAX_BULLET_HITS))),
        ));
    }
    for (source, reach) in repeats {
        let category = match source {
            RepeatSource::AdditionalInput => ConditionCategory::AdditionalInput,
            RepeatSource::Combo => ConditionCategory::ComboCount,
        };
        let limit = i32::try_from(reach).unwrap_or(i32::MAX);
        axes.push(Axis::singles_or_none(
            AxisKind::Repeat(source),
            category.members_lte(limit),
        ));
    }
    if !afflictions.is_empty() {
        axes.push(affliction_axis(&afflictions));
    }
    if !elements.is_empty() {
        axes.push(Axis::singles_or_none(
            AxisKind::TargetElement,
            elements.elements().filter_map(Condition::from_element),
        ));
    }
    axes
}

/// Power set of the affliction atoms, empty set included.
fn affliction_axis(statuses: &BTreeSet<AfflictionStatus>) -> Axis {
    let atoms: Vec<Condition> = statuses
        .iter()
        .filter_map(|status| Condition::from_affliction(*status))
        .collect();
    let alternatives = (0u32..(1 << atoms.len()))
        .map(|mask| {
            atoms
                .iter()
                .enumerate()
                .filter(|(idx, _)| mask & (1 << idx) != 0)
                .map(|(_, atom)| *atom)
                .collect()
        })
        .collect();
    Axis::new(AxisKind::Affliction, alternatives)
}

/// Expands the axes into the set of valid composites.
///
/// Trivial axes are pruned first. Combinations failing validation are
/// skipped; identical composites collapse. Without any axis the result holds
/// only the empty composite.
pub fn expand_axes(axes: &[Axis], config: &EngineConfig) -> BTreeSet<ConditionComposite> {
    let axes: Vec<&Axis> = axes.iter().filter(|axis| !axis.is_trivial()).collect();

    let mut combinations: Vec<Vec<Condition>> = vec![Vec::new()];
    for axis in &axes {
        combinations = combinations
            .iter()
            .flat_map(|prefix| {
                axis.alternatives.iter().map(move |alternative| {
                    let mut combination = prefix.clone();
                    combination.extend(alternative.iter().copied());
                    combination
                })
            })
            .collect();
    }

    let mut composites = BTreeSet::new();
    let mut skipped = 0usize;
    for combination in combinations {
        if !ConditionComposite::validate(&combination).passed() {
            skipped += 1;
            continue;
        }
        if let Ok(composite) = ConditionComposite::new(combination) {
            composites.insert(composite);
        }
    }

    tracing::debug!(
        axes = ?axes.iter().map(|axis| (axis.kind, axis.alternatives.len())).collect::<Vec<_>>(),
        composites = composites.len(),
        skipped,
        "discovered possible conditions"
    );
    if composites.len() > config.composite_warn_threshold {
        tracing::warn!(
            composites = composites.len(),
            threshold = config.composite_warn_threshold,
            "condition discovery produced an unusually large composite set"
        );
    }
    composites
}
