//! Action components: hit declarations, timing and per-component metadata.

use crate::types::ActionId;

/// Oracle providing the components of an action at a skill level.
pub trait ActionOracle: Send + Sync {
    /// Ordered components of `action_id` at `level`, or `None` when the
    /// action data does not exist for that level.
    fn components(&self, action_id: ActionId, level: u8) -> Option<Vec<ActionComponent>>;
}

/// Kind of pre-condition gating a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub enum PreConditionKind {
    /// Value is the number of additional inputs.
    AdditionalInput,
    /// Value is the cancelled action code.
    ActionCanceled,
    MarkExploded,
    SelfEnergized,
    SelfInspired,
    /// Value is 0 (locked) or 1 (released).
    SigilState,
    Unknown(u8),
}

impl PreConditionKind {
    pub const fn code(self) -> u8 {
        match self {
            PreConditionKind::AdditionalInput => 1,
            PreConditionKind::ActionCanceled => 2,
            PreConditionKind::MarkExploded => 3,
            PreConditionKind::SelfEnergized => 4,
            PreConditionKind::SelfInspired => 5,
            PreConditionKind::SigilState => 6,
            PreConditionKind::Unknown(code) => code,
        }
    }
}

impl From<u8> for PreConditionKind {
    fn from(code: u8) -> Self {
        match code {
            1 => PreConditionKind::AdditionalInput,
            2 => PreConditionKind::ActionCanceled,
            3 => PreConditionKind::MarkExploded,
            4 => PreConditionKind::SelfEnergized,
            5 => PreConditionKind::SelfInspired,
            6 => PreConditionKind::SigilState,
            other => PreConditionKind::Unknown(other),
        }
    }
}

impl From<PreConditionKind> for u8 {
    fn from(kind: PreConditionKind) -> Self {
        kind.code()
    }
}

/// Raw pre-condition as stored on a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreConditionRaw {
    pub kind: PreConditionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: i32,
}

impl PreConditionRaw {
    pub const fn new(kind: PreConditionKind, value: i32) -> Self {
        Self { kind, value }
    }
}

/// Modifier decay of a bullet hitting repeatedly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulletDeterioration {
    /// Ratio applied once per additional hit.
    pub rate: f64,
    /// Bullet lifetime in hits.
    pub max_hit_count: u8,
}

/// Counter driving a repeatable action block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RepeatSource {
    AdditionalInput,
    Combo,
}

/// Block repeated once per `step` units of its source, up to `max_repeats`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatDeclaration {
    pub source: RepeatSource,
    pub max_repeats: u8,
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub step: u32,
}

#[cfg(feature = "serde")]
fn one() -> u32 {
    1
}

/// Point in the action after which it can be cancelled into another action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CancelDeclaration {
    pub action_id: ActionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: Option<PreConditionRaw>,
}

/// One component of an action.
///
/// Each label in `hit_labels` is one hit; labels may repeat.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionComponent {
    pub start_time: f64,
    pub hit_labels: Vec<String>,
    pub condition: Option<PreConditionRaw>,
    pub deterioration: Option<BulletDeterioration>,
    pub repeat: Option<RepeatDeclaration>,
    pub cancel: Option<CancelDeclaration>,
}

impl ActionComponent {
    pub fn hits(start_time: f64, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            start_time,
            hit_labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: PreConditionRaw) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub fn with_deterioration(mut self, rate: f64, max_hit_count: u8) -> Self {
        self.deterioration = Some(BulletDeterioration {
            rate,
            max_hit_count,
        });
        self
    }

    #[must_use]
    pub fn with_repeat(mut self, source: RepeatSource, max_repeats: u8, step: u32) -> Self {
        self.repeat = Some(RepeatDeclaration {
            source,
            max_repeats,
            step,
        });
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, action_id: ActionId, condition: Option<PreConditionRaw>) -> Self {
        self.cancel = Some(CancelDeclaration {
            action_id,
            condition,
        });
        self
    }
}
