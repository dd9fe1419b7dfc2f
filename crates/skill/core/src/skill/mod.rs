//! Skill aggregates: condition discovery and per-composite entries.
//!
//! [`AttackingSkillData`] owns the damage matrix of a skill and
//! [`SupportiveSkillData`] its buff units. Both implement [`SkillVariant`]
//! and share the discovery helpers of [`discovery`]. [`SkillTransformer`]
//! builds them from the asset oracles.

mod attacking;
mod cancel;
mod chain;
pub mod discovery;
mod error;
mod supportive;
mod transformer;
mod variant;

pub use attacking::{AttackingSkillData, AttackingSkillEntry};
pub use cancel::{SkillCancelUnit, build_cancel_units};
pub use chain::discover_skill_chain;
pub use discovery::{Axis, AxisKind};
pub use error::SkillError;
pub use supportive::{SupportiveSkillData, SupportiveSkillEntry};
pub use transformer::SkillTransformer;
pub use variant::SkillVariant;
