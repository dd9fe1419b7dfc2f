//! Plain asset-level value types shared by every layer.

mod affliction;
mod element;
mod ids;
mod parameter;
mod target;

pub use affliction::AfflictionStatus;
pub use element::{Element, ElementFlags};
pub use ids::{ActionConditionId, ActionId, BuffCountId, LimitGroupId, SkillId};
pub use parameter::{BuffParameter, SpRecoveryTarget};
pub use target::{HitTargetRaw, TargetSimple};
