use std::fmt;

macro_rules! asset_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

asset_id!(
    /// Identifier of a skill record.
    SkillId
);
asset_id!(
    /// Identifier of an action (the prefab holding hit components).
    ActionId
);
asset_id!(
    /// Identifier of an action condition (buff, debuff or affliction payload).
    ActionConditionId
);
asset_id!(
    /// Identifier of a buff-count boost record.
    BuffCountId
);
asset_id!(
    /// Identifier of an ability limit group.
    LimitGroupId
);
