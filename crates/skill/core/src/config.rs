/// How the HP axis is enumerated for crisis-eligible skills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CrisisAxis {
    /// Every HP bucket of the vocabulary.
    #[default]
    AllBuckets,
    /// Only full HP and 1 HP.
    FullAndOne,
}

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// HP buckets enumerated when any hit scales with crisis.
    pub crisis_axis: CrisisAxis,
    /// Number of possible composites above which discovery logs a warning.
    pub composite_warn_threshold: usize,
}

impl EngineConfig {
    // ===== compile-time constants =====
    /// Scale applied to effect-unit times before hashing.
    ///
    /// Action times in the assets carry at most five decimal places, so
    /// `round(time * 1E5)` identifies the same instant despite float noise.
    pub const TIME_KEY_SCALE: f64 = 1E5;
    /// Highest bullet hit count the vocabulary can express.
    pub const MAX_BULLET_HITS: u8 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COMPOSITE_WARN_THRESHOLD: usize = 512;

    pub fn new() -> Self {
        Self {
            crisis_axis: CrisisAxis::AllBuckets,
            composite_warn_threshold: Self::DEFAULT_COMPOSITE_WARN_THRESHOLD,
        }
    }

    pub fn with_crisis_axis(crisis_axis: CrisisAxis) -> Self {
        Self {
            crisis_axis,
            ..Self::new()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts an action time into the scaled integer key used for hashing and
/// ordering effect units.
pub fn time_key(time: f64) -> i64 {
    (time * EngineConfig::TIME_KEY_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_key_absorbs_float_noise() {
        assert_eq!(time_key(0.1 + 0.2), time_key(0.3));
        assert_ne!(time_key(0.30001), time_key(0.3));
    }
}
