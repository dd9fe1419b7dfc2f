//! Non-damage effect units built from hit data.
//!
//! Units are value objects keyed by a scaled integer time, the hit label and
//! the affected parameter or status. Builders return units sorted and
//! deduplicated by that key, so two units describing the same instant of the
//! same hit collapse even if their times differ by float noise.

mod affliction;
mod buff;

pub use affliction::{AfflictionEffectUnit, build_affliction_unit};
pub use buff::{BuffEffectUnit, build_buff_units, build_debuff_units};

/// Effect unit with a deduplication key.
pub trait EffectUnit {
    type Key: Ord;

    fn key(&self) -> Self::Key;
}

/// Sorts `units` by key and drops later duplicates.
pub fn normalize_units<U: EffectUnit>(units: &mut Vec<U>) {
    units.sort_by(|a, b| a.key().cmp(&b.key()));
    units.dedup_by(|a, b| a.key() == b.key());
}
