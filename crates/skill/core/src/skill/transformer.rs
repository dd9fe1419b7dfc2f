use super::{
    AttackingSkillData, SkillCancelUnit, SkillError, SupportiveSkillData, build_cancel_units,
    discover_skill_chain,
};
use crate::asset::{AssetEnv, AssetError, SkillRecord};
use crate::config::EngineConfig;
use crate::hit::{HitData, build_hits};
use crate::types::SkillId;

/// Builds skill aggregates from the asset oracles.
#[derive(Clone, Copy, Debug)]
pub struct SkillTransformer<'a> {
    env: AssetEnv<'a>,
    config: &'a EngineConfig,
}

impl<'a> SkillTransformer<'a> {
    pub fn new(env: AssetEnv<'a>, config: &'a EngineConfig) -> Self {
        Self { env, config }
    }

    /// Attacking aggregate of `skill_id`.
    ///
    /// # Errors
    ///
    /// Returns any asset, conversion or discovery error of the skill.
    pub fn attacking(&self, skill_id: SkillId) -> Result<AttackingSkillData, SkillError> {
        let record = self.env.skill(skill_id)?;
        self.attacking_from(&record)
    }

    /// Supportive aggregate of `skill_id`.
    ///
    /// # Errors
    ///
    /// Returns any asset, conversion or discovery error of the skill.
    pub fn supportive(&self, skill_id: SkillId) -> Result<SupportiveSkillData, SkillError> {
        let record = self.env.skill(skill_id)?;
        let (levels, cancel_units) = self.levels(&record)?;
        let levels = levels
            .into_iter()
            .map(|hits| hits.into_iter().filter(is_supportive).collect())
            .collect();
        Ok(SupportiveSkillData::new(record.id, levels, self.config)?.with_cancel_units(cancel_units))
    }

    /// Attacking aggregates of every skill chained from `skill_id`.
    ///
    /// Chained skills with missing action data are skipped.
    ///
    /// # Errors
    ///
    /// Returns any other error of the chain.
    pub fn attacking_chain(&self, skill_id: SkillId) -> Result<Vec<AttackingSkillData>, SkillError> {
        let mut aggregates = Vec::new();
        for record in discover_skill_chain(&self.env, skill_id)? {
            match self.attacking_from(&record) {
                Ok(data) => aggregates.push(data),
                Err(SkillError::Asset(AssetError::ActionDataNotFound { action_id, level })) => {
                    tracing::warn!(
                        skill = %record.id,
                        action = %action_id,
                        level,
                        "skipping chained skill without action data"
                    );
                }
                Err(err) => return Err(err),
            }
        }
        Ok(aggregates)
    }

    fn attacking_from(&self, record: &SkillRecord) -> Result<AttackingSkillData, SkillError> {
        let (levels, cancel_units) = self.levels(record)?;
        Ok(AttackingSkillData::new(record.id, levels, self.config)?.with_cancel_units(cancel_units))
    }

    fn levels(
        &self,
        record: &SkillRecord,
    ) -> Result<(Vec<Vec<HitData>>, Vec<Vec<SkillCancelUnit>>), SkillError> {
        let mut levels = Vec::with_capacity(usize::from(record.max_level));
        let mut cancel_units = Vec::with_capacity(usize::from(record.max_level));
        for level in 1..=record.max_level {
            levels.push(build_hits(&self.env, record, level)?);
            cancel_units.push(build_cancel_units(&self.env, record, level)?);
        }
        Ok((levels, cancel_units))
    }
}

/// Hits carrying anything a buff entry can report.
fn is_supportive(hit: &HitData) -> bool {
    hit.action_condition.is_some()
        || hit.attribute.self_damage
        || hit.attribute.sp_recovery_ratio != 0.0
}
