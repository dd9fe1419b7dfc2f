//! Asset catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skill_core::asset::ActionComponent;
use skill_core::{
    AbilityLimitGroup, ActionCondition, ActionId, AssetSnapshot, BuffCountData, HitAttribute,
    SkillRecord,
};

use crate::loaders::{LoadResult, read_file};

/// Components of one action at one level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEntry {
    pub action_id: ActionId,
    pub level: u8,
    pub components: Vec<ActionComponent>,
}

/// Asset catalog structure for RON files.
///
/// Every table is optional so catalogs can be split across files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetCatalog {
    pub skills: Vec<SkillRecord>,
    pub actions: Vec<ActionEntry>,
    pub hit_attributes: Vec<HitAttribute>,
    pub action_conditions: Vec<ActionCondition>,
    pub buff_counts: Vec<BuffCountData>,
    pub limit_groups: Vec<AbilityLimitGroup>,
}

impl AssetCatalog {
    /// Adds every record of this catalog to `snapshot`.
    ///
    /// Fails on a record whose key is already present, so that split
    /// catalogs never silently shadow each other.
    pub fn merge_into(self, snapshot: &mut AssetSnapshot) -> LoadResult<()> {
        for skill in self.skills {
            anyhow::ensure!(
                !snapshot.skills.contains_key(&skill.id),
                "Duplicate skill {}",
                skill.id
            );
            snapshot.skills.insert(skill.id, skill);
        }
        for entry in self.actions {
            let key = (entry.action_id, entry.level);
            anyhow::ensure!(
                !snapshot.actions.contains_key(&key),
                "Duplicate action {} at level {}",
                entry.action_id,
                entry.level
            );
            snapshot.actions.insert(key, entry.components);
        }
        for attribute in self.hit_attributes {
            anyhow::ensure!(
                !snapshot.hit_attributes.contains_key(&attribute.label),
                "Duplicate hit attribute '{}'",
                attribute.label
            );
            snapshot
                .hit_attributes
                .insert(attribute.label.clone(), attribute);
        }
        for condition in self.action_conditions {
            anyhow::ensure!(
                !snapshot.action_conditions.contains_key(&condition.id),
                "Duplicate action condition {}",
                condition.id
            );
            snapshot.action_conditions.insert(condition.id, condition);
        }
        for data in self.buff_counts {
            anyhow::ensure!(
                !snapshot.buff_counts.contains_key(&data.id),
                "Duplicate buff count data {}",
                data.id
            );
            snapshot.buff_counts.insert(data.id, data);
        }
        for group in self.limit_groups {
            anyhow::ensure!(
                !snapshot.limit_groups.contains_key(&group.id),
                "Duplicate limit group {}",
                group.id
            );
            snapshot.limit_groups.insert(group.id, group);
        }
        Ok(())
    }

    pub fn into_snapshot(self) -> LoadResult<AssetSnapshot> {
        let mut snapshot = AssetSnapshot::new();
        self.merge_into(&mut snapshot)?;
        Ok(snapshot)
    }
}

/// Loader for asset catalogs from RON files.
pub struct AssetCatalogLoader;

impl AssetCatalogLoader {
    /// Load an asset catalog from a RON file.
    pub fn load_catalog(path: &Path) -> LoadResult<AssetCatalog> {
        let content = read_file(path)?;
        let catalog: AssetCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse asset catalog RON: {}", e))?;

        tracing::debug!(
            path = %path.display(),
            skills = catalog.skills.len(),
            actions = catalog.actions.len(),
            hit_attributes = catalog.hit_attributes.len(),
            "loaded asset catalog"
        );
        Ok(catalog)
    }

    /// Load an asset catalog from a RON file into a snapshot.
    pub fn load(path: &Path) -> LoadResult<AssetSnapshot> {
        Self::load_catalog(path)?.into_snapshot()
    }
}
