//! Content factory for building asset snapshots from data files.

use std::path::{Path, PathBuf};

use skill_core::{AssetSnapshot, EngineConfig};

use crate::loaders::{AssetCatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads all content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── assets.ron
/// └── assets/
///     ├── flame.ron
///     └── water.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load every asset catalog of the data directory into one snapshot.
    ///
    /// Reads `assets.ron` and then every `.ron` file of `assets/` in file
    /// name order. Either source may be absent.
    pub fn load_assets(&self) -> LoadResult<AssetSnapshot> {
        let mut snapshot = AssetSnapshot::new();

        let main = self.data_dir.join("assets.ron");
        if main.exists() {
            AssetCatalogLoader::load_catalog(&main)?.merge_into(&mut snapshot)?;
        }

        let dir = self.data_dir.join("assets");
        if dir.is_dir() {
            let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
                .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.extension().is_some_and(|ext| ext == "ron"))
                .collect();
            paths.sort();
            for path in paths {
                AssetCatalogLoader::load_catalog(&path)?
                    .merge_into(&mut snapshot)
                    .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
            }
        }

        tracing::info!(
            data_dir = %self.data_dir.display(),
            skills = snapshot.skills.len(),
            "loaded asset snapshot"
        );
        Ok(snapshot)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
