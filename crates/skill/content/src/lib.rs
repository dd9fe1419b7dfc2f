//! Data-driven asset catalogs and engine configuration loaders.
//!
//! This crate reads RON/TOML data files into the types `skill-core` consumes:
//! - Asset catalogs (skills, actions, hit attributes, action conditions,
//!   buff-count data, limit groups) via RON
//! - Engine configuration via TOML
//!
//! Catalogs become [`skill_core::AssetSnapshot`] values, which implement every
//! asset oracle the engine reads.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ActionEntry, AssetCatalog, AssetCatalogLoader, ConfigLoader, ContentFactory};
