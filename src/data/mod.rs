//! Data layer — default catalog and upgrade tree, plus RON file loaders.
//!
//! The hard-coded defaults in `items`/`tracks` make the engine usable with
//! no external files at all; a host application can instead ship its own
//! catalog and tree as RON and load them through `load_catalog_file` /
//! `load_tree_file`. Both are loaded once at startup and immutable after.

mod items;
mod tracks;

use log::info;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::shared::*;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse data file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// The built-in item catalog.
pub fn default_catalog() -> ItemCatalog {
    let mut catalog = ItemCatalog::default();
    items::populate_items(&mut catalog);
    info!("[Data] Items loaded: {}", catalog.len());
    catalog
}

/// The built-in upgrade tree (four stations + the companion track).
pub fn default_tree() -> UpgradeTree {
    let mut tree = UpgradeTree::default();
    tracks::populate_tracks(&mut tree);
    info!("[Data] Upgrade tracks loaded: {}", tree.tracks.len());
    tree
}

pub fn catalog_from_ron(source: &str) -> Result<ItemCatalog, DataError> {
    Ok(ron::from_str(source)?)
}

pub fn tree_from_ron(source: &str) -> Result<UpgradeTree, DataError> {
    Ok(ron::from_str(source)?)
}

pub fn load_catalog_file(path: &Path) -> Result<ItemCatalog, DataError> {
    let catalog = catalog_from_ron(&fs::read_to_string(path)?)?;
    info!("[Data] Items loaded from {}: {}", path.display(), catalog.len());
    Ok(catalog)
}

pub fn load_tree_file(path: &Path) -> Result<UpgradeTree, DataError> {
    let tree = tree_from_ron(&fs::read_to_string(path)?)?;
    info!("[Data] Upgrade tracks loaded from {}: {}", path.display(), tree.tracks.len());
    Ok(tree)
}
