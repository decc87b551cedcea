//! Data validation utilities.

use std::fmt;
use std::path::Path;

use rts_core::data::DataCatalog;

use crate::loader::{
    load_catalog_from_directory, load_catalog_from_file, LoadError, LoadResult,
};

/// Record counts of a catalog that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    /// Faction palettes.
    pub palettes: usize,
    /// Armor tags.
    pub armor_tags: usize,
    /// Unit definitions.
    pub units: usize,
    /// Weapon definitions.
    pub weapons: usize,
    /// Building definitions.
    pub buildings: usize,
    /// Crystalite node definitions.
    pub crystalite_nodes: usize,
}

impl From<&DataCatalog> for ValidationSummary {
    fn from(catalog: &DataCatalog) -> Self {
        Self {
            palettes: catalog.palettes.len(),
            armor_tags: catalog.armor_tags.len(),
            units: catalog.units.len(),
            weapons: catalog.weapons.len(),
            buildings: catalog.buildings.len(),
            crystalite_nodes: catalog.crystalite_nodes.len(),
        }
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} units, {} weapons, {} buildings, {} armor tags, {} crystalite nodes, {} palettes",
            self.units,
            self.weapons,
            self.buildings,
            self.armor_tags,
            self.crystalite_nodes,
            self.palettes
        )
    }
}

/// Validate all RON data files in a directory, or a single RON file.
///
/// Unlike the loader, a missing path is an error here.
///
/// # Errors
///
/// Returns an error if the path does not exist or any data file fails
/// validation.
pub fn validate_data_directory(path: &Path) -> LoadResult<ValidationSummary> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let catalog = if path.is_file() {
        load_catalog_from_file(path)?
    } else {
        load_catalog_from_directory(path)?
    };

    if let Some(balance) = &catalog.balance {
        tracing::info!("Balance version {}", balance.version);
    } else {
        tracing::warn!("No balance version defined under {}", path.display());
    }

    Ok(ValidationSummary::from(&catalog))
}
