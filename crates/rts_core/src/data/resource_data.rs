//! Crystalite resource node definitions.

use serde::{Deserialize, Serialize};

use super::palette_data::Rgb;
use crate::math::{fixed_decimal, Fixed};

/// Data-driven definition of a harvestable crystalite deposit.
///
/// # Example RON
///
/// ```ron
/// CrystaliteNodeDef(
///     id: "rich_vein",
///     initial_amount: 3000,
///     harvest_rate: 8.0,
///     minimap_color: (0, 255, 255),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrystaliteNodeDef {
    /// Unique string identifier.
    pub id: String,

    /// Crystalite held by a fresh node.
    pub initial_amount: u32,

    /// Crystalite extracted per second by one harvester.
    #[serde(with = "fixed_decimal")]
    pub harvest_rate: Fixed,

    /// Color used to draw the node on the minimap.
    pub minimap_color: Rgb,
}

impl Default for CrystaliteNodeDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            initial_amount: 1500,
            harvest_rate: Fixed::from_num(5),
            minimap_color: Rgb::new(0, 255, 255),
        }
    }
}

impl CrystaliteNodeDef {
    /// Seconds a single harvester needs to empty a fresh node.
    ///
    /// `None` when the harvest rate is zero or negative.
    #[must_use]
    pub fn seconds_to_deplete(&self) -> Option<Fixed> {
        if self.harvest_rate <= Fixed::ZERO {
            return None;
        }
        Fixed::saturating_from_num(self.initial_amount).checked_div(self.harvest_rate)
    }
}
