//! Building data structures for data-driven building definitions.

use serde::{Deserialize, Serialize};

use super::cost_data::CostTimeDef;

/// Grid footprint of a building, in tiles.
///
/// Serialized as `(width, height)` fields: `(width: 3, height: 2)`.
/// A missing side keeps its default of 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Footprint {
    /// Tiles along the x axis.
    pub width: u32,
    /// Tiles along the y axis.
    pub height: u32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl Footprint {
    /// Create a new footprint.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of tiles covered.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Data-driven building definition.
///
/// # Example RON
///
/// ```ron
/// BuildingDef(
///     id: "refinery",
///     display_name: "building.refinery.name",
///     max_health: 800,
///     footprint: (width: 3, height: 3),
///     cost: (cost: 200, build_time: 30.0),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingDef {
    /// Unique string identifier for this building type.
    pub id: String,

    /// Localization key for the building's display name.
    pub display_name: String,

    /// Maximum health points.
    pub max_health: u32,

    /// Size on the placement grid.
    pub footprint: Footprint,

    /// Construction cost and time.
    pub cost: CostTimeDef,
}

impl Default for BuildingDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: String::new(),
            max_health: 500,
            footprint: Footprint::default(),
            cost: CostTimeDef::default(),
        }
    }
}
