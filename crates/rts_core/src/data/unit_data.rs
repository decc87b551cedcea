//! Unit data structures for data-driven unit definitions.

use serde::{Deserialize, Serialize};

use super::cost_data::CostTimeDef;
use crate::math::{fixed_decimal, Fixed};

/// Data-driven unit definition.
///
/// # Example RON
///
/// ```ron
/// UnitDef(
///     id: "warden",
///     display_name: "unit.warden.name",
///     max_health: 120,
///     move_speed: 3.25,
///     armor_tag: "light",
///     cost: (cost: 75, build_time: 8.0),
///     weapons: ["pulse_rifle"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitDef {
    /// Unique string identifier for this unit type.
    ///
    /// Used for referencing in other data files and for save/load.
    pub id: String,

    /// Localization key for the unit's display name.
    pub display_name: String,

    /// Maximum health points.
    pub max_health: u32,

    /// Movement speed in world units per second.
    #[serde(with = "fixed_decimal")]
    pub move_speed: Fixed,

    /// ID of the unit's [`ArmorTag`](super::ArmorTag). Empty means untagged.
    pub armor_tag: String,

    /// Production cost and time.
    pub cost: CostTimeDef,

    /// IDs of the weapons this unit carries.
    pub weapons: Vec<String>,
}

impl Default for UnitDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: String::new(),
            max_health: 100,
            move_speed: Fixed::from_num(3.5),
            armor_tag: String::new(),
            cost: CostTimeDef::default(),
            weapons: Vec::new(),
        }
    }
}

impl UnitDef {
    /// Check if this unit is classified with the given armor tag.
    #[must_use]
    pub fn has_armor_tag(&self, tag_id: &str) -> bool {
        !self.armor_tag.is_empty() && self.armor_tag == tag_id
    }

    /// Check if this unit carries the given weapon.
    #[must_use]
    pub fn has_weapon(&self, weapon_id: &str) -> bool {
        self.weapons.iter().any(|w| w == weapon_id)
    }

    /// Check if this unit can engage in combat.
    #[must_use]
    pub fn is_combatant(&self) -> bool {
        !self.weapons.is_empty()
    }
}
