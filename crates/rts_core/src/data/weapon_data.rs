//! Weapon data structures.

use serde::{Deserialize, Serialize};

use crate::math::{fixed_decimal, Fixed};

/// Data-driven weapon definition.
///
/// # Example RON
///
/// ```ron
/// WeaponDef(
///     id: "rail_lance",
///     display_name: "weapon.rail_lance.name",
///     damage: 45,
///     range: 9.0,
///     cooldown: 2.5,
///     target_armor: "heavy",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponDef {
    /// Unique string identifier.
    pub id: String,

    /// Localization key for the weapon's display name.
    pub display_name: String,

    /// Damage per shot.
    pub damage: u32,

    /// Maximum range in world units.
    #[serde(with = "fixed_decimal")]
    pub range: Fixed,

    /// Seconds between shots.
    #[serde(with = "fixed_decimal")]
    pub cooldown: Fixed,

    /// ID of the [`ArmorTag`](super::ArmorTag) this weapon is built to defeat.
    /// Empty means general purpose.
    pub target_armor: String,
}

impl Default for WeaponDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: String::new(),
            damage: 10,
            range: Fixed::from_num(5),
            cooldown: Fixed::from_num(1),
            target_armor: String::new(),
        }
    }
}

impl WeaponDef {
    /// Check if this weapon is specialised against the given armor tag.
    #[must_use]
    pub fn targets(&self, tag_id: &str) -> bool {
        !self.target_armor.is_empty() && self.target_armor == tag_id
    }

    /// Sustained damage per second, `None` for a zero or negative cooldown.
    #[must_use]
    pub fn damage_per_second(&self) -> Option<Fixed> {
        if self.cooldown <= Fixed::ZERO {
            return None;
        }
        Fixed::saturating_from_num(self.damage).checked_div(self.cooldown)
    }
}
