//! Test fixtures and helpers.
//!
//! Pre-built data catalogs for consistent testing.

use std::collections::BTreeMap;

use fixed::types::I32F32;
use rts_core::data::{
    ArmorTag, BalanceVersion, BuildingDef, CostTimeDef, CrystaliteNodeDef, DataCatalog,
    FactionPalette, Footprint, Rgb, UnitDef, WeaponDef,
};

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a fixed-point number from a float (for tests only).
#[must_use]
pub fn fixed_f(n: f64) -> I32F32 {
    I32F32::from_num(n)
}

/// A small, fully consistent catalog.
///
/// Two armor tags, two weapons (one per tag), two units, one building,
/// one crystalite node, one palette and a balance version.
#[must_use]
pub fn sample_catalog() -> DataCatalog {
    let mut palettes = BTreeMap::new();
    palettes.insert(
        "ember".to_string(),
        FactionPalette {
            primary: Rgb::new(178, 34, 34),
            secondary: Rgb::new(40, 40, 40),
            accent: Rgb::new(255, 215, 0),
        },
    );

    DataCatalog {
        balance: Some(BalanceVersion {
            version: "0.3.0".to_string(),
            notes: "Fixture data".to_string(),
        }),
        palettes,
        armor_tags: vec![
            ArmorTag::new("light", "armor.light.name"),
            ArmorTag::new("heavy", "armor.heavy.name"),
        ],
        units: vec![
            UnitDef {
                id: "warden".to_string(),
                display_name: "unit.warden.name".to_string(),
                max_health: 120,
                move_speed: fixed_f(3.25),
                armor_tag: "light".to_string(),
                cost: CostTimeDef::new(75, fixed(8)),
                weapons: vec!["pulse_rifle".to_string()],
            },
            UnitDef {
                id: "bulwark".to_string(),
                display_name: "unit.bulwark.name".to_string(),
                max_health: 450,
                move_speed: fixed_f(1.75),
                armor_tag: "heavy".to_string(),
                cost: CostTimeDef::new(220, fixed(20)),
                weapons: vec!["rail_lance".to_string()],
            },
        ],
        weapons: vec![
            WeaponDef {
                id: "pulse_rifle".to_string(),
                display_name: "weapon.pulse_rifle.name".to_string(),
                damage: 8,
                range: fixed(6),
                cooldown: fixed_f(0.5),
                target_armor: "light".to_string(),
            },
            WeaponDef {
                id: "rail_lance".to_string(),
                display_name: "weapon.rail_lance.name".to_string(),
                damage: 45,
                range: fixed(9),
                cooldown: fixed_f(2.5),
                target_armor: "heavy".to_string(),
            },
        ],
        buildings: vec![BuildingDef {
            id: "refinery".to_string(),
            display_name: "building.refinery.name".to_string(),
            max_health: 800,
            footprint: Footprint::new(3, 3),
            cost: CostTimeDef::new(200, fixed(30)),
        }],
        crystalite_nodes: vec![CrystaliteNodeDef {
            id: "rich_vein".to_string(),
            initial_amount: 3000,
            harvest_rate: fixed(8),
            minimap_color: Rgb::new(0, 255, 255),
        }],
    }
}

/// [`sample_catalog`] rendered as pretty RON.
///
/// # Panics
///
/// Panics if the catalog cannot be serialized.
#[must_use]
pub fn sample_catalog_ron() -> String {
    ron::ser::to_string_pretty(&sample_catalog(), ron::ser::PrettyConfig::default())
        .expect("fixture catalog serializes")
}
