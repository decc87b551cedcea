//! Data structures for designer-authored definitions.
//!
//! This module contains pure data structures for units, weapons,
//! buildings, armor tags, faction palettes and resource nodes. All
//! structs are designed to be deserialized from RON files, and every
//! field has a default so designers only write what they change.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `rts_tools`.

mod armor_data;
mod balance_data;
mod building_data;
mod catalog;
mod cost_data;
mod palette_data;
mod resource_data;
mod unit_data;
mod weapon_data;

pub use armor_data::ArmorTag;
pub use balance_data::BalanceVersion;
pub use building_data::{BuildingDef, Footprint};
pub use catalog::DataCatalog;
pub use cost_data::CostTimeDef;
pub use palette_data::{FactionPalette, Rgb};
pub use resource_data::CrystaliteNodeDef;
pub use unit_data::UnitDef;
pub use weapon_data::WeaponDef;
