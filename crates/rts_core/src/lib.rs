//! # RTS Core
//!
//! Designer-authored data definitions for Crystalite RTS.
//!
//! This crate contains **only** data types:
//! - No IO (loading lives in `rts_tools`)
//! - No simulation
//! - No floating-point storage (fractional values are fixed-point)
//!
//! Records are authored once, loaded at process start, and treated as
//! immutable afterwards.
//!
//! ## Crate Structure
//!
//! - [`data`] - Unit, weapon, building, armor, palette and resource records
//! - [`error`] - Catalog error type
//! - [`math`] - Fixed-point helpers and serde adapters

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod data;
pub mod error;
pub mod math;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::data::{
        ArmorTag, BalanceVersion, BuildingDef, CostTimeDef, CrystaliteNodeDef, DataCatalog,
        FactionPalette, Footprint, Rgb, UnitDef, WeaponDef,
    };
    pub use crate::error::{DataError, Result};
    pub use crate::math::Fixed;
}
