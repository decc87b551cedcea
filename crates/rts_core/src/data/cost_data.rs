//! Production cost and build time.

use serde::{Deserialize, Serialize};

use crate::math::{fixed_decimal, seconds_to_ticks, Fixed};

/// Crystalite cost and build time of a producible unit or building.
///
/// # Example RON
///
/// ```ron
/// CostTimeDef(cost: 150, build_time: 12.5)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostTimeDef {
    /// Crystalite cost.
    pub cost: u32,

    /// Build time in seconds.
    #[serde(with = "fixed_decimal")]
    pub build_time: Fixed,
}

impl Default for CostTimeDef {
    fn default() -> Self {
        Self {
            cost: 100,
            build_time: Fixed::from_num(10),
        }
    }
}

impl CostTimeDef {
    /// Create a new cost/time definition.
    #[must_use]
    pub const fn new(cost: u32, build_time: Fixed) -> Self {
        Self { cost, build_time }
    }

    /// Build time expressed in whole simulation ticks, rounded up.
    #[must_use]
    pub fn build_time_ticks(&self, tick_rate: u32) -> u32 {
        seconds_to_ticks(self.build_time, tick_rate)
    }
}
