//! Balance version metadata.

use serde::{Deserialize, Serialize};

/// Identifies which balance pass a data set belongs to.
///
/// Carried alongside the rest of the data so replays and bug reports can
/// name the numbers they were produced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceVersion {
    /// Version string, usually `major.minor.patch`.
    pub version: String,

    /// Free-form patch notes.
    pub notes: String,
}

impl Default for BalanceVersion {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            notes: String::new(),
        }
    }
}

impl BalanceVersion {
    /// `(major, minor)` parsed from the version string.
    ///
    /// A missing minor component counts as `0`. Returns `None` when the
    /// leading components are not numbers.
    #[must_use]
    pub fn major_minor(&self) -> Option<(u32, u32)> {
        let mut parts = self.version.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.parse().ok()?,
            None => 0,
        };
        Some((major, minor))
    }

    /// Two balance versions are compatible when major and minor match.
    ///
    /// Unparseable versions are only compatible with an identical string.
    #[must_use]
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        match (self.major_minor(), other.major_minor()) {
            (Some(a), Some(b)) => a == b,
            _ => self.version == other.version,
        }
    }
}
