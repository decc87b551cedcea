//! Armor tag definitions.

use serde::{Deserialize, Serialize};

/// Categorical label used to classify units for weapon-effectiveness lookups.
///
/// Units carry one armor tag; weapons name the armor tag they are built
/// to defeat. Both refer to the tag by `id`.
///
/// # Example RON
///
/// ```ron
/// ArmorTag(id: "heavy", display_name: "armor.heavy.name")
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorTag {
    /// Unique string identifier.
    pub id: String,

    /// Localization key for the tag's display name.
    pub display_name: String,
}

impl ArmorTag {
    /// Create a new armor tag.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
