//! Aggregated data set combining every record kind.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::armor_data::ArmorTag;
use super::balance_data::BalanceVersion;
use super::building_data::BuildingDef;
use super::palette_data::FactionPalette;
use super::resource_data::CrystaliteNodeDef;
use super::unit_data::UnitDef;
use super::weapon_data::WeaponDef;
use crate::error::{DataError, Result};
use crate::math::Fixed;

/// A complete (or partial) set of designer data.
///
/// A data directory may split records across several files; each file
/// deserializes into a `DataCatalog` and the pieces are combined with
/// [`DataCatalog::merge`].
///
/// # Example RON
///
/// ```ron
/// DataCatalog(
///     balance: Some((version: "0.3.0", notes: "Faster harvesters")),
///     palettes: {
///         "ember": (primary: (178, 34, 34), secondary: (40, 40, 40), accent: (255, 215, 0)),
///     },
///     armor_tags: [(id: "light", display_name: "armor.light.name")],
///     units: [...],
///     weapons: [...],
///     buildings: [...],
///     crystalite_nodes: [...],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataCatalog {
    /// Balance pass this data belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<BalanceVersion>,

    /// Color palettes keyed by faction name.
    pub palettes: BTreeMap<String, FactionPalette>,

    /// Armor classifications.
    pub armor_tags: Vec<ArmorTag>,

    /// Unit types.
    pub units: Vec<UnitDef>,

    /// Weapon types.
    pub weapons: Vec<WeaponDef>,

    /// Building types.
    pub buildings: Vec<BuildingDef>,

    /// Harvestable resource node types.
    pub crystalite_nodes: Vec<CrystaliteNodeDef>,
}

impl DataCatalog {
    /// Find a unit by its ID.
    #[must_use]
    pub fn get_unit(&self, id: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Find a weapon by its ID.
    #[must_use]
    pub fn get_weapon(&self, id: &str) -> Option<&WeaponDef> {
        self.weapons.iter().find(|w| w.id == id)
    }

    /// Find a building by its ID.
    #[must_use]
    pub fn get_building(&self, id: &str) -> Option<&BuildingDef> {
        self.buildings.iter().find(|b| b.id == id)
    }

    /// Find an armor tag by its ID.
    #[must_use]
    pub fn get_armor_tag(&self, id: &str) -> Option<&ArmorTag> {
        self.armor_tags.iter().find(|t| t.id == id)
    }

    /// Find a crystalite node definition by its ID.
    #[must_use]
    pub fn get_crystalite_node(&self, id: &str) -> Option<&CrystaliteNodeDef> {
        self.crystalite_nodes.iter().find(|n| n.id == id)
    }

    /// Palette for a faction.
    #[must_use]
    pub fn palette(&self, faction: &str) -> Option<&FactionPalette> {
        self.palettes.get(faction)
    }

    /// All units classified with the given armor tag.
    pub fn units_with_armor_tag<'a>(
        &'a self,
        tag_id: &'a str,
    ) -> impl Iterator<Item = &'a UnitDef> {
        self.units.iter().filter(move |u| u.has_armor_tag(tag_id))
    }

    /// All weapons specialised against the given armor tag.
    pub fn weapons_targeting<'a>(
        &'a self,
        tag_id: &'a str,
    ) -> impl Iterator<Item = &'a WeaponDef> {
        self.weapons.iter().filter(move |w| w.targets(tag_id))
    }

    /// Weapons carried by a unit, skipping unknown references.
    pub fn weapons_of<'a>(&'a self, unit: &'a UnitDef) -> impl Iterator<Item = &'a WeaponDef> {
        unit.weapons.iter().filter_map(move |id| self.get_weapon(id))
    }

    /// Total number of records held, palettes and balance version included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        usize::from(self.balance.is_some())
            + self.palettes.len()
            + self.armor_tags.len()
            + self.units.len()
            + self.weapons.len()
            + self.buildings.len()
            + self.crystalite_nodes.len()
    }

    /// Check if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Move every record of `other` into this catalog.
    ///
    /// Nothing is merged if any conflict is found.
    ///
    /// # Errors
    ///
    /// Returns an error if `other` redefines an ID already present in the
    /// same record kind, a palette for an existing faction, or a second
    /// balance version.
    pub fn merge(&mut self, other: Self) -> Result<()> {
        if let (Some(existing), Some(incoming)) = (&self.balance, &other.balance) {
            return Err(DataError::DuplicateBalanceVersion {
                existing: existing.version.clone(),
                incoming: incoming.version.clone(),
            });
        }
        if let Some(faction) = other.palettes.keys().find(|f| self.palettes.contains_key(*f)) {
            return Err(DataError::DuplicatePalette(faction.clone()));
        }
        check_disjoint("armor tag", &self.armor_tags, &other.armor_tags, |t| &t.id)?;
        check_disjoint("unit", &self.units, &other.units, |u| &u.id)?;
        check_disjoint("weapon", &self.weapons, &other.weapons, |w| &w.id)?;
        check_disjoint("building", &self.buildings, &other.buildings, |b| &b.id)?;
        check_disjoint(
            "crystalite node",
            &self.crystalite_nodes,
            &other.crystalite_nodes,
            |n| &n.id,
        )?;

        tracing::debug!("Merging {} records into catalog", other.record_count());

        if other.balance.is_some() {
            self.balance = other.balance;
        }
        self.palettes.extend(other.palettes);
        self.armor_tags.extend(other.armor_tags);
        self.units.extend(other.units);
        self.weapons.extend(other.weapons);
        self.buildings.extend(other.buildings);
        self.crystalite_nodes.extend(other.crystalite_nodes);
        Ok(())
    }

    /// Validate internal consistency of the catalog.
    ///
    /// Checks for:
    /// - Empty or duplicate IDs within each record kind
    /// - Armor tag references on units and weapons are valid
    /// - Weapon references on units are valid
    /// - Health, footprints and fractional values are in range
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        check_ids("Armor tag", &self.armor_tags, |t| &t.id, &mut errors);
        check_ids("Unit", &self.units, |u| &u.id, &mut errors);
        check_ids("Weapon", &self.weapons, |w| &w.id, &mut errors);
        check_ids("Building", &self.buildings, |b| &b.id, &mut errors);
        check_ids("Crystalite node", &self.crystalite_nodes, |n| &n.id, &mut errors);

        for unit in &self.units {
            if !unit.armor_tag.is_empty() && self.get_armor_tag(&unit.armor_tag).is_none() {
                errors.push(format!(
                    "Unit '{}' references unknown armor tag '{}'",
                    unit.id, unit.armor_tag
                ));
            }
            for weapon_id in &unit.weapons {
                if self.get_weapon(weapon_id).is_none() {
                    errors.push(format!(
                        "Unit '{}' carries unknown weapon '{}'",
                        unit.id, weapon_id
                    ));
                }
            }
            if unit.max_health == 0 {
                errors.push(format!("Unit '{}' has zero max health", unit.id));
            }
            check_non_negative("Unit", &unit.id, "move speed", unit.move_speed, &mut errors);
            check_non_negative(
                "Unit",
                &unit.id,
                "build time",
                unit.cost.build_time,
                &mut errors,
            );
        }

        for weapon in &self.weapons {
            let target = &weapon.target_armor;
            if !target.is_empty() && self.get_armor_tag(target).is_none() {
                errors.push(format!(
                    "Weapon '{}' targets unknown armor tag '{}'",
                    weapon.id, target
                ));
            }
            check_non_negative("Weapon", &weapon.id, "range", weapon.range, &mut errors);
            check_non_negative("Weapon", &weapon.id, "cooldown", weapon.cooldown, &mut errors);
        }

        for building in &self.buildings {
            if building.max_health == 0 {
                errors.push(format!("Building '{}' has zero max health", building.id));
            }
            if building.footprint.area() == 0 {
                errors.push(format!("Building '{}' has an empty footprint", building.id));
            }
            check_non_negative(
                "Building",
                &building.id,
                "build time",
                building.cost.build_time,
                &mut errors,
            );
        }

        for node in &self.crystalite_nodes {
            check_non_negative(
                "Crystalite node",
                &node.id,
                "harvest rate",
                node.harvest_rate,
                &mut errors,
            );
        }

        errors
    }

    /// Run [`DataCatalog::validate`] and fail on any problem.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ValidationFailed`] listing every problem found.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DataError::ValidationFailed(errors))
        }
    }
}

fn check_disjoint<T>(
    kind: &'static str,
    existing: &[T],
    incoming: &[T],
    id: impl Fn(&T) -> &String,
) -> Result<()> {
    let known: HashSet<&str> = existing.iter().map(|r| id(r).as_str()).collect();
    match incoming.iter().find(|r| known.contains(id(*r).as_str())) {
        Some(dup) => Err(DataError::DuplicateId {
            kind,
            id: id(dup).clone(),
        }),
        None => Ok(()),
    }
}

fn check_ids<T>(kind: &str, records: &[T], id: impl Fn(&T) -> &String, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for record in records {
        let record_id = id(record);
        if record_id.is_empty() {
            errors.push(format!("{kind} has an empty ID"));
        } else if !seen.insert(record_id.as_str()) {
            errors.push(format!("{kind} ID '{record_id}' is defined more than once"));
        }
    }
}

fn check_non_negative(kind: &str, id: &str, field: &str, value: Fixed, errors: &mut Vec<String>) {
    if value < Fixed::ZERO {
        errors.push(format!("{kind} '{id}' has negative {field} ({value})"));
    }
}
