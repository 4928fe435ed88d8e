//! Output record types for items.json and units.json
//!
//! Field order here is the key order in the written JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label -> flag mapping that keeps column order when serialized
pub type FlagMap = IndexMap<String, bool>;

/// One card from the Items sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub category: String,
    pub cost: u32,
    pub factions: Vec<String>,
    pub weapon: FlagMap,
    pub cats: FlagMap,
    pub is_mod: bool,
    pub mod_targets: Vec<String>,
    pub unique: bool,
    pub faction_limits: IndexMap<String, i64>,
}

/// One card from the Units sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub factions: Vec<String>,
    /// Weapon types the unit can use
    pub prereq: FlagMap,
    /// Item categories the unit may equip
    pub access: FlagMap,
    pub unique: bool,
    pub cost: u32,
    /// Item ids the unit starts with, repeated for multiple copies
    pub equipped: Vec<String>,
}

/// Anything that carries a stable id keyed by its display name
pub trait Record {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Record for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Record for Unit {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
