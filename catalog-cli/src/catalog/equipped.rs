//! Resolve a unit's free-text "equipped items" cell into item ids
//!
//! The cell is written by hand, e.g. "x2 Combat Knife, Leather Armor and Stimpak",
//! so matching is deliberately forgiving: names are compared on their
//! alphanumeric characters only, and a fragment that matches no item exactly
//! falls back to the first item whose key contains it. That fallback is loose
//! ("pistol" matches "10mmpistol") and depends on lookup order, which is the
//! sorted order of the items collection.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::models::Item;
use super::naming::normalize;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i),| and | & ").unwrap());
static MULTIPLIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)^x(\d+)\s*(.*)$").unwrap());

/// Largest "xN" count honoured; anything above it counts once
pub const MAX_MULTIPLIER: usize = 99;

/// Normalized item name -> item id, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ItemLookup {
    by_key: IndexMap<String, String>,
}

impl ItemLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the lookup from the items collection, keeping its order
    pub fn from_items(items: &[Item]) -> Self {
        let mut lookup = Self::new();
        for item in items {
            lookup.insert(&item.name, &item.id);
        }
        lookup
    }

    /// Register an item name
    ///
    /// Two names with the same normalized key collide: the later id replaces
    /// the earlier one.
    pub fn insert(&mut self, name: &str, id: &str) {
        let key = normalize(name);
        if key.is_empty() {
            return;
        }
        if let Some(previous) = self.by_key.insert(key.clone(), id.to_string()) {
            if previous != id {
                log::debug!(
                    "Item name key '{}' maps to both '{}' and '{}', keeping '{}'",
                    key,
                    previous,
                    id,
                    id
                );
            }
        }
    }

    /// Find an item id for an already normalized key
    pub fn resolve(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }

        // Exact match first, then the first key containing the fragment
        self.by_key
            .get(key)
            .or_else(|| {
                self.by_key
                    .iter()
                    .find(|(name, _)| name.contains(key))
                    .map(|(_, id)| id)
            })
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Outcome of parsing one equipped-items cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquippedParse {
    /// Resolved ids in cell order, repeated per multiplier
    pub ids: Vec<String>,
    /// Fragments that matched no item
    pub unresolved: Vec<String>,
}

/// Parse an equipped-items cell into item ids
pub fn parse_equipped(raw: &str, lookup: &ItemLookup) -> Vec<String> {
    resolve_equipped(raw, lookup).ids
}

/// Parse an equipped-items cell, also reporting the fragments that were dropped
pub fn resolve_equipped(raw: &str, lookup: &ItemLookup) -> EquippedParse {
    let mut result = EquippedParse::default();
    if raw.trim().is_empty() {
        return result;
    }

    let text = raw.replace("\r\n", ",").replace(['\n', '\r'], ",");

    for fragment in SEPARATORS.split(&text) {
        let mut fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }

        let mut multiplier: usize = 1;
        if let Some(caps) = MULTIPLIER.captures(fragment) {
            multiplier = match caps[1].parse::<usize>() {
                Ok(n) if (1..=MAX_MULTIPLIER).contains(&n) => n,
                _ => {
                    log::debug!("Ignoring out-of-range multiplier 'x{}'", &caps[1]);
                    1
                }
            };
            fragment = caps.get(2).map_or("", |m| m.as_str()).trim();
        }

        // A bare "x2" (or punctuation) names nothing and its multiplier is discarded
        let key = normalize(fragment);
        if key.is_empty() {
            continue;
        }

        match lookup.resolve(&key) {
            Some(id) => {
                result
                    .ids
                    .extend(std::iter::repeat_n(id.to_string(), multiplier));
            }
            None => result.unresolved.push(fragment.to_string()),
        }
    }

    result
}
