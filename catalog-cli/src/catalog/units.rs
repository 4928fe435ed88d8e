//! Build unit records from the Units sheet
//!
//! Unlike items, a unit's `prereq` and `access` maps are merged onto the
//! previous run's maps and its equipped list survives an empty cell, so
//! hand edits to units.json are not lost on the next run.

use std::collections::HashSet;

use crate::workbook::Sheet;

use super::equipped::{ItemLookup, resolve_equipped};
use super::fields::{merge_flags, read_cost, read_factions, read_flags};
use super::layout::units as cols;
use super::models::{FlagMap, Item, Unit};
use super::naming::IdAllocator;

/// Units built from one sheet pass
#[derive(Debug, Clone, Default)]
pub struct UnitsBuild {
    pub units: Vec<Unit>,
    /// Equipped-items fragments that matched no item
    pub unresolved_fragments: usize,
}

/// Build one unit per named row
///
/// `items` is the freshly built items collection in its final order; equipped
/// names are resolved against it.
pub fn build_units(sheet: &Sheet, prior: &[Unit], items: &[Item]) -> UnitsBuild {
    let lookup = ItemLookup::from_items(items);
    let item_ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    let mut ids = IdAllocator::new(prior);
    let mut build = UnitsBuild::default();

    for row in cols::FIRST_DATA_ROW..=sheet.last_row() {
        let name = sheet.text(cols::NAME, row);
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let assigned = ids.assign(name);
        let (id, prior_unit) = (assigned.id, assigned.prior);

        let raw_equipped = sheet.text(cols::EQUIPPED, row);
        let parsed = resolve_equipped(&raw_equipped, &lookup);
        for fragment in &parsed.unresolved {
            log::debug!(
                "{}!{}{}: no item matches '{}' for unit '{}'",
                sheet.name(),
                cols::EQUIPPED,
                row,
                fragment,
                name
            );
        }
        build.unresolved_fragments += parsed.unresolved.len();

        let equipped = if parsed.ids.is_empty() {
            previous_equipped(name, prior_unit, &item_ids)
        } else {
            parsed.ids
        };

        let empty = FlagMap::new();
        let prior_prereq = prior_unit.map_or(&empty, |u| &u.prereq);
        let prior_access = prior_unit.map_or(&empty, |u| &u.access);

        let unit = Unit {
            id,
            name: name.to_string(),
            factions: read_factions(sheet, cols::FACTIONS, cols::HEADER_ROW, row),
            prereq: merge_flags(prior_prereq, read_flags(sheet, cols::WEAPONS, row)),
            access: merge_flags(prior_access, read_flags(sheet, cols::ACCESS, row)),
            unique: sheet.is_flagged(cols::UNIQUE, row),
            cost: read_cost(sheet, cols::COST, row)
                .or_else(|| prior_unit.map(|u| u.cost))
                .unwrap_or(0),
            equipped,
        };
        log::debug!("{}!{}: unit '{}' -> {}", sheet.name(), row, unit.name, unit.id);
        build.units.push(unit);
    }

    log::info!("Built {} units from sheet '{}'", build.units.len(), sheet.name());
    build
}

/// Last run's equipped list, minus ids that no longer name an item
fn previous_equipped(name: &str, prior: Option<&Unit>, item_ids: &HashSet<&str>) -> Vec<String> {
    let Some(prior) = prior else {
        return Vec::new();
    };

    let (kept, dropped): (Vec<String>, Vec<String>) = prior
        .equipped
        .iter()
        .cloned()
        .partition(|id| item_ids.contains(id.as_str()));

    if !dropped.is_empty() {
        log::warn!(
            "Unit '{}': dropping equipped ids no longer in items: {}",
            name,
            dropped.join(", ")
        );
    }

    kept
}
