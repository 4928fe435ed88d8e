//! Build item records from the Items sheet

use indexmap::IndexMap;

use crate::workbook::Sheet;

use super::fields::{read_cost, read_factions, read_flagged_labels, read_flags};
use super::layout::items as cols;
use super::models::Item;
use super::naming::IdAllocator;

/// Build one item per named row, carrying ids and costs over from `prior`
///
/// Records come back in sheet order; sorting is left to the writer.
pub fn build_items(sheet: &Sheet, prior: &[Item]) -> Vec<Item> {
    let mut ids = IdAllocator::new(prior);
    let mut items = Vec::new();

    for row in cols::FIRST_DATA_ROW..=sheet.last_row() {
        let name = sheet.text(cols::NAME, row);
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let assigned = ids.assign(name);
        let item = build_item(sheet, row, name, assigned.id, assigned.prior);
        log::debug!("{}!{}: item '{}' -> {}", sheet.name(), row, item.name, item.id);
        items.push(item);
    }

    log::info!("Built {} items from sheet '{}'", items.len(), sheet.name());
    items
}

fn build_item(sheet: &Sheet, row: u32, name: &str, id: String, previous: Option<&Item>) -> Item {
    let primary = sheet.text(cols::PRIMARY, row).trim().to_string();
    let category = sheet.text(cols::CATEGORY, row).trim().to_string();

    let cats = read_flags(sheet, cols::CATEGORIES, row);
    let is_mod = primary.eq_ignore_ascii_case("mod")
        || cats.get(cols::MOD_CATEGORY).copied().unwrap_or(false);

    let cost = read_cost(sheet, cols::COST, row)
        .or_else(|| previous.map(|p| p.cost))
        .unwrap_or(0);

    Item {
        id,
        name: name.to_string(),
        primary,
        category,
        cost,
        factions: read_factions(sheet, cols::FACTIONS, cols::HEADER_ROW, row),
        weapon: read_flags(sheet, cols::WEAPONS, row),
        cats,
        is_mod,
        mod_targets: read_flagged_labels(sheet, cols::MOD_TARGETS, row),
        unique: sheet.is_flagged(cols::UNIQUE, row),
        faction_limits: read_faction_limits(sheet, row),
    }
}

/// Per-faction limits; blank or non-integer cells are left out
fn read_faction_limits(sheet: &Sheet, row: u32) -> IndexMap<String, i64> {
    cols::FACTION_LIMITS
        .iter()
        .filter_map(|(col, label)| sheet.integer(col, row).map(|n| (label.to_string(), n)))
        .collect()
}
