//! The full read → merge → write pass

use std::collections::HashSet;

use anyhow::Result;

use crate::catalog::models::Record;
use crate::catalog::{Item, Unit, build_items, build_units, store};
use crate::config::Config;
use crate::workbook::Workbook;

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub items: usize,
    pub units: usize,
    /// Records whose name was not in the previous output
    pub new_items: usize,
    pub new_units: usize,
    /// Equipped-items fragments that matched no item
    pub unresolved_fragments: usize,
    /// False for a dry run
    pub written: bool,
}

/// Run the conversion once
///
/// Both sheets are read and both collections built before either file is
/// touched. With `dry_run` nothing is written.
pub fn run(config: &Config, dry_run: bool) -> Result<RunSummary> {
    let prior_items: Vec<Item> = store::load_records(&config.items_json)?;
    let prior_units: Vec<Unit> = store::load_records(&config.units_json)?;

    let (items_sheet, units_sheet) = {
        let mut workbook = Workbook::open(&config.workbook)?;
        log::info!("Opened workbook {}", config.workbook.display());
        (
            workbook.sheet(&config.items_sheet)?,
            workbook.sheet(&config.units_sheet)?,
        )
    };

    let mut items = build_items(&items_sheet, &prior_items);
    store::sort_items(&mut items);

    // Equipped names resolve against the sorted items
    let mut units_build = build_units(&units_sheet, &prior_units, &items);
    store::sort_units(&mut units_build.units);
    let units = units_build.units;

    let summary = RunSummary {
        items: items.len(),
        units: units.len(),
        new_items: count_new(&items, &prior_items),
        new_units: count_new(&units, &prior_units),
        unresolved_fragments: units_build.unresolved_fragments,
        written: !dry_run,
    };

    if dry_run {
        log::info!("Dry run, leaving output files untouched");
        return Ok(summary);
    }

    store::write_records(&config.items_json, &items)?;
    store::write_records(&config.units_json, &units)?;

    Ok(summary)
}

fn count_new<R: Record>(records: &[R], prior: &[R]) -> usize {
    let known: HashSet<&str> = prior.iter().map(|r| r.name()).collect();
    records.iter().filter(|r| !known.contains(r.name())).count()
}
