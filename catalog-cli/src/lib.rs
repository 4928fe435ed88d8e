//! Convert the card catalog workbook into the deck builder's JSON datasets
//!
//! One pass: load the previous `items.json` / `units.json`, read the
//! "Items (2)" and "Units" sheets, rebuild every record (keeping ids and
//! hand-curated fields from the previous output) and write both files back
//! sorted.

pub mod catalog;
pub mod config;
pub mod pipeline;
pub mod workbook;

pub use config::Config;
pub use pipeline::{RunSummary, run};
