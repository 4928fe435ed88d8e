//! Card catalog records and the rules for deriving them from the workbook

pub mod equipped;
pub mod fields;
pub mod items;
pub mod layout;
pub mod models;
pub mod naming;
pub mod store;
pub mod units;

// Re-export commonly used types
pub use equipped::{ItemLookup, parse_equipped};
pub use items::build_items;
pub use models::{FlagMap, Item, Unit};
pub use units::{UnitsBuild, build_units};
