//! Read-only access to the catalog workbook
//!
//! Cells are addressed the way the spreadsheet authors see them: column
//! letters ("A", "AQ", "DG") and 1-based row numbers.

mod columns;
mod reader;

pub use columns::column_index;
pub use reader::{Sheet, Workbook};

#[cfg(test)]
pub(crate) use reader::testing;
