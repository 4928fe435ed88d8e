//! Open the workbook and read individual cells from its sheets

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};

use super::columns::column_index;

/// An opened `.xlsx` workbook
pub struct Workbook {
    path: PathBuf,
    inner: Xlsx<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inner: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Names of all sheets in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    /// Load a sheet by its exact name
    pub fn sheet(&mut self, name: &str) -> Result<Sheet> {
        let names = self.sheet_names();
        if !names.iter().any(|n| n == name) {
            bail!(
                "Sheet '{}' not found in {} (available: {})",
                name,
                self.path.display(),
                names.join(", ")
            );
        }

        let range = self
            .inner
            .worksheet_range(name)
            .with_context(|| format!("Failed to read sheet: {}", name))?;

        log::debug!(
            "Loaded sheet '{}' ({} rows x {} columns)",
            name,
            range.height(),
            range.width()
        );

        Ok(Sheet::new(name, range))
    }
}

/// A single worksheet addressed by column letter and 1-based row number
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    range: Range<Data>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last used row number (1-based), 0 for an empty sheet
    pub fn last_row(&self) -> u32 {
        self.range.end().map(|(row, _)| row + 1).unwrap_or(0)
    }

    /// Raw cell value, None when the cell is outside the used range
    pub fn cell(&self, col: &str, row: u32) -> Option<&Data> {
        if row == 0 {
            return None;
        }
        let col = column_index(col)?;
        self.range.get_value((row - 1, col))
    }

    /// Cell rendered as text, empty for blank or non-textual cells
    pub fn text(&self, col: &str, row: u32) -> String {
        self.cell(col, row).map(cell_to_string).unwrap_or_default()
    }

    /// Whether the cell holds the flag marker "x" (case-insensitive, surrounding whitespace ignored)
    pub fn is_flagged(&self, col: &str, row: u32) -> bool {
        matches!(self.cell(col, row), Some(Data::String(s)) if s.trim().eq_ignore_ascii_case("x"))
    }

    /// Numeric cell value; text that looks like a number does not count
    pub fn number(&self, col: &str, row: u32) -> Option<f64> {
        match self.cell(col, row)? {
            Data::Int(i) => Some(*i as f64),
            Data::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Whole-number cell value, accepting integer text such as " 2 "
    pub fn integer(&self, col: &str, row: u32) -> Option<i64> {
        match self.cell(col, row)? {
            Data::Int(i) => Some(*i),
            Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            Data::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Check if it's a whole number
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
