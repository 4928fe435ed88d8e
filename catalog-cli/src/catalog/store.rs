//! Read the previous items.json / units.json and write the new ones

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::models::{Item, Unit};

/// Load the records written by the previous run
///
/// A missing or empty file means there is no previous run. A file that exists
/// but does not parse is an error, since ignoring it would silently reassign ids.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        log::info!("No previous output at {}, starting fresh", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let content = content.trim_start_matches('\u{FEFF}');
    if content.trim().is_empty() {
        log::warn!("{} is empty, treating as no previous output", path.display());
        return Ok(Vec::new());
    }

    let records: Vec<T> = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON records from {}", path.display()))?;
    log::info!("Loaded {} previous records from {}", records.len(), path.display());

    Ok(records)
}

/// Items ordered by primary label, then name
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| (&a.primary, &a.name).cmp(&(&b.primary, &b.name)));
}

/// Units ordered by name
pub fn sort_units(units: &mut [Unit]) {
    units.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Pretty JSON with two-space indentation and unescaped non-ASCII text
pub fn to_json<T: Serialize>(records: &[T]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize records")
}

/// Replace the file at `path` with the serialized records
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = to_json(records)?;
    fs::write(path, json).with_context(|| format!("Failed to write file: {}", path.display()))?;
    log::info!("Wrote {} records to {}", records.len(), path.display());

    Ok(())
}
