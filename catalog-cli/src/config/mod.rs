//! Run configuration: where the workbook and JSON files live
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, and command-line flags (or their environment variables).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::layout;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "update-db.toml";

pub const DEFAULT_WORKBOOK: &str = "All cards wave 1-9 21_02_2024 with categories for builder (2).xlsx";
pub const DEFAULT_ITEMS_JSON: &str = "db/items.json";
pub const DEFAULT_UNITS_JSON: &str = "db/units.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub workbook: PathBuf,
    pub items_json: PathBuf,
    pub units_json: PathBuf,
    pub items_sheet: String,
    pub units_sheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            items_json: PathBuf::from(DEFAULT_ITEMS_JSON),
            units_json: PathBuf::from(DEFAULT_UNITS_JSON),
            items_sheet: layout::items::SHEET.to_string(),
            units_sheet: layout::units::SHEET.to_string(),
        }
    }
}

/// Command-line values that replace whatever the config file says
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub workbook: Option<PathBuf>,
    pub items_json: Option<PathBuf>,
    pub units_json: Option<PathBuf>,
}

impl Config {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    log::debug!("No {} found, using default paths", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::info!("Using config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(workbook) = overrides.workbook {
            self.workbook = workbook;
        }
        if let Some(items_json) = overrides.items_json {
            self.items_json = items_json;
        }
        if let Some(units_json) = overrides.units_json {
            self.units_json = units_json;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.items_json, PathBuf::from("db/items.json"));
        assert_eq!(config.units_json, PathBuf::from("db/units.json"));
        assert_eq!(config.items_sheet, "Items (2)");
        assert_eq!(config.units_sheet, "Units");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(r#"workbook = "cards.xlsx""#).unwrap();

        assert_eq!(config.workbook, PathBuf::from("cards.xlsx"));
        assert_eq!(config.items_json, PathBuf::from(DEFAULT_ITEMS_JSON));
        assert_eq!(config.units_sheet, "Units");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml_str(r#"workbok = "cards.xlsx""#).is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = Config::from_toml_str(
            r#"
            workbook = "cards.xlsx"
            items_json = "out/items.json"
            "#,
        )
        .unwrap()
        .with_overrides(Overrides {
            items_json: Some(PathBuf::from("cli/items.json")),
            ..Default::default()
        });

        assert_eq!(config.workbook, PathBuf::from("cards.xlsx"));
        assert_eq!(config.items_json, PathBuf::from("cli/items.json"));
        assert_eq!(config.units_json, PathBuf::from(DEFAULT_UNITS_JSON));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("update-db.toml");
        fs::write(&path, "units_sheet = \"Units v2\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.units_sheet, "Units v2");
    }
}
