//! Column readers shared by the items and units builders

use crate::workbook::Sheet;

use super::layout::LabeledColumn;
use super::models::FlagMap;

/// Header labels of every flagged faction column, in column order
pub fn read_factions(sheet: &Sheet, columns: &[&str], header_row: u32, row: u32) -> Vec<String> {
    columns
        .iter()
        .filter(|col| sheet.is_flagged(col, row))
        .filter_map(|col| {
            let header = sheet.text(col, header_row);
            let header = header.trim();
            if header.is_empty() {
                log::debug!(
                    "{}!{}{} is flagged but column has no faction header",
                    sheet.name(),
                    col,
                    row
                );
                None
            } else {
                Some(header.to_string())
            }
        })
        .collect()
}

/// Every label of the column set mapped to its flag, blank cells false
pub fn read_flags(sheet: &Sheet, columns: &[LabeledColumn], row: u32) -> FlagMap {
    columns
        .iter()
        .map(|(col, label)| (label.to_string(), sheet.is_flagged(col, row)))
        .collect()
}

/// Labels of the flagged columns only, in column order
pub fn read_flagged_labels(sheet: &Sheet, columns: &[LabeledColumn], row: u32) -> Vec<String> {
    columns
        .iter()
        .filter(|(col, _)| sheet.is_flagged(col, row))
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Cost from the first priority column holding a usable number
///
/// Fractions are truncated. Negative numbers and text are skipped like blanks.
pub fn read_cost(sheet: &Sheet, columns: &[&str], row: u32) -> Option<u32> {
    columns.iter().find_map(|col| {
        sheet
            .number(col, row)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n.trunc().min(u32::MAX as f64) as u32)
    })
}

/// Overlay freshly read flags onto the previous run's mapping
///
/// Keys present in `fresh` overwrite the prior value (keeping the prior key's
/// position); prior keys outside the fresh column set are left untouched.
pub fn merge_flags(prior: &FlagMap, fresh: FlagMap) -> FlagMap {
    let mut merged = prior.clone();
    for (label, value) in fresh {
        merged.insert(label, value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::testing::SheetBuilder;
    use calamine::Data;

    const WEAPONS: &[LabeledColumn] = &[("T", "Melee"), ("U", "Pistol"), ("V", "Rifle")];

    fn flags(pairs: &[(&str, bool)]) -> FlagMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_read_factions_in_column_order() {
        let sheet = SheetBuilder::new("Items (2)")
            .text("D", 1, "BoS")
            .text("E", 1, "Caesar's Legion")
            .text("F", 1, "NCR")
            .flag("F", 2)
            .flag("D", 2)
            .build();

        assert_eq!(
            read_factions(&sheet, &["D", "E", "F"], 1, 2),
            vec!["BoS", "NCR"]
        );
    }

    #[test]
    fn test_read_factions_skips_blank_header() {
        let sheet = SheetBuilder::new("Units")
            .text("B", 2, "Raiders")
            .flag("B", 3)
            .flag("C", 3)
            .build();

        assert_eq!(read_factions(&sheet, &["B", "C"], 2, 3), vec!["Raiders"]);
    }

    #[test]
    fn test_read_flags_has_every_key() {
        let sheet = SheetBuilder::new("Items (2)").text("U", 2, " X ").build();

        assert_eq!(
            read_flags(&sheet, WEAPONS, 2),
            flags(&[("Melee", false), ("Pistol", true), ("Rifle", false)])
        );
    }

    #[test]
    fn test_read_flagged_labels() {
        let sheet = SheetBuilder::new("Items (2)").flag("V", 2).flag("T", 2).build();

        assert_eq!(read_flagged_labels(&sheet, WEAPONS, 2), vec!["Melee", "Rifle"]);
    }

    #[test]
    fn test_read_cost_priority_order() {
        let sheet = SheetBuilder::new("Items (2)")
            .set("BF", 2, Data::Float(15.0))
            .set("BD", 2, Data::Int(20))
            .text("BG", 2, "n/a")
            .build();

        assert_eq!(read_cost(&sheet, &["BG", "BF", "BD", "BE"], 2), Some(15));
    }

    #[test]
    fn test_read_cost_truncates_and_skips_negative() {
        let sheet = SheetBuilder::new("Units")
            .set("AT", 3, Data::Float(-4.0))
            .set("AU", 3, Data::Float(12.9))
            .build();

        assert_eq!(read_cost(&sheet, &["AT", "AU"], 3), Some(12));
        assert_eq!(read_cost(&sheet, &["AS", "AQ"], 3), None);
    }

    #[test]
    fn test_merge_flags_overwrites_only_fresh_keys() {
        let prior = flags(&[("Upgrades", true), ("Gear", false), ("Legacy", true)]);
        let fresh = flags(&[("Upgrades", false), ("Dog Items", true)]);

        let merged = merge_flags(&prior, fresh);

        assert_eq!(
            merged,
            flags(&[
                ("Upgrades", false),
                ("Gear", false),
                ("Legacy", true),
                ("Dog Items", true)
            ])
        );
        let order: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["Upgrades", "Gear", "Legacy", "Dog Items"]);
    }

    #[test]
    fn test_merge_flags_onto_empty_prior() {
        let fresh = flags(&[("Melee", true), ("Pistol", false)]);

        assert_eq!(merge_flags(&FlagMap::new(), fresh.clone()), fresh);
    }
}
