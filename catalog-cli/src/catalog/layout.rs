//! Fixed column layout of the catalog workbook
//!
//! Columns are referenced by letter because the sheets are positional; only
//! faction labels are taken from header text.

/// Column letter paired with the label it produces
pub type LabeledColumn = (&'static str, &'static str);

pub mod items {
    use super::LabeledColumn;

    pub const SHEET: &str = "Items (2)";
    pub const HEADER_ROW: u32 = 1;
    pub const FIRST_DATA_ROW: u32 = 2;

    pub const NAME: &str = "A";
    pub const PRIMARY: &str = "B";
    pub const CATEGORY: &str = "C";
    pub const UNIQUE: &str = "BA";

    pub const FACTIONS: &[&str] = &[
        "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    ];

    pub const WEAPONS: &[LabeledColumn] = &[
        ("T", "Melee"),
        ("U", "Pistol"),
        ("V", "Rifle"),
        ("W", "Heavy Weapon"),
        ("X", "Grenade"),
        ("Y", "Mines"),
    ];

    pub const CATEGORIES: &[LabeledColumn] = &[
        ("Z", "Chem"),
        ("AA", "Alcohol"),
        ("AB", "Food"),
        ("AC", "Armor"),
        ("AD", "Clothes"),
        ("AE", "Gear"),
        ("AF", "Mod"),
        ("AG", "Perks"),
        ("AH", "Leader"),
        ("AI", "Power Armor"),
        ("AJ", "Upgrades"),
        ("AK", "Wasteland Items"),
        ("AL", "Advanced Items"),
        ("AM", "High Tech Items"),
        ("AN", "Usable Items"),
        ("AO", "Robots Items"),
        ("AP", "Automatron Items"),
        ("AQ", "Creature Items"),
        ("AR", "Dog Items"),
        ("AS", "Super Mutant Items"),
        ("AT", "Standart Item"),
    ];

    /// Category flag that also marks an item as a mod
    pub const MOD_CATEGORY: &str = "Mod";

    pub const MOD_TARGETS: &[LabeledColumn] = &[
        ("BI", "Melee"),
        ("BJ", "Pistol"),
        ("BK", "Rifle"),
        ("BL", "Heavy Weapon"),
        ("BM", "Armor"),
        ("BN", "Power Armor"),
        ("BO", "Robot"),
        ("BP", "Animal"),
    ];

    /// Cost columns in priority order
    pub const COST: &[&str] = &["BG", "BF", "BD", "BE"];

    pub const FACTION_LIMITS: &[LabeledColumn] = &[
        ("CS", "BoS"),
        ("CT", "Caesar's Legion"),
        ("CU", "Creatures"),
        ("CV", "Enclave"),
        ("CW", "Institute"),
        ("CX", "NCR"),
        ("CY", "Raiders"),
        ("CZ", "Robots"),
        ("DA", "Super Mutants"),
        ("DB", "Survivors"),
        ("DC", "CoA"),
        ("DD", "Forged"),
        ("DE", "Gunners"),
        ("DF", "Railroad"),
        ("DG", "The Slog"),
    ];
}

pub mod units {
    use super::LabeledColumn;

    pub const SHEET: &str = "Units";
    pub const HEADER_ROW: u32 = 2;
    pub const FIRST_DATA_ROW: u32 = 3;

    pub const NAME: &str = "A";
    pub const EQUIPPED: &str = "AO";
    pub const UNIQUE: &str = "AX";

    pub const FACTIONS: &[&str] = &[
        "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
        "T", "U", "V",
    ];

    pub const WEAPONS: &[LabeledColumn] = &[
        ("W", "Melee"),
        ("X", "Pistol"),
        ("Y", "Rifle"),
        ("Z", "Heavy Weapon"),
        ("AA", "Grenade"),
        ("AB", "Power Armor"),
    ];

    pub const ACCESS: &[LabeledColumn] = &[
        ("AC", "Upgrades"),
        ("AD", "Wasteland Items"),
        ("AE", "Advanced Items"),
        ("AF", "High Tech Items"),
        ("AG", "Usable Items"),
        ("AH", "Robots Items"),
        ("AI", "Automatron Items"),
        ("AJ", "Creature Items"),
        ("AK", "Dog Items"),
        ("AL", "Super Mutant Items"),
        ("AM", "Standart Item"),
        ("AN", "Faction Items"),
    ];

    /// Cost columns in priority order
    pub const COST: &[&str] = &["AT", "AU", "AS", "AQ"];
}
