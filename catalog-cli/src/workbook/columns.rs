//! Spreadsheet column letter handling

/// Convert a column reference like "A", "Z", "AA" or "DG" to a 0-based index
///
/// Letters are case-insensitive. Returns None for an empty reference or one
/// containing anything other than ASCII letters.
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }

    Some(index - 1)
}
