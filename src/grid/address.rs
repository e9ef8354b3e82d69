//! Spreadsheet cell addresses
//!
//! Converts between zero-based `(row, col)` pairs and `A1`-style labels using
//! bijective base-26 column letters (`A`..`Z`, `AA`..`ZZ`, `AAA`, ...).

use super::cell::CellRef;

/// Convert a zero-based column index to its letter label (0 -> "A", 26 -> "AA")
pub fn column_label(col: usize) -> String {
    let mut buf = Vec::new();
    let mut col = col;
    loop {
        buf.push(b'A' + (col % 26) as u8);
        col /= 26;
        if col == 0 {
            break;
        }
        col -= 1;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}

/// Convert a letter label back to a zero-based column index
///
/// Accepts upper or lower case letters. Returns `None` for empty input,
/// non-letters, or labels that overflow `usize`.
pub fn column_index(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }

    let mut col: usize = 0;
    for ch in label.bytes() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() - b'A') as usize + 1;
        col = col.checked_mul(26)?.checked_add(digit)?;
    }
    Some(col - 1)
}

/// Format a cell position as an address string (row 0, col 1 -> "B1")
pub fn cell_address(row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), row + 1)
}

/// Parse an address string like "B3" into a cell reference
pub fn parse_address(address: &str) -> Option<CellRef> {
    let address = address.trim();
    let split = address
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)?;

    let (letters, digits) = address.split_at(split);
    let col = column_index(letters)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }

    Some(CellRef::new(row - 1, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_label_single_letters() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(1), "B");
        assert_eq!(column_label(25), "Z");
    }

    #[test]
    fn test_column_label_rollover() {
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(51), "AZ");
        assert_eq!(column_label(52), "BA");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");
    }

    #[test]
    fn test_column_index_inverse() {
        assert_eq!(column_index("A"), Some(0));
        assert_eq!(column_index("z"), Some(25));
        assert_eq!(column_index("AA"), Some(26));
        assert_eq!(column_index("ZZ"), Some(701));
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
    }

    #[test]
    fn test_column_roundtrip_two_letter_range() {
        for col in 0..676 {
            assert_eq!(column_index(&column_label(col)), Some(col), "col {}", col);
        }
    }

    #[test]
    fn test_cell_address() {
        assert_eq!(cell_address(0, 0), "A1");
        assert_eq!(cell_address(9, 2), "C10");
        assert_eq!(cell_address(0, 26), "AA1");
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("A1"), Some(CellRef::new(0, 0)));
        assert_eq!(parse_address("c10"), Some(CellRef::new(9, 2)));
        assert_eq!(parse_address("AA3"), Some(CellRef::new(2, 26)));
        assert_eq!(parse_address("A0"), None);
        assert_eq!(parse_address("12"), None);
        assert_eq!(parse_address("B"), None);
        assert_eq!(parse_address("B2x"), None);
    }
}
