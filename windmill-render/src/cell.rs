//! Spreadsheet A1 cell references

const ALPHABET: usize = 26;

/// Column letters for a 0-based column: A..Z, AA..ZZ, AAA..
pub fn column_name(column: usize) -> String {
    let mut rest = column;
    let mut len = 1;
    let mut size = ALPHABET;
    while rest >= size {
        rest -= size;
        len += 1;
        size *= ALPHABET;
    }

    let mut letters = vec![b'A'; len];
    for slot in letters.iter_mut().rev() {
        *slot = b'A' + (rest % ALPHABET) as u8;
        rest /= ALPHABET;
    }
    String::from_utf8_lossy(&letters).into_owned()
}

/// Reference to a 0-based (row, column) cell, e.g. (0, 0) -> "A1"
pub fn cell_ref(row: usize, column: usize) -> String {
    format!("{}{}", column_name(column), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_columns() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(25), "Z");
    }

    #[test]
    fn test_multi_letter_columns() {
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(51), "AZ");
        assert_eq!(column_name(52), "BA");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(0, 0), "A1");
        assert_eq!(cell_ref(2, 1), "B3");
        assert_eq!(cell_ref(9, 34), "AI10");
    }
}
