pub const ALPHABET_SIZE: usize = 26;

pub type Table = [[u8; ALPHABET_SIZE]; ALPHABET_SIZE];

/// The full tableau. Row 0 is the plain alphabet, row `i` is the
/// alphabet cyclically left-shifted by `i` positions.
pub const TABLE: Table = build_table();

pub const fn build_table() -> Table {
    let mut table = [[0u8; ALPHABET_SIZE]; ALPHABET_SIZE];
    let mut row = 0;
    while row < ALPHABET_SIZE {
        let mut col = 0;
        while col < ALPHABET_SIZE {
            table[row][col] = b'A' + ((row + col) % ALPHABET_SIZE) as u8;
            col += 1;
        }
        row += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_is_plain_alphabet() {
        let table = build_table();
        for (col, c) in (b'A'..=b'Z').enumerate() {
            assert_eq!(table[0][col], c);
        }
    }

    #[test]
    fn test_shift_law_holds_for_every_cell() {
        let table = build_table();
        for row in 0..ALPHABET_SIZE {
            for col in 0..ALPHABET_SIZE {
                assert_eq!(table[row][col], b'A' + ((row + col) % ALPHABET_SIZE) as u8);
                assert_eq!(table[row][col], table[0][(row + col) % ALPHABET_SIZE]);
            }
        }
    }

    #[test]
    fn test_every_row_is_a_permutation() {
        for row in TABLE.iter() {
            let mut seen = [false; ALPHABET_SIZE];
            for c in row.iter() {
                assert!(c.is_ascii_uppercase());
                seen[(c - b'A') as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_const_table_matches_builder() {
        assert_eq!(TABLE, build_table());
    }
}
