//! Spreadsheet cell coordinate in A1 notation.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    /// The upper-left cell of a sheet.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Creates a coordinate from zero-based indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Column letters for a zero-based column index (`0 -> A`, `26 -> AA`).
    pub fn column_letters(col: usize) -> String {
        let mut letters = Vec::new();
        let mut n = col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        String::from_utf8(letters).unwrap_or_default()
    }

    /// Zero-based column index for column letters (`A -> 0`, `CZ -> 103`).
    pub fn column_index(letters: &str) -> Result<usize, ValidationError> {
        if letters.is_empty() {
            return Err(ValidationError::empty_field("column"));
        }
        let mut n: usize = 0;
        for ch in letters.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(ValidationError::invalid_format(
                    "column",
                    format!("'{}' is not a column letter", ch),
                ));
            }
            let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            n = n
                .checked_mul(26)
                .and_then(|n| n.checked_add(digit))
                .ok_or_else(|| ValidationError::invalid_format("column", "column is out of range"))?;
        }
        Ok(n - 1)
    }
}

impl FromStr for CellRef {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ValidationError::invalid_format("cell", "missing row number"))?;
        let (letters, digits) = s.split_at(split);

        let col = Self::column_index(letters)?;
        let row: usize = digits
            .parse()
            .map_err(|_| ValidationError::invalid_format("cell", "row must be a number"))?;
        if row == 0 {
            return Err(ValidationError::invalid_format("cell", "rows start at 1"));
        }

        Ok(Self { row: row - 1, col })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a1_notation() {
        assert_eq!("A1".parse::<CellRef>().unwrap(), CellRef::ORIGIN);
        assert_eq!("C4".parse::<CellRef>().unwrap(), CellRef::new(3, 2));
        assert_eq!("cz3".parse::<CellRef>().unwrap(), CellRef::new(2, 103));
    }

    #[test]
    fn rejects_malformed_references() {
        assert!("".parse::<CellRef>().is_err());
        assert!("A".parse::<CellRef>().is_err());
        assert!("12".parse::<CellRef>().is_err());
        assert!("A0".parse::<CellRef>().is_err());
        assert!("A1B".parse::<CellRef>().is_err());
        assert!("Ä1".parse::<CellRef>().is_err());
    }

    #[test]
    fn overlong_column_is_rejected() {
        let letters = "Z".repeat(64);
        assert!(matches!(
            CellRef::column_index(&letters),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(format!("{}1", letters).parse::<CellRef>().is_err());
    }

    #[test]
    fn displays_a1_notation() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(9, 25).to_string(), "Z10");
        assert_eq!(CellRef::new(0, 26).to_string(), "AA1");
        assert_eq!(CellRef::new(2, 103).to_string(), "CZ3");
    }

    #[test]
    fn column_letters_and_index_agree() {
        for col in [0usize, 1, 25, 26, 51, 52, 103, 701, 702] {
            let letters = CellRef::column_letters(col);
            assert_eq!(CellRef::column_index(&letters).unwrap(), col);
        }
    }
}
