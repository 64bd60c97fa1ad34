use crate::error::{PlateBatchError, Result};

const ALPHABET_LEN: u32 = 26;

/// Row index of a well label, `A` = 1. Case-insensitive.
pub fn row_from_well(well: &str) -> Result<u32> {
    match well.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {
            Ok(c.to_ascii_lowercase() as u32 - 'a' as u32 + 1)
        }
        _ => Err(PlateBatchError::parse(
            well,
            "well label must start with a row letter",
        )),
    }
}

/// Column number of a well label, `B02` = 2.
pub fn column_from_well(well: &str) -> Result<u32> {
    let digits = well.get(1..).unwrap_or_default();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PlateBatchError::parse(
            well,
            "well label must end with a column number",
        ));
    }
    let column: u32 = digits
        .parse()
        .map_err(|_| PlateBatchError::parse(well, "column number out of range"))?;
    if column == 0 {
        return Err(PlateBatchError::parse(well, "column numbers start at 1"));
    }
    Ok(column)
}

/// Well label for a 1-based row and column, e.g. (2, 2) -> `B02`.
pub fn well_from_row_column(row: u32, column: u32) -> Result<String> {
    if row == 0 || row > ALPHABET_LEN {
        return Err(PlateBatchError::parse(
            format!("row {row}"),
            "row must be between 1 and 26",
        ));
    }
    if column == 0 {
        return Err(PlateBatchError::parse(
            format!("column {column}"),
            "column numbers start at 1",
        ));
    }
    let letter = char::from(b'A' + (row - 1) as u8);
    Ok(format!("{letter}{column:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_rows_decode() {
        assert_eq!(row_from_well("p24").unwrap(), 16);
    }

    #[test]
    fn three_digit_columns_keep_their_width() {
        assert_eq!(well_from_row_column(1, 100).unwrap(), "A100");
        assert_eq!(column_from_well("A100").unwrap(), 100);
    }

    #[test]
    fn row_past_z_is_rejected() {
        assert!(well_from_row_column(27, 1).is_err());
    }
}
