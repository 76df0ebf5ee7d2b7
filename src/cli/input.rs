#![cfg(feature = "std")]

//! Parsing of the `A5 H` style notation typed at the prompt.

use crate::board::Coordinate;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("too short - need column letter and row number (e.g. A5)")]
    TooShort,
    #[error("invalid column '{0}' - must be a letter A-J")]
    InvalidColumn(char),
    #[error("column '{0}' out of bounds - must be A-J")]
    ColumnOutOfRange(char),
    #[error("invalid row '{0}' - must be a number 1-10")]
    InvalidRow(String),
    #[error("row {0} out of bounds - must be 1-10")]
    RowOutOfRange(usize),
    #[error("invalid orientation '{0}' - use H or V")]
    InvalidOrientation(String),
}

/// Parse `A5` into the zero-based cell `(4, 0)`.
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(InputError::Empty)?.to_ascii_uppercase();
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err(InputError::TooShort);
    }
    if !col_ch.is_ascii_alphabetic() {
        return Err(InputError::InvalidColumn(col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(InputError::ColumnOutOfRange(col_ch));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| InputError::InvalidRow(row_str.to_string()))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(InputError::RowOutOfRange(row));
    }
    Ok(Coordinate::new(row - 1, col))
}

/// `H`/`V` in any case, horizontal when omitted.
pub fn parse_orientation(input: Option<&str>) -> Result<Orientation, InputError> {
    match input.map(str::trim) {
        None | Some("") => Ok(Orientation::Horizontal),
        Some(s) if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("horizontal") => {
            Ok(Orientation::Horizontal)
        }
        Some(s) if s.eq_ignore_ascii_case("v") || s.eq_ignore_ascii_case("vertical") => {
            Ok(Orientation::Vertical)
        }
        Some(s) => Err(InputError::InvalidOrientation(s.to_string())),
    }
}

/// Parse `A5 H` into an anchor and orientation.
pub fn parse_placement(input: &str) -> Result<(Coordinate, Orientation), InputError> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().ok_or(InputError::Empty)?)?;
    let orientation = parse_orientation(parts.next())?;
    Ok((coord, orientation))
}
