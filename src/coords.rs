//! Coordinate label math
//!
//! Rows are numbered from the bottom of the real board starting at 1.
//! Columns are lettered from `A`, skipping `I`.

use crate::models::ParsedDiagram;

/// Column letter that Go coordinate alphabets leave out
pub const SKIPPED_LETTER: char = 'I';

/// Number printed beside diagram row `row`.
///
/// `top` is the 0-based board row of the diagram's top row.
pub fn row_label(top: i64, row: usize) -> i64 {
    top - row as i64 + 1
}

/// Letter printed above diagram column `col`.
///
/// `left` is the 0-based board column of the diagram's leftmost column.
/// Returns `None` when the column falls outside `A`..`Z`.
///
/// # Examples
///
/// ```
/// use goban::coords::column_letter;
///
/// assert_eq!(column_letter(0, 0), Some('A'));
/// assert_eq!(column_letter(0, 7), Some('H'));
/// assert_eq!(column_letter(0, 8), Some('J'));
/// assert_eq!(column_letter(0, 18), Some('T'));
/// ```
pub fn column_letter(left: i64, col: usize) -> Option<char> {
    let mut index = left + col as i64 + 1;
    if index >= 9 {
        index += 1;
    }
    if !(1..=26).contains(&index) {
        return None;
    }
    char::from_u32(64 + index as u32)
}

/// Row labels for every diagram row, top to bottom.
///
/// Empty unless the diagram resolved its coordinates.
pub fn row_labels(diagram: &ParsedDiagram) -> Vec<i64> {
    match (diagram.coordinates, diagram.top_coordinate) {
        (true, Some(top)) => (0..diagram.height).map(|row| row_label(top, row)).collect(),
        _ => Vec::new(),
    }
}

/// Column letters for every diagram column, left to right.
///
/// Empty unless the diagram resolved its coordinates.
pub fn column_letters(diagram: &ParsedDiagram) -> Vec<Option<char>> {
    match (diagram.coordinates, diagram.left_coordinate) {
        (true, Some(left)) => (0..diagram.width).map(|col| column_letter(left, col)).collect(),
        _ => Vec::new(),
    }
}
