//! Board markup parser
//!
//! Turns `$$`-prefixed markup text into a [`ParsedDiagram`]. Malformed input
//! is an expected outcome: [`parse`] returns `None`, [`try_parse`] reports
//! which rule was violated.

use thiserror::Error;

use crate::grammar::{
    classify_header, content_symbols, is_border_line, is_boundary_char, is_markup_line,
    HeaderClass,
};
use crate::models::{Field, HeaderOptions, ParsedDiagram, Row};

/// Board size assumed for coordinate labels when nothing else pins it down
pub const DEFAULT_BOARD_SIZE: u32 = 19;

/// Reason a piece of text was rejected as board markup.
///
/// Line and row numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no markup lines found")]
    EmptyInput,
    #[error("line {line} does not start with '$$'")]
    NotMarkup { line: usize },
    #[error("row {row} has {found} fields, expected {expected}")]
    IrregularGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("diagram has no board rows")]
    EmptyBoard,
}

/// Parse board markup, returning `None` if the text is not valid markup.
///
/// # Examples
///
/// ```
/// use goban::parser::parse;
///
/// let diagram = parse("$$B Black to play\n$$ X O .\n$$ . X O").unwrap();
/// assert_eq!((diagram.width, diagram.height), (3, 2));
/// assert_eq!(diagram.caption.as_deref(), Some("Black to play"));
///
/// assert!(parse("not markup").is_none());
/// ```
pub fn parse(text: &str) -> Option<ParsedDiagram> {
    match try_parse(text) {
        Ok(diagram) => Some(diagram),
        Err(e) => {
            log::debug!("rejected board markup: {}", e);
            None
        }
    }
}

/// Parse board markup, reporting why it was rejected.
pub fn try_parse(text: &str) -> Result<ParsedDiagram, ParseError> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<(usize, &str)> = normalized
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    let Some(&(_, first)) = lines.first() else {
        return Err(ParseError::EmptyInput);
    };
    if let Some(&(line, _)) = lines.iter().find(|(_, l)| !is_markup_line(l)) {
        return Err(ParseError::NotMarkup { line });
    }

    let header = classify_header(first);
    if header == HeaderClass::Void {
        log::debug!("first line is not a header, parsing it as a row");
    }
    let options = header.into_options();
    let body = if options.is_some() { &lines[1..] } else { &lines[..] };

    let mut scanner = RowScanner::new();
    for (_, line) in body {
        if is_border_line(line) {
            scanner.border_line();
        } else {
            scanner.content_line(line);
        }
    }
    let board = scanner.finish();

    let Some(first_row) = board.first() else {
        return Err(ParseError::EmptyBoard);
    };
    let width = first_row.len();
    if let Some((index, row)) = board.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(ParseError::IrregularGrid {
            row: index + 1,
            expected: width,
            found: row.len(),
        });
    }

    Ok(build_diagram(board, options))
}

fn build_diagram(board: Vec<Row>, header: Option<HeaderOptions>) -> ParsedDiagram {
    let height = board.len();
    let width = board[0].len();
    let caption = header.as_ref().map(|h| h.caption.clone());
    let options = header.unwrap_or_default();

    let mut diagram = ParsedDiagram {
        board,
        width,
        height,
        white_first: options.white_first,
        move_delta: options.first_move.map_or(0, |m| m - 1),
        board_size: options.board_size,
        caption,
        coordinates: false,
        left_coordinate: None,
        top_coordinate: None,
    };

    if options.coordinates {
        let origin = infer_coordinates(&diagram.board, options.board_size);
        diagram.board_size = Some(origin.board_size);
        if let (Some(left), Some(top)) = (origin.left, origin.top) {
            diagram.coordinates = true;
            diagram.left_coordinate = Some(left);
            diagram.top_coordinate = Some(top);
        } else {
            log::debug!("coordinates requested but the diagram edges do not fix an origin");
        }
    }

    diagram
}

/// Row-scan cursor: either nothing is open yet, or a row is collecting fields.
#[derive(Debug)]
enum RowCursor {
    NoOpenRow,
    Open(Row),
}

/// Assembles rows from border and content lines in order.
#[derive(Debug)]
struct RowScanner {
    rows: Vec<Row>,
    cursor: RowCursor,
}

impl RowScanner {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            cursor: RowCursor::NoOpenRow,
        }
    }

    /// A full-width border closes the open row at the bottom and marks the
    /// top of the next one.
    fn border_line(&mut self) {
        self.cursor = match std::mem::replace(&mut self.cursor, RowCursor::NoOpenRow) {
            RowCursor::Open(mut row) if !row.is_empty() => {
                row.bottom = true;
                self.rows.push(row);
                RowCursor::Open(Row {
                    top: true,
                    ..Row::default()
                })
            }
            RowCursor::Open(mut row) => {
                row.top = true;
                RowCursor::Open(row)
            }
            RowCursor::NoOpenRow => RowCursor::Open(Row {
                top: true,
                ..Row::default()
            }),
        };
    }

    fn content_line(&mut self, line: &str) {
        let mut row = match std::mem::replace(&mut self.cursor, RowCursor::NoOpenRow) {
            RowCursor::Open(row) if row.is_empty() => row,
            RowCursor::Open(row) => {
                self.rows.push(row);
                Row::default()
            }
            RowCursor::NoOpenRow => Row::default(),
        };

        // `row` is empty here, so its last field is always from this line
        let mut next_is_left = false;
        for symbol in content_symbols(line) {
            if is_boundary_char(symbol) {
                if let Some(last) = row.fields.last_mut() {
                    last.right = true;
                }
                next_is_left = true;
                continue;
            }
            let mut field = Field::new(symbol);
            field.left = std::mem::take(&mut next_is_left);
            row.fields.push(field);
        }

        self.cursor = RowCursor::Open(row);
    }

    /// Close the scan. A trailing row without fields only carried a border flag.
    fn finish(mut self) -> Vec<Row> {
        if let RowCursor::Open(row) = self.cursor {
            if !row.is_empty() {
                self.rows.push(row);
            }
        }
        self.rows
    }
}

/// Where a partial diagram sits on the real board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateOrigin {
    pub board_size: u32,
    /// 0-based board column of the leftmost diagram column
    pub left: Option<i64>,
    /// 0-based board row (counted from the bottom) of the top diagram row
    pub top: Option<i64>,
}

/// Infer the coordinate origin from which board edges are drawn.
///
/// `requested_size` of `None` or `0` falls back to the width (both side
/// edges drawn), the height (top and bottom drawn), or 19.
///
/// `board` must be non-empty and rectangular.
pub fn infer_coordinates(board: &[Row], requested_size: Option<u32>) -> CoordinateOrigin {
    let height = board.len();
    let width = board.first().map_or(0, Row::len);

    let first_row = board.first().map_or(&[][..], |r| r.fields.as_slice());
    let left_edge = first_row.first().is_some_and(|f| f.left);
    let right_edge = first_row.last().is_some_and(|f| f.right);
    let top_edge = board.first().is_some_and(|r| r.top);
    let bottom_edge = board.last().is_some_and(|r| r.bottom);

    let board_size = match requested_size.filter(|&s| s > 0) {
        Some(size) => size,
        None if left_edge && right_edge => width as u32,
        None if top_edge && bottom_edge => height as u32,
        None => DEFAULT_BOARD_SIZE,
    };

    let left = if left_edge {
        Some(0)
    } else if right_edge {
        Some(i64::from(board_size) - width as i64)
    } else {
        None
    };

    let top = if top_edge {
        Some(i64::from(board_size) - 1)
    } else if bottom_edge {
        Some(height as i64 - 1)
    } else {
        None
    };

    CoordinateOrigin {
        board_size,
        left,
        top,
    }
}
