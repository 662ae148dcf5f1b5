//! Piece symbol lookup
//!
//! Maps each markup symbol to what gets drawn on its intersection. The
//! table is data only; the renderer decides how each variant looks.

use serde::Serialize;

/// Stone colour of a bitmap in the stone cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneColor {
    White,
    Black,
    /// Half black, half white: a stone of unspecified colour
    Both,
}

/// Red annotation drawn on top of a stone or an empty point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Circle,
    Square,
    Triangle,
    Cross,
}

/// Pieces with their own drawing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Special {
    /// `*`
    Composite,
    /// `1`..`9`, `0` = 10; colour follows move parity
    Numbered(u8),
    /// `?`
    Territory,
    /// `a`..`z`
    Letter(char),
    /// `,`
    StarPoint,
}

/// Everything a single symbol asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PieceStyle {
    pub stone: Option<StoneColor>,
    pub mark: Option<Mark>,
    pub special: Option<Special>,
}

const STONES: &[(&str, StoneColor)] = &[
    ("OW@QP", StoneColor::White),
    ("XB#YZ", StoneColor::Black),
];

const MARKS: &[(&str, Mark)] = &[
    ("BWC", Mark::Circle),
    ("#@S", Mark::Square),
    ("YQT", Mark::Triangle),
    ("ZPM", Mark::Cross),
];

/// Symbol that suppresses the board lines under it
pub const BLANK: char = '_';

impl PieceStyle {
    /// Look up a symbol. Unknown symbols draw nothing beyond the board lines.
    ///
    /// A symbol gets at most one mark or one special treatment, never both.
    ///
    /// # Examples
    ///
    /// ```
    /// use goban::pieces::{Mark, PieceStyle, Special, StoneColor};
    ///
    /// let style = PieceStyle::of('B');
    /// assert_eq!(style.stone, Some(StoneColor::Black));
    /// assert_eq!(style.mark, Some(Mark::Circle));
    ///
    /// assert_eq!(PieceStyle::of('0').special, Some(Special::Numbered(10)));
    /// assert_eq!(PieceStyle::of('.'), PieceStyle::default());
    /// ```
    pub fn of(piece: char) -> Self {
        let stone = lookup(STONES, piece);
        let mark = lookup(MARKS, piece);
        let special = if mark.is_some() {
            None
        } else {
            special(piece)
        };
        Self {
            stone,
            mark,
            special,
        }
    }

    /// Returns true if this symbol draws nothing of its own
    pub fn is_plain(&self) -> bool {
        self.stone.is_none() && self.mark.is_none() && self.special.is_none()
    }
}

/// Whether board lines are drawn through this symbol's intersection
pub fn draws_lines(piece: char) -> bool {
    piece != BLANK
}

fn lookup<T: Copy>(table: &[(&str, T)], piece: char) -> Option<T> {
    table
        .iter()
        .find(|(symbols, _)| symbols.contains(piece))
        .map(|&(_, value)| value)
}

fn special(piece: char) -> Option<Special> {
    match piece {
        '*' => Some(Special::Composite),
        '0' => Some(Special::Numbered(10)),
        '1'..='9' => Some(Special::Numbered(piece as u8 - b'0')),
        '?' => Some(Special::Territory),
        'a'..='z' => Some(Special::Letter(piece)),
        ',' => Some(Special::StarPoint),
        _ => None,
    }
}

/// Colour of a numbered stone: odd moves belong to the first player.
pub fn numbered_stone_color(value: u8, white_first: bool) -> StoneColor {
    let odd = value % 2 == 1;
    if odd != white_first {
        StoneColor::Black
    } else {
        StoneColor::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_stones() {
        for piece in ['O', 'W', '@', 'Q', 'P'] {
            assert_eq!(PieceStyle::of(piece).stone, Some(StoneColor::White), "{}", piece);
        }
        for piece in ['X', 'B', '#', 'Y', 'Z'] {
            assert_eq!(PieceStyle::of(piece).stone, Some(StoneColor::Black), "{}", piece);
        }
        assert_eq!(PieceStyle::of('O').mark, None);
        assert_eq!(PieceStyle::of('X').mark, None);
    }

    #[test]
    fn test_marks() {
        let cases = [
            ('B', Mark::Circle),
            ('W', Mark::Circle),
            ('C', Mark::Circle),
            ('#', Mark::Square),
            ('@', Mark::Square),
            ('S', Mark::Square),
            ('Y', Mark::Triangle),
            ('Q', Mark::Triangle),
            ('T', Mark::Triangle),
            ('Z', Mark::Cross),
            ('P', Mark::Cross),
            ('M', Mark::Cross),
        ];
        for (piece, mark) in cases {
            assert_eq!(PieceStyle::of(piece).mark, Some(mark), "{}", piece);
            assert_eq!(PieceStyle::of(piece).special, None, "{}", piece);
        }
        assert_eq!(PieceStyle::of('C').stone, None);
        assert_eq!(PieceStyle::of('S').stone, None);
        assert_eq!(PieceStyle::of('T').stone, None);
        assert_eq!(PieceStyle::of('M').stone, None);
    }

    #[test]
    fn test_specials() {
        assert_eq!(PieceStyle::of('*').special, Some(Special::Composite));
        assert_eq!(PieceStyle::of('?').special, Some(Special::Territory));
        assert_eq!(PieceStyle::of(',').special, Some(Special::StarPoint));
        assert_eq!(PieceStyle::of('k').special, Some(Special::Letter('k')));
        for (i, piece) in ('1'..='9').enumerate() {
            assert_eq!(PieceStyle::of(piece).special, Some(Special::Numbered(i as u8 + 1)));
        }
        assert_eq!(PieceStyle::of('0').special, Some(Special::Numbered(10)));
    }

    #[test]
    fn test_plain_symbols() {
        for piece in ['.', '_', '+', '|', '-', 'A', '!', 'é', '٣'] {
            assert!(PieceStyle::of(piece).is_plain(), "{}", piece);
        }
    }

    #[test]
    fn test_blank_suppresses_lines() {
        assert!(!draws_lines('_'));
        assert!(draws_lines('.'));
        assert!(draws_lines('X'));
    }

    #[test]
    fn test_numbered_stone_color() {
        assert_eq!(numbered_stone_color(1, false), StoneColor::Black);
        assert_eq!(numbered_stone_color(2, false), StoneColor::White);
        assert_eq!(numbered_stone_color(10, false), StoneColor::White);
        assert_eq!(numbered_stone_color(1, true), StoneColor::White);
        assert_eq!(numbered_stone_color(10, true), StoneColor::Black);
    }
}
