//! Grammar primitives for board markup
//!
//! Every markup line starts with the `$$` sentinel. The first line may be a
//! header carrying options and/or a caption; a line made only of `|`, `+`
//! and `-` tokens is a horizontal border; anything else is a content row.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::HeaderOptions;

/// Prefix every markup line must start with
pub const SENTINEL: &str = "$$";

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\$\$(?P<options>(?P<color>[BW]?)(?P<coord>c?)(?P<size>[0-9]*)(?:m(?P<first>[0-9]+))?)(?:\s+(?P<caption>.*)|)$",
    )
    .expect("valid header regex")
});

static BORDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\$\s(?:[|+\-]\s*){2,}$").expect("valid border regex"));

static ILLEGAL_CHAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\sOW@QPXB#YZCSTM0-9?a-z,*+|_\-]").expect("valid markup charset regex")
});

static WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]{2} [A-Za-z0-9_]{2}").expect("valid words regex"));

/// How the first markup line should be treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderClass {
    /// Not a header; the line is parsed as an ordinary content row
    Void,
    /// No options, but the trailing text reads as a caption
    Caption(String),
    /// At least one option was given; trailing text (possibly empty) is the caption
    Options(HeaderOptions),
}

impl HeaderClass {
    /// Header options for a consumed line, `None` for [`HeaderClass::Void`].
    pub fn into_options(self) -> Option<HeaderOptions> {
        match self {
            HeaderClass::Void => None,
            HeaderClass::Caption(caption) => Some(HeaderOptions {
                caption,
                ..HeaderOptions::default()
            }),
            HeaderClass::Options(options) => Some(options),
        }
    }
}

/// Returns true if the line carries the `$$` sentinel.
pub fn is_markup_line(line: &str) -> bool {
    line.starts_with(SENTINEL)
}

/// Returns true for a full-width horizontal border line such as `$$ +-----+`.
///
/// The sentinel must be followed by whitespace and at least two border
/// tokens. Partial or diagonal borders are not recognized.
pub fn is_border_line(line: &str) -> bool {
    BORDER_RE.is_match(line)
}

/// Characters that draw a vertical boundary instead of emitting a field.
pub fn is_boundary_char(c: char) -> bool {
    matches!(c, '|' | '+' | '-')
}

/// Returns true if every character of `text` could appear in a content row.
pub fn is_legal_markup(text: &str) -> bool {
    !ILLEGAL_CHAR_RE.is_match(text)
}

/// Coarse prose detector: two runs of two word characters around a space.
///
/// # Examples
///
/// ```
/// use goban::grammar::looks_like_words;
///
/// assert!(looks_like_words("White to live"));
/// assert!(!looks_like_words("XXXXX"));
/// assert!(!looks_like_words("O X O"));
/// ```
pub fn looks_like_words(text: &str) -> bool {
    WORDS_RE.is_match(text)
}

/// Symbols of a content line with the sentinel and all whitespace removed.
pub fn content_symbols(line: &str) -> impl Iterator<Item = char> + '_ {
    line.chars().filter(|c| *c != '$' && !c.is_whitespace())
}

/// Decide whether the first markup line is a header, a caption, or a board row.
///
/// # Examples
///
/// ```
/// use goban::grammar::{classify_header, HeaderClass};
///
/// assert_eq!(classify_header("$$ . . ."), HeaderClass::Caption(". . .".to_string()));
/// assert_eq!(classify_header("$$ X O X"), HeaderClass::Void);
/// assert!(matches!(classify_header("$$Wc19m5"), HeaderClass::Options(_)));
/// ```
pub fn classify_header(line: &str) -> HeaderClass {
    let Some(caps) = HEADER_RE.captures(line) else {
        return classify_bare_text(line);
    };

    let caption = caps
        .name("caption")
        .map_or("", |m| m.as_str())
        .trim_end()
        .to_string();

    let has_options = caps.name("options").is_some_and(|m| !m.as_str().is_empty());
    if !has_options {
        if caption.is_empty() {
            return HeaderClass::Void;
        }
        if is_legal_markup(&caption) && !looks_like_words(&caption) {
            return HeaderClass::Void;
        }
        return HeaderClass::Caption(caption);
    }

    let board_size = caps
        .name("size")
        .and_then(|m| m.as_str().parse::<u32>().ok());
    let first_move = caps
        .name("first")
        .and_then(|m| m.as_str().parse::<i64>().ok());

    HeaderClass::Options(HeaderOptions {
        white_first: caps.name("color").is_some_and(|m| m.as_str() == "W"),
        coordinates: caps.name("coord").is_some_and(|m| m.as_str() == "c"),
        board_size,
        first_move,
        caption,
    })
}

/// Sentinel glued directly to prose, e.g. `$$White to live`.
///
/// Only text that reads as words is taken as a caption here; anything else
/// stays a content row.
fn classify_bare_text(line: &str) -> HeaderClass {
    let Some(rest) = line.strip_prefix(SENTINEL) else {
        return HeaderClass::Void;
    };
    let text = rest.trim();
    if looks_like_words(text) {
        HeaderClass::Caption(text.to_string())
    } else {
        HeaderClass::Void
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(line: &str) -> HeaderOptions {
        match classify_header(line) {
            HeaderClass::Options(o) => o,
            other => panic!("expected options for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_markup_line_requires_sentinel() {
        assert!(is_markup_line("$$ . . ."));
        assert!(is_markup_line("$$"));
        assert!(!is_markup_line(" $$ . . ."));
        assert!(!is_markup_line("$ . . ."));
    }

    #[test]
    fn test_border_line() {
        assert!(is_border_line("$$ ---------"));
        assert!(is_border_line("$$ +-------+"));
        assert!(is_border_line("$$ - - - -"));
        assert!(is_border_line("$$ |-|  "));
        assert!(!is_border_line("$$ -"));
        assert!(!is_border_line("$$---------"));
        assert!(!is_border_line("$$ | . . |"));
    }

    #[test]
    fn test_legal_markup() {
        assert!(is_legal_markup("O W @ Q P X B # Y Z C S T M"));
        assert!(is_legal_markup("0123456789 abcxyz ? , * + | _ -"));
        assert!(!is_legal_markup(". . ."));
        assert!(is_legal_markup("Black"));
        assert!(!is_legal_markup("Hello"));
        assert!(!is_legal_markup("A"));
    }

    #[test]
    fn test_looks_like_words() {
        assert!(looks_like_words("ab cd"));
        assert!(looks_like_words("a comment with words"));
        assert!(!looks_like_words("a b c"));
        assert!(!looks_like_words("ab c"));
        assert!(!looks_like_words("abcd"));
    }

    #[test]
    fn test_content_symbols_strip_sentinel_and_whitespace() {
        let symbols: String = content_symbols("$$ | X . O |\t").collect();
        assert_eq!(symbols, "|X.O|");
    }

    #[test]
    fn test_bare_sentinel_is_void() {
        assert_eq!(classify_header("$$"), HeaderClass::Void);
        assert_eq!(classify_header("$$   "), HeaderClass::Void);
    }

    #[test]
    fn test_legal_gibberish_is_void() {
        assert_eq!(classify_header("$$ X O X"), HeaderClass::Void);
        assert_eq!(classify_header("$$ ---------"), HeaderClass::Void);
        assert_eq!(classify_header("$$XXXXX"), HeaderClass::Void);
        assert_eq!(classify_header("$$ | X O , |"), HeaderClass::Void);
    }

    #[test]
    fn test_caption_with_illegal_characters() {
        assert_eq!(
            classify_header("$$ Black to play!"),
            HeaderClass::Caption("Black to play!".to_string())
        );
        assert_eq!(classify_header("$$ Ko"), HeaderClass::Caption("Ko".to_string()));
    }

    #[test]
    fn test_caption_of_legal_words() {
        // every character is legal markup, but it reads as prose
        assert_eq!(
            classify_header("$$ ko is bad   "),
            HeaderClass::Caption("ko is bad".to_string())
        );
    }

    #[test]
    fn test_caption_glued_to_sentinel() {
        assert_eq!(
            classify_header("$$White to live"),
            HeaderClass::Caption("White to live".to_string())
        );
        assert_eq!(classify_header("$$X.X.X"), HeaderClass::Void);
    }

    #[test]
    fn test_glued_legal_words_are_a_caption() {
        // two runs of two letters read as prose even though every
        // character is legal markup
        assert_eq!(classify_header("$$ab cd"), HeaderClass::Caption("ab cd".to_string()));
        assert_eq!(classify_header("$$ab c"), HeaderClass::Void);
        assert_eq!(classify_header("$$ a b c"), HeaderClass::Void);
    }

    #[test]
    fn test_full_options() {
        let o = options("$$Wc9m23 Problem 4");
        assert!(o.white_first);
        assert!(o.coordinates);
        assert_eq!(o.board_size, Some(9));
        assert_eq!(o.first_move, Some(23));
        assert_eq!(o.caption, "Problem 4");
    }

    #[test]
    fn test_single_options() {
        let o = options("$$B");
        assert!(!o.white_first);
        assert!(!o.coordinates);
        assert_eq!(o.board_size, None);
        assert_eq!(o.first_move, None);
        assert_eq!(o.caption, "");

        assert!(options("$$c").coordinates);
        assert_eq!(options("$$13").board_size, Some(13));
        assert_eq!(options("$$m7").first_move, Some(7));
    }

    #[test]
    fn test_options_keep_legal_caption() {
        // with options present the caption heuristic is skipped
        let o = options("$$B X O");
        assert_eq!(o.caption, "X O");
    }

    #[test]
    fn test_options_must_be_separated_from_caption() {
        // "Bxx" is not an option string; it stays a content row
        assert_eq!(classify_header("$$Bxx"), HeaderClass::Void);
    }

    #[test]
    fn test_oversized_numbers_are_ignored() {
        let o = options("$$c99999999999m99999999999999999999999");
        assert_eq!(o.board_size, None);
        assert_eq!(o.first_move, None);
        assert!(o.coordinates);
    }

    #[test]
    fn test_into_options() {
        assert_eq!(HeaderClass::Void.into_options(), None);
        let o = HeaderClass::Caption("hi there".to_string()).into_options().unwrap();
        assert_eq!(o.caption, "hi there");
        assert!(!o.white_first);
        assert!(!o.coordinates);
    }
}
