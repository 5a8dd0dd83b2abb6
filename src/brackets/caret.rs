//! Caret-relative bracket lookup and highlight guide columns

use unicode_width::UnicodeWidthChar;

use super::scan::{match_chars, scan_limit};
use crate::text::is_line_break;
use super::{is_bracket, BracketPair};

/// What sits next to the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretMatch {
    /// Neither neighbour of the caret is a bracket
    NoBracket,
    /// A bracket next to the caret and its partner
    Matched { at: usize, opposite: usize },
    /// A bracket next to the caret with no partner
    Bad { at: usize },
}

impl CaretMatch {
    /// Offset of the bracket found next to the caret
    pub fn at(&self) -> Option<usize> {
        match *self {
            CaretMatch::NoBracket => None,
            CaretMatch::Matched { at, .. } | CaretMatch::Bad { at } => Some(at),
        }
    }

    /// The matched pair, ordered open-then-close
    pub fn pair(&self) -> Option<BracketPair> {
        match *self {
            CaretMatch::Matched { at, opposite } => Some(BracketPair::ordered(at, opposite)),
            _ => None,
        }
    }

    /// Whether goto/select-matching-brace commands make sense here
    pub fn enables_navigation(&self) -> bool {
        matches!(self, CaretMatch::Matched { .. })
    }
}

/// Find the bracket pair to highlight for a caret with no selection
///
/// The caret sits between two chars. The char before it is tried first,
/// then the char after it; the first bracket with a partner wins. When a
/// bracket is adjacent but neither side has a partner, the first bracket
/// seen (before takes priority) is reported as bad.
pub fn caret_match(text: &str, caret: usize) -> CaretMatch {
    let chars: Vec<char> = text.chars().collect();
    caret_match_chars(&chars, caret, None)
}

/// Like [`caret_match`], with a per-bracket scan limit; zero means no limit
pub fn caret_match_within(text: &str, caret: usize, limit: usize) -> CaretMatch {
    let chars: Vec<char> = text.chars().collect();
    caret_match_chars(&chars, caret, scan_limit(limit))
}

pub(crate) fn caret_match_chars(chars: &[char], caret: usize, limit: Option<usize>) -> CaretMatch {
    let before = caret.checked_sub(1);
    let after = Some(caret);
    let mut first_bad = None;

    for at in [before, after].into_iter().flatten() {
        let Some(&ch) = chars.get(at) else { continue };
        if !is_bracket(ch) {
            continue;
        }
        if let Some(opposite) = match_chars(chars, at, limit) {
            return CaretMatch::Matched { at, opposite };
        }
        first_bad.get_or_insert(at);
    }

    match first_bad {
        Some(at) => CaretMatch::Bad { at },
        None => CaretMatch::NoBracket,
    }
}

/// Display column of a char offset within its line
///
/// Tabs advance to the next multiple of `tab_width`; other chars use
/// their terminal width. Offsets past the end are clamped to the end.
pub fn column_at(text: &str, pos: usize, tab_width: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    column_in(&chars, pos, tab_width)
}

/// Column for the indent highlight guide between a matched pair
pub fn guide_column(text: &str, pair: BracketPair, tab_width: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    column_in(&chars, pair.open, tab_width).min(column_in(&chars, pair.close, tab_width))
}

fn column_in(chars: &[char], pos: usize, tab_width: usize) -> usize {
    let pos = pos.min(chars.len());
    let tab_width = tab_width.max(1);
    let line_start = chars[..pos]
        .iter()
        .rposition(|&c| is_line_break(c))
        .map_or(0, |nl| nl + 1);

    chars[line_start..pos].iter().fold(0, |col, &c| {
        if c == '\t' {
            (col / tab_width + 1) * tab_width
        } else {
            col + c.width().unwrap_or(1)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_caret_has_priority() {
        // caret between ")" and "(": both match, the one before wins
        let text = "(a)(b)";
        assert_eq!(caret_match(text, 3), CaretMatch::Matched { at: 2, opposite: 0 });
    }

    #[test]
    fn test_after_caret_when_before_is_not_bracket() {
        let text = "x(a)";
        assert_eq!(caret_match(text, 1), CaretMatch::Matched { at: 1, opposite: 3 });
        assert_eq!(caret_match(text, 0), CaretMatch::NoBracket);
    }

    #[test]
    fn test_after_caret_when_before_is_unmatched() {
        // "(" before the caret has no partner, "(" after it does
        let text = "((a)";
        assert_eq!(caret_match(text, 1), CaretMatch::Matched { at: 1, opposite: 3 });
    }

    #[test]
    fn test_bad_bracket() {
        assert_eq!(caret_match("a(b", 2), CaretMatch::Bad { at: 1 });
        assert_eq!(caret_match("a)b", 1), CaretMatch::Bad { at: 1 });
        // both neighbours unmatched: the one before the caret is reported
        assert_eq!(caret_match("((", 1), CaretMatch::Bad { at: 0 });
    }

    #[test]
    fn test_caret_at_edges() {
        assert_eq!(caret_match("()", 0), CaretMatch::Matched { at: 0, opposite: 1 });
        assert_eq!(caret_match("()", 2), CaretMatch::Matched { at: 1, opposite: 0 });
        assert_eq!(caret_match("()", 5), CaretMatch::NoBracket);
        assert_eq!(caret_match("", 0), CaretMatch::NoBracket);
    }

    #[test]
    fn test_caret_limit() {
        assert_eq!(caret_match_within("(abc)", 0, 2), CaretMatch::Bad { at: 0 });
        assert_eq!(caret_match_within("(abc)", 0, 4), CaretMatch::Matched { at: 0, opposite: 4 });
        assert_eq!(caret_match_within("(abc)", 0, 0), CaretMatch::Matched { at: 0, opposite: 4 });
    }

    #[test]
    fn test_caret_match_helpers() {
        let matched = CaretMatch::Matched { at: 5, opposite: 1 };
        assert_eq!(matched.at(), Some(5));
        assert_eq!(matched.pair(), Some(BracketPair::new(1, 5)));
        assert!(matched.enables_navigation());

        let bad = CaretMatch::Bad { at: 2 };
        assert_eq!(bad.at(), Some(2));
        assert_eq!(bad.pair(), None);
        assert!(!bad.enables_navigation());

        assert_eq!(CaretMatch::NoBracket.at(), None);
    }

    #[test]
    fn test_column_at() {
        let text = "ab\n\tx(y)";
        assert_eq!(column_at(text, 0, 4), 0);
        assert_eq!(column_at(text, 2, 4), 2);
        assert_eq!(column_at(text, 3, 4), 0);
        assert_eq!(column_at(text, 4, 4), 4);
        assert_eq!(column_at(text, 5, 4), 5);
        assert_eq!(column_at(text, 100, 4), 8);
    }

    #[test]
    fn test_column_after_cr_and_crlf() {
        assert_eq!(column_at("ab\r(x)", 3, 4), 0);
        assert_eq!(column_at("ab\r\n  (x)", 6, 4), 2);
    }

    #[test]
    fn test_column_counts_wide_chars() {
        // CJK chars take two cells
        assert_eq!(column_at("中文(", 2, 4), 4);
    }

    #[test]
    fn test_guide_column() {
        let text = "    if (x) {\n        y();\n    }";
        let open = text.chars().position(|c| c == '{').unwrap();
        let close = text.chars().count() - 1;
        assert_eq!(guide_column(text, BracketPair::new(open, close), 4), 4);
    }
}
