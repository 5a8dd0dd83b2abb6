//! Bracket matching over text snapshots
//!
//! Four independent contracts share the bracket table below:
//! - [`match_at`] finds the structural partner of one bracket with a
//!   single-character-class depth counter
//! - [`caret_match`] applies the before-caret-then-after-caret lookup an
//!   editor uses for highlighting
//! - [`scan_document`] pairs every bracket in a text with a tolerant stack
//! - [`is_balanced`] is the strict stack check
//!
//! All offsets are `char` offsets. Nothing here fails: "no partner" and
//! "unbalanced" are ordinary return values.

mod caret;
mod document;
mod scan;

pub use caret::{caret_match, caret_match_within, column_at, guide_column, CaretMatch};
pub use document::{find_all_pairs, find_unmatched, is_balanced, scan_document, BracketReport};
pub use scan::{match_at, match_at_within};

pub(crate) use caret::caret_match_chars;
pub(crate) use document::{is_balanced_chars, scan_chars};
pub(crate) use scan::scan_limit;

/// Opening and closing bracket characters
pub const BRACKET_PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// A matched opener/closer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BracketPair {
    /// Offset of `(`, `[` or `{`
    pub open: usize,
    /// Offset of the corresponding `)`, `]` or `}`
    pub close: usize,
}

impl BracketPair {
    /// Create a pair
    pub fn new(open: usize, close: usize) -> Self {
        Self { open, close }
    }

    /// Build a pair from two bracket offsets in either order
    pub fn ordered(a: usize, b: usize) -> Self {
        Self::new(a.min(b), a.max(b))
    }
}

/// Check whether a char is one of `()[]{}`
pub fn is_bracket(ch: char) -> bool {
    BRACKET_PAIRS.iter().any(|&(open, close)| ch == open || ch == close)
}

/// Closing partner of an opener
pub fn closer_for(open: char) -> Option<char> {
    BRACKET_PAIRS.iter().find(|&&(o, _)| o == open).map(|&(_, c)| c)
}

/// Opening partner of a closer
pub fn opener_for(close: char) -> Option<char> {
    BRACKET_PAIRS.iter().find(|&&(_, c)| c == close).map(|&(o, _)| o)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_table() {
        for ch in "()[]{}".chars() {
            assert!(is_bracket(ch));
        }
        assert!(!is_bracket('<'));
        assert!(!is_bracket('a'));

        assert_eq!(closer_for('('), Some(')'));
        assert_eq!(closer_for('{'), Some('}'));
        assert_eq!(closer_for(')'), None);
        assert_eq!(opener_for(']'), Some('['));
        assert_eq!(opener_for('['), None);
    }

    #[test]
    fn test_pair_ordered() {
        assert_eq!(BracketPair::ordered(9, 2), BracketPair::new(2, 9));
        assert_eq!(BracketPair::ordered(2, 9), BracketPair::new(2, 9));
    }
}
