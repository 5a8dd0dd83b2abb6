//! Whole-document bracket enumeration and balance checking
//!
//! Two matching policies live here and must not be confused:
//! - [`scan_document`] is tolerant. A closer pairs with the nearest opener
//!   of its own type still on the stack, even if other openers were pushed
//!   after it, so `([)]` yields two pairs and nothing unmatched.
//! - [`is_balanced`] is strict. A closer must match the top of the stack,
//!   so `([)]` is unbalanced.

use super::{closer_for, opener_for, BracketPair};

/// Every pair and every unmatched bracket in a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketReport {
    /// Matched pairs, in the order their closers appear
    pub pairs: Vec<BracketPair>,
    /// Unmatched closers in text order, then leftover openers bottom-to-top
    pub unmatched: Vec<usize>,
}

impl BracketReport {
    /// Whether every bracket found a partner
    pub fn is_fully_matched(&self) -> bool {
        self.unmatched.is_empty()
    }

    /// Pair containing this offset as its opener or closer
    pub fn pair_at(&self, pos: usize) -> Option<BracketPair> {
        self.pairs
            .iter()
            .copied()
            .find(|pair| pair.open == pos || pair.close == pos)
    }
}

/// Pair every bracket in the text using tolerant matching
pub fn scan_document(text: &str) -> BracketReport {
    let chars: Vec<char> = text.chars().collect();
    scan_chars(&chars)
}

/// All matched bracket pairs (tolerant matching)
pub fn find_all_pairs(text: &str) -> Vec<BracketPair> {
    scan_document(text).pairs
}

/// Offsets of all brackets without a partner (tolerant matching)
pub fn find_unmatched(text: &str) -> Vec<usize> {
    scan_document(text).unmatched
}

/// Strict balance check: every closer must close the innermost open bracket
pub fn is_balanced(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    is_balanced_chars(&chars)
}

pub(crate) fn scan_chars(chars: &[char]) -> BracketReport {
    let mut report = BracketReport::default();
    let mut stack: Vec<(char, usize)> = Vec::new();

    for (idx, &ch) in chars.iter().enumerate() {
        if closer_for(ch).is_some() {
            stack.push((ch, idx));
        } else if let Some(open) = opener_for(ch) {
            match stack.iter().rposition(|&(c, _)| c == open) {
                Some(depth) => {
                    let (_, open_idx) = stack.remove(depth);
                    report.pairs.push(BracketPair::new(open_idx, idx));
                }
                None => report.unmatched.push(idx),
            }
        }
    }

    report.unmatched.extend(stack.into_iter().map(|(_, idx)| idx));
    report
}

pub(crate) fn is_balanced_chars(chars: &[char]) -> bool {
    let mut stack: Vec<char> = Vec::new();

    for &ch in chars {
        if closer_for(ch).is_some() {
            stack.push(ch);
        } else if let Some(open) = opener_for(ch) {
            if stack.pop() != Some(open) {
                return false;
            }
        }
    }

    stack.is_empty()
}
