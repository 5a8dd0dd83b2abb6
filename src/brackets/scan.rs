//! Directional partner search for a single bracket

use super::{closer_for, opener_for};

/// Offset of the structural partner of the bracket at `pos`
///
/// Openers scan forward, closers scan backward. Only the bracket's own
/// open/close characters move the depth counter, so `(` ignores `[` and
/// `]` entirely. Returns `None` when `pos` is out of range, is not a
/// bracket, or the counter never returns to zero.
pub fn match_at(text: &str, pos: usize) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    match_chars(&chars, pos, None)
}

/// Like [`match_at`], but gives up after examining `limit` chars
///
/// A `limit` of zero means no limit, as in the engine's `Limits`.
pub fn match_at_within(text: &str, pos: usize, limit: usize) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    match_chars(&chars, pos, scan_limit(limit))
}

/// Scan bound for a limit setting; zero disables it
pub(crate) fn scan_limit(limit: usize) -> Option<usize> {
    (limit > 0).then_some(limit)
}

pub(crate) fn match_chars(chars: &[char], pos: usize, limit: Option<usize>) -> Option<usize> {
    let ch = *chars.get(pos)?;

    if let Some(close) = closer_for(ch) {
        let ahead = chars.iter().enumerate().skip(pos + 1);
        return find_depth_zero(ahead, ch, close, limit);
    }

    if let Some(open) = opener_for(ch) {
        let behind = chars[..pos].iter().enumerate().rev();
        return find_depth_zero(behind, ch, open, limit);
    }

    None
}

/// Walk `iter` counting `same` up and `partner` down from a depth of one
fn find_depth_zero<'a, I>(iter: I, same: char, partner: char, limit: Option<usize>) -> Option<usize>
where
    I: Iterator<Item = (usize, &'a char)>,
{
    let mut depth = 1usize;

    for (examined, (idx, &c)) in iter.enumerate() {
        if limit.is_some_and(|limit| examined >= limit) {
            return None;
        }
        if c == same {
            depth += 1;
        } else if c == partner {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }

    None
}
