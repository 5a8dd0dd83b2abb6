//! Char offset helpers
//!
//! The engines count Unicode scalar values. Callers that index by bytes
//! (Rust strings) or by line and column convert through these.

/// Length of a text in chars
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of a char offset; the end of the text is a valid offset
pub fn char_to_byte(text: &str, char_pos: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_pos)
}

/// Char offset of a byte offset, which must sit on a char boundary
pub fn byte_to_char(text: &str, byte_pos: usize) -> Option<usize> {
    if byte_pos > text.len() || !text.is_char_boundary(byte_pos) {
        return None;
    }
    Some(text[..byte_pos].chars().count())
}

/// Whether a char ends a line
///
/// LF, CR and CRLF are all line endings; in CRLF the CR ends the line
/// and the LF belongs to the same break.
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Zero-based line and char column of a char offset
///
/// Offsets past the end are clamped to the end of the text.
pub fn line_col(text: &str, char_pos: usize) -> (usize, usize) {
    let chars: Vec<char> = text.chars().collect();
    let end = char_pos.min(chars.len());
    let mut line = 0;
    let mut col = 0;
    for (idx, &ch) in chars[..end].iter().enumerate() {
        if is_line_break(ch) && !is_crlf_cr(&chars, idx) {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Char offset of a zero-based line and char column
///
/// Columns past the end of the line clamp to the line end.
pub fn offset_of(text: &str, line: usize, col: usize) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    let mut line_start = 0;

    for _ in 0..line {
        let brk = line_start + chars[line_start..].iter().position(|&c| is_line_break(c))?;
        line_start = brk + if is_crlf_cr(&chars, brk) { 2 } else { 1 };
    }

    let line_len = chars[line_start..]
        .iter()
        .position(|&c| is_line_break(c))
        .unwrap_or(chars.len() - line_start);
    Some(line_start + col.min(line_len))
}

fn is_crlf_cr(chars: &[char], idx: usize) -> bool {
    chars[idx] == '\r' && chars.get(idx + 1) == Some(&'\n')
}
