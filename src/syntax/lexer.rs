//! Single-pass lexer producing styled spans
//!
//! The scan walks the text once. At each position the rules are tried in
//! a fixed order (line comment, block comment, string, number, word,
//! operator) and the first one that applies consumes its range and emits
//! one span. Anything else is skipped one char at a time and left
//! unstyled. Every iteration advances by at least one char.
//!
//! Offsets in the returned spans are `char` offsets into the text.

use super::language::LanguageDefinition;
use super::style::{Style, StyledSpan};
use super::tokens::StyleCategory;
use crate::text::is_line_break;

/// Characters styled as single-char operators
pub const OPERATORS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~'];

/// Style a whole text snapshot
///
/// The result is ordered by start offset, never overlaps and never
/// contains an empty span. Gaps are default-styled text.
pub fn style(text: &str, language: &LanguageDefinition) -> Vec<StyledSpan> {
    let chars: Vec<char> = text.chars().collect();
    style_chars(&chars, language)
}

/// Style a text that is already split into chars
pub fn style_chars(chars: &[char], language: &LanguageDefinition) -> Vec<StyledSpan> {
    Lexer::new(chars, language).run()
}

/// Category at a char position, given spans from [`style`]
///
/// Positions not covered by any span are `Default`.
pub fn category_at(spans: &[StyledSpan], pos: usize) -> StyleCategory {
    let idx = spans.partition_point(|span| span.end() <= pos);
    match spans.get(idx) {
        Some(span) if span.contains(pos) => span.category,
        _ => StyleCategory::Default,
    }
}

/// One recognised token: where it ends and how it is styled
struct Token {
    end: usize,
    category: StyleCategory,
    style: Style,
}

impl Token {
    fn of(end: usize, category: StyleCategory) -> Self {
        Self {
            end,
            category,
            style: category.default_style(),
        }
    }
}

struct Lexer<'a> {
    chars: &'a [char],
    language: &'a LanguageDefinition,
    line_comment: Option<Vec<char>>,
    block_comment: Option<(Vec<char>, Vec<char>)>,
}

impl<'a> Lexer<'a> {
    fn new(chars: &'a [char], language: &'a LanguageDefinition) -> Self {
        let line_comment = language.line_comment().map(|m| m.chars().collect());
        let block_comment = language
            .block_comment()
            .map(|(open, close)| (open.chars().collect(), close.chars().collect()));
        Self {
            chars,
            language,
            line_comment,
            block_comment,
        }
    }

    fn run(self) -> Vec<StyledSpan> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos < self.chars.len() {
            match self.next_token(pos) {
                Some(token) => {
                    debug_assert!(token.end > pos, "lexer rule must consume input");
                    spans.push(StyledSpan::styled(pos, token.end - pos, token.category, token.style));
                    pos = token.end;
                }
                None => pos += 1,
            }
        }

        spans
    }

    /// Try every rule at `pos` in priority order
    fn next_token(&self, pos: usize) -> Option<Token> {
        let ch = self.chars[pos];

        if let Some(marker) = &self.line_comment {
            if self.starts_with(pos, marker) {
                let end = self.line_end(pos + marker.len());
                return Some(Token::of(end, StyleCategory::Comment));
            }
        }

        if let Some((open, close)) = &self.block_comment {
            if self.starts_with(pos, open) {
                let end = self
                    .find(pos + open.len(), close)
                    .map_or(self.chars.len(), |at| at + close.len());
                return Some(Token::of(end, StyleCategory::Comment));
            }
        }

        if self.language.is_quote(ch) {
            return Some(Token::of(self.scan_string(pos), StyleCategory::String));
        }

        if ch.is_ascii_digit() {
            return Some(Token::of(self.scan_number(pos), StyleCategory::Number));
        }

        if ch.is_alphabetic() || ch == '_' {
            let end = self.take_while(pos, |c| c.is_alphanumeric() || c == '_');
            let word: String = self.chars[pos..end].iter().collect();
            let (category, style) = self.language.classify_word(&word);
            return Some(Token { end, category, style });
        }

        if OPERATORS.contains(&ch) {
            return Some(Token::of(pos + 1, StyleCategory::Operator));
        }

        None
    }

    /// String literal starting at a quote char
    ///
    /// Ends after the matching unescaped quote. An unterminated string
    /// stops before the line break (or at end of text). A backslash
    /// consumes the char after it, except a line break.
    fn scan_string(&self, start: usize) -> usize {
        let quote = self.chars[start];
        let mut i = start + 1;

        while i < self.chars.len() {
            match self.chars[i] {
                c if is_line_break(c) => return i,
                '\\' => {
                    let escapes_next = self.chars.get(i + 1).is_some_and(|&c| !is_line_break(c));
                    i += if escapes_next { 2 } else { 1 };
                }
                c if c == quote => return i + 1,
                _ => i += 1,
            }
        }

        self.chars.len()
    }

    /// Numeric literal starting at an ASCII digit
    fn scan_number(&self, start: usize) -> usize {
        if self.chars[start] == '0' {
            let radix = match self.chars.get(start + 1) {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                let end = self.take_while(start + 2, |c| c.is_digit(radix));
                // "0x" with no digits degrades to the decimal "0"
                if end > start + 2 {
                    return end;
                }
            }
        }

        let mut end = self.take_while(start, |c| c.is_ascii_digit());

        if self.chars.get(end) == Some(&'.') && self.is_digit_at(end + 1) {
            end = self.take_while(end + 1, |c| c.is_ascii_digit());
        }

        if matches!(self.chars.get(end), Some('e' | 'E')) {
            let mut exp = end + 1;
            if matches!(self.chars.get(exp), Some('+' | '-')) {
                exp += 1;
            }
            if self.is_digit_at(exp) {
                end = self.take_while(exp, |c| c.is_ascii_digit());
            }
        }

        end
    }

    fn is_digit_at(&self, pos: usize) -> bool {
        self.chars.get(pos).is_some_and(|c| c.is_ascii_digit())
    }

    fn take_while(&self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut end = from;
        while end < self.chars.len() && pred(self.chars[end]) {
            end += 1;
        }
        end
    }

    fn starts_with(&self, pos: usize, pattern: &[char]) -> bool {
        self.chars[pos..].starts_with(pattern)
    }

    /// First occurrence of `pattern` at or after `from`
    fn find(&self, from: usize, pattern: &[char]) -> Option<usize> {
        if from > self.chars.len() {
            return None;
        }
        self.chars[from..]
            .windows(pattern.len())
            .position(|window| window == pattern)
            .map(|offset| from + offset)
    }

    /// Position of the next line break at or after `from`, or end of text
    fn line_end(&self, from: usize) -> usize {
        let from = from.min(self.chars.len());
        self.chars[from..]
            .iter()
            .position(|&c| is_line_break(c))
            .map_or(self.chars.len(), |offset| from + offset)
    }
}
