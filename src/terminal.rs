//! Terminal rendering of styled text using crossterm
//!
//! Writes a text with its spans and bracket highlights as ANSI escape
//! sequences to any writer. Runs of chars with the same style are written
//! with one style change.

use std::collections::HashSet;
use std::io::Write;

use crossterm::{
    queue,
    style::{self as term, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use crate::brackets::{BracketPair, CaretMatch};
use crate::error::Result;
use crate::syntax::{Color, Style, StyledSpan};
use crate::text::is_line_break;

/// Bracket positions to draw on top of syntax styles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketHighlights {
    /// Pair next to the caret
    pub matched: Option<BracketPair>,
    /// Brackets without a partner
    pub bad: HashSet<usize>,
}

impl BracketHighlights {
    /// Highlights for a caret lookup result
    pub fn from_caret(found: CaretMatch) -> Self {
        match found {
            CaretMatch::Matched { .. } => Self {
                matched: found.pair(),
                bad: HashSet::new(),
            },
            CaretMatch::Bad { at } => Self {
                matched: None,
                bad: HashSet::from([at]),
            },
            CaretMatch::NoBracket => Self::default(),
        }
    }

    fn style_at(&self, pos: usize) -> Option<Style> {
        if self.bad.contains(&pos) {
            return Some(Style::fg(Color::BrightWhite).with_bg(Color::Red).with_bold());
        }
        match self.matched {
            Some(pair) if pair.open == pos || pair.close == pos => Some(Style::reverse().with_bold()),
            _ => None,
        }
    }
}

/// Write `text` styled by `spans` and `highlights`
///
/// With `color` off the text is written unchanged.
pub fn render<W: Write>(
    out: &mut W,
    text: &str,
    spans: &[StyledSpan],
    highlights: &BracketHighlights,
    color: bool,
) -> Result<()> {
    if !color {
        out.write_all(text.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let mut span_idx = 0;
    let mut run = String::new();
    let mut run_style = Style::default();

    for (pos, ch) in text.chars().enumerate() {
        while span_idx < spans.len() && spans[span_idx].end() <= pos {
            span_idx += 1;
        }
        let base = match spans.get(span_idx) {
            Some(span) if span.contains(pos) => span.style,
            _ => Style::default(),
        };
        // never carry a background across a line break
        let style = if is_line_break(ch) {
            Style::default()
        } else {
            highlights.style_at(pos).unwrap_or(base)
        };

        if style != run_style && !run.is_empty() {
            write_run(out, &run, &run_style)?;
            run.clear();
        }
        run_style = style;
        run.push(ch);
    }

    if !run.is_empty() {
        write_run(out, &run, &run_style)?;
    }
    queue!(out, SetAttribute(Attribute::Reset))?;
    out.flush()?;
    Ok(())
}

fn write_run<W: Write>(out: &mut W, run: &str, style: &Style) -> Result<()> {
    apply_style(out, style)?;
    queue!(out, Print(run))?;
    Ok(())
}

/// Queue the escape sequences for a style, starting from a reset
fn apply_style<W: Write>(out: &mut W, style: &Style) -> Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if style.is_default() {
        return Ok(());
    }
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(term_color(style.fg)))?;
    }
    if style.bg != Color::Default {
        queue!(out, SetBackgroundColor(term_color(style.bg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

/// Map the 16-color palette onto crossterm colors
fn term_color(color: Color) -> term::Color {
    match color {
        Color::Default => term::Color::Reset,
        Color::Black => term::Color::Black,
        Color::Red => term::Color::DarkRed,
        Color::Green => term::Color::DarkGreen,
        Color::Yellow => term::Color::DarkYellow,
        Color::Blue => term::Color::DarkBlue,
        Color::Magenta => term::Color::DarkMagenta,
        Color::Cyan => term::Color::DarkCyan,
        Color::White => term::Color::Grey,
        Color::BrightBlack => term::Color::DarkGrey,
        Color::BrightRed => term::Color::Red,
        Color::BrightGreen => term::Color::Green,
        Color::BrightYellow => term::Color::Yellow,
        Color::BrightBlue => term::Color::Blue,
        Color::BrightMagenta => term::Color::Magenta,
        Color::BrightCyan => term::Color::Cyan,
        Color::BrightWhite => term::Color::White,
    }
}
