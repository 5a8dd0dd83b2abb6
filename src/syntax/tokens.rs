//! Style categories for syntax styling
//!
//! Every span the lexer emits carries exactly one of these categories.

use super::style::{Color, Style};

/// Most keyword sets a single language definition may declare
pub const MAX_KEYWORD_SETS: usize = 8;

/// Style category assigned to a lexed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    /// Plain text (no special styling)
    Default,
    /// Member of the Nth declared keyword set (0-based)
    Keyword(u8),
    /// String literals ("..." or '...')
    String,
    /// Line and block comments
    Comment,
    /// Numeric literals (hex, octal, binary, decimal, float)
    Number,
    /// Words that are in no keyword set
    Identifier,
    /// Single operator characters
    Operator,
}

impl StyleCategory {
    /// Get the default style for this category
    ///
    /// Keyword spans produced by the lexer use their keyword set's style;
    /// this fallback only applies when a set has no style of its own.
    pub fn default_style(&self) -> Style {
        match self {
            StyleCategory::Comment => Style::fg(Color::Green).with_italic(),
            StyleCategory::String => Style::fg(Color::BrightBlack),
            StyleCategory::Number => Style::fg(Color::BrightYellow),
            StyleCategory::Keyword(0) => Style::fg(Color::Blue).with_bold(),
            StyleCategory::Keyword(1) => Style::fg(Color::Magenta),
            StyleCategory::Keyword(_) => Style::fg(Color::Cyan),
            StyleCategory::Operator => Style::fg(Color::Red),
            StyleCategory::Identifier => Style::default(),
            StyleCategory::Default => Style::default(),
        }
    }

    /// Get a stable name for this category ("keyword2", "comment", ...)
    pub fn name(&self) -> String {
        match self {
            StyleCategory::Default => "default".to_string(),
            StyleCategory::Keyword(n) => format!("keyword{}", n),
            StyleCategory::String => "string".to_string(),
            StyleCategory::Comment => "comment".to_string(),
            StyleCategory::Number => "number".to_string(),
            StyleCategory::Identifier => "identifier".to_string(),
            StyleCategory::Operator => "operator".to_string(),
        }
    }

    /// Parse a category from its name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(StyleCategory::Default),
            "string" => Some(StyleCategory::String),
            "comment" => Some(StyleCategory::Comment),
            "number" => Some(StyleCategory::Number),
            "identifier" => Some(StyleCategory::Identifier),
            "operator" => Some(StyleCategory::Operator),
            _ => {
                let index: u8 = name.strip_prefix("keyword")?.parse().ok()?;
                ((index as usize) < MAX_KEYWORD_SETS).then_some(StyleCategory::Keyword(index))
            }
        }
    }
}
