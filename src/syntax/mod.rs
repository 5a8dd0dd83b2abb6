//! Syntax styling
//!
//! This module turns a text snapshot plus a language definition into a
//! list of styled spans:
//! - language definitions (comments, quotes, keyword sets)
//! - the single-pass lexer
//! - a registry resolving names and file paths to definitions
//! - TOML loading for user-supplied definitions

mod builtin;
mod language;
mod lexer;
mod loader;
mod registry;
mod style;
mod tokens;

pub use language::{KeywordSet, LanguageDefinition};
pub use lexer::{category_at, style, style_chars, OPERATORS};
pub use loader::{load_file, parse_str};
pub use registry::{LanguageRegistry, LoadSummary, FALLBACK_LANGUAGE};
pub use style::{Color, Style, StyledSpan};
pub use tokens::{StyleCategory, MAX_KEYWORD_SETS};
