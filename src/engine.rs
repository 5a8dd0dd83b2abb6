//! Size-limited front end over the styler and bracket matcher
//!
//! The free functions in `syntax` and `brackets` always run to
//! completion. The engine adds the large-document policy: above a
//! configured size it refuses to work and says so, instead of spending a
//! full pass on a text nobody will see styled. Each call splits the text
//! into chars once and shares that snapshot between the checks it makes.

use crate::brackets::{self, BracketReport, CaretMatch};
use crate::syntax::{self, LanguageDefinition, StyledSpan};

/// Size limits in chars; zero disables a limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limits {
    /// Largest text the styler will process
    pub style_chars: usize,
    /// Largest text bracket operations will process
    pub brace_chars: usize,
    /// Most chars a single partner search may examine
    pub bracket_scan: usize,
}

impl Limits {
    /// No limits at all
    pub fn unlimited() -> Self {
        Self::default()
    }
}

/// Why a request was not processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooLarge {
    /// Size of the text that was refused
    pub chars: usize,
    /// Limit it exceeded
    pub limit: usize,
}

/// Result of an engine request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The request ran
    Done(T),
    /// The text was over the limit and nothing was computed
    Skipped(TooLarge),
}

impl<T> Outcome<T> {
    /// The computed value, if the request ran
    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Skipped(_) => None,
        }
    }

    /// Whether the request was refused
    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    /// Map the computed value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::Skipped(reason) => Outcome::Skipped(reason),
        }
    }
}

/// Stateless engine carrying only its limits
///
/// Cloning is cheap and an engine can be shared between threads freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    limits: Limits,
}

impl Engine {
    /// Create an engine with the given limits
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// The engine's limits
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Style a text unless it is larger than the style limit
    pub fn style(&self, text: &str, language: &LanguageDefinition) -> Outcome<Vec<StyledSpan>> {
        let chars: Vec<char> = text.chars().collect();
        if let Some(reason) = exceeds(chars.len(), self.limits.style_chars) {
            tracing::debug!(language = %language.name, chars = reason.chars, limit = reason.limit, "skipping styling");
            return Outcome::Skipped(reason);
        }
        Outcome::Done(syntax::style_chars(&chars, language))
    }

    /// Caret-relative bracket lookup under the brace limit
    pub fn caret_match(&self, text: &str, caret: usize) -> Outcome<CaretMatch> {
        self.with_brace_limit(text, |chars| {
            brackets::caret_match_chars(chars, caret, brackets::scan_limit(self.limits.bracket_scan))
        })
    }

    /// Whole-document pairs and unmatched brackets under the brace limit
    pub fn scan_document(&self, text: &str) -> Outcome<BracketReport> {
        self.with_brace_limit(text, brackets::scan_chars)
    }

    /// Strict balance check under the brace limit
    pub fn is_balanced(&self, text: &str) -> Outcome<bool> {
        self.with_brace_limit(text, brackets::is_balanced_chars)
    }


    fn with_brace_limit<T>(&self, text: &str, f: impl FnOnce(&[char]) -> T) -> Outcome<T> {
        let chars: Vec<char> = text.chars().collect();
        if let Some(reason) = exceeds(chars.len(), self.limits.brace_chars) {
            tracing::debug!(chars = reason.chars, limit = reason.limit, "skipping brace matching");
            return Outcome::Skipped(reason);
        }
        Outcome::Done(f(&chars))
    }
}

fn exceeds(chars: usize, limit: usize) -> Option<TooLarge> {
    (limit > 0 && chars > limit).then_some(TooLarge { chars, limit })
}
