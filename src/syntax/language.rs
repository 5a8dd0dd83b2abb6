//! Language definitions for syntax styling
//!
//! A LanguageDefinition is plain data: comment delimiters, string quote
//! characters and up to eight keyword sets. The lexer reads it and never
//! mutates it, so one definition can be shared across threads.

use std::collections::HashSet;

use regex::Regex;

use super::style::Style;
use super::tokens::{StyleCategory, MAX_KEYWORD_SETS};
use crate::error::{LexlightError, Result};

/// A named set of keywords sharing one style
#[derive(Debug, Clone)]
pub struct KeywordSet {
    /// Category name from the definition ("instre1", "type1", ...); only picks a color
    pub category: String,
    /// Words in this set, matched exactly and case-sensitively
    pub words: HashSet<String>,
    /// Style applied to words from this set
    pub style: Style,
}

impl KeywordSet {
    /// Create a keyword set from a list of words
    pub fn new<I, S>(category: &str, words: I, style: Style) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.to_string(),
            words: words.into_iter().map(Into::into).collect(),
            style,
        }
    }

    /// Check whether a word belongs to this set
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// A complete language definition
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name, the registry key (e.g. "python", "cpp")
    pub name: String,
    /// File extensions without the dot (e.g. ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Whole-filename patterns for files without a useful extension
    pub filenames: Vec<Regex>,
    /// Line comment marker (e.g. "//" or "#")
    pub comment_line: Option<String>,
    /// Block comment opener (e.g. "/*")
    pub comment_start: Option<String>,
    /// Block comment closer (e.g. "*/")
    pub comment_end: Option<String>,
    /// Characters that open and close string literals
    pub quotes: Vec<char>,
    /// Keyword sets in declaration order
    keyword_sets: Vec<KeywordSet>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    ///
    /// Strings default to `"` and `'` quotes; there are no comments and no
    /// keywords until added.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            filenames: Vec::new(),
            comment_line: None,
            comment_start: None,
            comment_end: None,
            quotes: vec!['"', '\''],
            keyword_sets: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.trim_start_matches('.').to_string());
    }

    /// Add a whole-filename pattern, anchored at both ends
    pub fn add_filename(&mut self, pattern: &str) -> Result<()> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|source| LexlightError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.filenames.push(regex);
        Ok(())
    }

    /// Set the line comment marker
    pub fn set_line_comment(&mut self, marker: &str) {
        self.comment_line = Some(marker.to_string());
    }

    /// Set the block comment delimiters
    pub fn set_block_comment(&mut self, start: &str, end: &str) {
        self.comment_start = Some(start.to_string());
        self.comment_end = Some(end.to_string());
    }

    /// Add a string quote character
    pub fn add_quote(&mut self, quote: char) {
        if !self.quotes.contains(&quote) {
            self.quotes.push(quote);
        }
    }

    /// Add a keyword set
    ///
    /// Sets beyond the eighth are dropped.
    pub fn add_keywords(&mut self, set: KeywordSet) {
        if self.keyword_sets.len() >= MAX_KEYWORD_SETS {
            tracing::warn!(
                language = %self.name,
                category = %set.category,
                "dropping keyword set, a language may declare at most {} sets",
                MAX_KEYWORD_SETS
            );
            return;
        }
        self.keyword_sets.push(set);
    }

    /// Keyword sets in declaration order
    pub fn keyword_sets(&self) -> &[KeywordSet] {
        &self.keyword_sets
    }

    /// Line comment marker, if defined and non-empty
    pub fn line_comment(&self) -> Option<&str> {
        self.comment_line.as_deref().filter(|m| !m.is_empty())
    }

    /// Block comment delimiters
    ///
    /// Only returned when both halves are present and non-empty; a
    /// definition with just one of them has no block comments.
    pub fn block_comment(&self) -> Option<(&str, &str)> {
        match (self.comment_start.as_deref(), self.comment_end.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => Some((start, end)),
            _ => None,
        }
    }

    /// Check whether a character opens a string literal
    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }

    /// Index of the first keyword set (in declaration order) containing `word`
    pub fn keyword_index(&self, word: &str) -> Option<u8> {
        self.keyword_sets
            .iter()
            .position(|set| set.contains(word))
            .map(|idx| idx as u8)
    }

    /// Category and style for a word: keyword if any set has it, identifier otherwise
    pub fn classify_word(&self, word: &str) -> (StyleCategory, Style) {
        match self.keyword_index(word) {
            Some(idx) => (
                StyleCategory::Keyword(idx),
                self.keyword_sets[idx as usize].style,
            ),
            None => (
                StyleCategory::Identifier,
                StyleCategory::Identifier.default_style(),
            ),
        }
    }

    /// Check whether a bare file name matches one of the filename patterns
    pub fn matches_filename(&self, file_name: &str) -> bool {
        self.filenames.iter().any(|re| re.is_match(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::Color;

    fn create_test_language() -> LanguageDefinition {
        let mut lang = LanguageDefinition::new("test");
        lang.add_extension(".tst");
        lang.set_line_comment("//");
        lang.add_keywords(KeywordSet::new("instre1", ["if", "else"], Style::fg(Color::Blue).with_bold()));
        lang.add_keywords(KeywordSet::new("type1", ["int", "if"], Style::fg(Color::Magenta)));
        lang
    }

    #[test]
    fn test_extension_strips_dot() {
        let lang = create_test_language();
        assert_eq!(lang.extensions, vec!["tst".to_string()]);
    }

    #[test]
    fn test_first_keyword_set_wins() {
        let lang = create_test_language();
        assert_eq!(lang.keyword_index("if"), Some(0));
        assert_eq!(lang.keyword_index("int"), Some(1));
        assert_eq!(lang.keyword_index("while"), None);

        let (category, style) = lang.classify_word("if");
        assert_eq!(category, StyleCategory::Keyword(0));
        assert!(style.bold);
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        let lang = create_test_language();
        assert_eq!(lang.keyword_index("If"), None);
        assert_eq!(lang.classify_word("IF").0, StyleCategory::Identifier);
    }

    #[test]
    fn test_half_block_comment_is_absent() {
        let mut lang = create_test_language();
        assert_eq!(lang.block_comment(), None);

        lang.comment_start = Some("/*".to_string());
        assert_eq!(lang.block_comment(), None);

        lang.comment_end = Some(String::new());
        assert_eq!(lang.block_comment(), None);

        lang.comment_end = Some("*/".to_string());
        assert_eq!(lang.block_comment(), Some(("/*", "*/")));
    }

    #[test]
    fn test_empty_line_comment_is_absent() {
        let mut lang = create_test_language();
        lang.set_line_comment("");
        assert_eq!(lang.line_comment(), None);
    }

    #[test]
    fn test_keyword_sets_capped() {
        let mut lang = LanguageDefinition::new("many");
        for i in 0..10 {
            lang.add_keywords(KeywordSet::new(&format!("set{}", i), [format!("w{}", i)], Style::default()));
        }
        assert_eq!(lang.keyword_sets().len(), MAX_KEYWORD_SETS);
        assert_eq!(lang.keyword_index("w7"), Some(7));
        assert_eq!(lang.keyword_index("w8"), None);
    }

    #[test]
    fn test_filename_patterns() {
        let mut lang = LanguageDefinition::new("makefile");
        lang.add_filename("[Mm]akefile").unwrap();
        lang.add_filename(r"GNUmakefile").unwrap();
        assert!(lang.matches_filename("Makefile"));
        assert!(lang.matches_filename("makefile"));
        assert!(!lang.matches_filename("Makefile.bak"));
        assert!(lang.add_filename("(unclosed").is_err());
    }

    #[test]
    fn test_quotes() {
        let mut lang = LanguageDefinition::new("js");
        assert!(lang.is_quote('"'));
        assert!(!lang.is_quote('`'));
        lang.add_quote('`');
        lang.add_quote('`');
        assert!(lang.is_quote('`'));
        assert_eq!(lang.quotes.len(), 3);
    }
}
