//! Built-in language definitions
//!
//! Keyword lists follow the classic editor model: `instre1` holds the
//! statement keywords, `type1` onward hold types and library names.

mod c;
mod python;
mod shell;
mod swift;
mod text;
mod web;

use super::language::{KeywordSet, LanguageDefinition};
use super::tokens::StyleCategory;

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        c::c_language(),
        c::cpp_language(),
        c::java_language(),
        swift::swift_language(),
        python::python_language(),
        web::javascript_language(),
        web::typescript_language(),
        web::html_language(),
        web::css_language(),
        web::xml_language(),
        web::json_language(),
        shell::bash_language(),
        shell::makefile_language(),
        text::markdown_language(),
        text::normal_language(),
    ]
}

/// Keyword set styled like the Nth declared set
fn keywords(category: &str, index: u8, words: &[&str]) -> KeywordSet {
    KeywordSet::new(
        category,
        words.iter().copied(),
        StyleCategory::Keyword(index).default_style(),
    )
}

/// Shared shape of the C-family languages: `//` and `/* */` comments
fn c_family(name: &str, extensions: &[&str]) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(name);
    for ext in extensions {
        lang.add_extension(ext);
    }
    lang.set_line_comment("//");
    lang.set_block_comment("/*", "*/");
    lang
}
