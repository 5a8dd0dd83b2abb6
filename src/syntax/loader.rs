//! TOML language definition files
//!
//! ```toml
//! name = "sql"
//! extensions = ["sql"]
//! comment_line = "--"
//! comment_start = "/*"
//! comment_end = "*/"
//!
//! [[keywords]]
//! category = "instre1"
//! color = "blue"
//! bold = true
//! words = ["select", "from", "where"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::language::{KeywordSet, LanguageDefinition};
use super::style::{Color, Style};
use super::tokens::StyleCategory;
use crate::error::{LexlightError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LanguageFile {
    name: String,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    filenames: Vec<String>,
    comment_line: Option<String>,
    comment_start: Option<String>,
    comment_end: Option<String>,
    quotes: Option<Vec<String>>,
    #[serde(default)]
    keywords: Vec<KeywordFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeywordFile {
    category: String,
    color: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    words: Vec<String>,
}

/// Load a language definition from a TOML file
pub fn load_file(path: &Path) -> Result<LanguageDefinition> {
    let contents = fs::read_to_string(path)?;
    let file: LanguageFile = toml::from_str(&contents).map_err(|source| LexlightError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    build(file)
}

/// Parse a language definition from TOML text
pub fn parse_str(contents: &str) -> Result<LanguageDefinition> {
    let file: LanguageFile = toml::from_str(contents).map_err(|source| LexlightError::Toml {
        path: "<string>".into(),
        source,
    })?;
    build(file)
}

fn build(file: LanguageFile) -> Result<LanguageDefinition> {
    if file.name.trim().is_empty() {
        return Err(LexlightError::definition("", "name must not be empty"));
    }

    let mut lang = LanguageDefinition::new(&file.name);
    for ext in &file.extensions {
        lang.add_extension(ext);
    }
    for pattern in &file.filenames {
        lang.add_filename(pattern)?;
    }

    lang.comment_line = file.comment_line;
    match (file.comment_start, file.comment_end) {
        (Some(start), Some(end)) => lang.set_block_comment(&start, &end),
        (None, None) => {}
        _ => tracing::warn!(
            language = %file.name,
            "comment_start and comment_end must be given together, block comments disabled"
        ),
    }

    if let Some(quotes) = file.quotes {
        lang.quotes.clear();
        for quote in quotes {
            let mut chars = quote.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => lang.add_quote(ch),
                _ => {
                    return Err(LexlightError::definition(
                        &file.name,
                        format!("quote '{}' must be a single character", quote),
                    ))
                }
            }
        }
    }

    for (idx, set) in file.keywords.into_iter().enumerate() {
        let style = keyword_style(&file.name, idx, &set)?;
        lang.add_keywords(KeywordSet::new(&set.category, set.words, style));
    }

    Ok(lang)
}

/// Style for the Nth keyword set: its own color, or the default for that slot
fn keyword_style(language: &str, idx: usize, set: &KeywordFile) -> Result<Style> {
    let mut style = match &set.color {
        Some(name) => Style::fg(Color::from_name(name).ok_or_else(|| {
            LexlightError::definition(language, format!("unknown color '{}'", name))
        })?),
        None => {
            let slot = u8::try_from(idx).unwrap_or(u8::MAX);
            StyleCategory::Keyword(slot).default_style()
        }
    };
    if set.bold {
        style = style.with_bold();
    }
    if set.italic {
        style = style.with_italic();
    }
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQL: &str = r#"
name = "sql"
extensions = ["sql"]
comment_line = "--"
comment_start = "/*"
comment_end = "*/"

[[keywords]]
category = "instre1"
color = "blue"
bold = true
words = ["select", "from", "where"]

[[keywords]]
category = "type1"
words = ["int", "text"]
"#;

    #[test]
    fn test_parse_full_definition() {
        let lang = parse_str(SQL).unwrap();
        assert_eq!(lang.name, "sql");
        assert_eq!(lang.extensions, vec!["sql".to_string()]);
        assert_eq!(lang.line_comment(), Some("--"));
        assert_eq!(lang.block_comment(), Some(("/*", "*/")));
        assert_eq!(lang.keyword_sets().len(), 2);

        let first = &lang.keyword_sets()[0];
        assert_eq!(first.category, "instre1");
        assert_eq!(first.style, Style::fg(Color::Blue).with_bold());
        assert_eq!(lang.keyword_sets()[1].style, StyleCategory::Keyword(1).default_style());
        assert_eq!(lang.keyword_index("text"), Some(1));
    }

    #[test]
    fn test_half_block_comment_disabled() {
        let lang = parse_str("name = \"x\"\ncomment_start = \"/*\"\n").unwrap();
        assert!(lang.block_comment().is_none());
    }

    #[test]
    fn test_quotes() {
        let lang = parse_str("name = \"x\"\nquotes = [\"`\"]\n").unwrap();
        assert!(lang.is_quote('`'));
        assert!(!lang.is_quote('"'));

        let err = parse_str("name = \"x\"\nquotes = [\"ab\"]\n").unwrap_err();
        assert!(matches!(err, LexlightError::Definition { .. }));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_str("name = "), Err(LexlightError::Toml { .. })));
        assert!(matches!(parse_str("name = \"x\"\nbogus = 1\n"), Err(LexlightError::Toml { .. })));
        assert!(matches!(parse_str("name = \"  \""), Err(LexlightError::Definition { .. })));
        assert!(matches!(
            parse_str("name = \"x\"\nfilenames = [\"(\"]\n"),
            Err(LexlightError::Pattern { .. })
        ));

        let err = parse_str("name = \"x\"\n[[keywords]]\ncategory = \"a\"\ncolor = \"mauve\"\n").unwrap_err();
        assert_eq!(err.to_string(), "language 'x': unknown color 'mauve'");
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_file(Path::new("/no/such/lang.toml")),
            Err(LexlightError::Io(_))
        ));
    }
}
