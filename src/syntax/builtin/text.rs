//! Markdown and plain text definitions

use crate::syntax::language::LanguageDefinition;

/// Create Markdown language definition (no comments, no keywords)
pub fn markdown_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("markdown");
    for ext in ["md", "markdown", "mdown", "mkdn", "mkd", "mdwn", "mdtxt", "mdtext"] {
        lang.add_extension(ext);
    }
    lang
}

/// Create the plain text fallback definition
pub fn normal_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("normal");
    lang.add_extension("txt");
    lang
}
