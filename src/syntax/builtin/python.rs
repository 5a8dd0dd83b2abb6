//! Python language definition

use super::keywords;
use crate::syntax::language::LanguageDefinition;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python");
    for ext in ["py", "pyw", "pyx", "pxd", "pxi", "pyi"] {
        lang.add_extension(ext);
    }
    lang.set_line_comment("#");

    lang.add_keywords(keywords("instre1", 0, &[
        "if", "elif", "else", "for", "while", "break", "continue", "return", "def", "class",
        "import", "from", "as", "try", "except", "finally", "raise", "with", "assert", "pass",
        "yield", "lambda", "global", "nonlocal", "del", "is", "in", "not", "and", "or", "True",
        "False", "None",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "int", "float", "str", "list", "dict", "tuple", "set", "bool", "bytes", "bytearray",
        "complex", "frozenset", "range", "type", "object", "property", "staticmethod",
        "classmethod", "super", "isinstance", "issubclass", "len", "print", "input", "open", "file",
    ]));

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{style, StyleCategory};

    #[test]
    fn test_python_line() {
        let spans = style("print(len(x))  # show", &python_language());
        let categories: Vec<_> = spans.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                StyleCategory::Keyword(1),
                StyleCategory::Keyword(1),
                StyleCategory::Identifier,
                StyleCategory::Comment,
            ]
        );
    }

    #[test]
    fn test_no_block_comments() {
        assert!(python_language().block_comment().is_none());
    }
}
