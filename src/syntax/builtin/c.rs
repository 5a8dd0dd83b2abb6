//! C, C++ and Java language definitions

use super::{c_family, keywords};
use crate::syntax::language::LanguageDefinition;

/// Create C language definition
pub fn c_language() -> LanguageDefinition {
    let mut lang = c_family("c", &["c", "h", "m"]);
    lang.add_keywords(keywords("instre1", 0, &[
        "if", "else", "switch", "case", "default", "break", "goto", "return", "for", "while", "do",
        "continue", "typedef", "sizeof", "NULL",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "void", "struct", "union", "enum", "char", "short", "int", "long", "double", "float",
        "signed", "unsigned", "const", "static", "extern", "auto", "register", "volatile",
    ]));
    lang
}

/// Create C++ language definition
pub fn cpp_language() -> LanguageDefinition {
    let mut lang = c_family("cpp", &["cpp", "cxx", "cc", "hh", "hpp", "hxx", "ino"]);
    lang.add_keywords(keywords("instre1", 0, &[
        "if", "else", "switch", "case", "default", "break", "goto", "return", "for", "while", "do",
        "continue", "typedef", "sizeof", "nullptr", "new", "delete", "throw", "try", "catch",
        "namespace", "using", "class", "struct", "enum", "union", "public", "private", "protected",
        "friend", "virtual", "override", "final", "explicit", "export", "template", "typename",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "void", "bool", "char", "wchar_t", "short", "int", "long", "float", "double", "signed",
        "unsigned", "const", "static", "extern", "auto", "register", "volatile", "mutable", "inline",
        "constexpr",
    ]));
    lang
}

/// Create Java language definition
pub fn java_language() -> LanguageDefinition {
    let mut lang = c_family("java", &["java"]);
    lang.add_keywords(keywords("instre1", 0, &[
        "abstract", "assert", "break", "case", "catch", "class", "const", "continue", "default",
        "do", "else", "enum", "extends", "final", "finally", "for", "goto", "if", "implements",
        "import", "instanceof", "interface", "native", "new", "package", "private", "protected",
        "public", "return", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "volatile", "while",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "void", "boolean", "char", "byte", "short", "int", "long", "float", "double", "String",
        "Integer", "Boolean", "Character", "Byte", "Short", "Long", "Float", "Double",
    ]));
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{style, StyleCategory};

    #[test]
    fn test_c_statement() {
        let spans = style("int main() { return 0; } /* end */", &c_language());
        assert_eq!(spans[0].category, StyleCategory::Keyword(1));
        assert_eq!(spans[1].category, StyleCategory::Identifier);
        assert_eq!(spans[2].category, StyleCategory::Keyword(0));
        assert_eq!(spans[3].category, StyleCategory::Number);
        assert_eq!(spans[4].category, StyleCategory::Comment);
    }

    #[test]
    fn test_java_keyword_sets() {
        let lang = java_language();
        assert_eq!(lang.keyword_index("synchronized"), Some(0));
        assert_eq!(lang.keyword_index("String"), Some(1));
        assert_eq!(lang.keyword_index("string"), None);
    }
}
