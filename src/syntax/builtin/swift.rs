//! Swift language definition

use super::{c_family, keywords};
use crate::syntax::language::LanguageDefinition;

/// Create Swift language definition
pub fn swift_language() -> LanguageDefinition {
    let mut lang = c_family("swift", &["swift"]);
    lang.add_keywords(keywords("instre1", 0, &[
        "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
        "return", "func", "var", "let", "class", "struct", "enum", "protocol", "extension",
        "import", "typealias", "associatedtype", "where", "guard", "defer", "repeat",
        "fallthrough", "throws", "throw", "try", "catch", "async", "await", "actor",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "Int", "Double", "Float", "String", "Bool", "Array", "Dictionary", "Set", "Optional",
        "Any", "AnyObject", "Void", "Self", "Protocol",
    ]));
    lang.add_keywords(keywords("type3", 2, &[
        "private", "fileprivate", "internal", "public", "open", "static", "final", "lazy", "weak",
        "unowned", "mutating", "nonmutating", "override", "required", "convenience",
    ]));
    lang
}
