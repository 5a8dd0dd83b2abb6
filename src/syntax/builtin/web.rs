//! Web language definitions: JavaScript, TypeScript, HTML, CSS, XML, JSON

use super::{c_family, keywords};
use crate::syntax::language::LanguageDefinition;

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    let mut lang = c_family("javascript", &["js", "jsm", "jsx", "mjs"]);
    lang.add_quote('`');
    lang.add_keywords(keywords("instre1", 0, &[
        "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
        "return", "function", "var", "let", "const", "class", "extends", "new", "this", "super",
        "import", "export", "async", "await", "try", "catch", "finally", "throw", "typeof",
        "instanceof", "in", "of", "delete", "void",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "Array", "Object", "String", "Number", "Boolean", "Function", "Promise", "Map", "Set",
        "WeakMap", "WeakSet", "Symbol", "Date", "RegExp", "Error", "JSON", "Math", "console",
        "window", "document", "undefined", "null", "NaN", "Infinity",
    ]));
    lang
}

/// Create TypeScript language definition
pub fn typescript_language() -> LanguageDefinition {
    let mut lang = c_family("typescript", &["ts", "tsx"]);
    lang.add_quote('`');
    lang.add_keywords(keywords("instre1", 0, &[
        "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
        "return", "function", "var", "let", "const", "class", "interface", "type", "enum",
        "extends", "implements", "new", "this", "super", "import", "export", "async", "await",
        "try", "catch", "finally", "throw", "typeof", "instanceof", "in", "of", "delete", "void",
        "namespace", "module", "declare", "abstract", "as", "from", "get", "set", "readonly",
        "static", "public", "private", "protected",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "string", "number", "boolean", "any", "unknown", "never", "void", "null", "undefined",
        "object", "symbol", "bigint", "Array", "Object", "Function", "Promise", "Map", "Set",
        "WeakMap", "WeakSet", "Date", "RegExp", "Error",
    ]));
    lang
}

/// Create HTML language definition
pub fn html_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("html");
    for ext in ["html", "htm", "shtml", "shtm", "xhtml", "xht", "hta"] {
        lang.add_extension(ext);
    }
    lang.set_block_comment("<!--", "-->");
    lang.add_keywords(keywords("instre1", 0, &[
        "html", "head", "body", "title", "div", "span", "p", "a", "img", "ul", "ol", "li", "table",
        "tr", "td", "th", "form", "input", "button", "select", "option", "textarea", "label",
        "header", "footer", "nav", "section", "article", "aside", "main",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "class", "id", "style", "href", "src", "alt", "width", "height", "type", "name", "value",
        "placeholder", "required", "disabled", "checked", "selected", "readonly", "multiple",
        "min", "max", "pattern", "title", "target", "rel", "method", "action",
    ]));
    lang
}

/// Create CSS language definition
///
/// Hyphenated properties such as `text-align` never form a single word in
/// the lexer, so only the plain ones are listed.
pub fn css_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("css");
    lang.add_extension("css");
    lang.set_block_comment("/*", "*/");
    lang.add_keywords(keywords("instre1", 0, &[
        "color", "background", "font", "margin", "padding", "border", "display", "position",
        "width", "height", "top", "left", "right", "bottom", "float", "clear", "overflow",
        "visibility", "opacity",
    ]));
    lang
}

/// Create XML language definition
pub fn xml_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("xml");
    for ext in [
        "xml", "xsl", "xslt", "xsd", "xul", "kml", "svg", "mxml", "xsml", "wsdl", "xlf", "xliff",
        "xbl", "sxbl", "sitemap", "gml", "gpx", "plist", "vcxproj", "csproj", "props", "targets",
    ] {
        lang.add_extension(ext);
    }
    lang.set_block_comment("<!--", "-->");
    lang
}

/// Create JSON language definition
pub fn json_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("json");
    lang.add_extension("json");
    lang.add_keywords(keywords("instre1", 0, &["true", "false", "null"]));
    lang
}
