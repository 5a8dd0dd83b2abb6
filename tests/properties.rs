//! Whole-crate checks over a small corpus of texts and the built-in languages

use lexlight::brackets::{self, BracketPair, CaretMatch};
use lexlight::syntax::{self, KeywordSet, LanguageDefinition, LanguageRegistry, Style, StyleCategory};
use lexlight::{Engine, Limits, Outcome};

const CORPUS: &[&str] = &[
    "",
    "x",
    "def foo():\n    return 1  # done\n",
    "int main(void) { /* hi */ return 0x1F; }\n",
    "s = \"esc \\\" quote\" + 'c' // tail",
    "/* never closed\n( [ {",
    "\"he said \"hi",
    "a<b>c && d||e ^ ~f %= 3.5e-2",
    "0b1012 0o778 0xZZ 12.e5 .5",
    "([)]",
    "}{)(][",
    "func(a, [1,2,(3)])",
    "héllo → wörld (ü) [\"ß\"]",
    "\t\tlet x = `tmpl ${y}`;\n",
    "<!-- c --> <p class=\"x\">t</p>",
    "#!/bin/bash\necho \"$HOME\" # c\n",
    "# c\rx = (1)\r",
    "// c\r\ns = 'open\r\n{y}",
];

fn python_like() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python-like");
    lang.set_line_comment("#");
    lang.add_keywords(KeywordSet::new(
        "instre1",
        ["def", "return"],
        StyleCategory::Keyword(0).default_style(),
    ));
    lang
}

fn languages() -> Vec<LanguageDefinition> {
    let registry = LanguageRegistry::with_builtins();
    let mut langs: Vec<LanguageDefinition> = registry
        .names()
        .into_iter()
        .filter_map(|name| registry.get(name).cloned())
        .collect();
    langs.push(python_like());
    langs
}

#[test]
fn spans_stay_in_bounds_and_never_overlap() {
    for lang in languages() {
        for text in CORPUS {
            let len = text.chars().count();
            let spans = syntax::style(text, &lang);
            let mut prev_end = 0;
            for span in &spans {
                assert!(span.len > 0, "{}: empty span in {:?}", lang.name, text);
                assert!(span.end() <= len, "{}: span past end in {:?}", lang.name, text);
                assert!(span.start >= prev_end, "{}: overlap in {:?}", lang.name, text);
                prev_end = span.end();
            }
        }
    }
}

#[test]
fn styling_is_idempotent() {
    for lang in languages() {
        for text in CORPUS {
            assert_eq!(syntax::style(text, &lang), syntax::style(text, &lang));
        }
    }
}

#[test]
fn python_example() {
    let text = "def foo():\n    return 1  # done\n";
    let spans = syntax::style(text, &python_like());
    let at = |pos| syntax::category_at(&spans, pos);

    for pos in 0..3 {
        assert_eq!(at(pos), StyleCategory::Keyword(0));
    }
    let ret = text.find("return").unwrap();
    for pos in ret..ret + 6 {
        assert_eq!(at(pos), StyleCategory::Keyword(0));
    }
    assert_eq!(at(text.find('1').unwrap()), StyleCategory::Number);

    let hash = text.find('#').unwrap();
    let line_end = text.len() - 1;
    for pos in hash..line_end {
        assert_eq!(at(pos), StyleCategory::Comment);
    }
    assert_eq!(at(line_end), StyleCategory::Default);
    assert_eq!(at(4), StyleCategory::Identifier);
    assert_eq!(at(7), StyleCategory::Default);
}

#[test]
fn unterminated_string_runs_to_line_end() {
    let text = "he said \"hi";
    let spans = syntax::style(text, &LanguageDefinition::new("plain"));
    assert_eq!(spans.last().map(|s| (s.start, s.len, s.category)), Some((8, 3, StyleCategory::String)));

    let text = "x = 'open\ny";
    let spans = syntax::style(text, &LanguageDefinition::new("plain"));
    let string = spans.iter().find(|s| s.category == StyleCategory::String).unwrap();
    assert_eq!((string.start, string.len), (4, 5));
    assert_eq!(syntax::category_at(&spans, 10), StyleCategory::Identifier);
}

#[test]
fn cr_and_crlf_end_comments_and_strings() {
    let spans = syntax::style("# c\rx = 1\r", &python_like());
    assert_eq!(spans[0].range(), 0..3);
    assert_eq!(spans[0].category, StyleCategory::Comment);
    assert_eq!(syntax::category_at(&spans, 4), StyleCategory::Identifier);
    assert_eq!(syntax::category_at(&spans, 8), StyleCategory::Number);

    let text = "# c\r\ns = 'open\r\ny";
    let spans = syntax::style(text, &python_like());
    assert_eq!(spans[0].range(), 0..3);
    let string = spans.iter().find(|s| s.category == StyleCategory::String).unwrap();
    assert_eq!(string.range(), 9..14);
    assert_eq!(syntax::category_at(&spans, 14), StyleCategory::Default);
    assert_eq!(syntax::category_at(&spans, 16), StyleCategory::Identifier);

    assert_eq!(lexlight::text::line_col(text, 16), (2, 0));
    assert_eq!(brackets::column_at("x\r\n\t(y)", 4, 4), 4);
}

#[test]
fn match_at_is_symmetric() {
    for text in CORPUS {
        for pos in 0..text.chars().count() {
            if let Some(partner) = brackets::match_at(text, pos) {
                assert_eq!(brackets::match_at(text, partner), Some(pos), "{:?} at {}", text, pos);
            }
        }
    }
}

#[test]
fn well_formed_text_has_no_unmatched_brackets() {
    for text in ["", "()", "(a(b)c)", "{[()()]}", "f(x[0], {k: [1, (2)]})", "a\n{\n  (b)\n}\n"] {
        assert!(brackets::find_unmatched(text).is_empty(), "{:?}", text);
        assert!(brackets::is_balanced(text), "{:?}", text);
        assert!(brackets::scan_document(text).is_fully_matched());
    }
}

#[test]
fn nested_pairs() {
    let report = brackets::scan_document("(a(b)c)");
    let mut pairs = report.pairs.clone();
    pairs.sort();
    assert_eq!(pairs, vec![BracketPair::new(0, 6), BracketPair::new(2, 4)]);
    assert!(report.unmatched.is_empty());

    let mut pairs = brackets::find_all_pairs("func(a, [1,2,(3)])");
    pairs.sort();
    assert_eq!(
        pairs,
        vec![BracketPair::new(4, 17), BracketPair::new(8, 16), BracketPair::new(13, 15)]
    );
}

#[test]
fn crossed_brackets_pair_tolerantly_but_are_not_balanced() {
    assert!(!brackets::is_balanced("([)]"));
    let mut pairs = brackets::find_all_pairs("([)]");
    pairs.sort();
    assert_eq!(pairs, vec![BracketPair::new(0, 2), BracketPair::new(1, 3)]);
    assert!(brackets::find_unmatched("([)]").is_empty());
}

#[test]
fn caret_lookup_agrees_with_match_at() {
    for text in CORPUS {
        let len = text.chars().count();
        for caret in 0..=len {
            match brackets::caret_match(text, caret) {
                CaretMatch::Matched { at, opposite } => {
                    assert!(at + 1 == caret || at == caret);
                    assert_eq!(brackets::match_at(text, at), Some(opposite));
                }
                CaretMatch::Bad { at } => assert_eq!(brackets::match_at(text, at), None),
                CaretMatch::NoBracket => {}
            }
        }
    }
}

#[test]
fn engine_limits_gate_the_free_functions() {
    let text = "if (x) { y(); }";
    let lang = LanguageRegistry::with_builtins().get("c").cloned().unwrap();

    let unlimited = Engine::new(Limits::unlimited());
    assert_eq!(unlimited.style(text, &lang), Outcome::Done(syntax::style(text, &lang)));
    assert_eq!(unlimited.scan_document(text), Outcome::Done(brackets::scan_document(text)));

    let tiny = Engine::new(Limits {
        style_chars: 5,
        brace_chars: 5,
        bracket_scan: 0,
    });
    assert!(tiny.style(text, &lang).is_skipped());
    assert!(tiny.is_balanced(text).is_skipped());
    assert_eq!(tiny.is_balanced("(x)"), Outcome::Done(true));
}

#[test]
fn custom_styles_flow_into_spans() {
    let mut lang = LanguageDefinition::new("styled");
    let style = Style::default().with_underline();
    lang.add_keywords(KeywordSet::new("type1", ["loop"], style));
    let spans = syntax::style("loop x", &lang);
    assert_eq!(spans[0].category, StyleCategory::Keyword(0));
    assert_eq!(spans[0].style, style);
}

#[test]
fn toml_definitions_style_like_builtins() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("sql.toml"),
        r#"
name = "sql"
extensions = ["sql"]
comment_line = "--"
comment_start = "/*"
comment_end = "*/"

[[keywords]]
category = "instre1"
words = ["SELECT", "FROM", "WHERE"]
"#,
    )
    .unwrap();

    let mut registry = LanguageRegistry::new();
    registry.load_dir(tmp.path()).unwrap();
    let sql = registry.detect(std::path::Path::new("report.sql")).unwrap();

    let spans = syntax::style("SELECT a FROM t -- all\n/* x */", sql);
    let categories: Vec<StyleCategory> = spans.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            StyleCategory::Keyword(0),
            StyleCategory::Identifier,
            StyleCategory::Keyword(0),
            StyleCategory::Identifier,
            StyleCategory::Comment,
            StyleCategory::Comment,
        ]
    );
}
