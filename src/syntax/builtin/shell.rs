//! Shell and Makefile language definitions

use super::keywords;
use crate::syntax::language::LanguageDefinition;

/// Create Bash language definition
pub fn bash_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("bash");
    for ext in ["sh", "bash", "zsh", "fish"] {
        lang.add_extension(ext);
    }
    add_filename(&mut lang, r".*\.(bashrc|bash_profile)");
    lang.set_line_comment("#");

    lang.add_keywords(keywords("instre1", 0, &[
        "if", "then", "else", "elif", "fi", "for", "while", "do", "done", "case", "esac",
        "function", "return", "break", "continue", "exit", "export", "source", "alias", "unalias",
        "set", "unset", "local", "readonly", "declare", "typeset", "shift", "getopts",
    ]));
    lang.add_keywords(keywords("type1", 1, &[
        "echo", "printf", "read", "cd", "pwd", "ls", "cp", "mv", "rm", "mkdir", "rmdir", "touch",
        "cat", "grep", "sed", "awk", "find", "sort", "uniq", "cut", "paste", "tr", "head", "tail",
        "less", "more",
    ]));
    lang
}

/// Create Makefile language definition
pub fn makefile_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("makefile");
    for ext in ["mak", "mk", "makefile", "gnumakefile"] {
        lang.add_extension(ext);
    }
    add_filename(&mut lang, "[Mm]akefile|GNUmakefile");
    lang.set_line_comment("#");

    lang.add_keywords(keywords("instre1", 0, &[
        "all", "clean", "install", "uninstall", "depend", "distclean", "check", "test",
    ]));
    lang
}

fn add_filename(lang: &mut LanguageDefinition, pattern: &str) {
    if let Err(e) = lang.add_filename(pattern) {
        tracing::warn!(language = %lang.name, "{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_patterns() {
        assert!(makefile_language().matches_filename("Makefile"));
        assert!(makefile_language().matches_filename("GNUmakefile"));
        assert!(bash_language().matches_filename(".bashrc"));
        assert!(bash_language().matches_filename("old.bash_profile"));
        assert!(!bash_language().matches_filename("bashrc"));
    }
}
