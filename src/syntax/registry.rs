//! Language registry
//!
//! Maps names, file extensions and file names to language definitions.
//! The registry is an ordinary value: build one, hand out `&LanguageDefinition`
//! references to the styler, and rebuild it when definitions change.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;
use super::loader;
use crate::error::Result;

/// Name of the definition used when nothing else matches
pub const FALLBACK_LANGUAGE: &str = "normal";

/// Outcome of loading a directory of language files
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Definitions added or replaced
    pub loaded: usize,
    /// Files that failed to load
    pub failed: usize,
}

/// Registry of language definitions
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    /// Definitions keyed by lowercased name
    languages: HashMap<String, LanguageDefinition>,
    /// Lowercased extension to lowercased language name
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in languages
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for lang in builtin::all_languages() {
            registry.add(lang);
        }
        registry
    }

    /// Add a language definition, replacing any with the same name
    pub fn add(&mut self, lang: LanguageDefinition) {
        let key = lang.name.to_lowercase();
        if let Some(old) = self.languages.remove(&key) {
            tracing::debug!(language = %old.name, "replacing language definition");
            self.extension_map.retain(|_, name| *name != key);
        }
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), key.clone());
        }
        self.languages.insert(key, lang);
    }

    /// Get a language definition by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(&name.to_lowercase())
    }

    /// Detect the language of a file from its path
    ///
    /// Extension first, then whole-filename patterns, then the plain text
    /// fallback if the registry has one.
    pub fn detect(&self, path: &Path) -> Option<&LanguageDefinition> {
        self.detect_exact(path)
            .or_else(|| self.get(FALLBACK_LANGUAGE))
    }

    /// Like [`detect`](Self::detect) but without the plain text fallback
    pub fn detect_exact(&self, path: &Path) -> Option<&LanguageDefinition> {
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.extension_map.get(&ext.to_lowercase()))
            .and_then(|key| self.languages.get(key));
        if by_extension.is_some() {
            return by_extension;
        }

        let file_name = path.file_name()?.to_str()?;
        let mut candidates: Vec<&LanguageDefinition> = self
            .languages
            .values()
            .filter(|lang| lang.matches_filename(file_name))
            .collect();
        // HashMap order is arbitrary; pick deterministically by name
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        candidates.into_iter().next()
    }

    /// List available language names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.values().map(|l| l.name.as_str()).collect();
        names.sort();
        names
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Load every `*.toml` file in a directory
    ///
    /// Files that fail to load are logged and skipped; only an unreadable
    /// directory is an error.
    pub fn load_dir(&mut self, dir: &Path) -> Result<LoadSummary> {
        let mut summary = LoadSummary::default();
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        for path in paths {
            match loader::load_file(&path) {
                Ok(lang) => {
                    tracing::debug!(language = %lang.name, path = %path.display(), "loaded language");
                    self.add(lang);
                    summary.loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping language file: {}", e);
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(dir = %dir.display(), loaded = summary.loaded, failed = summary.failed, "language directory loaded");
        Ok(summary)
    }
}
