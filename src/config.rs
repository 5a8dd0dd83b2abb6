//! Configuration file support
//!
//! Loads settings from ~/.lexlight.conf (or %USERPROFILE%\.lexlight.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # lexlight configuration
//! style-limit = 2000000
//! brace-limit = 0
//! bracket-scan-limit = 100000
//! tab-width = 4
//! language-dir = /home/me/.config/lexlight/languages
//! log-level = info
//! color = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::engine::Limits;
use crate::error::Result;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest document (in chars) that gets styled; 0 = no limit
    pub style_limit: usize,
    /// Largest document (in chars) that gets brace matching; 0 = no limit
    pub brace_limit: usize,
    /// Most chars one partner search may examine; 0 = no limit
    pub bracket_scan_limit: usize,
    /// Tab width for guide columns
    pub tab_width: usize,
    /// Extra directory of TOML language definitions
    pub language_dir: Option<PathBuf>,
    /// Log verbosity
    pub log_level: LevelFilter,
    /// Whether terminal output uses colors
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style_limit: 200 * 1024 * 1024,
            brace_limit: 0,
            bracket_scan_limit: 0,
            tab_width: 4,
            language_dir: None,
            log_level: LevelFilter::WARN,
            color: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexlight.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexlight.conf"))
        }
    }

    /// Load configuration from the default file, if there is one
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config = Config::default();
        config.apply(&Self::parse(&contents));
        Ok(config)
    }

    /// Engine limits from these settings
    pub fn limits(&self) -> Limits {
        Limits {
            style_chars: self.style_limit,
            brace_chars: self.brace_limit,
            bracket_scan: self.bracket_scan_limit,
        }
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(n) = parse_size(settings, "style-limit") {
            self.style_limit = n;
        }

        if let Some(n) = parse_size(settings, "brace-limit") {
            self.brace_limit = n;
        }

        if let Some(n) = parse_size(settings, "bracket-scan-limit") {
            self.bracket_scan_limit = n;
        }

        if let Some(n) = parse_size(settings, "tab-width") {
            self.tab_width = n.clamp(1, 16); // Between 1 and 16
        }

        if let Some(value) = settings.get("language-dir") {
            self.language_dir = (!value.is_empty()).then(|| PathBuf::from(value));
        }

        if let Some(value) = settings.get("log-level") {
            match value.parse::<LevelFilter>() {
                Ok(level) => self.log_level = level,
                Err(_) => tracing::warn!("ignoring unknown log-level '{}'", value),
            }
        }

        if let Some(value) = settings.get("color") {
            self.color = parse_bool(value);
        }
    }
}

fn parse_size(settings: &HashMap<String, String>, key: &str) -> Option<usize> {
    let value = settings.get(key)?;
    match value.replace('_', "").parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!("ignoring non-numeric {} '{}'", key, value);
            None
        }
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}
