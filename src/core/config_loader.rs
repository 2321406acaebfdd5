//! # Config Loader
//!
//! Reads tox-style ini files into an [`IniConfig`], the configuration lookup the
//! substitution engine consults for `{[section]option}` placeholders.
//!
//! The dialect is the one `tox.ini` files are written in:
//!
//! - `[section]` headers; section names are case-sensitive.
//! - `key = value` or `key: value`. The first `=` or `:` ends the key, so
//!   `commands = py34: pytest` is the option `commands` with value `py34: pytest`.
//! - Indented lines continue the previous value and are joined to it with `\n`.
//! - Lines starting with `#` or `;` are comments.
//! - Option names are lower-cased, both when loading and on lookup.
use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fs, path::Path};
use thiserror::Error;

lazy_static! {
    static ref SECTION_RE: Regex = Regex::new(r"^\[(?P<header>[^\]]+)\]").unwrap();
    static ref OPTION_RE: Regex =
        Regex::new(r"^(?P<key>[^=:\s][^=:]*?)\s*[=:]\s*(?P<value>.*)$").unwrap();
}

/// Represents errors that can occur while loading or querying an ini configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Could not read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A line is neither a section header, an option, a continuation nor a comment.
    #[error("Invalid line {line} in configuration: '{content}'")]
    Parse { line: usize, content: String },
    #[error("No section [{0}] in configuration.")]
    MissingSection(String),
    #[error("No option '{option}' in section [{section}].")]
    MissingOption { section: String, option: String },
}

impl ConfigError {
    /// True for lookups that failed because the section or option does not exist.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingSection(_) | Self::MissingOption { .. })
    }
}

/// A parsed ini file: section name to (option name to raw value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniConfig {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniConfig {
    /// Reads and parses the ini file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading configuration from '{}'", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses ini text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;
        let mut current_option: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            // Continuation of the previous value.
            if raw_line.starts_with(char::is_whitespace)
                && let (Some(section), Some(option)) = (&current_section, &current_option)
                && let Some(value) = sections
                    .get_mut(section)
                    .and_then(|options| options.get_mut(option))
            {
                value.push('\n');
                value.push_str(line);
                continue;
            }

            if let Some(caps) = SECTION_RE.captures(line) {
                let header = caps["header"].trim().to_string();
                sections.entry(header.clone()).or_default();
                current_section = Some(header);
                current_option = None;
                continue;
            }

            let parse_error = || ConfigError::Parse {
                line: index + 1,
                content: raw_line.to_string(),
            };
            let section = current_section.as_ref().ok_or_else(parse_error)?;
            let caps = OPTION_RE.captures(line).ok_or_else(parse_error)?;

            let key = caps["key"].trim().to_lowercase();
            let value = caps["value"].trim().to_string();
            sections
                .entry(section.clone())
                .or_default()
                .insert(key.clone(), value);
            current_option = Some(key);
        }

        log::debug!("Parsed {} configuration section(s).", sections.len());
        Ok(Self { sections })
    }

    /// Returns the raw value of `option` in `section`.
    pub fn get(&self, section: &str, option: &str) -> Result<String, ConfigError> {
        let options = self
            .sections
            .get(section)
            .ok_or_else(|| ConfigError::MissingSection(section.to_string()))?;
        options
            .get(&option.to_lowercase())
            .cloned()
            .ok_or_else(|| ConfigError::MissingOption {
                section: section.to_string(),
                option: option.to_string(),
            })
    }
}
