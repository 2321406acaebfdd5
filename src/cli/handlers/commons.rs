// src/cli/handlers/commons.rs

// This module contains shared functions used by multiple handlers.

use anyhow::{Context, Result};
use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    constants::{DEFAULT_INI_FILENAME, TOX_SECTION},
    core::{config_loader::IniConfig, envlist::parse_envlist},
    models::ToxEnv,
};

/// A loaded configuration file together with its canonical location.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Canonical path of the ini file, or `./tox.ini` when none exists.
    pub path: PathBuf,
    /// Parsed contents, shared by every environment built from it.
    pub config: Arc<IniConfig>,
}

impl LoadedConfig {
    /// Builds the descriptor of environment `name`, with `posargs` as its raw options.
    pub fn env(&self, name: &str, posargs: &[String]) -> ToxEnv {
        ToxEnv::new(
            name,
            self.path.clone(),
            Arc::clone(&self.config),
            options_from_posargs(posargs),
        )
    }

    /// The expanded `[tox]envlist`.
    pub fn envlist(&self) -> Result<Vec<String>> {
        let raw = self
            .config
            .get(TOX_SECTION, "envlist")
            .with_context(|| format!("No envlist defined in '{}'.", self.path.display()))?;
        Ok(parse_envlist(&raw))
    }
}

/// Loads the configuration file at `path`, or `./tox.ini` when no path is given.
///
/// A missing `./tox.ini` is not an error: an empty configuration is used instead, so
/// templates that only use environment variables or positional arguments still resolve.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default_path = Path::new(DEFAULT_INI_FILENAME);
            if !default_path.exists() {
                log::debug!("No '{}' in the current directory.", DEFAULT_INI_FILENAME);
                return Ok(LoadedConfig {
                    path: env::current_dir()?.join(DEFAULT_INI_FILENAME),
                    config: Arc::new(IniConfig::default()),
                });
            }
            default_path.to_path_buf()
        }
    };

    let canonical = dunce::canonicalize(&path)
        .with_context(|| format!("Configuration file '{}' not found.", path.display()))?;
    let config = IniConfig::load(&canonical)?;

    Ok(LoadedConfig {
        path: canonical,
        config: Arc::new(config),
    })
}

/// Arguments given after `--` are positional, even those that look like flags.
pub fn options_from_posargs(posargs: &[String]) -> Vec<String> {
    if posargs.is_empty() {
        return Vec::new();
    }
    std::iter::once("--".to_string())
        .chain(posargs.iter().cloned())
        .collect()
}

/// Renders an argv vector as a shell-quoted command line.
pub fn format_command(argv: &[String]) -> String {
    shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Environment;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_and_envlist() {
        let dir = tempdir().unwrap();
        let ini_path = dir.path().join("tox.ini");
        fs::write(&ini_path, "[tox]\nenvlist = py{27,34}, flake8\n").unwrap();

        let loaded = load_config(Some(&ini_path)).unwrap();
        assert_eq!(loaded.envlist().unwrap(), vec!["py27", "py34", "flake8"]);

        let env = loaded.env("py34", &[]);
        assert_eq!(env.name(), "py34");
        assert_eq!(env.ini_dir(), dunce::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_load_config_explicit_missing_file() {
        let result = load_config(Some(Path::new("definitely/not/here/tox.ini")));
        assert!(result.is_err());
    }

    #[test]
    fn test_envlist_missing() {
        let dir = tempdir().unwrap();
        let ini_path = dir.path().join("tox.ini");
        fs::write(&ini_path, "[testenv]\ncommands = pytest\n").unwrap();

        let loaded = load_config(Some(&ini_path)).unwrap();
        assert!(loaded.envlist().unwrap_err().to_string().contains("No envlist"));
    }

    #[test]
    fn test_options_from_posargs() {
        assert!(options_from_posargs(&[]).is_empty());
        let posargs = vec!["-k".to_string(), "fast".to_string()];
        assert_eq!(options_from_posargs(&posargs), vec!["--", "-k", "fast"]);
    }

    #[test]
    fn test_format_command_quotes_arguments() {
        let argv = vec!["echo".to_string(), "a b".to_string()];
        assert_eq!(format_command(&argv), "echo 'a b'");
    }
}
