// src/models.rs

use crate::{
    constants::WORK_DIR_NAME,
    core::config_loader::{ConfigError, IniConfig},
};
use serde::Serialize;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// The read-only view of one configured environment that substitution works against.
///
/// Everything the engine knows about the outside world goes through this trait: the
/// environment's name (its factors), named attributes, the configuration lookup, the
/// raw argument tokens and the process environment variables.
pub trait Environment {
    /// The environment name, e.g. `py34-django16`.
    fn name(&self) -> &str;

    /// A named attribute such as `envpython`, or `None` if the descriptor has no such attribute.
    fn attribute(&self, key: &str) -> Option<String>;

    /// Raw text of `option` in `section`, embedded newlines included.
    fn config_get(&self, section: &str, option: &str) -> Result<String, ConfigError>;

    /// The raw command-line tokens given for this run, in order.
    fn options(&self) -> &[String];

    /// Reads a process environment variable.
    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An environment declared in a `tox.ini` file.
#[derive(Debug, Clone)]
pub struct ToxEnv {
    name: String,
    ini_path: PathBuf,
    config: Arc<IniConfig>,
    options: Vec<String>,
}

impl ToxEnv {
    /// Creates the descriptor for `name`. `ini_path` is the file `config` was loaded from.
    pub fn new(
        name: impl Into<String>,
        ini_path: impl Into<PathBuf>,
        config: Arc<IniConfig>,
        options: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ini_path: ini_path.into(),
            config,
            options,
        }
    }

    /// The directory holding the ini file.
    pub fn ini_dir(&self) -> PathBuf {
        self.ini_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// `<toxinidir>/.tox`
    pub fn work_dir(&self) -> PathBuf {
        self.ini_dir().join(WORK_DIR_NAME)
    }

    /// `<toxworkdir>/<name>`
    pub fn env_dir(&self) -> PathBuf {
        self.work_dir().join(&self.name)
    }

    /// `Scripts` on Windows, `bin` elsewhere.
    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.env_dir().join("Scripts")
        } else {
            self.env_dir().join("bin")
        }
    }

    /// The interpreter inside [`Self::bin_dir`].
    pub fn python(&self) -> PathBuf {
        if cfg!(target_os = "windows") {
            self.bin_dir().join("python.exe")
        } else {
            self.bin_dir().join("python")
        }
    }
}

impl Environment for ToxEnv {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, key: &str) -> Option<String> {
        let path = match key {
            "envname" => return Some(self.name.clone()),
            "homedir" => dirs::home_dir()?,
            "toxinidir" => self.ini_dir(),
            "toxinipath" => self.ini_path.clone(),
            "toxworkdir" => self.work_dir(),
            "envdir" => self.env_dir(),
            "envbindir" => self.bin_dir(),
            "envpython" => self.python(),
            "envtmpdir" => self.env_dir().join("tmp"),
            "envlogdir" => self.env_dir().join("log"),
            _ => return None,
        };
        // Always return a clean, canonical path.
        Some(dunce::simplified(&path).to_string_lossy().to_string())
    }

    fn config_get(&self, section: &str, option: &str) -> Result<String, ConfigError> {
        self.config.get(section, option)
    }

    fn options(&self) -> &[String] {
        &self.options
    }
}

/// The commands of one environment after substitution, ready to print or serialize.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnv {
    /// Environment name.
    pub name: String,
    /// One argv per command line.
    pub commands: Vec<Vec<String>>,
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tox_env(name: &str) -> ToxEnv {
        let config = IniConfig::parse("[testenv]\ncommands = pytest\n").unwrap();
        ToxEnv::new(name, "/work/project/tox.ini", Arc::new(config), vec![])
    }

    #[test]
    fn test_tox_env_attributes() {
        let env = tox_env("py34");
        assert_eq!(env.attribute("envname").as_deref(), Some("py34"));

        let envdir = PathBuf::from(env.attribute("envdir").unwrap());
        assert_eq!(envdir, PathBuf::from("/work/project").join(".tox").join("py34"));

        let toxinidir = PathBuf::from(env.attribute("toxinidir").unwrap());
        assert_eq!(toxinidir, PathBuf::from("/work/project"));

        let python = PathBuf::from(env.attribute("envpython").unwrap());
        assert!(python.starts_with(&envdir));
    }

    #[test]
    fn test_tox_env_unknown_attribute() {
        let env = tox_env("py34");
        assert!(env.attribute("config").is_none());
        assert!(env.attribute("").is_none());
    }

    #[test]
    fn test_tox_env_config_lookup() {
        let env = tox_env("py34");
        assert_eq!(env.config_get("testenv", "commands").unwrap(), "pytest");
        assert!(env.config_get("testenv", "deps").is_err());
    }
}
