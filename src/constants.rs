// src/constants.rs

/// The number of flat substitution passes applied to a string.
/// Placeholders nested deeper than this are left untouched.
pub const MAX_SUBSTITUTION_PASSES: usize = 5;

/// The default configuration file looked up in the current directory.
pub const DEFAULT_INI_FILENAME: &str = "tox.ini";

/// The working directory (relative to the ini file) holding per-environment directories.
pub const WORK_DIR_NAME: &str = ".tox";

/// The global section carrying `envlist`.
pub const TOX_SECTION: &str = "tox";

/// The section shared by every test environment.
pub const TESTENV_SECTION: &str = "testenv";

/// Reserved left-hand side of a factor condition; it belongs to `{env:KEY:DEFAULT}`.
pub const ENV_KEYWORD: &str = "env";

/// Keyword for the positional-arguments placeholder.
pub const POSARGS_KEYWORD: &str = "posargs";
