// src/core/interpolator.rs

use crate::{
    constants::{ENV_KEYWORD, MAX_SUBSTITUTION_PASSES, POSARGS_KEYWORD},
    core::{
        arg_parser::positional_args, brace_expander::BRACE_GROUP_RE, config_loader::ConfigError,
        factors::expand_factor_conditions,
    },
    models::Environment,
};
use lazy_static::lazy_static;
use std::fmt;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // `[section]option`, anchored at the start only.
    static ref CONFIG_REF_RE: Regex = Regex::new(r"^\[(.*?)\](.*)").unwrap();
    static ref POSARGS_SEP_RE: Regex = Regex::new(r"\s*:\s*").unwrap();
}

/// Represents errors that abort the substitution of a string.
#[derive(Error, Debug)]
pub enum SubstitutionError {
    /// No strategy recognised the text between the braces.
    #[error("{{{0}}} not understood in configuration file.")]
    UnsupportedPlaceholder(String),
    /// `{env:KEY}` was used without a default and `KEY` is unset.
    #[error("Environment variable '{0}' is not set and no default was given.")]
    MissingEnvVar(String),
    /// A `{[section]option}` reference points at nothing.
    #[error("Configuration lookup failed: {0}")]
    Config(#[from] ConfigError),
}

/// The outcome of offering a placeholder to one strategy.
#[derive(Debug)]
pub enum Resolution {
    /// The strategy recognised the placeholder and produced its value.
    Resolved(String),
    /// The strategy recognised the placeholder but the lookup failed. Ends the substitution.
    Failed(SubstitutionError),
    /// The placeholder does not have this strategy's shape; the next one is tried.
    NotApplicable,
}

/// A resolution strategy and the name it is logged under.
struct Strategy {
    name: &'static str,
    resolve: fn(&str, &dyn Environment) -> Resolution,
}

/// The strategies in the order they are tried. The first one that applies wins.
static STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "attribute",
        resolve: resolve_attribute,
    },
    Strategy {
        name: "env",
        resolve: resolve_env_var,
    },
    Strategy {
        name: "config",
        resolve: resolve_config,
    },
    Strategy {
        name: "posargs",
        resolve: resolve_posargs,
    },
];

/// Substitutes `{...}` placeholders against one environment.
#[derive(Clone, Copy)]
pub struct Interpolator<'a> {
    env: &'a dyn Environment,
}

impl fmt::Debug for Interpolator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator")
            .field("env", &self.env.name())
            .finish()
    }
}

impl<'a> Interpolator<'a> {
    /// Creates an interpolator resolving against `env`.
    pub fn new(env: &'a dyn Environment) -> Self {
        Self { env }
    }

    /// Replaces every placeholder in `template`, innermost first.
    ///
    /// Each pass replaces all brace groups that contain no other brace, so a value
    /// nested `n` levels deep needs `n` passes. At most [`MAX_SUBSTITUTION_PASSES`]
    /// passes run; anything nested deeper is returned unexpanded.
    pub fn expand_string(&self, template: &str) -> Result<String, SubstitutionError> {
        let mut current = template.to_string();

        for pass in 1..=MAX_SUBSTITUTION_PASSES {
            // A pass over a string without groups is a no-op.
            if !BRACE_GROUP_RE.is_match(&current) {
                break;
            }
            current = self.expand_pass(&current)?;
            log::debug!("Substitution pass {}: '{}'", pass, current);
        }

        Ok(current)
    }

    fn expand_pass(&self, s: &str) -> Result<String, SubstitutionError> {
        let mut result = String::with_capacity(s.len());
        let mut last_end = 0;

        for group in BRACE_GROUP_RE.find_iter(s) {
            result.push_str(&s[last_end..group.start()]);
            result.push_str(&self.resolve_group(group.as_str())?);
            last_end = group.end();
        }
        result.push_str(&s[last_end..]);

        Ok(result)
    }

    /// Resolves a single `{...}` group through the strategy chain.
    pub fn resolve_group(&self, group: &str) -> Result<String, SubstitutionError> {
        let inner = group
            .strip_prefix('{')
            .and_then(|g| g.strip_suffix('}'))
            .unwrap_or(group)
            .trim();

        for strategy in STRATEGIES {
            match (strategy.resolve)(inner, self.env) {
                Resolution::Resolved(value) => {
                    log::debug!("'{{{}}}' resolved by the {} strategy.", inner, strategy.name);
                    return Ok(value);
                }
                Resolution::Failed(err) => return Err(err),
                Resolution::NotApplicable => {
                    log::trace!("'{{{}}}' is not a {} placeholder.", inner, strategy.name);
                }
            }
        }

        Err(SubstitutionError::UnsupportedPlaceholder(inner.to_string()))
    }
}

/// Substitutes every placeholder of `s` against `env`. See [`Interpolator::expand_string`].
pub fn replace_braces(s: &str, env: &dyn Environment) -> Result<String, SubstitutionError> {
    Interpolator::new(env).expand_string(s)
}

/// `{envpython}`, `{toxinidir}`, ...
fn resolve_attribute(key: &str, env: &dyn Environment) -> Resolution {
    env.attribute(key)
        .map_or(Resolution::NotApplicable, Resolution::Resolved)
}

/// `{env:KEY}` or `{env:KEY:DEFAULT}`.
fn resolve_env_var(key: &str, env: &dyn Environment) -> Resolution {
    let parts: Vec<&str> = key.split(':').collect();
    match parts.as_slice() {
        [ENV_KEYWORD, name] => match env.env_var(name) {
            Some(value) => Resolution::Resolved(value),
            None => Resolution::Failed(SubstitutionError::MissingEnvVar((*name).to_string())),
        },
        [ENV_KEYWORD, name, default] => {
            Resolution::Resolved(env.env_var(name).unwrap_or_else(|| (*default).to_string()))
        }
        _ => Resolution::NotApplicable,
    }
}

/// `{[section]option}`. Each line of the value is passed through its factor condition.
fn resolve_config(key: &str, env: &dyn Environment) -> Resolution {
    let Some(caps) = CONFIG_REF_RE.captures(key) else {
        return Resolution::NotApplicable;
    };
    let (section, option) = (&caps[1], &caps[2]);

    match env.config_get(section, option) {
        Ok(raw) => Resolution::Resolved(
            raw.split('\n')
                .map(|line| expand_factor_conditions(line, env))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        Err(err) => Resolution::Failed(err.into()),
    }
}

/// `{posargs}` or `{posargs:DEFAULT}`.
fn resolve_posargs(key: &str, env: &dyn Environment) -> Resolution {
    let mut parts = POSARGS_SEP_RE.split(key);
    if parts.next() != Some(POSARGS_KEYWORD) {
        return Resolution::NotApplicable;
    }

    let passed = positional_args(env.options())
        .collect::<Vec<_>>()
        .join(" ");
    if passed.is_empty() {
        Resolution::Resolved(parts.next().unwrap_or_default().to_string())
    } else {
        Resolution::Resolved(passed)
    }
}
