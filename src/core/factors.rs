// src/core/factors.rs

use crate::{constants::ENV_KEYWORD, core::brace_expander::bash_expand, models::Environment};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref FACTOR_SEP_RE: Regex = Regex::new(r"\s*:\s*").unwrap();
}

/// Evaluates a `labels: value` line against the factors of `env`.
///
/// The labels are brace-expanded; if any of them is one of the `-` separated parts
/// of the environment name, `value` is returned, otherwise the empty string.
/// Lines without exactly one colon, or whose left side is `env`, come back unchanged.
pub fn expand_factor_conditions(s: &str, env: &dyn Environment) -> String {
    let parts: Vec<&str> = FACTOR_SEP_RE.split(s).collect();

    match parts.as_slice() {
        [labels, value] if *labels != ENV_KEYWORD => {
            if matches_factors(labels, env.name()) {
                (*value).to_string()
            } else {
                log::trace!("Factor condition '{}' does not apply to '{}'.", labels, env.name());
                String::new()
            }
        }
        _ => s.to_string(),
    }
}

/// True if any label of the brace-expandable `labels` is a `-` separated part of `env_name`.
pub(crate) fn matches_factors(labels: &str, env_name: &str) -> bool {
    let env_factors: HashSet<&str> = env_name.split('-').collect();
    bash_expand(labels)
        .iter()
        .any(|label| env_factors.contains(label.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::testing::FakeEnv;

    #[test]
    fn test_factor_matches() {
        let env = FakeEnv::named("py34-foo");
        assert_eq!(
            expand_factor_conditions("py{33,34}: docformatter", &env),
            "docformatter"
        );
    }

    #[test]
    fn test_factor_does_not_match() {
        let env = FakeEnv::named("py26-foo");
        assert_eq!(expand_factor_conditions("py{33,34}: docformatter", &env), "");
    }

    #[test]
    fn test_factor_matches_any_part_of_name() {
        let env = FakeEnv::named("py27-django16");
        assert_eq!(expand_factor_conditions("django{15,16}: Django<1.7", &env), "Django<1.7");
        assert_eq!(expand_factor_conditions("py34,django16: mock", &env), "mock");
    }

    #[test]
    fn test_factor_is_not_a_substring_match() {
        let env = FakeEnv::named("py345");
        assert_eq!(expand_factor_conditions("py34: pytest", &env), "");
    }

    #[test]
    fn test_env_keyword_is_reserved() {
        let env = FakeEnv::named("env");
        assert_eq!(expand_factor_conditions("env: bar", &env), "env: bar");
        assert_eq!(expand_factor_conditions("env:FOO: bar", &env), "env:FOO: bar");
    }

    #[test]
    fn test_lines_without_a_single_colon_are_unchanged() {
        let env = FakeEnv::named("py34");
        assert_eq!(expand_factor_conditions("pytest tests", &env), "pytest tests");
        assert_eq!(expand_factor_conditions("py34: a: b", &env), "py34: a: b");
    }
}
