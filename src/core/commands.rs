// src/core/commands.rs

use crate::{
    constants::{ENV_KEYWORD, TESTENV_SECTION},
    core::{
        factors::matches_factors,
        interpolator::{Interpolator, SubstitutionError},
        splitter::split_on,
    },
    models::Environment,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `py27,py{33,34}: <command>`. The colon must be followed by whitespace, so neither
    // `{posargs:x}` nor `C:\python` is a prefix.
    static ref FACTOR_PREFIX_RE: Regex =
        Regex::new(r"^\s*(?P<labels>[\w{},.-]+):\s+(?P<command>.+)$").unwrap();
}

const COMMANDS_OPTION: &str = "commands";

/// Reads the `commands` of `env` and turns them into argv vectors.
///
/// The option is taken from `[testenv:<name>]`, or from `[testenv]` when the
/// environment has no own value. A line with a factor prefix (`py27,py34: cmd`) is kept
/// only for environments having one of those factors. Blank lines are dropped; the rest
/// are substituted and split on unquoted spaces. A line whose substitution spans several
/// lines (`{[base]commands}`) yields one command per non-blank line.
pub fn parse_commands(env: &dyn Environment) -> Result<Vec<Vec<String>>, SubstitutionError> {
    let own_section = format!("{}:{}", TESTENV_SECTION, env.name());
    let raw = match env.config_get(&own_section, COMMANDS_OPTION) {
        Ok(raw) => raw,
        Err(err) if err.is_missing() => env.config_get(TESTENV_SECTION, COMMANDS_OPTION)?,
        Err(err) => return Err(err.into()),
    };

    let interpolator = Interpolator::new(env);
    let mut commands = Vec::new();
    for line in raw.lines() {
        let Some(line) = select_for_env(line, env) else {
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        let resolved = interpolator.expand_string(line)?;
        for resolved_line in resolved.lines().filter(|l| !l.trim().is_empty()) {
            let argv = split_on(resolved_line, ' ');
            if !argv.is_empty() {
                commands.push(argv);
            }
        }
    }

    log::debug!("Environment '{}' has {} command(s).", env.name(), commands.len());
    Ok(commands)
}

fn select_for_env<'a>(line: &'a str, env: &dyn Environment) -> Option<&'a str> {
    let Some(caps) = FACTOR_PREFIX_RE.captures(line) else {
        return Some(line);
    };
    let labels = caps.name("labels").map_or("", |m| m.as_str());
    if labels == ENV_KEYWORD || !braces_balanced(labels) {
        return Some(line);
    }
    if matches_factors(labels, env.name()) {
        caps.name("command").map(|m| m.as_str())
    } else {
        log::trace!("Skipping '{}' for environment '{}'.", line, env.name());
        None
    }
}

/// `{posargs: x}` starts like a prefix but its label `{posargs` never closes.
fn braces_balanced(labels: &str) -> bool {
    let mut depth = 0usize;
    for c in labels.chars() {
        match c {
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}
