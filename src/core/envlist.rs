// src/core/envlist.rs

use crate::core::brace_expander::bash_expand;

/// Expands an `envlist` value into the ordered list of environment names.
///
/// Segments are separated by top-level commas or newlines; each one is brace-expanded
/// and the results are concatenated in segment order.
pub fn parse_envlist(s: &str) -> Vec<String> {
    let names = bash_expand(s);
    log::debug!("Parsed envlist '{}' into {} environment(s).", s, names.len());
    names
}
