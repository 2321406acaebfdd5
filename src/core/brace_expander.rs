// src/core/brace_expander.rs

use crate::core::splitter::split_out_of_braces;
use lazy_static::lazy_static;
use regex::{Match, Regex};

lazy_static! {
    /// A brace group that does not itself contain a brace.
    pub(crate) static ref BRACE_GROUP_RE: Regex = Regex::new(r"\{[^{}]*\}").unwrap();
    static ref ALTERNATIVE_SEP_RE: Regex = Regex::new(r"\s*,\s*").unwrap();
}

/// Expands every `{a,b,...}` group of `s` into the cartesian product of its alternatives.
///
/// The rightmost group varies fastest: `"{a,b}{1,2}"` gives `["a1", "a2", "b1", "b2"]`.
/// A string without groups expands to itself, and `{}` contributes one empty alternative.
pub fn expand_curlys(s: &str) -> Vec<String> {
    let groups: Vec<Match<'_>> = BRACE_GROUP_RE.find_iter(s).collect();

    // Right to left, so the byte offsets of the groups still to come stay valid.
    groups
        .iter()
        .rev()
        .fold(vec![s.to_string()], |candidates, group| {
            replace_group(&candidates, group)
        })
}

fn replace_group(candidates: &[String], group: &Match<'_>) -> Vec<String> {
    let inner = &group.as_str()[1..group.as_str().len() - 1];

    let mut expanded = Vec::with_capacity(candidates.len());
    for alternative in ALTERNATIVE_SEP_RE.split(inner) {
        for candidate in candidates {
            expanded.push(format!(
                "{}{}{}",
                &candidate[..group.start()],
                alternative,
                &candidate[group.end()..]
            ));
        }
    }
    expanded
}

/// Splits `s` on its top-level commas and brace-expands each segment, in order.
///
/// ```text
/// "{py26,py27}-django{15,16}, py32"
///   => py26-django15, py26-django16, py27-django15, py27-django16, py32
/// ```
pub fn bash_expand(s: &str) -> Vec<String> {
    split_out_of_braces(s)
        .into_iter()
        .flat_map(expand_curlys)
        .collect()
}
