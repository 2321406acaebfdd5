// src/core/arg_parser.rs

use std::iter::FusedIterator;
use std::slice;

/// A lazy iterator over the positional arguments in a list of raw command-line tokens.
///
/// # Logic:
/// - If the first token is exactly `--`, every following token is positional,
///   including ones that look like flags.
/// - Otherwise tokens are positional up to the first one starting with `-`.
///   Nothing after that flag is considered, even if it looks positional again.
#[derive(Debug)]
pub struct PositionalArgs<'a> {
    tokens: slice::Iter<'a, String>,
    after_separator: bool,
}

impl<'a> PositionalArgs<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        match tokens.split_first() {
            Some((first, rest)) if first == "--" => Self {
                tokens: rest.iter(),
                after_separator: true,
            },
            _ => Self {
                tokens: tokens.iter(),
                after_separator: false,
            },
        }
    }
}

impl<'a> Iterator for PositionalArgs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        if !self.after_separator && token.starts_with('-') {
            // The first flag ends the positional run for good.
            self.tokens = Default::default();
            return None;
        }
        Some(token.as_str())
    }
}

impl FusedIterator for PositionalArgs<'_> {}

/// Returns the positional arguments of `tokens`. See [`PositionalArgs`].
pub fn positional_args(tokens: &[String]) -> PositionalArgs<'_> {
    PositionalArgs::new(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Helper to create a Vec<String> from &str slices ---
    fn to_cli_params(params: &[&str]) -> Vec<String> {
        params.iter().map(|s| s.to_string()).collect()
    }

    fn collect(params: &[&str]) -> Vec<String> {
        let tokens = to_cli_params(params);
        positional_args(&tokens).map(str::to_string).collect()
    }

    #[test]
    fn test_positional_stops_at_first_flag() {
        assert_eq!(collect(&["arg1", "arg2", "--kwarg"]), vec!["arg1", "arg2"]);
    }

    #[test]
    fn test_positional_does_not_resume_after_flag() {
        assert_eq!(collect(&["arg1", "-v", "arg2"]), vec!["arg1"]);
        assert!(collect(&["--kwarg", "arg1"]).is_empty());
    }

    #[test]
    fn test_positional_after_double_dash() {
        assert_eq!(collect(&["--", "arg1", "--kwarg"]), vec!["arg1", "--kwarg"]);
    }

    #[test]
    fn test_double_dash_only_counts_in_first_position() {
        assert_eq!(collect(&["arg1", "--", "arg2"]), vec!["arg1"]);
    }

    #[test]
    fn test_positional_empty() {
        assert!(collect(&[]).is_empty());
        assert!(collect(&["--"]).is_empty());
    }

    #[test]
    fn test_positional_is_fused() {
        let tokens = to_cli_params(&["a", "-x", "b"]);
        let mut args = positional_args(&tokens);
        assert_eq!(args.next(), Some("a"));
        assert_eq!(args.next(), None);
        assert_eq!(args.next(), None);
    }
}
