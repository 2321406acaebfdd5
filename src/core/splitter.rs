// src/core/splitter.rs

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One token for `split_on(s, ' ')`: runs of non-separators, or quoted spans.
    static ref SPACE_TOKEN_RE: Regex = token_regex(' ');
}

/// Wrappers stripped from a token, longest first.
const SPEECHMARKS: [&str; 4] = ["'''", "\"\"\"", "'", "\""];

fn token_regex(sep: char) -> Regex {
    let sep = regex::escape(&sep.to_string());
    Regex::new(&format!(r#"(?:[^{sep}"']|"[^"]*"|'[^']*')+"#)).unwrap()
}

/// Splits `s` on every top-level `,` (or newline), i.e. one that is not inside a `{...}` group.
///
/// Whitespace touching a separator is dropped and empty segments are skipped, so
/// `"{py26, py27}-django, py32"` yields `["{py26, py27}-django", "py32"]`.
pub fn split_out_of_braces(s: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' | '\n' if depth == 0 => {
                push_segment(&mut segments, &s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    push_segment(&mut segments, &s[start..]);
    segments
}

fn push_segment<'a>(segments: &mut Vec<&'a str>, segment: &'a str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        segments.push(segment);
    }
}

/// Splits `s` on `sep` unless the separator sits inside a `"..."` or `'...'` span.
///
/// A token entirely wrapped in quotes (`'''`, `"""`, `'` or `"`) is returned without them.
/// A stray, unmatched quote character never becomes part of a token.
pub fn split_on(s: &str, sep: char) -> Vec<String> {
    let owned;
    let re = if sep == ' ' {
        &*SPACE_TOKEN_RE
    } else {
        owned = token_regex(sep);
        &owned
    };

    re.find_iter(s)
        .map(|m| strip_speechmarks(m.as_str()).to_string())
        .collect()
}

fn strip_speechmarks(token: &str) -> &str {
    for mark in SPEECHMARKS {
        if token.starts_with(mark) && token.ends_with(mark) {
            // A lone `'` both starts and ends with itself.
            return token
                .get(mark.len()..token.len().saturating_sub(mark.len()))
                .unwrap_or("");
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_out_of_braces_keeps_groups_together() {
        let parts = split_out_of_braces("{py26, py27}-django{15, 16}, py32");
        assert_eq!(parts, vec!["{py26, py27}-django{15, 16}", "py32"]);
    }

    #[test]
    fn test_split_out_of_braces_ignores_nested_commas() {
        let parts = split_out_of_braces("a{b,{c,d}}e,f");
        assert_eq!(parts, vec!["a{b,{c,d}}e", "f"]);
    }

    #[test]
    fn test_split_out_of_braces_drops_empty_segments() {
        assert_eq!(split_out_of_braces(" py27 ,, py34,\n pypy,"), vec!["py27", "py34", "pypy"]);
        assert!(split_out_of_braces("").is_empty());
    }

    #[test]
    fn test_split_on_spaces_respects_quotes() {
        let parts = split_on(r#"python -c "import sys; print(sys.argv)" 'a b'"#, ' ');
        assert_eq!(
            parts,
            vec!["python", "-c", "import sys; print(sys.argv)", "a b"]
        );
    }

    #[test]
    fn test_split_on_collapses_repeated_separators() {
        assert_eq!(split_on("  pytest   tests  ", ' '), vec!["pytest", "tests"]);
    }

    #[test]
    fn test_split_on_custom_separator() {
        assert_eq!(split_on("a;'b;c';d", ';'), vec!["a", "b;c", "d"]);
    }

    #[test]
    fn test_split_on_keeps_inner_quotes() {
        // The token does not start with a quote, so nothing is stripped.
        assert_eq!(split_on("--opt='x y'", ' '), vec!["--opt='x y'"]);
    }

    #[test]
    fn test_strip_speechmarks() {
        assert_eq!(strip_speechmarks("'''doc'''"), "doc");
        assert_eq!(strip_speechmarks("\"x\""), "x");
        assert_eq!(strip_speechmarks("'"), "");
        assert_eq!(strip_speechmarks("plain"), "plain");
    }
}
