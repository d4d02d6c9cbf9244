//! Line classification for shell definition files.
//!
//! Every line is trimmed and handed to a fixed, ordered list of matchers. The
//! first matcher that recognizes the line decides its [`Line`] variant; a line
//! nobody claims is [`Line::Unrecognized`].

use regex::Regex;
use std::sync::LazyLock;

static CATEGORY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s*(.+)$").expect("valid category regex"));

static ALIAS_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*alias\s+([\w.\-]+)='([^']+)'(?:\s*#\s*(.*))?$").expect("valid alias regex")
});

static FUNCTION_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z][a-z_]*)\(\)\s*\{").expect("valid function regex"));

/// A classified line of the definitions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `## Section name`. Holds the text after the marker.
    CategoryMarker(&'a str),
    /// `alias name='command' # comment`
    AliasDef {
        name: &'a str,
        command: &'a str,
        comment: Option<&'a str>,
    },
    /// `name() {`
    FunctionDef { name: &'a str },
    /// `# some text` that is not a category marker. Holds the text with the
    /// leading hashes and spaces removed.
    Comment(&'a str),
    /// Anything else: blank lines, function bodies, exports, ...
    Unrecognized,
}

type Matcher = for<'a> fn(&'a str) -> Option<Line<'a>>;

/// Matchers in priority order. Category markers must be tried before plain
/// comments since both start with `#`.
const MATCHERS: &[Matcher] = &[
    match_category_marker,
    match_alias,
    match_function,
    match_comment,
];

fn match_category_marker(line: &str) -> Option<Line<'_>> {
    let caps = CATEGORY_MARKER.captures(line)?;
    Some(Line::CategoryMarker(caps.get(1)?.as_str()))
}

fn match_alias(line: &str) -> Option<Line<'_>> {
    let caps = ALIAS_DEF.captures(line)?;
    Some(Line::AliasDef {
        name: caps.get(1)?.as_str(),
        command: caps.get(2)?.as_str(),
        comment: caps.get(3).map(|m| m.as_str()),
    })
}

fn match_function(line: &str) -> Option<Line<'_>> {
    let caps = FUNCTION_DEF.captures(line)?;
    Some(Line::FunctionDef {
        name: caps.get(1)?.as_str(),
    })
}

fn match_comment(line: &str) -> Option<Line<'_>> {
    if line.starts_with('#') && !line.starts_with("##") {
        Some(Line::Comment(comment_text(line)))
    } else {
        None
    }
}

/// Strip the leading run of `#` and spaces, then surrounding whitespace.
fn comment_text(line: &str) -> &str {
    line.trim_start_matches(['#', ' ']).trim()
}

/// Classify a single raw line of input.
pub(crate) fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(line))
        .unwrap_or(Line::Unrecognized)
}

/// Classify every line of `text`, preserving order so that callers can look
/// backwards and forwards by index.
pub(crate) fn classify_lines(text: &str) -> Vec<Line<'_>> {
    text.lines().map(classify_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_marker() {
        assert_eq!(classify_line("## Git"), Line::CategoryMarker("Git"));
        assert_eq!(classify_line("##Docker stuff"), Line::CategoryMarker("Docker stuff"));
        assert_eq!(classify_line("   ## Indented"), Line::CategoryMarker("Indented"));
    }

    #[test]
    fn test_bare_double_hash_is_not_a_marker_nor_a_comment() {
        assert_eq!(classify_line("##"), Line::Unrecognized);
        assert_eq!(classify_line("##   "), Line::Unrecognized);
    }

    #[test]
    fn test_alias_with_comment() {
        assert_eq!(
            classify_line("alias gs='git status' # Show working tree status"),
            Line::AliasDef {
                name: "gs",
                command: "git status",
                comment: Some("Show working tree status"),
            }
        );
    }

    #[test]
    fn test_alias_without_comment() {
        assert_eq!(
            classify_line("  alias k.get-pods='kubectl get pods'"),
            Line::AliasDef {
                name: "k.get-pods",
                command: "kubectl get pods",
                comment: None,
            }
        );
    }

    #[test]
    fn test_alias_with_double_quotes_is_not_recognized() {
        assert_eq!(classify_line("alias ll=\"ls -la\""), Line::Unrecognized);
    }

    #[test]
    fn test_alias_with_trailing_code_is_not_recognized() {
        assert_eq!(classify_line("alias ll='ls -la'; echo hi"), Line::Unrecognized);
    }

    #[test]
    fn test_function_opener() {
        assert_eq!(classify_line("mkcd() {"), Line::FunctionDef { name: "mkcd" });
        assert_eq!(
            classify_line("git_clean_branches()   {"),
            Line::FunctionDef {
                name: "git_clean_branches"
            }
        );
    }

    #[test]
    fn test_function_requires_lowercase_start_and_brace() {
        assert_eq!(classify_line("Mkcd() {"), Line::Unrecognized);
        assert_eq!(classify_line("_private() {"), Line::Unrecognized);
        assert_eq!(classify_line("mkcd()"), Line::Unrecognized);
    }

    #[test]
    fn test_single_hash_comment() {
        assert_eq!(
            classify_line("# Create a directory and cd into it"),
            Line::Comment("Create a directory and cd into it")
        );
        assert_eq!(classify_line("#   spaced   "), Line::Comment("spaced"));
    }

    #[test]
    fn test_other_lines_are_unrecognized() {
        assert_eq!(classify_line(""), Line::Unrecognized);
        assert_eq!(classify_line("export EDITOR=nvim"), Line::Unrecognized);
        assert_eq!(classify_line("  cd \"$1\""), Line::Unrecognized);
    }

    #[test]
    fn test_classify_lines_keeps_line_indices() {
        let lines = classify_lines("## Git\n\nalias g='git'\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], Line::Unrecognized);
    }
}
