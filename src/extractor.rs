//! Extraction of [`Item`]s from the text of a shell definitions file.
//!
//! # Format
//! ```text
//! ## Git
//! alias gs='git status' # Show working tree status
//! alias gp='git push'
//!
//! # Create a directory and enter it
//! mkcd() {
//!     mkdir -p "$1" && cd "$1"
//! }
//! ```
//!
//! Aliases take their description from the trailing comment, or from the
//! command itself. Functions look for a description in a small window around
//! their opening line: a comment above it, then a `Usage:` echo or a comment
//! in the body, falling back to `Function: <name>`.

use crate::category::{DEFAULT_CATEGORY, normalize_category};
use crate::error::ExtractError;
use crate::item::Item;
use crate::lexer::{Line, classify_lines};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// How many lines above a function opener are searched for a comment.
pub const LOOKBEHIND_LINES: usize = 3;

/// How many lines below a function opener are searched for a usage message or comment.
pub const LOOKAHEAD_LINES: usize = 4;

/// A comment must be strictly longer than this many characters to serve as a description.
pub const MIN_DESCRIPTION_LEN: usize = 5;

const USAGE_MARKER: &str = "Usage:";

/// Parse the full text of a definitions file into items, in file order.
///
/// Extraction is pure: the same text always yields the same items. Text with
/// no recognizable definitions yields an empty vector.
pub fn extract(text: &str) -> Vec<Item> {
    Extractor::new(text).run()
}

/// Read and parse the definitions file at `path`.
///
/// # Errors
///
/// Returns [`ExtractError::SourceUnavailable`] when the file cannot be read and
/// [`ExtractError::Decoding`] when it is not valid UTF-8.
pub fn load_items(path: &Path) -> Result<Vec<Item>, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ExtractError::Decoding {
        path: path.to_path_buf(),
        source,
    })?;

    let items = extract(&text);
    info!(path = %path.display(), count = items.len(), "loaded shortcut definitions");
    Ok(items)
}

struct Extractor<'a> {
    raw: Vec<&'a str>,
    lines: Vec<Line<'a>>,
    category: String,
}

impl<'a> Extractor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            raw: text.lines().map(str::trim).collect(),
            lines: classify_lines(text),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    fn run(mut self) -> Vec<Item> {
        let mut items = Vec::new();

        for idx in 0..self.lines.len() {
            match self.lines[idx] {
                Line::CategoryMarker(text) => {
                    self.category = normalize_category(text);
                    debug!(line = idx + 1, category = %self.category, "entering category");
                }
                Line::AliasDef {
                    name,
                    command,
                    comment,
                } => {
                    let description = non_blank(comment).unwrap_or(command);
                    items.push(Item::alias(name, command, description, self.category.as_str()));
                }
                Line::FunctionDef { name } => {
                    let description = self.describe_function(idx, name);
                    items.push(Item::function(name, description, self.category.as_str()));
                }
                Line::Comment(_) | Line::Unrecognized => {}
            }
        }

        items
    }

    /// Infer a description for the function opened at line `idx`.
    ///
    /// Priority: a comment just above the opener, a `Usage:` echo in the body,
    /// a comment in the body, and finally `Function: <name>`.
    fn describe_function(&self, idx: usize, name: &str) -> String {
        self.preceding_comment(idx)
            .or_else(|| self.usage_message(idx))
            .or_else(|| self.following_comment(idx))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Function: {name}"))
    }

    fn preceding_comment(&self, idx: usize) -> Option<&'a str> {
        let start = idx.saturating_sub(LOOKBEHIND_LINES);
        self.lines[start..idx].iter().find_map(descriptive_comment)
    }

    fn usage_message(&self, idx: usize) -> Option<&'a str> {
        self.raw[self.lookahead(idx)]
            .iter()
            .copied()
            .find_map(usage_text)
    }

    fn following_comment(&self, idx: usize) -> Option<&'a str> {
        self.lines[self.lookahead(idx)].iter().find_map(descriptive_comment)
    }

    fn lookahead(&self, idx: usize) -> std::ops::Range<usize> {
        let start = (idx + 1).min(self.lines.len());
        let end = (idx + 1 + LOOKAHEAD_LINES).min(self.lines.len());
        start..end
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn descriptive_comment<'a>(line: &Line<'a>) -> Option<&'a str> {
    match line {
        Line::Comment(text) if text.chars().count() > MIN_DESCRIPTION_LEN => Some(*text),
        _ => None,
    }
}

/// Pull the message out of an `echo "Usage: ..."` line.
///
/// A quoted argument is cut at its closing quote so redirections such as
/// `>&2` do not leak into the description.
fn usage_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("echo ")?;
    if !rest.contains(USAGE_MARKER) {
        return None;
    }

    let rest = rest.trim_start();
    let message = match rest.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &rest[1..];
            body.find(quote).map_or(body, |end| &body[..end])
        }
        _ => rest,
    };

    non_blank(Some(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alias_with_comment() {
        let items = extract("alias gs='git status' # Show working tree status\n");
        assert_eq!(
            items,
            vec![Item::alias("gs", "git status", "Show working tree status", "Other")]
        );
    }

    #[test]
    fn test_alias_without_comment_uses_command() {
        let items = extract("alias ll='eza -la --git'");
        assert_eq!(items[0].description(), "eza -la --git");
        assert_eq!(items[0].description(), items[0].command());
    }

    #[test]
    fn test_alias_with_empty_comment_uses_command() {
        let items = extract("alias ll='ls -la' #   ");
        assert_eq!(items[0].description(), "ls -la");
    }

    #[test]
    fn test_alias_description_keeps_padded_command_verbatim() {
        let items = extract("alias x=' ls -la '\nalias y=' pwd ' #  ");
        assert_eq!(items[0].command(), " ls -la ");
        assert_eq!(items[0].description(), " ls -la ");
        assert_eq!(items[1].description(), " pwd ");
    }

    #[test]
    fn test_category_applies_until_next_marker() {
        let text = "\
alias before='echo before'
## Git
alias gs='git status'
alias gd='git diff'
## Docker
alias dps='docker ps'
";
        let items = extract(text);
        let categories: Vec<(&str, &str)> =
            items.iter().map(|i| (i.name(), i.category())).collect();
        assert_eq!(
            categories,
            vec![
                ("before", "Other"),
                ("gs", "Git"),
                ("gd", "Git"),
                ("dps", "Docker"),
            ]
        );
    }

    #[test]
    fn test_function_with_preceding_comment() {
        let text = "\
# Create a directory and enter it
mkcd() {
    mkdir -p \"$1\" && cd \"$1\"
}
";
        let items = extract(text);
        assert_eq!(
            items,
            vec![Item::function("mkcd", "Create a directory and enter it", "Other")]
        );
    }

    #[test]
    fn test_short_preceding_comment_is_ignored() {
        let text = "\
# tiny
mkcd() {
}
";
        assert_eq!(extract(text)[0].description(), "Function: mkcd");
    }

    #[test]
    fn test_category_marker_is_not_a_description() {
        let text = "\
## Navigation helpers
up() {
}
";
        let items = extract(text);
        assert_eq!(items[0].category(), "Navigation");
        assert_eq!(items[0].description(), "Function: up");
    }

    #[test]
    fn test_preceding_comment_out_of_window_is_ignored() {
        let text = "\
# Far away description
line one
line two
line three
far() {
}
";
        assert_eq!(extract(text)[0].description(), "Function: far");
    }

    #[test]
    fn test_usage_line_beats_following_comment() {
        let text = "\
extract() {
    # Unpack any archive format
    if [ -z \"$1\" ]; then
        echo \"Usage: extract <archive>\" >&2
    fi
}
";
        assert_eq!(extract(text)[0].description(), "Usage: extract <archive>");
    }

    #[test]
    fn test_following_comment_used_without_usage() {
        let text = "\
serve() {
    # Serve the current directory over HTTP
    python3 -m http.server \"${1:-8000}\"
}
";
        assert_eq!(
            extract(text)[0].description(),
            "Serve the current directory over HTTP"
        );
    }

    #[test]
    fn test_usage_outside_lookahead_is_ignored() {
        let text = "\
slow() {
    one
    two
    three
    four
    echo \"Usage: slow\"
}
";
        assert_eq!(extract(text)[0].description(), "Function: slow");
    }

    #[test]
    fn test_function_at_end_of_text() {
        let items = extract("# Last function in file\nlast() {");
        assert_eq!(items[0].description(), "Last function in file");
        assert_eq!(items[0].kind(), ItemKind::Function);
    }

    #[test]
    fn test_usage_text_variants() {
        assert_eq!(usage_text("echo \"Usage: mkcd <dir>\""), Some("Usage: mkcd <dir>"));
        assert_eq!(usage_text("echo 'Usage: x <y>'"), Some("Usage: x <y>"));
        assert_eq!(usage_text("echo Usage: bare words"), Some("Usage: bare words"));
        assert_eq!(usage_text("echo \"no marker here\""), None);
        assert_eq!(usage_text("printf \"Usage: x\""), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let items = extract("alias g='git'\nalias g='git status'\n");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), items[1].name());
    }

    #[test]
    fn test_empty_and_unmatched_text_yield_no_items() {
        assert!(extract("").is_empty());
        assert!(extract("export PATH=\"$HOME/bin:$PATH\"\n# just a comment\n").is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "## Git\nalias gs='git status'\n# Make and enter\nmkcd() {\n}\n";
        assert_eq!(extract(text), extract(text));
    }
}
