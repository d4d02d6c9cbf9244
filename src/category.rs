//! Mapping of `## Section` comments to display categories.

/// Category used for items seen before any section marker.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Known section keywords and the category they map to.
///
/// Checked in order with a case-insensitive substring match, so more specific
/// keys must come before shorter ones they contain.
const KNOWN_CATEGORIES: &[(&str, &str)] = &[
    ("modern cli replacements", "CLI Tools"),
    ("navigation", "Navigation"),
    ("git", "Git"),
    ("kubernetes", "Kubernetes"),
    ("docker", "Docker"),
    ("terraform", "Terraform"),
    ("aws cli", "AWS"),
    ("python", "Python"),
    ("homebrew", "Homebrew"),
    ("npm", "Node.js"),
    ("productivity", "Productivity"),
    ("utilities", "Utilities"),
    ("kafka", "Kafka"),
    ("neovim", "Editor"),
];

/// Turn the free text of a section marker into a category label.
///
/// Falls back to title-casing the raw text when no keyword matches, and to
/// [`DEFAULT_CATEGORY`] when the text is blank.
pub fn normalize_category(comment: &str) -> String {
    let comment = comment.trim();
    if comment.is_empty() {
        return DEFAULT_CATEGORY.to_string();
    }

    let lower = comment.to_lowercase();
    KNOWN_CATEGORIES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, category)| category.to_string())
        .unwrap_or_else(|| title_case(comment))
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(ch);
            prev_is_alpha = false;
        }
    }
    out
}
