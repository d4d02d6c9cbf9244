//! Narrowing an item pool down to what a quiz should ask.
//!
//! Selections borrow from the pool and keep the original relative order; the
//! pool itself is never touched.

use crate::item::{Item, ItemKind};

/// A way of picking items out of a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Category(String),
    Kind(ItemKind),
}

impl Selection {
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        match self {
            Selection::All => select_all(items),
            Selection::Category(name) => select_by_category(items, name),
            Selection::Kind(kind) => select_by_kind(items, *kind),
        }
    }

    /// Human-readable name for quiz headers, e.g. "Git Category".
    pub fn title(&self) -> String {
        match self {
            Selection::All => "All Items".to_string(),
            Selection::Category(name) => format!("{name} Category"),
            Selection::Kind(ItemKind::Alias) => "Aliases Only".to_string(),
            Selection::Kind(ItemKind::Function) => "Functions Only".to_string(),
        }
    }
}

pub fn select_all(items: &[Item]) -> Vec<&Item> {
    items.iter().collect()
}

/// Items whose category is exactly `category`. Unknown or empty names select nothing.
pub fn select_by_category<'a>(items: &'a [Item], category: &str) -> Vec<&'a Item> {
    items.iter().filter(|i| i.category() == category).collect()
}

pub fn select_by_kind(items: &[Item], kind: ItemKind) -> Vec<&Item> {
    items.iter().filter(|i| i.kind() == kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pool() -> Vec<Item> {
        vec![
            Item::alias("gs", "git status", "Show status", "Git"),
            Item::alias("dps", "docker ps", "List containers", "Docker"),
            Item::function("gclean", "Prune merged branches", "Git"),
            Item::alias("gd", "git diff", "Show diff", "Git"),
        ]
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name().to_string()).collect()
    }

    #[test]
    fn test_select_all_returns_whole_pool_in_order() {
        let items = pool();
        assert_eq!(names(&select_all(&items)), vec!["gs", "dps", "gclean", "gd"]);
    }

    #[test]
    fn test_select_by_category_preserves_order() {
        let items = pool();
        let before = items.clone();
        let git = select_by_category(&items, "Git");
        assert_eq!(names(&git), vec!["gs", "gclean", "gd"]);
        assert_eq!(items, before);
    }

    #[test]
    fn test_unknown_or_empty_category_selects_nothing() {
        let items = pool();
        assert!(select_by_category(&items, "Kafka").is_empty());
        assert!(select_by_category(&items, "").is_empty());
        // exact match only
        assert!(select_by_category(&items, "git").is_empty());
    }

    #[test]
    fn test_select_by_kind() {
        let items = pool();
        assert_eq!(names(&select_by_kind(&items, ItemKind::Function)), vec!["gclean"]);
        assert_eq!(
            names(&select_by_kind(&items, ItemKind::Alias)),
            vec!["gs", "dps", "gd"]
        );
    }

    #[test]
    fn test_selection_apply_and_title() {
        let items = pool();
        let selection = Selection::Category("Docker".to_string());
        assert_eq!(names(&selection.apply(&items)), vec!["dps"]);
        assert_eq!(selection.title(), "Docker Category");
        assert_eq!(Selection::All.apply(&items).len(), 4);
        assert_eq!(Selection::Kind(ItemKind::Alias).title(), "Aliases Only");
    }
}
