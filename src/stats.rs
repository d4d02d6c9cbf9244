use crate::item::{Item, ItemKind};
use std::collections::BTreeMap;

/// Alias and function counts for one group of items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub aliases: usize,
    pub functions: usize,
}

impl KindCounts {
    fn add(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::Alias => self.aliases += 1,
            ItemKind::Function => self.functions += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.aliases + self.functions
    }
}

/// Summary of an item pool, grouped by kind and by category.
///
/// Categories are kept in a `BTreeMap` so iteration is alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub by_kind: KindCounts,
    pub by_category: BTreeMap<String, KindCounts>,
}

pub fn compute_stats(items: &[Item]) -> Stats {
    let mut stats = Stats {
        total: items.len(),
        ..Stats::default()
    };

    for item in items {
        stats.by_kind.add(item.kind());
        stats
            .by_category
            .entry(item.category().to_string())
            .or_default()
            .add(item.kind());
    }

    stats
}

/// Distinct categories of the pool, sorted alphabetically.
pub fn categories(items: &[Item]) -> Vec<String> {
    compute_stats(items).by_category.into_keys().collect()
}
