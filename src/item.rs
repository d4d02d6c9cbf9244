use std::fmt;

/// Discriminator between the two kinds of shortcut found in a definitions file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    /// `alias name='command'`
    Alias,
    /// `name() { ... }`
    Function,
}

impl ItemKind {
    /// Lowercase label, as used in stats and menus.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Alias => "alias",
            ItemKind::Function => "function",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single learnable shortcut.
///
/// Items are built once by the extractor and never edited afterwards, so the
/// fields are only reachable through accessors. `name` is the answer key the
/// quiz compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    command: String,
    description: String,
    category: String,
    kind: ItemKind,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            description: description.into(),
            category: category.into(),
            kind,
        }
    }

    /// Shorthand for an alias item.
    pub fn alias(
        name: impl Into<String>,
        command: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::new(name, command, description, category, ItemKind::Alias)
    }

    /// Shorthand for a function item. The command is always `<name>()`.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let command = format!("{name}()");
        Self::new(name, command, description, category, ItemKind::Function)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_command_is_derived_from_name() {
        let item = Item::function("mkcd", "Create a directory and enter it", "Utilities");
        assert_eq!(item.command(), "mkcd()");
        assert_eq!(item.kind(), ItemKind::Function);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ItemKind::Alias.to_string(), "alias");
        assert_eq!(ItemKind::Function.to_string(), "function");
    }
}
