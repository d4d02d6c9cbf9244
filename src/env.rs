use std::collections::HashMap;
use std::env as stdenv;
use std::path::{Path, PathBuf};

/// Overrides the location of the definitions file.
pub const SOURCE_VAR: &str = "LEARN_ALIASES_FILE";

/// Any non-empty value disables colored output (see <https://no-color.org>).
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Log filter directives, e.g. `LEARN_ALIASES_LOG=debug`.
pub const LOG_VAR: &str = "LEARN_ALIASES_LOG";

/// Definitions file looked up in the home directory by default.
pub const DEFAULT_SOURCE_NAME: &str = ".mac-dev-setup-aliases";

/// Snapshot of the process environment the tool is configured from.
///
/// Fields are public so tests can build an environment by hand instead of
/// touching the real process state.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Environment variables.
    pub vars: HashMap<String, String>,
    /// The user's home directory, if one could be determined.
    pub home_dir: Option<PathBuf>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn new() -> Self {
        Self {
            vars: stdenv::vars().collect(),
            home_dir: dirs::home_dir(),
        }
    }

    /// Value of `key`, treating empty values as unset.
    pub fn get_var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn set_var(&mut self, key: impl Into<String>, val: impl Into<String>) {
        self.vars.insert(key.into(), val.into());
    }

    /// Where the definitions file lives.
    ///
    /// An explicit path wins, then [`SOURCE_VAR`], then [`DEFAULT_SOURCE_NAME`]
    /// in the home directory. `None` only when nothing is set and there is no home.
    pub fn source_path(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = self.get_var(SOURCE_VAR) {
            return Some(PathBuf::from(path));
        }
        self.home_dir
            .as_ref()
            .map(|home| home.join(DEFAULT_SOURCE_NAME))
    }

    /// Whether output should be colored, given the `--no-color` flag.
    pub fn color_enabled(&self, no_color_flag: bool) -> bool {
        !no_color_flag && self.get_var(NO_COLOR_VAR).is_none()
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when there is no override and no home directory to look in.
    pub source: Option<PathBuf>,
    pub color: bool,
}

impl Config {
    /// Combine command-line overrides with the environment.
    pub fn resolve(env: &Environment, explicit_source: Option<&Path>, no_color: bool) -> Self {
        Self {
            source: env.source_path(explicit_source),
            color: env.color_enabled(no_color),
        }
    }
}
