//! Configuration path utilities for arrow-menu.
//!
//! This module resolves where the menu definition file lives and expands
//! shell variables like `~` in paths.

/// Default path for the menu definition file
pub const DEFAULT_MENU_PATH: &str = "~/.arrow-menu/menu.yml";

/// Where the menu definition comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    /// A path given by the user. It must exist.
    Explicit(String),
    /// The default path. The built-in menu is used when it does not exist.
    Default(String),
}

impl MenuSource {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            MenuSource::Explicit(path) | MenuSource::Default(path) => path,
        }
    }
}

/// Resolves the menu file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// menu path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use arrow_menu_core::config::{get_menu_source, MenuSource};
///
/// let custom = get_menu_source(&Some("/path/to/menu.yml".to_string()));
/// assert_eq!(custom, MenuSource::Explicit("/path/to/menu.yml".to_string()));
///
/// let default = get_menu_source(&None);
/// assert!(default.path().ends_with("menu.yml"));
/// ```
pub fn get_menu_source(menu_path_arg: &Option<String>) -> MenuSource {
    match menu_path_arg {
        Some(menu_path) => MenuSource::Explicit(expand_path(menu_path)),
        None => MenuSource::Default(expand_path(DEFAULT_MENU_PATH)),
    }
}

fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
