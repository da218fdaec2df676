//! Reading and validation of menu definition files.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::MenuSource;
use crate::error::{Error, Result};
use crate::menu_definitions::MenuDefinition;

const BUILT_IN_MENU: &str = include_str!("default_menu.yml");

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_menu(menu: &MenuDefinition, path: &str) -> Result<()> {
    if menu.categories.is_empty() {
        return Err(Error::empty_menu_definition(path.to_string()));
    }

    if let Some(empty) = menu.categories.iter().find(|c| c.options.is_empty()) {
        return Err(Error::EmptyCategory(empty.title.clone()));
    }

    Ok(())
}

/// Reads and validates the menu definition at `path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or does not match the menu structure
/// - The menu has no categories, or a category has no options
pub fn get_menu_definition(path: &str) -> Result<MenuDefinition> {
    let reader = get_reader("menu definition", path)?;

    // Map by hand so the path ends up in the error
    let menu: MenuDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "menu definition".to_string(),
            path.to_string(),
            e,
        )
    })?;

    validate_menu(&menu, path)?;
    Ok(menu)
}

/// The menu shipped with the binary.
///
/// # Errors
///
/// Only if the embedded YAML is broken.
pub fn built_in_menu() -> Result<MenuDefinition> {
    let menu: MenuDefinition = serde_yaml::from_str(BUILT_IN_MENU).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "built-in menu".to_string(),
            "<built-in>".to_string(),
            e,
        )
    })?;

    validate_menu(&menu, "<built-in>")?;
    Ok(menu)
}

/// Loads the menu for `source`.
///
/// A missing default file falls back to [`built_in_menu`]; a missing explicit
/// file is an error.
///
/// # Errors
///
/// See [`get_menu_definition`].
pub fn load_menu(source: &MenuSource) -> Result<MenuDefinition> {
    match source {
        MenuSource::Default(path) if !Path::new(path).exists() => {
            debug!("No menu file at `{path}`, using the built-in menu");
            built_in_menu()
        }
        source => {
            debug!("Menu path: `{}`", source.path());
            get_menu_definition(source.path())
        }
    }
}
