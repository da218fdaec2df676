use std::fmt::{Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

/// Opaque identifier a caller attaches to an option.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    Integer(i64),
    Text(String),
}

impl Display for OptionValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Integer(i) => write!(formatter, "{i}"),
            OptionValue::Text(t) => formatter.write_str(t),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

/// One entry of a selection menu.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            value: value.into(),
        }
    }
}

impl Display for SelectOption {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            formatter.write_str(&self.title)
        } else {
            write!(formatter, "{} ({})", self.title, self.description)
        }
    }
}

/// The named colors a menu can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl MenuColor {
    /// Looks up a color by name, case-insensitively. `grey` is accepted for `gray`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.trim().to_lowercase().as_str() {
            "black" => MenuColor::Black,
            "red" => MenuColor::Red,
            "green" => MenuColor::Green,
            "yellow" => MenuColor::Yellow,
            "blue" => MenuColor::Blue,
            "magenta" => MenuColor::Magenta,
            "cyan" => MenuColor::Cyan,
            "white" => MenuColor::White,
            "gray" | "grey" => MenuColor::Gray,
            _ => return None,
        })
    }

    /// Resolves an optional color name, using `default` when the name is
    /// absent or not recognized.
    #[must_use]
    pub fn resolve(name: Option<&str>, default: MenuColor) -> MenuColor {
        match name {
            None => default,
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                debug!("Unknown color name `{name}`, using {default:?}");
                default
            }),
        }
    }
}

/// The three color slots of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub selected: MenuColor,
    pub unselected: MenuColor,
    pub description: MenuColor,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            selected: MenuColor::Blue,
            unselected: MenuColor::White,
            description: MenuColor::Gray,
        }
    }
}

/// Color names as written in a menu file or on the command line.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDefinition {
    pub selected: Option<String>,
    pub unselected: Option<String>,
    pub description: Option<String>,
}

impl ColorDefinition {
    /// Fills the slots left empty here from `fallback`.
    #[must_use]
    pub fn or(self, fallback: &ColorDefinition) -> ColorDefinition {
        ColorDefinition {
            selected: self.selected.or_else(|| fallback.selected.clone()),
            unselected: self.unselected.or_else(|| fallback.unselected.clone()),
            description: self.description.or_else(|| fallback.description.clone()),
        }
    }

    #[must_use]
    pub fn to_scheme(&self) -> ColorScheme {
        let defaults = ColorScheme::default();
        ColorScheme {
            selected: MenuColor::resolve(self.selected.as_deref(), defaults.selected),
            unselected: MenuColor::resolve(self.unselected.as_deref(), defaults.unselected),
            description: MenuColor::resolve(self.description.as_deref(), defaults.description),
        }
    }
}

/// A first-level menu entry with the options offered once it is chosen.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CategoryDefinition {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub value: OptionValue,
    /// Prompt shown above this category's options.
    pub message: Option<String>,
    pub options: Vec<SelectOption>,
}

impl CategoryDefinition {
    #[must_use]
    pub fn as_option(&self) -> SelectOption {
        SelectOption {
            title: self.title.clone(),
            description: self.description.clone(),
            value: self.value.clone(),
        }
    }

    #[must_use]
    pub fn options_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("Choose from {}:", self.title))
    }
}

/// The whole two-step menu, as loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MenuDefinition {
    /// Free-text question asked before the first menu.
    pub question: String,
    pub default_answer: Option<String>,
    /// Prompt shown above the categories.
    pub message: String,
    #[serde(default)]
    pub colors: ColorDefinition,
    pub categories: Vec<CategoryDefinition>,
}

impl MenuDefinition {
    #[must_use]
    pub fn category_options(&self) -> Vec<SelectOption> {
        self.categories
            .iter()
            .map(CategoryDefinition::as_option)
            .collect()
    }
}
