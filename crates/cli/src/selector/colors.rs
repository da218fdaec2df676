use arrow_menu_core::menu_definitions::{ColorScheme, MenuColor};
use crossterm::style::Color;

/// Trait for converting menu colors to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Color;
}

impl AsTermColor for MenuColor {
    fn as_crossterm_color(&self) -> Color {
        match self {
            MenuColor::Black => Color::Black,
            MenuColor::Red => Color::DarkRed,
            MenuColor::Green => Color::DarkGreen,
            MenuColor::Yellow => Color::DarkYellow,
            MenuColor::Blue => Color::DarkBlue,
            MenuColor::Magenta => Color::DarkMagenta,
            MenuColor::Cyan => Color::DarkCyan,
            MenuColor::White => Color::Grey,
            // Bright black, the usual "dim" grey
            MenuColor::Gray => Color::DarkGrey,
        }
    }
}

/// How one piece of menu text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    pub bold: bool,
}

/// Styles for the three kinds of menu text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyles {
    pub selected: TextStyle,
    pub unselected: TextStyle,
    pub description: TextStyle,
}

impl From<&ColorScheme> for MenuStyles {
    fn from(scheme: &ColorScheme) -> Self {
        Self {
            selected: TextStyle {
                color: scheme.selected.as_crossterm_color(),
                bold: true,
            },
            unselected: TextStyle {
                color: scheme.unselected.as_crossterm_color(),
                bold: false,
            },
            description: TextStyle {
                color: scheme.description.as_crossterm_color(),
                bold: false,
            },
        }
    }
}
