//! The two-step menu flow: pick a category, then one of its options.

use std::io::Write;

use arrow_menu_core::error::Result;
use arrow_menu_core::menu_definitions::{ColorScheme, MenuDefinition, SelectOption};
use arrow_menu_core::selection::{SelectionConfig, SelectionResult};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

/// What the user ended up with after both menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChoice {
    pub category: SelectOption,
    pub option: SelectOption,
}

/// Runs both menus through `select`, using the first answer to pick the
/// second menu's options.
///
/// # Errors
///
/// Whatever `select` returns for either menu.
pub fn choose<F>(menu: &MenuDefinition, colors: ColorScheme, mut select: F) -> Result<MenuChoice>
where
    F: FnMut(&SelectionConfig) -> Result<SelectionResult>,
{
    let categories =
        SelectionConfig::new(menu.message.clone(), menu.category_options()).with_colors(colors);
    let category_choice = select(&categories)?;

    let category = &menu.categories[category_choice.selected_index];
    let options = SelectionConfig::new(category.options_message(), category.options.clone())
        .with_colors(colors);
    let option_choice = select(&options)?;

    Ok(MenuChoice {
        category: category_choice.selected_option,
        option: option_choice.selected_option,
    })
}

/// Prints the colored closing summary.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_summary<W: Write>(out: &mut W, name: &str, choice: &MenuChoice) -> Result<()> {
    queue!(
        out,
        Print("\n"),
        SetForegroundColor(Color::DarkGreen),
        SetAttribute(Attribute::Bold),
        Print(format!("Thanks, {name}!\n")),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("Category: "),
        SetForegroundColor(Color::DarkCyan),
        Print(format!("{}\n", choice.category.title)),
        ResetColor,
        Print("Choice:   "),
        SetForegroundColor(Color::DarkCyan),
        Print(&choice.option.title),
        ResetColor,
        SetForegroundColor(Color::DarkGrey),
        Print(format!(" ({})\n", choice.option.value)),
        ResetColor,
    )?;
    out.flush()?;
    Ok(())
}
