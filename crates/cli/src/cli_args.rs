//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `arrow-menu` binary
//! using the `clap` crate.

use arrow_menu_core::menu_definitions::ColorDefinition;
use clap::Parser;

/// Command-line arguments for the arrow-menu CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use arrow_menu_cli::cli_args::Args;
///
/// let args = Args::parse_from(["arrow-menu", "--name", "Ada"]);
/// assert_eq!(args.name.as_deref(), Some("Ada"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the menu definition YAML.
    ///
    /// If not provided, defaults to `~/.arrow-menu/menu.yml`, falling back to
    /// the built-in menu when that file does not exist.
    #[arg(long, short = 'm')]
    pub menu_path: Option<String>,

    /// Answer to the opening question, skipping the prompt.
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Color of the highlighted option (default: blue).
    #[arg(long)]
    pub selected_color: Option<String>,

    /// Color of the other options (default: white).
    #[arg(long)]
    pub unselected_color: Option<String>,

    /// Color of option descriptions (default: gray).
    #[arg(long)]
    pub description_color: Option<String>,
}

impl Args {
    /// Colors given on the command line. Slots left out are `None`.
    #[must_use]
    pub fn color_overrides(&self) -> ColorDefinition {
        ColorDefinition {
            selected: self.selected_color.clone(),
            unselected: self.unselected_color.clone(),
            description: self.description_color.clone(),
        }
    }
}
