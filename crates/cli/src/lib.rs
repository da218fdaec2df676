//! Arrow Menu CLI Library
//!
//! This crate provides the terminal side of arrow-menu: the interactive
//! selector that draws a menu, reads arrow keys in raw mode and resolves to
//! the option the user picks, plus the small flow the `arrow-menu` binary
//! runs on top of it.
//!
//! # Key Features
//!
//! - **Interactive Selection**: Arrow-key navigation with in-place repainting
//! - **Terminal Safety**: Cursor visibility and raw mode restored on every exit path
//! - **Injectable Seams**: Terminal mode, key source and output can be swapped for tests
//! - **Two-Step Flow**: Free-text question, category menu, option menu, summary
//!
//! # Architecture
//!
//! - [`selector`]: The interactive selector and its terminal, input and rendering parts
//! - [`prompt`]: Line-based free-text prompt
//! - [`flow`]: Chaining two selections and printing the summary
//! - [`cli_args`]: Command-line argument parsing
//!
//! # Examples
//!
//! ```no_run
//! use arrow_menu_cli::selector;
//! use arrow_menu_core::menu_definitions::SelectOption;
//! use arrow_menu_core::selection::SelectionConfig;
//!
//! let config = SelectionConfig::new(
//!     "Pick a shell",
//!     vec![
//!         SelectOption::new("fish", "Friendly interactive shell", "fish"),
//!         SelectOption::new("zsh", "Bourne-compatible", "zsh"),
//!     ],
//! );
//!
//! let result = selector::select(&config)?;
//! println!("You picked {}", result.selected_option.title);
//! # Ok::<(), arrow_menu_core::error::Error>(())
//! ```

pub mod cli_args;
pub mod flow;
pub mod prompt;
pub mod selector;
