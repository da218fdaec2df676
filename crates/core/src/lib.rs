//! Arrow Menu Core Library
//!
//! This crate provides the terminal-independent parts of arrow-menu, an
//! arrow-key driven selection menu for text terminals.
//!
//! # Key Features
//!
//! - **Key Decoding**: Map raw terminal input bytes to logical key events
//! - **Selection State**: Circular highlighted-index navigation and its transitions
//! - **Menu Definitions**: Options, named colors and YAML menu files
//! - **Error Handling**: One error type for cancellations, precondition and I/O failures
//!
//! # Examples
//!
//! Driving a selection without a terminal:
//!
//! ```
//! use arrow_menu_core::key_decoder::decode;
//! use arrow_menu_core::menu_definitions::SelectOption;
//! use arrow_menu_core::selection::{SelectionConfig, SelectionResult, SelectionState, Transition};
//!
//! let config = SelectionConfig::new(
//!     "Pick a letter",
//!     vec![
//!         SelectOption::new("A", "first", "a"),
//!         SelectOption::new("B", "second", "b"),
//!     ],
//! );
//! let mut state = SelectionState::for_config(&config)?;
//!
//! state.apply(decode(b"\x1b[B"));
//! if let Transition::Resolved(index) = state.apply(decode(b"\r")) {
//!     let result = SelectionResult::from_index(&config, index);
//!     assert_eq!(result.selected_option.title, "B");
//! }
//! # Ok::<(), arrow_menu_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod key_decoder;
pub mod menu_definitions;
pub mod selection;
