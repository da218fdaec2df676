//! Selection state and the transitions driven by decoded key events.
//!
//! This module holds everything about a menu interaction that does not touch
//! the terminal: the validated configuration, the highlighted index with its
//! circular navigation, and the mapping from [`KeyEvent`] to [`Transition`].

use crate::error::{Error, Result};
use crate::key_decoder::KeyEvent;
use crate::menu_definitions::{ColorScheme, SelectOption};

/// Everything needed to show one selection menu.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    pub message: String,
    pub options: Vec<SelectOption>,
    pub colors: ColorScheme,
    /// Index highlighted when the menu first appears.
    pub initial_index: usize,
}

impl SelectionConfig {
    pub fn new(message: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            message: message.into(),
            options,
            colors: ColorScheme::default(),
            initial_index: 0,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn starting_at(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Checks the preconditions of a selection.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyOptions`] when there is nothing to choose from
    /// - [`Error::InitialIndexOutOfRange`] when the initial index is past the last option
    pub fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(Error::EmptyOptions);
        }

        if self.initial_index >= self.options.len() {
            return Err(Error::InitialIndexOutOfRange {
                index: self.initial_index,
                len: self.options.len(),
            });
        }

        Ok(())
    }
}

/// What a key event did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The highlighted index changed and the options need repainting.
    Moved,
    /// Nothing changed.
    Ignored,
    /// The user confirmed the option at this index.
    Resolved(usize),
    Cancelled,
    ForcedExit,
}

impl Transition {
    /// True when the interaction is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Transition::Resolved(_) | Transition::Cancelled | Transition::ForcedExit
        )
    }
}

/// The highlighted index of a menu with `option_count` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    current_index: usize,
    option_count: usize,
}

impl SelectionState {
    /// # Errors
    ///
    /// Same preconditions as [`SelectionConfig::validate`].
    pub fn new(option_count: usize, initial_index: usize) -> Result<Self> {
        if option_count == 0 {
            return Err(Error::EmptyOptions);
        }

        if initial_index >= option_count {
            return Err(Error::InitialIndexOutOfRange {
                index: initial_index,
                len: option_count,
            });
        }

        Ok(Self {
            current_index: initial_index,
            option_count,
        })
    }

    /// # Errors
    ///
    /// See [`SelectionConfig::validate`].
    pub fn for_config(config: &SelectionConfig) -> Result<Self> {
        Self::new(config.options.len(), config.initial_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    pub fn move_up(&mut self) {
        self.current_index = if self.current_index == 0 {
            self.option_count - 1
        } else {
            self.current_index - 1
        };
    }

    pub fn move_down(&mut self) {
        self.current_index = (self.current_index + 1) % self.option_count;
    }

    /// Applies one key event.
    pub fn apply(&mut self, key: KeyEvent) -> Transition {
        match key {
            KeyEvent::Up => {
                self.move_up();
                Transition::Moved
            }
            KeyEvent::Down => {
                self.move_down();
                Transition::Moved
            }
            KeyEvent::Enter => Transition::Resolved(self.current_index),
            KeyEvent::Escape | KeyEvent::Quit => Transition::Cancelled,
            KeyEvent::Interrupt => Transition::ForcedExit,
            KeyEvent::Left | KeyEvent::Right | KeyEvent::Unknown => Transition::Ignored,
        }
    }
}

/// The option a user confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub selected_option: SelectOption,
    pub selected_index: usize,
}

impl SelectionResult {
    #[must_use]
    pub fn from_index(config: &SelectionConfig, selected_index: usize) -> Self {
        Self {
            selected_option: config.options[selected_index].clone(),
            selected_index,
        }
    }
}
