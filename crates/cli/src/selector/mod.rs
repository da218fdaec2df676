//! Interactive arrow-key selection menu.
//!
//! This module runs one selection from start to finish on a terminal.
//!
//! # Lifecycle
//!
//! 1. **Setup**: enter raw mode (TTY input only) and hide the cursor
//! 2. **Render**: print the message and a two-line block per option
//! 3. **Input**: pull key events one at a time and update the highlighted index,
//!    repainting only the option block
//! 4. **Cleanup**: show the cursor and restore the prior raw mode, on every exit path
//!
//! # Keys
//!
//! - Up/Down arrows move the highlight, wrapping at both ends
//! - Enter confirms the highlighted option
//! - Escape or `q` cancels
//! - Ctrl+C ends with a force exit

pub mod colors;
pub mod keys;
pub mod render;
pub mod terminal;

use std::io::{stdout, Stdout, Write};

use arrow_menu_core::error::{Error, Result};
use arrow_menu_core::selection::{SelectionConfig, SelectionResult, SelectionState, Transition};
use log::{debug, trace};

pub use keys::{ChannelKeys, KeySource, ReaderKeys, StdinKeys};
pub use render::MenuRenderer;
pub use terminal::{CrosstermTerminal, TerminalMode, TerminalSession};

/// A single-use interactive selector.
///
/// The selector owns the terminal, input and output it runs on for the
/// whole interaction; [`Selector::select`] consumes it.
pub struct Selector<T: TerminalMode, K: KeySource, W: Write> {
    terminal: T,
    keys: K,
    output: W,
}

impl Selector<CrosstermTerminal, StdinKeys, Stdout> {
    /// A selector on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(CrosstermTerminal, StdinKeys::stdin(), stdout())
    }
}

impl<T: TerminalMode, K: KeySource, W: Write> Selector<T, K, W> {
    pub fn new(terminal: T, keys: K, output: W) -> Self {
        Self {
            terminal,
            keys,
            output,
        }
    }

    /// Shows the menu and waits until the user confirms, cancels or force exits.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyOptions`] or [`Error::InitialIndexOutOfRange`], before the terminal is touched
    /// - [`Error::Cancelled`] when the user presses Escape or `q`
    /// - [`Error::ForcedExit`] when the user presses Ctrl+C
    /// - [`Error::InputClosed`] when the input ends first
    /// - [`Error::Stdio`] when the terminal cannot be read, written or switched
    pub fn select(mut self, config: &SelectionConfig) -> Result<SelectionResult> {
        let mut state = SelectionState::for_config(config)?;
        let renderer = MenuRenderer::new(config);

        let mut session = TerminalSession::open(&mut self.terminal, &mut self.output)?;
        debug!(
            "Selecting from {} options, starting at {}",
            config.options.len(),
            state.current_index()
        );

        let outcome = run_selection(&mut session, &mut self.keys, config, &renderer, &mut state);
        let closed = session.close();

        // The interaction's own error wins over a cleanup error
        let result = outcome?;
        closed?;
        Ok(result)
    }
}

fn run_selection<T: TerminalMode, W: Write, K: KeySource>(
    session: &mut TerminalSession<'_, T, W>,
    keys: &mut K,
    config: &SelectionConfig,
    renderer: &MenuRenderer<'_>,
    state: &mut SelectionState,
) -> Result<SelectionResult> {
    renderer.draw(session.output(), state.current_index())?;

    loop {
        let Some(key) = keys.next_key()? else {
            debug!("Input closed while selecting");
            return Err(Error::InputClosed);
        };
        trace!("Key event: {key:?}");

        match state.apply(key) {
            Transition::Moved => {
                trace!("Highlighted index: {}", state.current_index());
                renderer.redraw_options(session.output(), state.current_index())?;
            }
            Transition::Ignored => {}
            Transition::Resolved(index) => {
                debug!("Selected option {index}");
                return Ok(SelectionResult::from_index(config, index));
            }
            Transition::Cancelled => {
                debug!("Selection cancelled");
                return Err(Error::Cancelled);
            }
            Transition::ForcedExit => {
                debug!("Force exit requested");
                return Err(Error::ForcedExit);
            }
        }
    }
}

/// Runs one selection on standard input and output.
///
/// # Errors
///
/// See [`Selector::select`].
pub fn select(config: &SelectionConfig) -> Result<SelectionResult> {
    Selector::stdio().select(config)
}
