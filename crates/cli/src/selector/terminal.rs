//! Terminal mode control and the session guard that restores it.

use std::io::{self, Write};

use arrow_menu_core::error::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use crossterm::tty::IsTty;
use crossterm::{cursor, queue};
use log::debug;

/// The terminal mode operations a selection needs.
pub trait TerminalMode {
    /// Whether input comes from an interactive terminal.
    fn is_tty(&self) -> bool;
    fn is_raw_mode_enabled(&self) -> io::Result<bool>;
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()>;
}

impl<T: TerminalMode + ?Sized> TerminalMode for &mut T {
    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }

    fn is_raw_mode_enabled(&self) -> io::Result<bool> {
        (**self).is_raw_mode_enabled()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_raw_mode(enabled)
    }
}

/// The process terminal, through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermTerminal;

impl TerminalMode for CrosstermTerminal {
    fn is_tty(&self) -> bool {
        io::stdin().is_tty()
    }

    fn is_raw_mode_enabled(&self) -> io::Result<bool> {
        is_raw_mode_enabled()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            enable_raw_mode()
        } else {
            disable_raw_mode()
        }
    }
}

/// Owns the terminal between setup and cleanup.
///
/// Opening enters raw mode (TTY input only) and hides the cursor. Closing
/// shows the cursor and puts raw mode back to what it was before opening.
/// If the session is dropped without [`TerminalSession::close`], for example
/// on an early return or a panic, the drop does the same restore.
pub struct TerminalSession<'a, T: TerminalMode, W: Write> {
    terminal: &'a mut T,
    output: &'a mut W,
    prior_raw_mode: Option<bool>,
    cursor_hidden: bool,
    restored: bool,
}

impl<'a, T: TerminalMode, W: Write> TerminalSession<'a, T, W> {
    /// # Errors
    ///
    /// Returns an error if the terminal mode cannot be read or changed, or the
    /// cursor cannot be hidden. Anything already changed is restored first.
    pub fn open(terminal: &'a mut T, output: &'a mut W) -> Result<Self> {
        let mut session = Self {
            terminal,
            output,
            prior_raw_mode: None,
            cursor_hidden: false,
            restored: false,
        };
        session.enter()?;
        Ok(session)
    }

    fn enter(&mut self) -> Result<()> {
        if self.terminal.is_tty() {
            let prior = self.terminal.is_raw_mode_enabled()?;
            self.terminal.set_raw_mode(true)?;
            self.prior_raw_mode = Some(prior);
            debug!("Entered raw mode (previously enabled: {prior})");
        } else {
            debug!("Input is not a TTY, leaving the terminal mode alone");
        }

        queue!(self.output, cursor::Hide)?;
        self.cursor_hidden = true;
        self.output.flush()?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut *self.output
    }

    /// Shows the cursor and restores the prior raw mode, undoing only what
    /// opening actually changed.
    ///
    /// Both steps are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// The first failure of the two steps.
    pub fn close(&mut self) -> Result<()> {
        debug_assert!(!self.restored, "terminal session closed twice");
        self.restored = true;

        let cursor_shown = if self.cursor_hidden {
            queue!(self.output, cursor::Show).and_then(|()| self.output.flush())
        } else {
            Ok(())
        };
        let mode_restored = match self.prior_raw_mode {
            Some(prior) => self.terminal.set_raw_mode(prior),
            None => Ok(()),
        };
        debug!("Restored terminal (raw mode: {:?})", self.prior_raw_mode);

        cursor_shown?;
        mode_restored?;
        Ok(())
    }
}

impl<T: TerminalMode, W: Write> Drop for TerminalSession<'_, T, W> {
    fn drop(&mut self) {
        if !self.restored {
            let _ = self.close();
        }
    }
}
