use std::borrow::Cow;
use std::io::{self, Write};

use arrow_menu_core::selection::SelectionConfig;
use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use super::colors::{MenuStyles, TextStyle};

/// Marker in front of the highlighted option
pub const SELECTED_MARKER: &str = "❯ ";
/// Marker in front of every other option
pub const UNSELECTED_MARKER: &str = "  ";

const DESCRIPTION_INDENT: &str = "    ";
// Raw mode does not translate `\n`, so every line ends with an explicit carriage return
const LINE_END: &str = "\r\n";

/// Number of output lines each option takes up
pub const LINES_PER_OPTION: usize = 2;

/// Draws a menu and repaints its options in place.
pub struct MenuRenderer<'c> {
    config: &'c SelectionConfig,
    styles: MenuStyles,
}

impl<'c> MenuRenderer<'c> {
    pub fn new(config: &'c SelectionConfig) -> Self {
        Self {
            config,
            styles: MenuStyles::from(&config.colors),
        }
    }

    /// Prints the message followed by every option, leaving the cursor on
    /// the line below the last option.
    pub fn draw<W: Write>(&self, out: &mut W, current_index: usize) -> io::Result<()> {
        for line in self.config.message.lines() {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(line),
                SetAttribute(Attribute::Reset),
                Print(LINE_END)
            )?;
        }

        self.write_options(out, current_index)?;
        out.flush()
    }

    /// Moves back up over the option block and rewrites it. The message is
    /// left alone.
    pub fn redraw_options<W: Write>(&self, out: &mut W, current_index: usize) -> io::Result<()> {
        queue!(out, MoveUp(self.option_block_height()))?;
        self.write_options(out, current_index)?;
        out.flush()
    }

    fn option_block_height(&self) -> u16 {
        let lines = self.config.options.len() * LINES_PER_OPTION;
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn write_options<W: Write>(&self, out: &mut W, current_index: usize) -> io::Result<()> {
        for (i, option) in self.config.options.iter().enumerate() {
            let (marker, title_style) = if i == current_index {
                (SELECTED_MARKER, self.styles.selected)
            } else {
                (UNSELECTED_MARKER, self.styles.unselected)
            };

            write_line(out, marker, &option.title, title_style)?;
            write_line(
                out,
                DESCRIPTION_INDENT,
                &option.description,
                self.styles.description,
            )?;
        }

        Ok(())
    }
}

/// Folds line breaks into spaces so an option field never spans two lines.
fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(['\r', '\n']) {
        Cow::Owned(text.replace(['\r', '\n'], " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Clears the current line, then writes `prefix` and `text` in `style`.
fn write_line<W: Write>(out: &mut W, prefix: &str, text: &str, style: TextStyle) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::CurrentLine),
        SetForegroundColor(style.color)
    )?;

    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }

    queue!(
        out,
        Print(prefix),
        Print(single_line(text)),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print(LINE_END)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow_menu_core::menu_definitions::SelectOption;

    const CLEAR_LINE: &str = "\x1b[2K";

    fn config() -> SelectionConfig {
        SelectionConfig::new(
            "Pick a fruit",
            vec![
                SelectOption::new("Apple", "Crunchy", 1),
                SelectOption::new("Banana", "Soft", 2),
                SelectOption::new("Cherry", "Small", 3),
            ],
        )
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip `[`, parameters and the final byte
                chars.next();
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn test_draw_layout() {
        let config = config();
        let renderer = MenuRenderer::new(&config);
        let mut out = Vec::<u8>::new();

        renderer.draw(&mut out, 1).unwrap();

        let plain = strip_ansi(&String::from_utf8(out).unwrap());
        let lines: Vec<&str> = plain.split(LINE_END).collect();
        assert_eq!(
            lines,
            vec![
                "Pick a fruit",
                "  Apple",
                "    Crunchy",
                "❯ Banana",
                "    Soft",
                "  Cherry",
                "    Small",
                "",
            ]
        );
    }

    #[test]
    fn test_draw_multiline_message() {
        let config = SelectionConfig::new("First\nSecond", vec![SelectOption::new("A", "a", 1)]);
        let renderer = MenuRenderer::new(&config);
        let mut out = Vec::<u8>::new();

        renderer.draw(&mut out, 0).unwrap();

        let plain = strip_ansi(&String::from_utf8(out).unwrap());
        assert!(plain.starts_with("First\r\nSecond\r\n❯ A\r\n"));
    }

    #[test]
    fn test_redraw_moves_up_two_lines_per_option_and_clears() {
        let config = config();
        let renderer = MenuRenderer::new(&config);
        let mut out = Vec::<u8>::new();

        renderer.redraw_options(&mut out, 2).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b[6A"));
        assert_eq!(
            written.matches(CLEAR_LINE).count(),
            config.options.len() * LINES_PER_OPTION
        );
        assert!(!written.contains("Pick a fruit"));

        let plain = strip_ansi(&written);
        assert!(plain.contains("❯ Cherry"));
        assert!(plain.contains("  Apple"));
    }

    #[test]
    fn test_line_breaks_in_options_keep_two_lines_per_option() {
        let config = SelectionConfig::new(
            "Pick",
            vec![
                SelectOption::new("Two\nlines", "Also\r\ntwo", 1),
                SelectOption::new("Plain", "", 2),
            ],
        );
        let renderer = MenuRenderer::new(&config);
        let mut out = Vec::<u8>::new();

        renderer.redraw_options(&mut out, 0).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b[4A"));
        assert_eq!(written.matches('\n').count(), 4);

        let plain = strip_ansi(&written);
        assert!(plain.contains("❯ Two lines\r\n"));
        assert!(plain.contains("    Also  two\r\n"));
    }

    #[test]
    fn test_selected_title_is_bold_and_colored() {
        let config = config();
        let renderer = MenuRenderer::new(&config);
        let mut out = Vec::<u8>::new();

        renderer.redraw_options(&mut out, 0).unwrap();

        let written = String::from_utf8(out).unwrap();
        let selected_line = written
            .split(LINE_END)
            .find(|line| line.contains(SELECTED_MARKER))
            .unwrap();
        // Dark blue foreground, then bold
        assert!(selected_line.contains("\x1b[38;5;4m\x1b[1m"));

        let unselected_line = written
            .split(LINE_END)
            .find(|line| line.contains("Banana"))
            .unwrap();
        assert!(!unselected_line.contains("\x1b[1m"));
    }
}
