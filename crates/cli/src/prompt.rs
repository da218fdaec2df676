use std::io::{stdin, stdout, BufRead, Write};

use arrow_menu_core::error::{Error, Result};

/// Asks a free-text question on standard input and output.
///
/// # Errors
///
/// See [`prompt_text_from`].
pub fn prompt_text(question: &str, default: Option<&str>) -> Result<String> {
    prompt_text_from(&mut stdin().lock(), &mut stdout(), question, default)
}

/// Asks a free-text question until it gets an answer.
///
/// An empty answer takes `default` when there is one, and asks again otherwise.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] if the input ends without an answer and
/// there is no default, or an I/O error.
pub fn prompt_text_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: Option<&str>,
) -> Result<String> {
    loop {
        if let Some(default) = default {
            write!(output, "{question} [{default}]: ")?;
        } else {
            write!(output, "{question}: ")?;
        }

        output.flush()?;

        // Read user input
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return default.map(str::to_string).ok_or(Error::InputClosed);
        }

        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }

        if let Some(default) = default {
            return Ok(default.to_string());
        }

        // No input and no default - ask again
    }
}
