//! Decoding of raw terminal input into logical key events.
//!
//! In raw mode the terminal delivers keystrokes as byte chunks: printable keys
//! as their UTF-8 bytes, control keys as single control bytes and arrow keys as
//! `ESC [ <letter>` escape sequences. [`decode`] maps one chunk to one
//! [`KeyEvent`]; [`split_keystrokes`] breaks a chunk that carries several
//! keystrokes into pieces that can each be decoded on their own, and
//! [`completeness`] tells whether the last piece of a read may continue in
//! the next one.

const ETX: u8 = 0x03;
const CR: u8 = 0x0D;
const ESC: u8 = 0x1B;
const CSI_INTRODUCER: u8 = b'[';
const SS3_INTRODUCER: u8 = b'O';

/// Logical key event produced from one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Up,
    Down,
    /// Decoded for completeness, the selector does not act on it.
    Left,
    /// Decoded for completeness, the selector does not act on it.
    Right,
    Enter,
    Escape,
    Quit,
    /// Ctrl+C
    Interrupt,
    Unknown,
}

/// Decodes a single input chunk.
///
/// Pure and non-blocking. Anything outside the known table decodes to
/// [`KeyEvent::Unknown`] rather than an error.
///
/// # Examples
///
/// ```
/// use arrow_menu_core::key_decoder::{decode, KeyEvent};
///
/// assert_eq!(decode(&[0x1B, 0x5B, 0x41]), KeyEvent::Up);
/// assert_eq!(decode(b"q"), KeyEvent::Quit);
/// assert_eq!(decode(b"A"), KeyEvent::Unknown);
/// ```
#[must_use]
pub fn decode(chunk: &[u8]) -> KeyEvent {
    match chunk {
        [ETX] => KeyEvent::Interrupt,
        [CR] => KeyEvent::Enter,
        [ESC] => KeyEvent::Escape,
        [b'q'] => KeyEvent::Quit,
        [ESC, CSI_INTRODUCER, b'A'] => KeyEvent::Up,
        [ESC, CSI_INTRODUCER, b'B'] => KeyEvent::Down,
        [ESC, CSI_INTRODUCER, b'C'] => KeyEvent::Right,
        [ESC, CSI_INTRODUCER, b'D'] => KeyEvent::Left,
        _ => KeyEvent::Unknown,
    }
}

/// Splits a chunk into keystroke-sized pieces.
///
/// A piece is one of:
/// - a CSI sequence: `ESC [`, parameter bytes, one final byte in `0x40..=0x7E`
/// - an SS3 sequence: `ESC O` and one final byte (F1 to F4, application cursor keys)
/// - `ESC` followed by another keystroke, as sent for Alt+key
/// - a lone `ESC` at the end of the chunk
/// - one UTF-8 encoded character
/// - a single byte otherwise
///
/// A CSI sequence interrupted by a byte that cannot belong to it ends before
/// that byte. An unterminated sequence at the end of the chunk is returned as
/// one piece.
pub fn split_keystrokes(chunk: &[u8]) -> KeystrokeSplit<'_> {
    KeystrokeSplit { remaining: chunk }
}

/// Iterator returned by [`split_keystrokes`].
pub struct KeystrokeSplit<'a> {
    remaining: &'a [u8],
}

impl<'a> Iterator for KeystrokeSplit<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let (piece, rest) = self.remaining.split_at(keystroke_length(self.remaining));
        self.remaining = rest;
        Some(piece)
    }
}

fn keystroke_length(bytes: &[u8]) -> usize {
    match bytes {
        [] => 0,
        [ESC] => 1,
        [ESC, CSI_INTRODUCER, body @ ..] => 2 + csi_body_length(body),
        [ESC, SS3_INTRODUCER, final_byte, ..] if is_final_byte(*final_byte) => 3,
        [ESC, SS3_INTRODUCER, ..] => 2,
        [ESC, rest @ ..] => 1 + keystroke_length(rest),
        [first, ..] => utf8_length(*first).min(bytes.len()),
    }
}

/// Length of the parameter and final bytes following `ESC [`.
fn csi_body_length(body: &[u8]) -> usize {
    for (i, byte) in body.iter().enumerate() {
        if is_final_byte(*byte) {
            return i + 1;
        }
        if !(0x20..=0x3F).contains(byte) {
            return i;
        }
    }
    body.len()
}

fn is_final_byte(byte: u8) -> bool {
    (0x40..=0x7E).contains(&byte)
}

fn utf8_length(first: u8) -> usize {
    match first {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Whether a piece from [`split_keystrokes`] is a whole keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    /// A lone `ESC`: the Escape key, or the start of a sequence cut off by
    /// the end of the read.
    Ambiguous,
    /// The start of an escape sequence or UTF-8 character.
    Incomplete,
}

/// Classifies the last piece of a chunk.
///
/// # Examples
///
/// ```
/// use arrow_menu_core::key_decoder::{completeness, Completeness};
///
/// assert_eq!(completeness(b"\x1b[B"), Completeness::Complete);
/// assert_eq!(completeness(b"\x1b"), Completeness::Ambiguous);
/// assert_eq!(completeness(b"\x1b["), Completeness::Incomplete);
/// ```
#[must_use]
pub fn completeness(piece: &[u8]) -> Completeness {
    match piece {
        [ESC] => Completeness::Ambiguous,
        [ESC, CSI_INTRODUCER, body @ ..] => match body.last() {
            Some(last) if is_final_byte(*last) => Completeness::Complete,
            _ => Completeness::Incomplete,
        },
        [ESC, SS3_INTRODUCER] => Completeness::Incomplete,
        [ESC, rest @ ..] => completeness(rest),
        [first, ..] if utf8_length(*first) > piece.len() => Completeness::Incomplete,
        _ => Completeness::Complete,
    }
}
