//! Sources of decoded key events.

use std::collections::VecDeque;
use std::io::{self, Read, Stdin};
use std::sync::mpsc::{self, Receiver, Sender};

use arrow_menu_core::error::Result;
use arrow_menu_core::key_decoder::{completeness, decode, split_keystrokes, Completeness, KeyEvent};
use log::trace;

const CHUNK_SIZE: usize = 64;

/// Something a selection can pull key events from, in arrival order.
pub trait KeySource {
    /// Blocks until the next key event. `None` means the input has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails.
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        (**self).next_key()
    }
}

/// Decodes key events from raw input chunks read from `R`.
///
/// A chunk carrying several keystrokes yields one event per keystroke. An
/// escape sequence cut off at the end of a read is held back and joined to
/// the next read before it is decoded.
pub struct ReaderKeys<R: Read> {
    reader: R,
    pending: VecDeque<KeyEvent>,
    partial: Vec<u8>,
}

/// Key events from the process's standard input.
pub type StdinKeys = ReaderKeys<Stdin>;

impl<R: Read> ReaderKeys<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            partial: Vec::new(),
        }
    }
}

impl ReaderKeys<Stdin> {
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> KeySource for ReaderKeys<R> {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(Some(key));
            }

            let read = match self.reader.read(&mut chunk) {
                Ok(0) if self.partial.is_empty() => return Ok(None),
                Ok(0) => {
                    let partial = std::mem::take(&mut self.partial);
                    trace!("Input ended inside {partial:02x?}");
                    self.pending.extend(split_keystrokes(&partial).map(decode));
                    continue;
                }
                Ok(read) => read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            trace!("Read input chunk {:02x?}", &chunk[..read]);
            let mut bytes = std::mem::take(&mut self.partial);
            bytes.extend_from_slice(&chunk[..read]);

            let mut pieces: Vec<&[u8]> = split_keystrokes(&bytes).collect();
            if let Some(last) = pieces.last() {
                if holds_back(last, read == CHUNK_SIZE) {
                    self.partial = last.to_vec();
                    pieces.pop();
                }
            }
            self.pending.extend(pieces.into_iter().map(decode));
        }
    }
}

/// Whether the last piece of a read should wait for the next read.
///
/// A lone `ESC` only waits when the read filled the buffer, otherwise it is
/// the Escape key.
fn holds_back(piece: &[u8], buffer_filled: bool) -> bool {
    if piece.len() >= CHUNK_SIZE {
        return false;
    }
    match completeness(piece) {
        Completeness::Complete => false,
        Completeness::Ambiguous => buffer_filled,
        Completeness::Incomplete => true,
    }
}

/// Key events pushed from elsewhere through a channel.
///
/// The input ends once every sender is dropped.
pub struct ChannelKeys {
    receiver: Receiver<KeyEvent>,
}

impl ChannelKeys {
    pub fn new(receiver: Receiver<KeyEvent>) -> Self {
        Self { receiver }
    }

    #[must_use]
    pub fn channel() -> (Sender<KeyEvent>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self::new(receiver))
    }
}

impl KeySource for ChannelKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.receiver.recv().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::thread;

    fn drain(source: &mut impl KeySource) -> Vec<KeyEvent> {
        let mut keys = Vec::new();
        while let Some(key) = source.next_key().unwrap() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn test_reader_keys_splits_chunks() {
        let mut source = ReaderKeys::new(Cursor::new(b"\x1b[B\x1b[Ax\x1b[C\r".to_vec()));
        assert_eq!(
            drain(&mut source),
            vec![
                KeyEvent::Down,
                KeyEvent::Up,
                KeyEvent::Unknown,
                KeyEvent::Right,
                KeyEvent::Enter
            ]
        );
    }

    #[test]
    fn test_reader_keys_ends_with_input() {
        let mut source = ReaderKeys::new(Cursor::new(Vec::<u8>::new()));
        assert_eq!(source.next_key().unwrap(), None);
    }

    /// Hands out one read at a time, like a terminal delivering keystrokes.
    struct ChunkedReader {
        chunks: VecDeque<Vec<u8>>,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                None => Ok(0),
                Some(chunk) if chunk.is_empty() => {
                    Err(io::Error::new(io::ErrorKind::Interrupted, "signal"))
                }
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
            }
        }
    }

    #[test]
    fn test_reader_keys_retries_interrupted_reads() {
        let reader = ChunkedReader {
            chunks: VecDeque::from(vec![vec![0x1B], Vec::new(), vec![0x03]]),
        };
        let mut source = ReaderKeys::new(reader);
        assert_eq!(
            drain(&mut source),
            vec![KeyEvent::Escape, KeyEvent::Interrupt]
        );
    }

    #[test]
    fn test_reader_keys_joins_sequence_split_across_reads() {
        let reader = ChunkedReader {
            chunks: VecDeque::from(vec![
                b"\x1b[B\x1b[".to_vec(),
                b"B\x1bO".to_vec(),
                b"P\r".to_vec(),
            ]),
        };
        let mut source = ReaderKeys::new(reader);
        assert_eq!(
            drain(&mut source),
            vec![
                KeyEvent::Down,
                KeyEvent::Down,
                KeyEvent::Unknown,
                KeyEvent::Enter
            ]
        );
    }

    #[test]
    fn test_reader_keys_holds_escape_at_end_of_full_buffer() {
        // 21 downs and the first byte of a 22nd fill the buffer exactly
        let mut first = b"\x1b[B".repeat(21);
        first.push(0x1B);
        assert_eq!(first.len(), CHUNK_SIZE);

        let reader = ChunkedReader {
            chunks: VecDeque::from(vec![first, b"[B\r".to_vec()]),
        };
        let keys = drain(&mut ReaderKeys::new(reader));

        assert_eq!(keys.len(), 23);
        assert!(keys[..22].iter().all(|key| *key == KeyEvent::Down));
        assert_eq!(keys[22], KeyEvent::Enter);
    }

    #[test]
    fn test_reader_keys_flushes_partial_sequence_at_end_of_input() {
        let mut source = ReaderKeys::new(Cursor::new(b"\r\x1b[".to_vec()));
        assert_eq!(drain(&mut source), vec![KeyEvent::Enter, KeyEvent::Unknown]);
    }

    #[test]
    fn test_channel_keys_preserves_order_across_threads() {
        let (sender, mut source) = ChannelKeys::channel();

        let producer = thread::spawn(move || {
            for key in [KeyEvent::Down, KeyEvent::Down, KeyEvent::Up, KeyEvent::Enter] {
                sender.send(key).unwrap();
            }
        });

        producer.join().unwrap();
        assert_eq!(
            drain(&mut source),
            vec![KeyEvent::Down, KeyEvent::Down, KeyEvent::Up, KeyEvent::Enter]
        );
    }
}
