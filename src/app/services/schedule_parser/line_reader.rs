//! Logical line reading for SCHEDULE files
//!
//! Physical lines end at `\n`, `\r\n` or a lone `\r`. Each line has its
//! leading whitespace, trailing whitespace and comment removed; lines left
//! empty are skipped and never surface as a [`RawLine`].

use std::borrow::Cow;
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::debug;

use crate::constants::{COMMENT_MARKER, QUOTE_CHARS};
use crate::error::Result;

/// A non-empty logical line with comments and surrounding whitespace removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based physical line number in the input
    pub number: usize,
    pub text: String,
}

/// Strip leading whitespace, an unquoted trailing comment and trailing whitespace
///
/// Returns `None` when nothing is left.
pub fn strip_line(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let mut open_quote: Option<char> = None;
    let mut end = line.len();

    for (idx, c) in line.char_indices() {
        match open_quote {
            Some(quote) if c == quote => open_quote = None,
            Some(_) => {}
            None if QUOTE_CHARS.contains(&c) => open_quote = Some(c),
            None if line[idx..].starts_with(COMMENT_MARKER) => {
                end = idx;
                break;
            }
            None => {}
        }
    }

    let stripped = line[..end].trim_end();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}

/// Lazy reader producing [`RawLine`]s from a buffered stream
///
/// The reader consumes the stream and cannot be restarted. A read error is
/// yielded once and ends the sequence.
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    pending: VecDeque<RawLine>,
    physical_lines: usize,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            pending: VecDeque::new(),
            physical_lines: 0,
            finished: false,
        }
    }

    /// Number of physical lines consumed so far, blank and comment lines included
    pub fn physical_lines(&self) -> usize {
        self.physical_lines
    }

    /// Read the next `\n`-terminated chunk and queue its non-empty lines
    fn fill_pending(&mut self) -> Result<bool> {
        self.buffer.clear();
        let read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            return Ok(false);
        }

        let mut chunk = self.buffer.as_slice();
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest;
        }
        if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }

        let text = String::from_utf8_lossy(chunk);
        if matches!(text, Cow::Owned(_)) {
            debug!(
                "Line {} is not valid UTF-8; decoded lossily",
                self.physical_lines + 1
            );
        }

        // A lone carriage return also ends a physical line
        for piece in text.split('\r') {
            self.physical_lines += 1;
            if let Some(stripped) = strip_line(piece) {
                self.pending.push_back(RawLine {
                    number: self.physical_lines,
                    text: stripped.to_string(),
                });
            }
        }

        Ok(true)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.finished {
                return None;
            }
            match self.fill_pending() {
                Ok(true) => continue,
                Ok(false) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
