use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Count the lines of a single file.
///
/// Every line counts, blank or not. `\n`, `\r\n` and a lone `\r` all end a
/// line, and a trailing segment without a terminator is one more line.
///
/// # Errors
/// Returns [`EngineError::UnreadableFile`] if the file cannot be opened or read,
/// or if its content is not valid UTF-8.
pub fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::unreadable(path, e))?;
    count_reader(file).map_err(|e| EngineError::unreadable(path, e))
}

/// Streaming line count over any reader.
///
/// # Errors
/// Propagates read errors; invalid UTF-8 is reported as [`io::ErrorKind::InvalidData`].
pub fn count_reader<R: Read>(reader: R) -> io::Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut tally = LineTally::default();
    let mut utf8 = Utf8Stream::default();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        utf8.feed(buf)?;
        tally.feed(buf);

        let len = buf.len();
        reader.consume(len);
    }

    utf8.finish()?;
    Ok(tally.finish())
}

#[derive(Debug, Default)]
struct LineTally {
    lines: usize,
    /// Previous chunk ended in `\r`; whether it was a lone CR depends on the next byte.
    pending_cr: bool,
    last_byte: Option<u8>,
}

impl LineTally {
    fn feed(&mut self, buf: &[u8]) {
        self.lines += bytecount::count(buf, b'\n');

        if self.pending_cr || bytecount::count(buf, b'\r') > 0 {
            let mut prev_cr = self.pending_cr;
            for &b in buf {
                if prev_cr && b != b'\n' {
                    self.lines += 1;
                }
                prev_cr = b == b'\r';
            }
            self.pending_cr = prev_cr;
        }

        self.last_byte = buf.last().copied().or(self.last_byte);
    }

    fn finish(self) -> usize {
        match self.last_byte {
            // A final `\r` was never followed by `\n`, so it ended a line.
            Some(b'\r') => self.lines + 1,
            Some(b'\n') | None => self.lines,
            Some(_) => self.lines + 1,
        }
    }
}

/// Incremental UTF-8 validation that tolerates code points split across chunks.
#[derive(Debug, Default)]
struct Utf8Stream {
    carry: Vec<u8>,
}

impl Utf8Stream {
    fn feed(&mut self, buf: &[u8]) -> io::Result<()> {
        let joined;
        let data = if self.carry.is_empty() {
            buf
        } else {
            joined = [self.carry.as_slice(), buf].concat();
            joined.as_slice()
        };

        match std::str::from_utf8(data) {
            Ok(_) => {
                self.carry.clear();
                Ok(())
            }
            Err(e) if e.error_len().is_none() => {
                self.carry = data[e.valid_up_to()..].to_vec();
                Ok(())
            }
            Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        }
    }

    fn finish(self) -> io::Result<()> {
        if self.carry.is_empty() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream ended inside a UTF-8 sequence",
            ))
        }
    }
}
