use crate::error::ScanError;
use crate::scan::types::LogLine;
use std::io::BufRead;
use tracing::debug;

/// A line together with its 1-based position in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: usize,
    pub line: LogLine,
}

/// Splits a byte stream into `\n`-terminated lines.
///
/// The terminator stays on every yielded line. A trailing segment without a
/// terminator is never yielded: end of input before `\n` means there are no
/// more lines. A read error is yielded once and ends the iteration.
pub struct LineSplitter<R> {
    reader: R,
    number: usize,
    finished: bool,
}

impl<R: BufRead> LineSplitter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            number: 0,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSplitter<R> {
    type Item = Result<NumberedLine, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(_) if buf.last() == Some(&b'\n') => {
                self.number += 1;
                Some(Ok(NumberedLine {
                    number: self.number,
                    line: LogLine::new(buf),
                }))
            }
            Ok(_) => {
                self.finished = true;
                if !buf.is_empty() {
                    debug!(bytes = buf.len(), "dropping unterminated trailing line");
                }
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(ScanError::line_read(e)))
            }
        }
    }
}
