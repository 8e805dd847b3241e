use crate::error::ScanError;
use crate::scan::{LineSplitter, LogLine, NumberedLine};
use std::io::{self, BufReader, Read};

fn collect(input: &[u8]) -> Vec<NumberedLine> {
    LineSplitter::new(input)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn lines_keep_their_terminator() {
    // Act
    let lines = collect(b"first\nsecond\n");

    // Assert
    assert_eq!(
        lines,
        vec![
            NumberedLine {
                number: 1,
                line: LogLine::from("first\n"),
            },
            NumberedLine {
                number: 2,
                line: LogLine::from("second\n"),
            },
        ]
    );
}

#[test]
fn unterminated_trailing_line_is_dropped() {
    // Act
    let lines = collect(b"first\nsecond");

    // Assert
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].line, LogLine::from("first\n"));
}

#[test]
fn blank_lines_are_yielded_and_numbered() {
    // Act
    let lines = collect(b"\na\n\n");

    // Assert
    let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(lines[0].line, LogLine::from("\n"));
    assert_eq!(lines[2].line, LogLine::from("\n"));
}

#[test]
fn carriage_returns_are_kept_verbatim() {
    // Act
    let lines = collect(b"a b\r\n");

    // Assert
    assert_eq!(lines[0].line.as_bytes(), b"a b\r\n");
}

#[test]
fn empty_input_yields_nothing() {
    assert!(collect(b"").is_empty());
}

struct FailAfter<'a> {
    data: &'a [u8],
}

impl Read for FailAfter<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        let n = self.data.read(buf)?;
        Ok(n)
    }
}

#[test]
fn read_error_is_reported_once_and_ends_iteration() {
    // Arrange
    let reader = BufReader::with_capacity(4, FailAfter { data: b"ok\n" });
    let mut splitter = LineSplitter::new(reader);

    // Act
    let first = splitter.next().unwrap().unwrap();
    let second = splitter.next().unwrap();
    let third = splitter.next();

    // Assert
    assert_eq!(first.line, LogLine::from("ok\n"));
    let err = second.unwrap_err();
    assert!(matches!(err, ScanError::LineRead { .. }));
    assert_eq!(err.to_string(), "Unable to read a line. Got error disk on fire");
    assert!(third.is_none());
}
