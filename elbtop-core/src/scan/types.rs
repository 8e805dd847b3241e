use crate::scan::constants::{
    BACKEND_HEADER, BACKEND_PROCESSING_TIME_FIELD, REQUEST_HEADER, REQUEST_PROCESSING_TIME_FIELD,
    RESPONSE_HEADER, RESPONSE_PROCESSING_TIME_FIELD,
};
use bytes::Bytes;
use std::fmt;

/// One raw access log line, kept verbatim including its `\n` terminator.
///
/// Cloning is cheap, so the same line can sit in all three trackers at once.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LogLine(Bytes);

impl LogLine {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for LogLine {
    fn from(s: &'static str) -> Self {
        Self(Bytes::from_static(s.as_bytes()))
    }
}

impl fmt::Debug for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogLine({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// A tracker slot: the ranking value and the line it came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub t: f64,
    pub line: LogLine,
}

impl Record {
    /// An unfilled slot holding `t` and an empty line.
    pub(crate) fn sentinel(t: f64) -> Self {
        Self {
            t,
            line: LogLine::default(),
        }
    }

    pub fn is_filled(&self) -> bool {
        !self.line.is_empty()
    }
}

/// The three latency fields of an ELB access log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    RequestProcessingTime,
    BackendProcessingTime,
    ResponseProcessingTime,
}

impl Metric {
    /// Report order.
    pub const ALL: [Metric; 3] = [
        Metric::RequestProcessingTime,
        Metric::BackendProcessingTime,
        Metric::ResponseProcessingTime,
    ];

    pub fn field_index(self) -> usize {
        match self {
            Metric::RequestProcessingTime => REQUEST_PROCESSING_TIME_FIELD,
            Metric::BackendProcessingTime => BACKEND_PROCESSING_TIME_FIELD,
            Metric::ResponseProcessingTime => RESPONSE_PROCESSING_TIME_FIELD,
        }
    }

    /// Field name as documented for the ELB access log format.
    pub fn field_name(self) -> &'static str {
        match self {
            Metric::RequestProcessingTime => "request_processing_time",
            Metric::BackendProcessingTime => "backend_processing_time",
            Metric::ResponseProcessingTime => "response_processing_time",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Metric::RequestProcessingTime => REQUEST_HEADER,
            Metric::BackendProcessingTime => BACKEND_HEADER,
            Metric::ResponseProcessingTime => RESPONSE_HEADER,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Raw latency tokens borrowed from a line. Not yet parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyFields<'a> {
    pub request: &'a [u8],
    pub backend: &'a [u8],
    pub response: &'a [u8],
}

impl<'a> LatencyFields<'a> {
    pub fn get(&self, metric: Metric) -> &'a [u8] {
        match metric {
            Metric::RequestProcessingTime => self.request,
            Metric::BackendProcessingTime => self.backend,
            Metric::ResponseProcessingTime => self.response,
        }
    }
}
