use crate::scan::Metric;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Provide a log file name via the command line")]
    MissingArgument,

    #[error("Unable to open {}. Get the error: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read a line. Got error {source}")]
    LineRead {
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn line_read(source: io::Error) -> Self {
        Self::LineRead { source }
    }

    pub fn write(source: io::Error) -> Self {
        Self::Write { source }
    }

    /// The reader on the other end of the output went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write { source } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Per-line problems. These are reported and the scan carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineIssue {
    #[error("Not enough fields line {line_no}")]
    ShortLine { line_no: usize, fields: usize },

    #[error("Invalid {} line {line_no}", .metric.field_name())]
    InvalidMetric { line_no: usize, metric: Metric },
}

impl LineIssue {
    pub fn line_no(&self) -> usize {
        match self {
            Self::ShortLine { line_no, .. } | Self::InvalidMetric { line_no, .. } => *line_no,
        }
    }
}
