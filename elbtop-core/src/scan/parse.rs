use crate::error::LineIssue;
use crate::scan::constants::MIN_FIELDS;
use crate::scan::types::{LatencyFields, LogLine, Metric};

/// Whitespace-separated tokens of a line. Runs of whitespace count as one
/// separator and leading or trailing whitespace yields no empty tokens.
pub fn split_fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(is_field_separator)
        .filter(|token| !token.is_empty())
}

// `is_ascii_whitespace` leaves out vertical tab.
fn is_field_separator(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == b'\x0B'
}

/// Pull the three latency tokens out of a line.
///
/// Lines with fewer than [`MIN_FIELDS`] tokens are rejected as a whole.
pub fn extract_latency_fields(
    line_no: usize,
    line: &LogLine,
) -> Result<LatencyFields<'_>, LineIssue> {
    let fields: Vec<&[u8]> = split_fields(line.as_bytes()).take(MIN_FIELDS).collect();

    if fields.len() < MIN_FIELDS {
        return Err(LineIssue::ShortLine {
            line_no,
            fields: fields.len(),
        });
    }

    Ok(LatencyFields {
        request: fields[Metric::RequestProcessingTime.field_index()],
        backend: fields[Metric::BackendProcessingTime.field_index()],
        response: fields[Metric::ResponseProcessingTime.field_index()],
    })
}

/// Parse a latency token as seconds.
///
/// `-1` ("not measured") parses to `-1.0` and is not filtered.
pub fn parse_metric(line_no: usize, metric: Metric, raw: &[u8]) -> Result<f64, LineIssue> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or(LineIssue::InvalidMetric { line_no, metric })
}
