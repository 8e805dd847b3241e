/// Slots kept per metric when `-r` is not given.
pub const DEFAULT_RESULTS: usize = 3;

/// Fewer whitespace-separated fields than this and the line is skipped.
pub const MIN_FIELDS: usize = 7;

// Zero-based field positions in an ELB access log line.
pub const REQUEST_PROCESSING_TIME_FIELD: usize = 4;
pub const BACKEND_PROCESSING_TIME_FIELD: usize = 5;
pub const RESPONSE_PROCESSING_TIME_FIELD: usize = 6;

pub const REQUEST_HEADER: &str = "Max request processing times:";
pub const BACKEND_HEADER: &str = "Max Backend processing times:";
pub const RESPONSE_HEADER: &str = "Max Response processing times:";

/// Written before every retained line in the report.
pub const ENTRY_INDENT: &[u8] = b"  ";
