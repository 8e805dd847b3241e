//! Access Log Scan Pipeline
//!
//! This module reads a load balancer access log once and reports, for each of the
//! three latency fields in every line, the requests with the largest values.
//!
//! Each line of an ELB access log records three timings for one proxied request:
//! - **request_processing_time**: time spent by the balancer before handing off
//! - **backend_processing_time**: time the backend took to start responding
//! - **response_processing_time**: time spent sending the response back
//!
//! A value of `-1` means the timing was not measured. It is ranked like any other
//! number.
//!
//! The whole file is read into memory, split into newline-terminated lines, and
//! every line is broken into whitespace-separated fields. The three timings sit at
//! fixed positions. Each one is parsed and offered to its own fixed-size tracker.
//! Lines that are too short or carry a non-numeric timing get a numbered
//! diagnostic and the scan carries on.
//!
//! The overall data processing architecture is:
//!
//! file
//! LineSplitter
//! LogLine
//! extract_latency_fields / parse_metric
//! TopNTrackers
//! render_report
//!

mod constants;
mod parse;
mod render;
mod run;
mod split;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use constants::{DEFAULT_RESULTS, MIN_FIELDS};
pub use parse::{extract_latency_fields, parse_metric, split_fields};
pub use render::render_report;
pub use run::{ScanSummary, run, run_with_output, scan};
pub use split::{LineSplitter, NumberedLine};
pub use tracker::{ReportOrder, SelectionStrategy, TopNSet, TopNTrackers};
pub use types::{LatencyFields, LogLine, Metric, Record};
