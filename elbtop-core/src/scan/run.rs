use crate::config::ScanOptions;
use crate::error::{LineIssue, ScanError};
use crate::scan::parse::{extract_latency_fields, parse_metric};
use crate::scan::render::render_report;
use crate::scan::split::{LineSplitter, NumberedLine};
use crate::scan::tracker::TopNTrackers;
use crate::scan::types::Metric;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Counters from one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Newline-terminated lines seen.
    pub lines: usize,
    /// Diagnostics emitted.
    pub issues: usize,
    /// Tracker slots overwritten, across all three metrics.
    pub admitted: usize,
}

/// Scan the configured file and print diagnostics and the report to stdout.
pub fn run(options: &ScanOptions) -> Result<ScanSummary, ScanError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(options, &mut out)
}

/// Same as [`run`], writing everything to `out`.
pub fn run_with_output<W: Write>(
    options: &ScanOptions,
    out: &mut W,
) -> Result<ScanSummary, ScanError> {
    let contents =
        fs::read(&options.path).map_err(|e| ScanError::file_read(options.path.clone(), e))?;

    info!(
        path = %options.path.display(),
        bytes = contents.len(),
        results = options.results,
        strategy = ?options.strategy,
        "scanning access log"
    );

    let mut trackers = TopNTrackers::new(options.results, options.strategy);
    let summary = scan(contents.as_slice(), &mut trackers, out)?;

    render_report(out, &trackers, options.order).map_err(ScanError::write)?;

    info!(
        lines = summary.lines,
        issues = summary.issues,
        admitted = summary.admitted,
        "scan complete"
    );

    Ok(summary)
}

/// Feed every line of `reader` into `trackers`.
///
/// Per-line problems are written to `diagnostics` and do not stop the scan.
/// A short line is skipped entirely; a bad latency token only skips that
/// metric for that line.
pub fn scan<R: BufRead, W: Write>(
    reader: R,
    trackers: &mut TopNTrackers,
    diagnostics: &mut W,
) -> Result<ScanSummary, ScanError> {
    let mut summary = ScanSummary::default();

    for next in LineSplitter::new(reader) {
        let NumberedLine { number, line } = next?;
        summary.lines += 1;

        let fields = match extract_latency_fields(number, &line) {
            Ok(fields) => fields,
            Err(issue) => {
                report_issue(diagnostics, &issue)?;
                summary.issues += 1;
                continue;
            }
        };

        for metric in Metric::ALL {
            match parse_metric(number, metric, fields.get(metric)) {
                Ok(t) => {
                    if let Some(slot) = trackers.admit(metric, &line, t) {
                        debug!(line = number, %metric, t, slot, "admitted");
                        summary.admitted += 1;
                    }
                }
                Err(issue) => {
                    report_issue(diagnostics, &issue)?;
                    summary.issues += 1;
                }
            }
        }
    }

    Ok(summary)
}

fn report_issue<W: Write>(diagnostics: &mut W, issue: &LineIssue) -> Result<(), ScanError> {
    debug!(line = issue.line_no(), "{issue}");
    writeln!(diagnostics, "{issue}").map_err(ScanError::write)
}
