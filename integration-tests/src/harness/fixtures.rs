use elbtop_core::config::ScanOptions;
use elbtop_core::scan::{ScanSummary, run_with_output};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Newline-terminated lines of a fixture, terminators kept.
pub fn fixture_lines(file: &str) -> Vec<String> {
    let contents = fs::read_to_string(fixture_path(file)).expect("failed to read fixture");
    contents.split_inclusive('\n').map(str::to_string).collect()
}

/// Scan a fixture and return the summary together with everything written.
pub fn run_fixture(
    file: &str,
    results: usize,
    options: impl FnOnce(ScanOptions) -> ScanOptions,
) -> (ScanSummary, String) {
    let opts = options(
        ScanOptions::from_args(Some(fixture_path(file)), results).expect("invalid scan options"),
    );

    let mut out = Vec::new();
    let summary = run_with_output(&opts, &mut out).expect("scan failed");

    (summary, String::from_utf8(out).expect("report is not UTF-8"))
}
