use clap::Parser;
use elbtop_core::config::ScanOptions;
use elbtop_core::error::ScanError;
use elbtop_core::logging::init_logging;
use elbtop_core::scan::{self, DEFAULT_RESULTS, ReportOrder, SelectionStrategy};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "elbtop",
    version,
    about = "elbtop: slowest requests in an ELB access log"
)]
struct Cli {
    /// ELB log file to parse cf. https://docs.aws.amazon.com/ElasticLoadBalancing/latest/DeveloperGuide/access-log-collection.html
    #[arg(short = 'f', long = "file")]
    file: Option<String>,

    /// Number of results wanted
    #[arg(short = 'r', long = "results", default_value_t = DEFAULT_RESULTS)]
    results: usize,

    /// Rule used to pick the slot a new record replaces
    #[arg(long, value_enum, default_value_t)]
    strategy: SelectionStrategy,

    /// Print each section largest value first instead of slot order
    #[arg(long)]
    sorted: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    let order = if cli.sorted {
        ReportOrder::Descending
    } else {
        ReportOrder::Storage
    };

    let options = match ScanOptions::from_args(cli.file.map(PathBuf::from), cli.results) {
        Ok(options) => options.with_strategy(cli.strategy).with_order(order),
        Err(e) => {
            report_fatal(&e);
            return ExitCode::FAILURE;
        }
    };

    match scan::run(&options) {
        Ok(summary) => {
            debug!(?summary, "done");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("stdout closed before the report was written");
            ExitCode::FAILURE
        }
        Err(e) => {
            report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_fatal(e: &ScanError) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{e}");
    let _ = out.flush();
}
