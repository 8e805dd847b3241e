use crate::scan::constants::ENTRY_INDENT;
use crate::scan::tracker::{ReportOrder, TopNTrackers};
use crate::scan::types::{Metric, Record};
use std::io::{self, Write};

/// Write the three report sections.
///
/// Each header is followed by exactly one entry per slot. Retained lines are
/// written verbatim and already end in `\n`; an unfilled slot is written as an
/// indented empty line.
pub fn render_report<W: Write>(
    out: &mut W,
    trackers: &TopNTrackers,
    order: ReportOrder,
) -> io::Result<()> {
    for metric in Metric::ALL {
        writeln!(out, "{}", metric.header())?;
        for record in trackers.get(metric).ordered(order) {
            write_entry(out, record)?;
        }
    }
    out.flush()
}

fn write_entry<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    out.write_all(ENTRY_INDENT)?;
    if record.is_filled() {
        out.write_all(record.line.as_bytes())
    } else {
        out.write_all(b"\n")
    }
}
