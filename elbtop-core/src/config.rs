use crate::error::ScanError;
use crate::scan::{ReportOrder, SelectionStrategy};
use std::path::PathBuf;

/// Validated options for a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Access log to read.
    pub path: PathBuf,

    /// Slots kept per metric.
    pub results: usize,

    pub strategy: SelectionStrategy,

    pub order: ReportOrder,
}

impl ScanOptions {
    /// Lower raw command-line values into scan options.
    ///
    /// A missing or empty path is the only thing rejected here. A result
    /// count of zero is legal and yields empty report sections.
    pub fn from_args(path: Option<PathBuf>, results: usize) -> Result<Self, ScanError> {
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ScanError::MissingArgument)?;

        Ok(Self {
            path,
            results,
            strategy: SelectionStrategy::default(),
            order: ReportOrder::default(),
        })
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_order(mut self, order: ReportOrder) -> Self {
        self.order = order;
        self
    }
}
