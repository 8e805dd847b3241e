use crate::scan::types::{LogLine, Metric, Record};
use clap::ValueEnum;

/// How a full [`TopNSet`] picks the slot a new record replaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SelectionStrategy {
    /// Scan the slots in index order and replace the last one holding a
    /// strictly smaller value. Unfilled slots hold `0.0`, so values `<= 0.0`
    /// are never admitted into them. This is not a true top-N: the evicted slot
    /// is not necessarily the minimum.
    #[default]
    LastBelow,

    /// Replace the smallest slot if the new value is strictly larger.
    /// Unfilled slots hold negative infinity, so negative values compete too.
    EvictMin,
}

impl SelectionStrategy {
    fn sentinel(self) -> f64 {
        match self {
            SelectionStrategy::LastBelow => 0.0,
            SelectionStrategy::EvictMin => f64::NEG_INFINITY,
        }
    }
}

/// Emission order of a report section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportOrder {
    /// Whatever order admissions left the slots in.
    #[default]
    Storage,
    /// Largest value first. Ties keep slot order.
    Descending,
}

/// Fixed-capacity set of records for one metric.
///
/// The capacity is set at construction and never changes; every slot starts out
/// as an unfilled sentinel record.
#[derive(Debug, Clone)]
pub struct TopNSet {
    slots: Vec<Record>,
    strategy: SelectionStrategy,
}

impl TopNSet {
    pub fn new(capacity: usize, strategy: SelectionStrategy) -> Self {
        Self {
            slots: vec![Record::sentinel(strategy.sentinel()); capacity],
            strategy,
        }
    }

    /// Offer `line` with value `t`. Returns the slot that was overwritten, if any.
    pub fn admit(&mut self, line: &LogLine, t: f64) -> Option<usize> {
        let slot = match self.strategy {
            SelectionStrategy::LastBelow => self.last_below(t),
            SelectionStrategy::EvictMin => self.min_below(t),
        }?;

        self.slots[slot] = Record {
            t,
            line: line.clone(),
        };
        Some(slot)
    }

    fn last_below(&self, t: f64) -> Option<usize> {
        self.slots.iter().rposition(|r| r.t < t)
    }

    fn min_below(&self, t: f64) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.t.total_cmp(&b.t))
            .filter(|(_, r)| r.t < t)
            .map(|(i, _)| i)
    }

    /// Slots in storage order, unfilled ones included.
    pub fn records(&self) -> &[Record] {
        &self.slots
    }

    /// Slots by descending value. Stable, so equal values keep slot order.
    pub fn ranked(&self) -> Vec<&Record> {
        let mut out: Vec<&Record> = self.slots.iter().collect();
        out.sort_by(|a, b| b.t.total_cmp(&a.t));
        out
    }

    pub fn ordered(&self, order: ReportOrder) -> Vec<&Record> {
        match order {
            ReportOrder::Storage => self.slots.iter().collect(),
            ReportOrder::Descending => self.ranked(),
        }
    }
}

/// One [`TopNSet`] per latency metric, owned by the scan driver.
#[derive(Debug, Clone)]
pub struct TopNTrackers {
    request: TopNSet,
    backend: TopNSet,
    response: TopNSet,
}

impl TopNTrackers {
    pub fn new(capacity: usize, strategy: SelectionStrategy) -> Self {
        Self {
            request: TopNSet::new(capacity, strategy),
            backend: TopNSet::new(capacity, strategy),
            response: TopNSet::new(capacity, strategy),
        }
    }

    pub fn get(&self, metric: Metric) -> &TopNSet {
        match metric {
            Metric::RequestProcessingTime => &self.request,
            Metric::BackendProcessingTime => &self.backend,
            Metric::ResponseProcessingTime => &self.response,
        }
    }

    fn get_mut(&mut self, metric: Metric) -> &mut TopNSet {
        match metric {
            Metric::RequestProcessingTime => &mut self.request,
            Metric::BackendProcessingTime => &mut self.backend,
            Metric::ResponseProcessingTime => &mut self.response,
        }
    }

    pub fn admit(&mut self, metric: Metric, line: &LogLine, t: f64) -> Option<usize> {
        self.get_mut(metric).admit(line, t)
    }
}
