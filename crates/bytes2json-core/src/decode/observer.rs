use tracing::{debug, trace};

use crate::schema::Schema;

/// Hook notified while a buffer is decoded.
///
/// Observers only watch: they cannot alter or abort a decode. Every method
/// has an empty default so implementors pick what they need.
pub trait DecodeObserver {
    fn record_started(&mut self, _schema: &Schema, _offset: usize) {}

    fn record_finished(&mut self, _schema: &Schema, _offset: usize) {}

    /// A sequence of `count` elements begins at `offset`.
    fn sequence_started(&mut self, _field: &'static str, _count: usize, _offset: usize) {}

    /// The root record decoded successfully after `consumed` bytes.
    fn finished(&mut self, _schema: &Schema, _consumed: usize, _trailing: usize) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DecodeObserver for NoopObserver {}

/// Observer that emits `tracing` events.
///
/// Sequence counts within the two outermost records (the table sizes) are
/// logged at `debug`; everything deeper goes to `trace`.
#[derive(Debug, Default)]
pub struct TracingObserver {
    depth: usize,
    records: u64,
    sequences: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn sequences(&self) -> u64 {
        self.sequences
    }
}

impl DecodeObserver for TracingObserver {
    fn record_started(&mut self, schema: &Schema, offset: usize) {
        self.depth += 1;
        self.records += 1;
        trace!(schema = schema.name, offset, depth = self.depth, "record");
    }

    fn record_finished(&mut self, _schema: &Schema, _offset: usize) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn sequence_started(&mut self, field: &'static str, count: usize, offset: usize) {
        self.sequences += 1;
        if self.depth <= 2 {
            debug!(field, count, offset, "sequence");
        } else {
            trace!(field, count, offset, depth = self.depth, "sequence");
        }
    }

    fn finished(&mut self, schema: &Schema, consumed: usize, trailing: usize) {
        debug!(
            schema = schema.name,
            consumed,
            trailing,
            records = self.records,
            sequences = self.sequences,
            "decoded"
        );
    }
}
