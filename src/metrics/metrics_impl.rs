use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{QueueMetricsReadRecorder, QueueMetricsRecorder};

/// Counter storage embedded in a [`RingQueue`](crate::queue::RingQueue).
#[derive(Debug, Default, Clone)]
pub struct QueueMetrics {
    pub push_calls: u64,
    pub push_inserted: u64,
    pub push_overwrites: u64,
    pub push_rejected: u64,
    pub pop_calls: u64,
    pub pop_found: u64,
    pub pop_empty: u64,
    pub clear_calls: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub contains_calls: MetricsCell,
}

impl QueueMetrics {
    pub fn new() -> QueueMetrics {
        Self::default()
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl QueueMetricsRecorder for QueueMetrics {
    fn record_push_inserted(&mut self) {
        self.push_calls += 1;
        self.push_inserted += 1;
    }

    fn record_push_overwrote(&mut self) {
        self.push_calls += 1;
        self.push_overwrites += 1;
    }

    fn record_push_rejected(&mut self) {
        self.push_calls += 1;
        self.push_rejected += 1;
    }

    fn record_pop_found(&mut self) {
        self.pop_calls += 1;
        self.pop_found += 1;
    }

    fn record_pop_empty(&mut self) {
        self.pop_calls += 1;
        self.pop_empty += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl QueueMetricsReadRecorder for QueueMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }

    fn record_contains_call(&self) {
        self.contains_calls.incr();
    }
}
