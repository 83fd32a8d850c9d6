/// Point-in-time copy of a queue's counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueueMetricsSnapshot {
    pub push_calls: u64,
    pub push_inserted: u64,
    pub push_overwrites: u64,
    pub push_rejected: u64,

    pub pop_calls: u64,
    pub pop_found: u64,
    pub pop_empty: u64,

    pub peek_calls: u64,
    pub peek_found: u64,

    pub contains_calls: u64,
    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl QueueMetricsSnapshot {
    /// Values that never reached a consumer: overwritten plus rejected.
    pub fn lost_values(&self) -> u64 {
        self.push_overwrites + self.push_rejected
    }

    /// Fraction of slots in use, in `[0.0, 1.0]`.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.len as f64 / self.capacity as f64
        }
    }
}
