//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* into small traits so
//! monitoring and bench/test code stay decoupled from the queue algorithms.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────┐   ┌─────────────────────────────┐
//!   │    QueueMetricsRecorder     │   │  QueueMetricsReadRecorder   │
//!   │  push/pop/clear (&mut self) │   │  peek/contains (&self)      │
//!   └──────────────┬──────────────┘   └──────────────┬──────────────┘
//!                  └────────────────┬────────────────┘
//!                                   ▼
//!                          ┌─────────────────┐
//!                          │  QueueMetrics   │
//!                          └────────┬────────┘
//!                                   │
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters updated by mutating queue operations.
pub trait QueueMetricsRecorder {
    fn record_push_inserted(&mut self);
    fn record_push_overwrote(&mut self);
    fn record_push_rejected(&mut self);
    fn record_pop_found(&mut self);
    fn record_pop_empty(&mut self);
    fn record_clear(&mut self);
}

/// Counters updated by `&self` queue operations (interior mutability).
pub trait QueueMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_contains_call(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
