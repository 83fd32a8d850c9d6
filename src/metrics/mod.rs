//! Operation counters for [`RingQueue`](crate::queue::RingQueue).
//!
//! Compiled only with the `metrics` feature. Recording, snapshotting and
//! export are split into separate traits so monitoring code never touches
//! queue internals.
//!
//! ```text
//!   RingQueue ──record_*──▶ QueueMetrics ──snapshot──▶ QueueMetricsSnapshot ──export──▶ Prometheus text
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::QueueMetrics;
pub use snapshot::QueueMetricsSnapshot;
pub use traits::{
    MetricsExporter, MetricsSnapshotProvider, QueueMetricsReadRecorder, QueueMetricsRecorder,
};
