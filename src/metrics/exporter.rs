use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::QueueMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for queue metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector.
///
/// # Example
///
/// ```
/// use ringkit::metrics::{MetricsExporter, PrometheusTextExporter, QueueMetricsSnapshot};
///
/// let exporter = PrometheusTextExporter::new("ingest", Vec::new());
/// exporter.export(&QueueMetricsSnapshot { push_calls: 4, ..Default::default() });
///
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("ingest_push_calls_total 4"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<QueueMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &QueueMetricsSnapshot) {
        self.write_counter(&self.metric_name("push_calls_total"), snapshot.push_calls);
        self.write_counter(
            &self.metric_name("push_inserted_total"),
            snapshot.push_inserted,
        );
        self.write_counter(
            &self.metric_name("push_overwrites_total"),
            snapshot.push_overwrites,
        );
        self.write_counter(
            &self.metric_name("push_rejected_total"),
            snapshot.push_rejected,
        );
        self.write_counter(&self.metric_name("pop_calls_total"), snapshot.pop_calls);
        self.write_counter(&self.metric_name("pop_found_total"), snapshot.pop_found);
        self.write_counter(&self.metric_name("pop_empty_total"), snapshot.pop_empty);
        self.write_counter(&self.metric_name("peek_calls_total"), snapshot.peek_calls);
        self.write_counter(&self.metric_name("peek_found_total"), snapshot.peek_found);
        self.write_counter(
            &self.metric_name("contains_calls_total"),
            snapshot.contains_calls,
        );
        self.write_counter(&self.metric_name("clear_calls_total"), snapshot.clear_calls);
        self.write_gauge(&self.metric_name("len"), snapshot.len as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
