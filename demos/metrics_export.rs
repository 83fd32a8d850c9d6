use ringkit::metrics::{MetricsExporter, PrometheusTextExporter};
use ringkit::queue::RingQueue;

fn main() {
    let mut queue = RingQueue::overwriting(8);

    for i in 0..20u32 {
        queue.add(i).unwrap();
        if i % 3 == 0 {
            let _ = queue.poll();
        }
    }
    let _ = queue.peek();

    let exporter = PrometheusTextExporter::new("demo_queue", std::io::stdout());
    exporter.export(&queue.metrics_snapshot());
}
