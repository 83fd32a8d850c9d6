use ringkit::policy::PushOutcome;
use ringkit::queue::RingQueue;

fn main() {
    // Keep only the five most recent temperature readings
    let mut readings = RingQueue::overwriting(5);

    for (minute, celsius) in [21.0, 21.4, 22.1, 22.8, 23.0, 23.6, 24.1].into_iter().enumerate() {
        if let PushOutcome::Overwrote(old) = readings.push(celsius) {
            println!("minute {}: dropped stale reading {:.1}", minute, old);
        }
    }

    let window: Vec<f64> = readings.to_vec();
    let mean = window.iter().sum::<f64>() / window.len() as f64;
    println!("window {:?}, mean {:.2}", window, mean);
    println!(
        "oldest {:?}, newest {:?}",
        readings.peek(),
        readings.peek_back()
    );
}
