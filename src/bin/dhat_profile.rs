//! DHAT heap profiler for ringkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use ringkit::policy::OverflowPolicy;
use ringkit::queue::RingQueue;
use ringkit::traits::BoundedQueue;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Bursty producer/consumer: producers push in bursts, consumers drain slower.
fn bursty_workload<Q: BoundedQueue<u64>>(queue: &mut Q, operations: usize, seed: u64) {
    let mut rng = XorShift64::new(seed);

    for i in 0..operations {
        if rng.next_f64() < 0.6 {
            let burst = 1 + rng.next_u64() % 8;
            for j in 0..burst {
                queue.offer(i as u64 + j);
            }
        } else {
            let _ = queue.poll();
        }
    }
}

/// Steady churn: one push, one pop.
fn steady_workload<Q: BoundedQueue<u64>>(queue: &mut Q, operations: usize) {
    for i in 0..operations {
        queue.offer(i as u64);
        let _ = queue.poll();
    }
}

/// Flood a full queue with more items than it can hold.
fn flood_workload<Q: BoundedQueue<u64>>(queue: &mut Q, operations: usize) {
    for i in 0..operations {
        queue.offer(i as u64);
    }
}

fn profile(policy: OverflowPolicy) {
    println!("=== Profiling RingQueue ({}) ===", policy);
    let capacity = 4096;
    let operations = 100_000;

    let mut queue = match RingQueue::try_new(capacity, policy) {
        Ok(queue) => queue,
        Err(err) => {
            eprintln!("  cannot build queue: {}", err);
            return;
        },
    };

    // Warm up
    for i in 0..capacity as u64 {
        queue.offer(i);
    }

    bursty_workload(&mut queue, operations, 42);
    steady_workload(&mut queue, operations / 2);
    flood_workload(&mut queue, operations / 4);

    println!("  Final size: {}", queue.len());
    println!("  Approx bytes: {}", queue.approx_bytes());
}

fn profile_boxed_payloads() {
    println!("=== Profiling RingQueue<Box<[u8]>> (overwrite) ===");
    let capacity = 1024;
    let operations = 50_000;

    let mut queue = RingQueue::overwriting(capacity);
    let mut rng = XorShift64::new(7);
    for _ in 0..operations {
        let size = 16 + (rng.next_u64() % 240) as usize;
        let _ = queue.push(vec![0u8; size].into_boxed_slice());
    }

    println!("  Final size: {}", queue.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("ringkit DHAT Heap Profiling");
    println!("===========================\n");

    profile(OverflowPolicy::Reject);
    profile(OverflowPolicy::Overwrite);
    profile_boxed_payloads();

    println!("\n===========================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
