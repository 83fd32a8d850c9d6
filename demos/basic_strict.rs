use ringkit::error::QueueError;
use ringkit::queue::RingQueue;

fn main() -> Result<(), QueueError> {
    // A strict queue refuses new work once all three slots are taken
    let mut jobs = RingQueue::strict(3);

    for job in ["compile", "test", "package", "deploy"] {
        match jobs.add(job) {
            Ok(()) => println!("queued {}", job),
            Err(err) => println!("could not queue {}: {}", job, err),
        }
    }

    // Drain in arrival order
    while let Some(job) = jobs.poll() {
        println!("running {}", job);
    }

    // Head access on an empty queue is an error, not a panic
    if let Err(err) = jobs.element() {
        println!("nothing left: {}", err);
    }

    jobs.add("deploy")?;
    println!("retried deploy, {} job(s) pending", jobs.len());
    Ok(())
}
