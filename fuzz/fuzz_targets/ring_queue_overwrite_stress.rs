#![no_main]

use libfuzzer_sys::fuzz_target;
use ringkit::policy::PushOutcome;
use ringkit::queue::RingQueue;

// Fuzz stress test for the overwrite path
//
// Pushes long runs into a full overwriting queue, interleaved with
// occasional pops, and tracks the exact sequence number of every
// displaced value so lost and surviving elements can be checked.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 64).max(1);
    let mut queue: RingQueue<u64> = RingQueue::overwriting(capacity);

    // Values are sequence numbers, so FIFO order means strictly increasing.
    let mut next_seq = 0u64;
    let mut oldest_live = 0u64;

    for &byte in &data[1..] {
        let pushes = u64::from(byte % 16) + 1;
        for _ in 0..pushes {
            match queue.push(next_seq) {
                PushOutcome::Inserted => {}
                PushOutcome::Overwrote(old) => {
                    assert_eq!(old, oldest_live);
                    oldest_live += 1;
                }
                PushOutcome::Rejected(_) => panic!("overwriting queue rejected a value"),
            }
            next_seq += 1;
        }

        if byte & 0x80 != 0 {
            if let Some(v) = queue.poll() {
                assert_eq!(v, oldest_live);
                oldest_live += 1;
            }
        }

        assert_eq!(queue.len() as u64, next_seq - oldest_live);
        assert_eq!(queue.peek().copied(), (!queue.is_empty()).then_some(oldest_live));
        assert!(queue.iter().copied().eq(oldest_live..next_seq));
        queue.check_invariants().unwrap();
    }
});
