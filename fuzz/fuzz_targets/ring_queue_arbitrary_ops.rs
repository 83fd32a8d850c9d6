#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use ringkit::policy::{OverflowPolicy, PushOutcome};
use ringkit::queue::RingQueue;

// Fuzz arbitrary operation sequences on RingQueue
//
// Replays push, poll, peek, clear, contains and iteration against a
// VecDeque model under both overflow policies and checks invariants
// after every step.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte: capacity (1-32) and policy
    let capacity = (data[0] as usize % 32).max(1);
    let policy = if data[0] & 0x80 == 0 {
        OverflowPolicy::Reject
    } else {
        OverflowPolicy::Overwrite
    };

    let mut queue = RingQueue::try_new(capacity, policy).unwrap();
    let mut model: VecDeque<u8> = VecDeque::with_capacity(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = data[idx + 1];

        match op {
            0 | 1 | 2 => {
                let outcome = queue.push(value);
                if model.len() < capacity {
                    model.push_back(value);
                    assert_eq!(outcome, PushOutcome::Inserted);
                } else if policy == OverflowPolicy::Overwrite {
                    let evicted = model.pop_front();
                    model.push_back(value);
                    assert_eq!(outcome.evicted(), evicted);
                } else {
                    assert_eq!(outcome, PushOutcome::Rejected(value));
                }
            }
            3 | 4 => {
                assert_eq!(queue.poll(), model.pop_front());
            }
            5 => {
                assert_eq!(queue.peek(), model.front());
                assert_eq!(queue.peek_back(), model.back());
            }
            6 => {
                assert_eq!(queue.contains(&value), model.contains(&value));
            }
            7 => {
                if value % 4 == 0 {
                    queue.clear();
                    model.clear();
                    assert!(queue.is_empty());
                } else {
                    assert!(queue.iter().eq(model.iter()));
                    assert!(queue.iter().rev().eq(model.iter().rev()));
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(queue.len(), model.len());
        assert!(queue.len() <= queue.capacity());
        queue.check_invariants().unwrap();

        idx += 2;
    }
});
