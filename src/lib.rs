//! ringkit: fixed-capacity FIFO ring buffer queues with explicit overflow policies.
//!
//! A [`RingQueue`](queue::RingQueue) preallocates `C` tagged slots and never
//! grows. When it is full, its [`OverflowPolicy`](policy::OverflowPolicy)
//! either rejects the new value or overwrites the oldest element.
//!
//! ```
//! use ringkit::prelude::*;
//!
//! let mut queue = RingQueueBuilder::new(2).overwriting().build();
//! assert_eq!(queue.push('a'), PushOutcome::Inserted);
//! assert_eq!(queue.push('b'), PushOutcome::Inserted);
//! assert_eq!(queue.push('c'), PushOutcome::Overwrote('a'));
//! assert_eq!(queue.remove(), Ok('b'));
//! ```

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod queue;
pub mod traits;
