//! # Bounded Queue Capability Trait
//!
//! [`BoundedQueue`] is the narrow capability set shared by fixed-capacity FIFO
//! queues: enqueue at the tail, dequeue and inspect at the head, plus size
//! queries. Generic code (benchmarks, profiling workloads, adapters) is written
//! against the trait instead of a concrete queue type.
//!
//! ## Architecture
//!
//! ```text
//!                  ┌─────────────────────────────────────────┐
//!                  │            BoundedQueue<T>              │
//!                  │                                         │
//!                  │  offer(&mut, T) → bool                  │
//!                  │  poll(&mut) → Option<T>                 │
//!                  │  peek(&) → Option<&T>                   │
//!                  │  len(&) → usize                         │
//!                  │  capacity(&) → usize                    │
//!                  │  clear(&mut)                            │
//!                  │                                         │
//!                  │  provided: is_empty, is_full,           │
//!                  │            remaining, poll_batch        │
//!                  │                                         │
//!                  │  ⚠ No arbitrary removal!                │
//!                  └──────────────────┬──────────────────────┘
//!                                     │
//!                                     ▼
//!                  ┌─────────────────────────────────────────┐
//!                  │  RingQueue<T>                           │
//!                  │  (Reject or Overwrite overflow policy)  │
//!                  └─────────────────────────────────────────┘
//! ```
//!
//! ## Why There Is No `remove(&T)`
//!
//! ```text
//!   Ring:  [c] [d] [e] [ ] [a] [b]
//!                   ↑       ↑
//!                 tail     head
//!
//!   Removing d would leave a hole inside the head → tail run.
//!   Closing it means shifting every later element: O(n), and the
//!   "one contiguous run" invariant no longer holds in between.
//! ```
//!
//! Removal of arbitrary elements is therefore not part of the trait. The
//! concrete queue exposes those operations only as explicit
//! [`UnsupportedOperation`](crate::error::QueueError::UnsupportedOperation)
//! failures.
//!
//! ## Thread Safety
//!
//! Implementations are not required to be thread-safe. Wrap a queue in a
//! `Mutex` to share it.

/// Fixed-capacity FIFO queue operations.
///
/// # Example
///
/// ```
/// use ringkit::queue::RingQueue;
/// use ringkit::traits::BoundedQueue;
///
/// fn fill<Q: BoundedQueue<u32>>(queue: &mut Q, values: &[u32]) -> usize {
///     values.iter().filter(|v| queue.offer(**v)).count()
/// }
///
/// let mut queue = RingQueue::strict(3);
/// assert_eq!(fill(&mut queue, &[1, 2, 3, 4, 5]), 3);
/// assert!(BoundedQueue::is_full(&queue));
/// ```
pub trait BoundedQueue<T> {
    /// Returns the fixed number of elements the queue can hold.
    fn capacity(&self) -> usize;

    /// Returns the number of elements currently queued.
    fn len(&self) -> usize;

    /// Enqueues `value` at the tail.
    ///
    /// Returns `false` if the value was not stored. Whether a full queue
    /// refuses the value or discards its oldest element is up to the
    /// implementation's overflow policy.
    fn offer(&mut self, value: T) -> bool;

    /// Removes and returns the oldest element.
    fn poll(&mut self) -> Option<T>;

    /// Returns the oldest element without removing it.
    fn peek(&self) -> Option<&T>;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns `true` if the queue holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the queue holds `capacity()` elements.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns how many elements fit before the queue is full.
    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }

    /// Removes up to `max` of the oldest elements, oldest first.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::queue::RingQueue;
    /// use ringkit::traits::BoundedQueue;
    ///
    /// let mut queue = RingQueue::overwriting(4);
    /// queue.add_all(1..=6).unwrap();
    /// assert_eq!(queue.poll_batch(3), vec![3, 4, 5]);
    /// assert_eq!(queue.poll_batch(10), vec![6]);
    /// assert!(queue.poll_batch(1).is_empty());
    /// ```
    fn poll_batch(&mut self, max: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(max.min(self.len()));
        while out.len() < max {
            match self.poll() {
                Some(value) => out.push(value),
                None => break,
            }
        }
        out
    }
}
