//! Builder for configuring ring queues.
//!
//! Collects the capacity and overflow policy, then validates them once when
//! the queue is built. Useful when both come from configuration read at
//! runtime.
//!
//! ## Example
//!
//! ```rust
//! use ringkit::builder::RingQueueBuilder;
//! use ringkit::policy::OverflowPolicy;
//!
//! let policy: OverflowPolicy = "fast".parse().unwrap();
//! let mut queue = RingQueueBuilder::new(64).policy(policy).build::<u64>();
//! queue.add(1).unwrap();
//! assert_eq!(queue.capacity(), 64);
//! assert_eq!(queue.peek(), Some(&1));
//! ```

use crate::error::QueueError;
use crate::policy::OverflowPolicy;
use crate::queue::RingQueue;

/// Builder for creating [`RingQueue`] instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingQueueBuilder {
    capacity: usize,
    policy: OverflowPolicy,
}

impl RingQueueBuilder {
    /// Create a new builder with the specified capacity and the default
    /// [`OverflowPolicy::Reject`].
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: OverflowPolicy::default(),
        }
    }

    /// Set the overflow policy.
    pub fn policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `.policy(OverflowPolicy::Reject)`.
    pub fn strict(self) -> Self {
        self.policy(OverflowPolicy::Reject)
    }

    /// Shorthand for `.policy(OverflowPolicy::Overwrite)`.
    pub fn overwriting(self) -> Self {
        self.policy(OverflowPolicy::Overwrite)
    }

    /// Build the queue, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidCapacity`] if the capacity is 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ringkit::builder::RingQueueBuilder;
    /// use ringkit::error::QueueError;
    ///
    /// let err = RingQueueBuilder::new(0).overwriting().try_build::<String>();
    /// assert_eq!(err.unwrap_err(), QueueError::InvalidCapacity);
    /// ```
    pub fn try_build<T>(self) -> Result<RingQueue<T>, QueueError> {
        RingQueue::try_new(self.capacity, self.policy)
    }

    /// Build the queue.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is 0.
    pub fn build<T>(self) -> RingQueue<T> {
        self.try_build()
            .unwrap_or_else(|err| panic!("{}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_reject_policy() {
        let queue = RingQueueBuilder::new(4).build::<u8>();
        assert_eq!(queue.policy(), OverflowPolicy::Reject);
        assert_eq!(queue.capacity(), 4);
    }

    #[test]
    fn last_policy_call_wins() {
        let builder = RingQueueBuilder::new(2).overwriting().strict();
        assert_eq!(builder.build::<u8>().policy(), OverflowPolicy::Reject);
        let builder = RingQueueBuilder::new(2)
            .strict()
            .policy(OverflowPolicy::Overwrite);
        assert_eq!(builder.build::<u8>().policy(), OverflowPolicy::Overwrite);
    }

    #[test]
    fn built_queues_enforce_their_policy() {
        let mut strict = RingQueueBuilder::new(2).strict().build();
        let mut lossy = RingQueueBuilder::new(2).overwriting().build();
        for v in 0..3 {
            let _ = strict.add(v);
            lossy.add(v).unwrap();
        }
        assert_eq!(strict.to_vec(), vec![0, 1]);
        assert_eq!(lossy.to_vec(), vec![1, 2]);
    }

    #[test]
    fn try_build_rejects_zero_capacity() {
        assert_eq!(
            RingQueueBuilder::new(0).try_build::<u8>().unwrap_err(),
            QueueError::InvalidCapacity
        );
    }

    #[test]
    #[should_panic(expected = "greater than zero")]
    fn build_panics_on_zero_capacity() {
        let _ = RingQueueBuilder::new(0).build::<u8>();
    }
}
