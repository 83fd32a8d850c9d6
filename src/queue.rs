//! Fixed-capacity FIFO queue over a preallocated ring of slots.
//!
//! `RingQueue` stores up to `C` elements in a single [`SlotRing`] allocated at
//! construction. Enqueue and dequeue move two cursors around the ring with
//! wrap-around arithmetic, so both are O(1) and the storage is never
//! reallocated. What happens on a push into a full queue is decided by the
//! [`OverflowPolicy`] chosen at construction.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                    RingQueue<T>, capacity C = 5                             │
//! │                                                                             │
//! │   ring: SlotRing<T>       head: oldest element      tail: newest element    │
//! │   len:  logical count     policy: Reject | Overwrite                        │
//! │                                                                             │
//! │   After push a, b, c, d, pop, pop, push e, f:                               │
//! │                                                                             │
//! │   Index:     0        1        2        3        4                          │
//! │            ┌────────┬────────┬────────┬────────┬────────┐                   │
//! │   slots:   │   f    │ Empty  │   c    │   d    │   e    │                   │
//! │            └────────┴────────┴────────┴────────┴────────┘                   │
//! │                ▲                 ▲                                          │
//! │              tail = 0          head = 2           len = 4                   │
//! │                                                                             │
//! │   Logical order (head → tail): c, d, e, f                                   │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Push Flow
//!
//! ```text
//!   push(v)
//!      │
//!      ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │ len < C ?                                                            │
//!   │   YES → len == 0 ? write at tail : advance tail, write; len += 1     │
//!   │   NO  → policy?                                                      │
//!   │           Reject    → hand v back, nothing changes                   │
//!   │           Overwrite → advance tail, overwrite (old head slot),       │
//!   │                       advance head, return displaced element         │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pop Flow
//!
//! ```text
//!   pop()
//!      │
//!      ▼
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │ len == 0 → nothing to return                                         │
//!   │ otherwise take slot[head], len -= 1                                  │
//!   │   len > 0  → advance head                                            │
//!   │   len == 0 → head = tail = 0 (canonical empty position)              │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation                  | Description                              | Complexity |
//! |----------------------------|------------------------------------------|------------|
//! | [`push`]                   | Enqueue, reporting the policy outcome    | O(1)       |
//! | [`add`] / [`offer`]        | Enqueue as `Result` / `bool`             | O(1)       |
//! | [`remove`] / [`poll`]      | Dequeue as `Result` / `Option`           | O(1)       |
//! | [`element`] / [`peek`]     | Oldest element as `Result` / `Option`    | O(1)       |
//! | [`len`] / [`is_empty`]     | Logical count                            | O(1)       |
//! | [`clear`]                  | Drop every element                       | O(C)       |
//! | [`contains`]               | Membership scan over all slots           | O(C)       |
//! | [`iter`] / [`to_vec`]      | Head-to-tail view / export               | O(len)     |
//!
//! [`push`]: RingQueue::push
//! [`add`]: RingQueue::add
//! [`offer`]: RingQueue::offer
//! [`remove`]: RingQueue::remove
//! [`poll`]: RingQueue::poll
//! [`element`]: RingQueue::element
//! [`peek`]: RingQueue::peek
//! [`len`]: RingQueue::len
//! [`is_empty`]: RingQueue::is_empty
//! [`clear`]: RingQueue::clear
//! [`contains`]: RingQueue::contains
//! [`iter`]: RingQueue::iter
//! [`to_vec`]: RingQueue::to_vec
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::queue::RingQueue;
//!
//! // Strict: refuses values once full
//! let mut strict = RingQueue::strict(2);
//! assert!(strict.offer("a"));
//! assert!(strict.offer("b"));
//! assert!(!strict.offer("c"));
//! assert_eq!(strict.to_vec(), vec!["a", "b"]);
//!
//! // Overwriting: keeps the newest `C` values
//! let mut lossy = RingQueue::overwriting(2);
//! for v in ["a", "b", "c"] {
//!     lossy.add(v).unwrap();
//! }
//! assert_eq!(lossy.poll(), Some("b"));
//! assert_eq!(lossy.poll(), Some("c"));
//! assert_eq!(lossy.poll(), None);
//! ```
//!
//! ## Thread Safety
//!
//! `RingQueue` has no internal synchronization. It is `Send` when `T: Send`;
//! wrap it in a lock to share it between threads.
//!
//! ## Implementation Notes
//!
//! - `len` is updated exactly once per successful push or pop and is never
//!   recomputed from the slots
//! - Arbitrary-position removal (`remove_value`, `remove_all`, `retain_all`)
//!   always returns [`QueueError::UnsupportedOperation`]
//! - `debug_validate_invariants()` available in debug/test builds

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::ds::SlotRing;
use crate::error::{InvariantError, QueueError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::QueueMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::QueueMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsSnapshotProvider, QueueMetricsReadRecorder, QueueMetricsRecorder,
};
use crate::policy::{OverflowPolicy, PushOutcome};
use crate::traits::BoundedQueue;

/// Fixed-capacity FIFO queue backed by a ring of tagged slots.
///
/// Equality and hashing compare capacity, policy and the logical contents in
/// FIFO order; where the elements sit in the ring is ignored.
///
/// # Example
///
/// ```
/// use ringkit::error::QueueError;
/// use ringkit::policy::OverflowPolicy;
/// use ringkit::queue::RingQueue;
///
/// let mut queue = RingQueue::try_new(3, OverflowPolicy::Reject)?;
/// queue.add('A')?;
/// queue.add('B')?;
/// queue.add('C')?;
/// assert_eq!(queue.add('D'), Err(QueueError::QueueFull { capacity: 3 }));
///
/// assert_eq!(queue.remove()?, 'A');
/// assert_eq!(queue.remove()?, 'B');
/// assert_eq!(queue.remove()?, 'C');
/// assert_eq!(queue.remove(), Err(QueueError::EmptyQueue));
/// # Ok::<(), QueueError>(())
/// ```
#[derive(Clone)]
pub struct RingQueue<T> {
    ring: SlotRing<T>,
    head: usize,
    tail: usize,
    len: usize,
    policy: OverflowPolicy,
    #[cfg(feature = "metrics")]
    metrics: QueueMetrics,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    ///
    /// # Example
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use ringkit::policy::OverflowPolicy;
    /// use ringkit::queue::RingQueue;
    ///
    /// let cap = NonZeroUsize::new(16).unwrap();
    /// let queue: RingQueue<u64> = RingQueue::with_capacity(cap, OverflowPolicy::Overwrite);
    /// assert_eq!(queue.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: NonZeroUsize, policy: OverflowPolicy) -> Self {
        Self {
            ring: SlotRing::new(capacity),
            head: 0,
            tail: 0,
            len: 0,
            policy,
            #[cfg(feature = "metrics")]
            metrics: QueueMetrics::default(),
        }
    }

    /// Creates an empty queue, rejecting a capacity of zero.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidCapacity`] if `capacity` is 0.
    pub fn try_new(capacity: usize, policy: OverflowPolicy) -> Result<Self, QueueError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(QueueError::InvalidCapacity)?;
        Ok(Self::with_capacity(capacity, policy))
    }

    /// Fallible [`strict`](Self::strict).
    pub fn try_strict(capacity: usize) -> Result<Self, QueueError> {
        Self::try_new(capacity, OverflowPolicy::Reject)
    }

    /// Fallible [`overwriting`](Self::overwriting).
    pub fn try_overwriting(capacity: usize) -> Result<Self, QueueError> {
        Self::try_new(capacity, OverflowPolicy::Overwrite)
    }

    /// Creates a queue that rejects pushes once full.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use [`try_strict`](Self::try_strict) for
    /// user-supplied capacities.
    pub fn strict(capacity: usize) -> Self {
        Self::try_strict(capacity).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Creates a queue that discards its oldest element when pushed while full.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use [`try_overwriting`](Self::try_overwriting)
    /// for user-supplied capacities.
    pub fn overwriting(capacity: usize) -> Self {
        Self::try_overwriting(capacity).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Returns the fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is filled.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.ring.capacity()
    }

    /// Returns how many more elements fit before the policy applies.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.ring.capacity() - self.len
    }

    /// Returns the overflow policy chosen at construction.
    #[inline]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Enqueues `value` and reports what the overflow policy did.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::policy::PushOutcome;
    /// use ringkit::queue::RingQueue;
    ///
    /// let mut lossy = RingQueue::overwriting(2);
    /// assert_eq!(lossy.push(1), PushOutcome::Inserted);
    /// assert_eq!(lossy.push(2), PushOutcome::Inserted);
    /// assert_eq!(lossy.push(3), PushOutcome::Overwrote(1));
    ///
    /// let mut strict = RingQueue::strict(1);
    /// assert_eq!(strict.push("x"), PushOutcome::Inserted);
    /// assert_eq!(strict.push("y"), PushOutcome::Rejected("y"));
    /// ```
    pub fn push(&mut self, value: T) -> PushOutcome<T> {
        if self.is_full() {
            return match self.policy {
                OverflowPolicy::Reject => {
                    #[cfg(feature = "metrics")]
                    self.metrics.record_push_rejected();
                    #[cfg(feature = "tracing")]
                    tracing::trace!(capacity = self.capacity(), "ring queue full, value rejected");
                    PushOutcome::Rejected(value)
                },
                OverflowPolicy::Overwrite => {
                    // The slot after tail is the head slot when the ring is full.
                    self.tail = self.ring.advance(self.tail);
                    let displaced = self.ring.write(self.tail, value);
                    self.head = self.ring.advance(self.head);
                    #[cfg(feature = "metrics")]
                    self.metrics.record_push_overwrote();
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        capacity = self.capacity(),
                        head = self.head,
                        "ring queue full, oldest element overwritten"
                    );
                    PushOutcome::Overwrote(
                        displaced
                            .into_inner()
                            .expect("full ring has an empty slot at head"),
                    )
                },
            };
        }

        if self.len > 0 {
            self.tail = self.ring.advance(self.tail);
        }
        self.ring.write(self.tail, value);
        self.len += 1;
        #[cfg(feature = "metrics")]
        self.metrics.record_push_inserted();
        PushOutcome::Inserted
    }

    /// Enqueues `value`, failing if the queue is full under the reject policy.
    ///
    /// Under [`OverflowPolicy::Overwrite`] this always succeeds and the
    /// displaced element is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::QueueFull`] when a strict queue is full. The queue
    /// is unchanged and `value` is dropped; use [`push`](Self::push) to get it back.
    pub fn add(&mut self, value: T) -> Result<(), QueueError> {
        match self.push(value) {
            PushOutcome::Rejected(_) => Err(QueueError::QueueFull {
                capacity: self.capacity(),
            }),
            PushOutcome::Inserted | PushOutcome::Overwrote(_) => Ok(()),
        }
    }

    /// Enqueues `value`, returning `false` if a strict queue is full.
    pub fn offer(&mut self, value: T) -> bool {
        self.push(value).is_stored()
    }

    /// Dequeues the oldest element, or `None` if the queue is empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.len == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_pop_empty();
            return None;
        }

        let value = self.ring.clear_slot(self.head);
        debug_assert!(value.is_some(), "head slot empty with len {}", self.len);
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
            self.tail = 0;
        } else {
            self.head = self.ring.advance(self.head);
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_found();
        value
    }

    /// Dequeues the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to remove.
    pub fn remove(&mut self) -> Result<T, QueueError> {
        self.poll().ok_or(QueueError::EmptyQueue)
    }

    /// Returns the oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();
        if self.len == 0 {
            return None;
        }
        let value = self.ring.read(self.head).as_ref();
        #[cfg(feature = "metrics")]
        {
            if value.is_some() {
                (&self.metrics).record_peek_found();
            }
        }
        value
    }

    /// Returns the oldest element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn element(&self) -> Result<&T, QueueError> {
        self.peek().ok_or(QueueError::EmptyQueue)
    }

    /// Returns the newest element without removing it.
    pub fn peek_back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.ring.read(self.tail).as_ref()
    }

    /// Returns the element at logical position `index` (0 is the oldest).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let cap = self.ring.capacity();
        let slot = (self.head + index) % cap;
        self.ring.read(slot).as_ref()
    }

    /// Drops every element and resets both cursors.
    pub fn clear(&mut self) {
        self.ring.reset();
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        #[cfg(feature = "tracing")]
        tracing::debug!(capacity = self.capacity(), "ring queue cleared");
    }

    /// Enqueues every item in order, stopping at the first rejection.
    ///
    /// Not transactional: items inserted before a [`QueueError::QueueFull`]
    /// stay in the queue, and the item that did not fit is dropped together
    /// with the rest of the input. Use [`try_add_all`](Self::try_add_all) for
    /// all-or-nothing insertion.
    ///
    /// Returns the number of items inserted.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::error::QueueError;
    /// use ringkit::queue::RingQueue;
    ///
    /// let mut queue = RingQueue::strict(3);
    /// assert_eq!(queue.add_all([1, 2]), Ok(2));
    /// assert_eq!(queue.add_all([3, 4, 5]), Err(QueueError::QueueFull { capacity: 3 }));
    /// assert_eq!(queue.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn add_all<I>(&mut self, values: I) -> Result<usize, QueueError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut inserted = 0;
        for value in values {
            self.add(value)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Enqueues every item, or none of them if a strict queue lacks room.
    ///
    /// Under [`OverflowPolicy::Overwrite`] this never fails.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::QueueFull`] without modifying the queue when the
    /// policy is [`OverflowPolicy::Reject`] and `values.len()` exceeds
    /// [`remaining`](Self::remaining).
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::queue::RingQueue;
    ///
    /// let mut queue = RingQueue::strict(3);
    /// queue.add(1).unwrap();
    /// assert!(queue.try_add_all(vec![2, 3, 4]).is_err());
    /// assert_eq!(queue.len(), 1);
    /// assert_eq!(queue.try_add_all(vec![2, 3]), Ok(2));
    /// ```
    pub fn try_add_all<I>(&mut self, values: I) -> Result<usize, QueueError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        if self.policy == OverflowPolicy::Reject && values.len() > self.remaining() {
            return Err(QueueError::QueueFull {
                capacity: self.capacity(),
            });
        }
        self.add_all(values)
    }

    /// Arbitrary-position removal is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`QueueError::UnsupportedOperation`].
    pub fn remove_value(&mut self, _value: &T) -> Result<bool, QueueError> {
        Err(QueueError::UnsupportedOperation {
            operation: "remove_value",
        })
    }

    /// Bulk arbitrary-position removal is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`QueueError::UnsupportedOperation`].
    pub fn remove_all<I>(&mut self, _values: I) -> Result<bool, QueueError>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Err(QueueError::UnsupportedOperation {
            operation: "remove_all",
        })
    }

    /// Set-style retention is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`QueueError::UnsupportedOperation`].
    pub fn retain_all<I>(&mut self, _values: I) -> Result<bool, QueueError>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        Err(QueueError::UnsupportedOperation {
            operation: "retain_all",
        })
    }

    /// Returns a head-to-tail iterator over the elements.
    ///
    /// The iterator captures the head position and length when created and
    /// walks its own cursor, so it yields exactly [`len`](Self::len) items.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::queue::RingQueue;
    ///
    /// let mut queue = RingQueue::overwriting(3);
    /// for v in 1..=5 {
    ///     queue.add(v).unwrap();
    /// }
    /// let items: Vec<_> = queue.iter().copied().collect();
    /// assert_eq!(items, vec![3, 4, 5]);
    ///
    /// let newest_first: Vec<_> = queue.iter().rev().copied().collect();
    /// assert_eq!(newest_first, vec![5, 4, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: &self.ring,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() - std::mem::size_of::<SlotRing<T>>() + self.ring.approx_bytes()
    }

    /// Verifies cursor, count and slot-occupancy invariants.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cap = self.ring.capacity();
        if self.len > cap {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len, cap
            )));
        }
        if self.head >= cap || self.tail >= cap {
            return Err(InvariantError::new(format!(
                "cursor out of range: head {}, tail {}, capacity {}",
                self.head, self.tail, cap
            )));
        }
        if self.len == 0 {
            if self.head != 0 || self.tail != 0 {
                return Err(InvariantError::new(format!(
                    "empty queue not at canonical position: head {}, tail {}",
                    self.head, self.tail
                )));
            }
        } else {
            let span = (self.tail + cap - self.head) % cap;
            if span != self.len - 1 {
                return Err(InvariantError::new(format!(
                    "head {} to tail {} spans {} slots but len is {}",
                    self.head,
                    self.tail,
                    span + 1,
                    self.len
                )));
            }
        }
        self.ring.check_run(self.head, self.len)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("ring queue invariant violated: {}", err);
        }
        self.ring.debug_validate_invariants();
    }
}

impl<T: PartialEq> RingQueue<T> {
    /// Returns `true` if any filled slot holds a value equal to `value`.
    ///
    /// Scans every slot; empty slots never match.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::queue::RingQueue;
    ///
    /// // A `None` payload is a real element, distinct from an empty slot.
    /// let mut queue: RingQueue<Option<u8>> = RingQueue::strict(4);
    /// assert!(!queue.contains(&None));
    /// queue.add(None).unwrap();
    /// assert!(queue.contains(&None));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_contains_call();
        self.ring
            .slots()
            .any(|slot| slot.as_ref().is_some_and(|item| item == value))
    }

    /// Returns `true` if [`contains`](Self::contains) holds for every item.
    ///
    /// An empty input returns `true`.
    pub fn contains_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        values.into_iter().all(|value| self.contains(value.borrow()))
    }
}

impl<T: Clone> RingQueue<T> {
    /// Copies the elements into a `Vec`, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the elements into a `Vec` with room for at least `hint` items.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::queue::RingQueue;
    ///
    /// let mut queue = RingQueue::strict(4);
    /// queue.add_all([1, 2]).unwrap();
    /// let out = queue.to_vec_with_capacity(10);
    /// assert_eq!(out, vec![1, 2]);
    /// assert!(out.capacity() >= 10);
    /// ```
    pub fn to_vec_with_capacity(&self, hint: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(hint.max(self.len));
        out.extend(self.iter().cloned());
        out
    }

    /// Copies up to `out.len()` elements into `out`, oldest first.
    ///
    /// Returns the number of elements written; slots of `out` past that are
    /// left untouched.
    pub fn copy_to_slice(&self, out: &mut [T]) -> usize {
        let mut written = 0;
        for (dst, src) in out.iter_mut().zip(self.iter()) {
            dst.clone_from(src);
            written += 1;
        }
        written
    }
}

#[cfg(feature = "metrics")]
impl<T> RingQueue<T> {
    /// Returns a copy of the operation counters and current gauges.
    pub fn metrics_snapshot(&self) -> QueueMetricsSnapshot {
        QueueMetricsSnapshot {
            push_calls: self.metrics.push_calls,
            push_inserted: self.metrics.push_inserted,
            push_overwrites: self.metrics.push_overwrites,
            push_rejected: self.metrics.push_rejected,
            pop_calls: self.metrics.pop_calls,
            pop_found: self.metrics.pop_found,
            pop_empty: self.metrics.pop_empty,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            contains_calls: self.metrics.contains_calls.get(),
            clear_calls: self.metrics.clear_calls,
            len: self.len,
            capacity: self.capacity(),
        }
    }

    /// Zeroes every operation counter.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<QueueMetricsSnapshot> for RingQueue<T> {
    fn snapshot(&self) -> QueueMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<T> BoundedQueue<T> for RingQueue<T> {
    fn capacity(&self) -> usize {
        RingQueue::capacity(self)
    }

    fn len(&self) -> usize {
        RingQueue::len(self)
    }

    fn offer(&mut self, value: T) -> bool {
        RingQueue::offer(self, value)
    }

    fn poll(&mut self) -> Option<T> {
        RingQueue::poll(self)
    }

    fn peek(&self) -> Option<&T> {
        RingQueue::peek(self)
    }

    fn clear(&mut self) {
        RingQueue::clear(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity())
            .field("policy", &self.policy)
            .field("len", &self.len)
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a RingQueue<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// ---------------------------------------------------------------------------
// PartialEq, Eq, Hash: compare logical content, not slot positions
// ---------------------------------------------------------------------------

impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.policy == other.policy
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T: Hash> Hash for RingQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity().hash(state);
        self.policy.hash(state);
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

// ---------------------------------------------------------------------------
// Iterator types
// ---------------------------------------------------------------------------

/// Borrowed head-to-tail iterator over a [`RingQueue`].
///
/// Created by [`RingQueue::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    ring: &'a SlotRing<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.ring.read(self.front).as_ref();
        self.front = self.ring.advance(self.front);
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.ring.read(self.back).as_ref();
        self.back = self.ring.retreat(self.back);
        self.remaining -= 1;
        item
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning head-to-tail iterator over a [`RingQueue`].
///
/// Created by calling [`IntoIterator::into_iter`] on a `RingQueue`.
#[derive(Debug)]
pub struct IntoIter<T> {
    ring: SlotRing<T>,
    front: usize,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.ring.clear_slot(self.front);
        self.front = self.ring.advance(self.front);
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the queue, yielding elements oldest first.
    ///
    /// # Example
    ///
    /// ```
    /// use ringkit::queue::RingQueue;
    ///
    /// let mut queue = RingQueue::strict(3);
    /// queue.add_all(["x", "y"]).unwrap();
    /// let items: Vec<_> = queue.into_iter().collect();
    /// assert_eq!(items, vec!["x", "y"]);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            ring: self.ring,
            front: self.head,
            remaining: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // Construction
    // ==============================================

    #[test]
    fn try_new_rejects_zero_capacity() {
        assert_eq!(
            RingQueue::<u8>::try_new(0, OverflowPolicy::Reject).unwrap_err(),
            QueueError::InvalidCapacity
        );
        assert_eq!(
            RingQueue::<u8>::try_overwriting(0).unwrap_err(),
            QueueError::InvalidCapacity
        );
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than zero")]
    fn strict_panics_on_zero_capacity() {
        let _ = RingQueue::<u8>::strict(0);
    }

    #[test]
    fn new_queue_is_empty_at_origin() {
        let q = RingQueue::<u32>::strict(4);
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 4);
        assert_eq!(q.remaining(), 4);
        assert_eq!((q.head, q.tail), (0, 0));
        q.debug_validate_invariants();
    }

    // ==============================================
    // Strict policy
    // ==============================================

    #[test]
    fn strict_capacity_three_scenario() {
        let mut q = RingQueue::strict(3);
        assert_eq!(q.add('A'), Ok(()));
        assert_eq!(q.add('B'), Ok(()));
        assert_eq!(q.add('C'), Ok(()));
        assert_eq!(q.add('D'), Err(QueueError::QueueFull { capacity: 3 }));
        assert_eq!(q.remove(), Ok('A'));
        assert_eq!(q.remove(), Ok('B'));
        assert_eq!(q.remove(), Ok('C'));
        assert_eq!(q.remove(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn strict_rejection_leaves_state_unchanged() {
        let mut q = RingQueue::strict(2);
        q.add(1).unwrap();
        q.add(2).unwrap();
        let before = (q.head, q.tail, q.len);
        assert_eq!(q.push(3), PushOutcome::Rejected(3));
        assert!(!q.offer(4));
        assert_eq!((q.head, q.tail, q.len), before);
        assert_eq!(q.to_vec(), vec![1, 2]);
        q.debug_validate_invariants();
    }

    #[test]
    fn strict_accepts_again_after_pop() {
        let mut q = RingQueue::strict(2);
        q.add(1).unwrap();
        q.add(2).unwrap();
        assert_eq!(q.poll(), Some(1));
        assert!(q.offer(3));
        assert_eq!(q.to_vec(), vec![2, 3]);
        // tail wrapped to slot 0
        assert_eq!((q.head, q.tail), (1, 0));
        q.debug_validate_invariants();
    }

    // ==============================================
    // Overwrite policy
    // ==============================================

    #[test]
    fn overwrite_capacity_three_scenario() {
        let mut q = RingQueue::overwriting(3);
        for v in ['A', 'B', 'C', 'D'] {
            assert_eq!(q.add(v), Ok(()));
        }
        assert_eq!(q.len(), 3);
        assert_eq!(q.remove(), Ok('B'));
        assert_eq!(q.remove(), Ok('C'));
        assert_eq!(q.remove(), Ok('D'));
        assert!(q.is_empty());
    }

    #[test]
    fn overwrite_returns_displaced_oldest() {
        let mut q = RingQueue::overwriting(2);
        assert_eq!(q.push(1), PushOutcome::Inserted);
        assert_eq!(q.push(2), PushOutcome::Inserted);
        assert_eq!(q.push(3), PushOutcome::Overwrote(1));
        assert_eq!(q.push(4), PushOutcome::Overwrote(2));
        assert_eq!(q.to_vec(), vec![3, 4]);
        q.debug_validate_invariants();
    }

    #[test]
    fn overwrite_single_slot_keeps_newest() {
        let mut q = RingQueue::overwriting(1);
        for v in 0..5 {
            assert!(q.offer(v));
            assert_eq!(q.peek(), Some(&v));
            assert_eq!(q.peek_back(), Some(&v));
            assert_eq!((q.head, q.tail), (0, 0));
        }
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn overwrite_head_follows_tail_when_full() {
        let mut q = RingQueue::overwriting(3);
        q.add_all([1, 2, 3]).unwrap();
        q.add(4).unwrap();
        assert_eq!((q.head, q.tail), (1, 0));
        assert_eq!(q.peek(), Some(&2));
        assert_eq!(q.peek_back(), Some(&4));
        q.debug_validate_invariants();
    }

    // ==============================================
    // Dequeue / cursor reset
    // ==============================================

    #[test]
    fn poll_on_empty_returns_none() {
        let mut q = RingQueue::<u8>::overwriting(2);
        assert_eq!(q.poll(), None);
        assert_eq!(q.remove(), Err(QueueError::EmptyQueue));
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn last_pop_resets_cursors_to_origin() {
        let mut q = RingQueue::strict(4);
        q.add_all([1, 2, 3]).unwrap();
        q.poll();
        q.poll();
        assert_eq!((q.head, q.tail), (2, 2));
        q.poll();
        assert_eq!((q.head, q.tail, q.len), (0, 0, 0));
        q.debug_validate_invariants();
    }

    #[test]
    fn len_never_drifts_across_empty_pops() {
        let mut q = RingQueue::strict(2);
        for _ in 0..3 {
            assert_eq!(q.poll(), None::<u8>);
        }
        q.add(1).unwrap();
        assert_eq!(q.len(), 1);
        q.poll();
        q.poll();
        assert_eq!(q.len(), 0);
        q.add(2).unwrap();
        assert_eq!(q.len(), 1);
    }

    // ==============================================
    // Peek / element
    // ==============================================

    #[test]
    fn peek_is_non_mutating() {
        let mut q = RingQueue::strict(3);
        q.add("x").unwrap();
        q.add("y").unwrap();
        for _ in 0..3 {
            assert_eq!(q.peek(), Some(&"x"));
            assert_eq!(q.element(), Ok(&"x"));
        }
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn element_on_empty_fails() {
        let q = RingQueue::<u8>::strict(1);
        assert_eq!(q.element(), Err(QueueError::EmptyQueue));
        assert_eq!(q.peek(), None);
        assert_eq!(q.peek_back(), None);
    }

    #[test]
    fn get_indexes_logically() {
        let mut q = RingQueue::overwriting(3);
        q.add_all([1, 2, 3, 4]).unwrap();
        assert_eq!(q.get(0), Some(&2));
        assert_eq!(q.get(2), Some(&4));
        assert_eq!(q.get(3), None);
    }

    // ==============================================
    // Clear
    // ==============================================

    #[test]
    fn clear_resets_and_queue_is_reusable() {
        let mut q = RingQueue::overwriting(3);
        q.add_all([1, 2, 3, 4, 5]).unwrap();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.ring.filled_count(), 0);
        q.debug_validate_invariants();

        q.add(9).unwrap();
        assert_eq!(q.peek(), Some(&9));
    }

    #[test]
    fn clear_drops_payloads() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut q = RingQueue::strict(3);
        q.add(Rc::clone(&tracker)).unwrap();
        q.add(Rc::clone(&tracker)).unwrap();
        q.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    // ==============================================
    // Membership
    // ==============================================

    #[test]
    fn contains_ignores_empty_slots() {
        let mut q: RingQueue<Option<u8>> = RingQueue::strict(3);
        q.add(Some(1)).unwrap();
        assert!(q.contains(&Some(1)));
        assert!(!q.contains(&None));
        q.add(None).unwrap();
        assert!(q.contains(&None));
    }

    #[test]
    fn contains_misses_popped_values() {
        let mut q = RingQueue::strict(3);
        q.add_all([1, 2]).unwrap();
        q.poll();
        assert!(!q.contains(&1));
        assert!(q.contains(&2));
    }

    #[test]
    fn contains_all_requires_every_item() {
        let mut q = RingQueue::strict(4);
        q.add_all([1, 2, 3]).unwrap();
        assert!(q.contains_all([1, 3]));
        assert!(q.contains_all(&[2, 3]));
        assert!(!q.contains_all(vec![1, 4]));
        assert!(q.contains_all(Vec::<i32>::new()));
    }

    // ==============================================
    // Bulk insert
    // ==============================================

    #[test]
    fn add_all_is_best_effort_under_reject() {
        let mut q = RingQueue::strict(2);
        assert_eq!(
            q.add_all([1, 2, 3]),
            Err(QueueError::QueueFull { capacity: 2 })
        );
        assert_eq!(q.to_vec(), vec![1, 2]);
    }

    #[test]
    fn add_all_never_fails_under_overwrite() {
        let mut q = RingQueue::overwriting(2);
        assert_eq!(q.add_all(1..=5), Ok(5));
        assert_eq!(q.to_vec(), vec![4, 5]);
    }

    #[test]
    fn try_add_all_is_all_or_nothing() {
        let mut q = RingQueue::strict(3);
        q.add(0).unwrap();
        assert_eq!(
            q.try_add_all(vec![1, 2, 3]),
            Err(QueueError::QueueFull { capacity: 3 })
        );
        assert_eq!(q.to_vec(), vec![0]);
        assert_eq!(q.try_add_all(vec![1, 2]), Ok(2));
        assert!(q.is_full());
    }

    #[test]
    fn try_add_all_overwrite_accepts_oversized_input() {
        let mut q = RingQueue::overwriting(2);
        assert_eq!(q.try_add_all(vec![1, 2, 3]), Ok(3));
        assert_eq!(q.to_vec(), vec![2, 3]);
    }

    // ==============================================
    // Unsupported removal
    // ==============================================

    #[test]
    fn arbitrary_removal_is_unsupported() {
        let mut q = RingQueue::strict(3);
        q.add_all([1, 2, 3]).unwrap();
        assert_eq!(
            q.remove_value(&2),
            Err(QueueError::UnsupportedOperation {
                operation: "remove_value"
            })
        );
        assert_eq!(
            q.remove_all([1]),
            Err(QueueError::UnsupportedOperation {
                operation: "remove_all"
            })
        );
        assert_eq!(
            q.retain_all(&[3]),
            Err(QueueError::UnsupportedOperation {
                operation: "retain_all"
            })
        );
        assert_eq!(q.to_vec(), vec![1, 2, 3]);
    }

    // ==============================================
    // Iteration / export
    // ==============================================

    #[test]
    fn iter_yields_exactly_len_items_after_wrap() {
        let mut q = RingQueue::strict(4);
        q.add_all([1, 2, 3, 4]).unwrap();
        q.poll();
        q.poll();
        q.add_all([5, 6]).unwrap();

        let mut it = q.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.next(), Some(&5));
        assert_eq!(it.next(), Some(&6));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iter_on_full_queue_does_not_loop() {
        let mut q = RingQueue::overwriting(3);
        q.add_all(0..10).unwrap();
        assert_eq!(q.iter().count(), 3);
    }

    #[test]
    fn iter_double_ended_meets_in_middle() {
        let mut q = RingQueue::overwriting(4);
        q.add_all(1..=6).unwrap();
        let mut it = q.iter();
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&4));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iter_on_empty_yields_nothing() {
        let q = RingQueue::<u8>::strict(3);
        assert_eq!(q.iter().next(), None);
        assert_eq!(q.iter().rev().next(), None);
    }

    #[test]
    fn into_iter_consumes_in_fifo_order() {
        let mut q = RingQueue::overwriting(3);
        q.add_all([1, 2, 3, 4]).unwrap();
        let mut it = q.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn into_iter_drops_unconsumed_items() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut q = RingQueue::strict(3);
        q.add_all([Rc::clone(&tracker), Rc::clone(&tracker), Rc::clone(&tracker)])
            .unwrap();
        let mut it = q.into_iter();
        drop(it.next());
        drop(it);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn ref_into_iter_for_loop() {
        let mut q = RingQueue::strict(3);
        q.add_all([10, 20]).unwrap();
        let mut sum = 0;
        for v in &q {
            sum += v;
        }
        assert_eq!(sum, 30);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn copy_to_slice_respects_both_lengths() {
        let mut q = RingQueue::strict(3);
        q.add_all([1, 2, 3]).unwrap();

        let mut short = [0; 2];
        assert_eq!(q.copy_to_slice(&mut short), 2);
        assert_eq!(short, [1, 2]);

        let mut long = [0; 5];
        assert_eq!(q.copy_to_slice(&mut long), 3);
        assert_eq!(long, [1, 2, 3, 0, 0]);
    }

    #[test]
    fn to_vec_with_capacity_honors_len_when_hint_small() {
        let mut q = RingQueue::strict(4);
        q.add_all([1, 2, 3]).unwrap();
        let v = q.to_vec_with_capacity(0);
        assert_eq!(v, vec![1, 2, 3]);
        assert!(v.capacity() >= 3);
    }

    // ==============================================
    // Equality / hashing / debug
    // ==============================================

    #[test]
    fn eq_ignores_slot_positions() {
        let mut a = RingQueue::strict(3);
        a.add_all([1, 2]).unwrap();

        let mut b = RingQueue::strict(3);
        b.add_all([9, 9, 1]).unwrap();
        b.poll();
        b.poll();
        b.add(2).unwrap();

        assert_ne!((a.head, a.tail), (b.head, b.tail));
        assert_eq!(a, b);
    }

    #[test]
    fn ne_on_policy_or_capacity() {
        let a = RingQueue::<u8>::strict(3);
        assert_ne!(a, RingQueue::overwriting(3));
        assert_ne!(a, RingQueue::strict(4));
    }

    #[test]
    fn hash_matches_for_equal_queues() {
        use std::collections::hash_map::DefaultHasher;

        let hash_of = |q: &RingQueue<u8>| {
            let mut s = DefaultHasher::new();
            q.hash(&mut s);
            s.finish()
        };

        let mut a = RingQueue::overwriting(2);
        a.add_all([1, 2]).unwrap();
        let mut b = RingQueue::overwriting(2);
        b.add_all([7, 1, 2]).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn debug_lists_logical_items() {
        let mut q = RingQueue::overwriting(2);
        q.add_all([1, 2, 3]).unwrap();
        let dbg = format!("{:?}", q);
        assert!(dbg.contains("items: [2, 3]"));
        assert!(dbg.contains("Overwrite"));
    }

    #[test]
    fn clone_is_independent() {
        let mut a = RingQueue::strict(2);
        a.add(1).unwrap();
        let mut b = a.clone();
        b.add(2).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn approx_bytes_covers_all_slots() {
        let q = RingQueue::<u64>::strict(100);
        assert!(q.approx_bytes() >= 100 * std::mem::size_of::<u64>());
    }

    // ==============================================
    // Invariant checker
    // ==============================================

    #[test]
    fn check_invariants_detects_corruption() {
        let mut q = RingQueue::strict(3);
        q.add_all([1, 2]).unwrap();
        assert!(q.check_invariants().is_ok());

        q.len = 3;
        assert!(q.check_invariants().is_err());
        q.len = 2;

        q.ring.clear_slot(q.tail);
        assert!(q.check_invariants().is_err());
    }

    #[test]
    fn check_invariants_flags_non_canonical_empty() {
        let mut q = RingQueue::<u8>::strict(3);
        q.head = 1;
        q.tail = 1;
        let err = q.check_invariants().unwrap_err();
        assert!(err.message().contains("canonical"));
    }

    // ==============================================
    // Metrics
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;
        use crate::metrics::traits::MetricsSnapshotProvider;

        #[test]
        fn records_push_outcomes() {
            let mut strict = RingQueue::strict(1);
            strict.add(1).unwrap();
            let _ = strict.add(2);
            let snap = strict.metrics_snapshot();
            assert_eq!(snap.push_calls, 2);
            assert_eq!(snap.push_inserted, 1);
            assert_eq!(snap.push_rejected, 1);

            let mut lossy = RingQueue::overwriting(1);
            lossy.add(1).unwrap();
            lossy.add(2).unwrap();
            let snap = lossy.snapshot();
            assert_eq!(snap.push_overwrites, 1);
            assert_eq!(snap.lost_values(), 1);
            assert_eq!(snap.len, 1);
            assert_eq!(snap.capacity, 1);
        }

        #[test]
        fn records_reads_and_pops() {
            let mut q = RingQueue::strict(2);
            q.peek();
            q.add(1).unwrap();
            q.peek();
            q.contains(&1);
            q.poll();
            q.poll();
            q.clear();

            let snap = q.metrics_snapshot();
            assert_eq!(snap.peek_calls, 2);
            assert_eq!(snap.peek_found, 1);
            assert_eq!(snap.contains_calls, 1);
            assert_eq!(snap.pop_found, 1);
            assert_eq!(snap.pop_empty, 1);
            assert_eq!(snap.clear_calls, 1);

            q.reset_metrics();
            assert_eq!(q.metrics_snapshot().pop_calls, 0);
        }
    }
}
