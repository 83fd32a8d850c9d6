//! Error types for the ringkit library.
//!
//! ## Key Components
//!
//! - [`QueueError`]: Returned by queue operations that cannot complete
//!   (full queue under the reject policy, empty queue, invalid capacity,
//!   unsupported removal).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//! - [`ParsePolicyError`]: Returned when an overflow policy name cannot be
//!   parsed from configuration text.
//!
//! ## Example Usage
//!
//! ```
//! use ringkit::error::QueueError;
//! use ringkit::queue::RingQueue;
//!
//! // Fallible constructor for user-configurable capacity
//! let bad = RingQueue::<u32>::try_strict(0);
//! assert_eq!(bad.unwrap_err(), QueueError::InvalidCapacity);
//!
//! let mut queue = RingQueue::strict(1);
//! queue.add(1).unwrap();
//! assert_eq!(queue.add(2), Err(QueueError::QueueFull { capacity: 1 }));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// QueueError
// ---------------------------------------------------------------------------

/// Error returned by [`RingQueue`](crate::queue::RingQueue) operations.
///
/// Every failure is synchronous and leaves the queue unchanged, except for
/// [`add_all`](crate::queue::RingQueue::add_all) which keeps the elements
/// inserted before the failure.
///
/// # Example
///
/// ```
/// use ringkit::error::QueueError;
/// use ringkit::queue::RingQueue;
///
/// let mut queue: RingQueue<&str> = RingQueue::strict(2);
/// assert_eq!(queue.remove(), Err(QueueError::EmptyQueue));
/// assert!(QueueError::EmptyQueue.to_string().contains("empty"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// Construction with a capacity of zero.
    InvalidCapacity,
    /// Insertion into a full queue under [`OverflowPolicy::Reject`](crate::policy::OverflowPolicy::Reject).
    QueueFull {
        /// Capacity of the queue that refused the value.
        capacity: usize,
    },
    /// Head access or removal on an empty queue.
    EmptyQueue,
    /// The value is a reserved marker and may not be stored.
    ///
    /// Slots are tagged, so every `T` is a storable payload and the queue
    /// never produces this variant itself. Adapters that map a nullable
    /// source onto a queue report it from their own boundary checks.
    RejectedValue,
    /// Arbitrary-position removal, which a ring buffer does not support.
    UnsupportedOperation {
        /// Name of the refused operation.
        operation: &'static str,
    },
}

impl QueueError {
    /// Returns `true` for errors a caller can recover from by retrying after
    /// the queue state changes.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QueueError::QueueFull { .. } | QueueError::EmptyQueue)
    }
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::InvalidCapacity => f.write_str("queue capacity must be greater than zero"),
            QueueError::QueueFull { capacity } => {
                write!(f, "queue is full (capacity {}), cannot add more elements", capacity)
            },
            QueueError::EmptyQueue => f.write_str("queue is empty"),
            QueueError::RejectedValue => f.write_str("value is a reserved marker and was rejected"),
            QueueError::UnsupportedOperation { operation } => {
                write!(f, "`{}` is not supported by a ring buffer queue", operation)
            },
        }
    }
}

impl std::error::Error for QueueError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal queue invariants are violated.
///
/// Produced by [`RingQueue::check_invariants`](crate::queue::RingQueue::check_invariants)
/// and [`SlotRing::check_run`](crate::ds::SlotRing::check_run).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ParsePolicyError
// ---------------------------------------------------------------------------

/// Error returned when parsing an [`OverflowPolicy`](crate::policy::OverflowPolicy)
/// from a string fails.
///
/// # Example
///
/// ```
/// use ringkit::policy::OverflowPolicy;
///
/// let err = "lifo".parse::<OverflowPolicy>().unwrap_err();
/// assert!(err.to_string().contains("lifo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl ParsePolicyError {
    /// Creates a new `ParsePolicyError` for the unrecognized input.
    #[inline]
    pub fn new(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    /// Returns the input that failed to parse.
    #[inline]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown overflow policy `{}` (expected reject, strict, overwrite or fast)",
            self.0
        )
    }
}

impl std::error::Error for ParsePolicyError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
