//! Overflow policies for [`RingQueue`](crate::queue::RingQueue).
//!
//! A queue picks one policy at construction. The policy only changes what
//! happens when a value is pushed into a full queue:
//!
//! ```text
//!   push(v) on a full queue, capacity 3, contents [a, b, c]
//!
//!   Reject     →  contents stay [a, b, c], v is handed back
//!   Overwrite  →  a is discarded, contents become [b, c, v]
//! ```
//!
//! | Policy      | Also known as | Full-queue push        | `add` on full      |
//! |-------------|---------------|------------------------|--------------------|
//! | `Reject`    | strict        | `PushOutcome::Rejected`| `Err(QueueFull)`   |
//! | `Overwrite` | fast, lossy   | `PushOutcome::Overwrote`| `Ok(())`          |

use std::fmt;
use std::str::FromStr;

use crate::error::ParsePolicyError;

/// Behavior when a value is pushed into a full queue.
///
/// Implements [`FromStr`] so callers can read it from their own configuration:
///
/// ```
/// use ringkit::policy::OverflowPolicy;
///
/// assert_eq!("fast".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Overwrite));
/// assert_eq!("Reject".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Reject));
/// assert_eq!(OverflowPolicy::default(), OverflowPolicy::Reject);
/// assert_eq!(OverflowPolicy::Overwrite.to_string(), "overwrite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Refuse the new value; the queue is unchanged.
    #[default]
    Reject,
    /// Discard the oldest element to make room for the new value.
    Overwrite,
}

impl OverflowPolicy {
    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Reject => "reject",
            OverflowPolicy::Overwrite => "overwrite",
        }
    }

    /// Returns `true` if pushes into a full queue discard the oldest element.
    #[inline]
    pub fn is_lossy(self) -> bool {
        matches!(self, OverflowPolicy::Overwrite)
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" | "strict" => Ok(OverflowPolicy::Reject),
            "overwrite" | "fast" | "lossy" => Ok(OverflowPolicy::Overwrite),
            _ => Err(ParsePolicyError::new(s)),
        }
    }
}

/// Result of [`RingQueue::push`](crate::queue::RingQueue::push).
///
/// Values that do not end up in the queue are returned to the caller instead
/// of being dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a rejected or overwritten value is returned here"]
pub enum PushOutcome<T> {
    /// The value was stored and nothing was displaced.
    Inserted,
    /// The value was stored and the oldest element was discarded to make room.
    Overwrote(T),
    /// The queue was full under [`OverflowPolicy::Reject`]; the value is handed back.
    Rejected(T),
}

impl<T> PushOutcome<T> {
    /// Returns `true` if the pushed value is now in the queue.
    #[inline]
    pub fn is_stored(&self) -> bool {
        !matches!(self, PushOutcome::Rejected(_))
    }

    /// Returns the displaced element, if the push overwrote one.
    pub fn evicted(self) -> Option<T> {
        match self {
            PushOutcome::Overwrote(old) => Some(old),
            _ => None,
        }
    }

    /// Returns the refused value, if the push was rejected.
    pub fn rejected(self) -> Option<T> {
        match self {
            PushOutcome::Rejected(value) => Some(value),
            _ => None,
        }
    }
}
