pub use crate::builder::RingQueueBuilder;
pub use crate::ds::{Slot, SlotRing};
pub use crate::error::{InvariantError, ParsePolicyError, QueueError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::QueueMetricsSnapshot;
pub use crate::policy::{OverflowPolicy, PushOutcome};
pub use crate::queue::RingQueue;
pub use crate::traits::BoundedQueue;
