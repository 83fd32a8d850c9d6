//! Fixed-length slot storage with wrap-around index arithmetic.
//!
//! `SlotRing` is the storage layer underneath [`RingQueue`](crate::queue::RingQueue).
//! It owns exactly `C` slots allocated once at construction and never resized.
//! Each slot is tagged: [`Slot::Empty`] or [`Slot::Filled`]. The tag is
//! independent of the payload type, so a `SlotRing<Option<u32>>` can hold a
//! `None` payload without it being mistaken for an empty slot.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                        SlotRing<T>, capacity C = 5                          │
//! │                                                                             │
//! │   slots: Box<[Slot<T>]>       (one allocation, length fixed at C)           │
//! │                                                                             │
//! │   Index:     0        1        2        3        4                          │
//! │            ┌────────┬────────┬────────┬────────┬────────┐                   │
//! │   slots:   │ Empty  │Filled a│Filled b│Filled c│ Empty  │                   │
//! │            └────────┴────────┴────────┴────────┴────────┘                   │
//! │                                                                             │
//! │   Index Arithmetic                                                          │
//! │   ────────────────                                                          │
//! │                                                                             │
//! │   advance(i) = (i + 1) % C        advance(4) = 0                            │
//! │   retreat(i) = (i + C - 1) % C    retreat(0) = 4                            │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation        | Description                          | Complexity |
//! |------------------|--------------------------------------|------------|
//! | [`read`]         | Borrow the slot at an index          | O(1)       |
//! | [`write`]        | Fill a slot, returning the old slot  | O(1)       |
//! | [`clear_slot`]   | Empty a slot, returning its payload  | O(1)       |
//! | [`advance`]      | Next index, wrapping                 | O(1)       |
//! | [`retreat`]      | Previous index, wrapping             | O(1)       |
//! | [`reset`]        | Empty every slot                     | O(C)       |
//!
//! [`read`]: SlotRing::read
//! [`write`]: SlotRing::write
//! [`clear_slot`]: SlotRing::clear_slot
//! [`advance`]: SlotRing::advance
//! [`retreat`]: SlotRing::retreat
//! [`reset`]: SlotRing::reset
//!
//! ## Example Usage
//!
//! ```
//! use std::num::NonZeroUsize;
//! use ringkit::ds::{Slot, SlotRing};
//!
//! let mut ring = SlotRing::new(NonZeroUsize::new(3).unwrap());
//! ring.write(2, "x");
//!
//! assert_eq!(ring.read(2), &Slot::Filled("x"));
//! assert_eq!(ring.advance(2), 0);
//! assert_eq!(ring.retreat(0), 2);
//!
//! assert_eq!(ring.clear_slot(2), Some("x"));
//! assert!(ring.read(2).is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! `SlotRing` is not thread-safe. It carries no policy and no cursors; the
//! owning queue decides which index to touch.
//!
//! ## Implementation Notes
//!
//! - Capacity is a [`NonZeroUsize`], so modulo arithmetic never divides by zero
//! - Index arguments must be `< capacity()`; out-of-range indices panic like
//!   slice indexing
//! - `debug_validate_invariants()` available in debug/test builds

use std::mem;
use std::num::NonZeroUsize;

use crate::error::InvariantError;

/// A single storage cell: empty, or holding one payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// No payload.
    Empty,
    /// Holds one payload.
    Filled(T),
}

impl<T> Slot<T> {
    /// Returns `true` if the slot holds a payload.
    #[inline]
    pub fn is_filled(&self) -> bool {
        matches!(self, Slot::Filled(_))
    }

    /// Returns `true` if the slot holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Borrows the payload, if any.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Slot::Filled(value) => Some(value),
            Slot::Empty => None,
        }
    }

    /// Mutably borrows the payload, if any.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Filled(value) => Some(value),
            Slot::Empty => None,
        }
    }

    /// Takes the payload out, leaving [`Slot::Empty`] behind.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        match mem::replace(self, Slot::Empty) {
            Slot::Filled(value) => Some(value),
            Slot::Empty => None,
        }
    }

    /// Converts into the payload, if any.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        match self {
            Slot::Filled(value) => Some(value),
            Slot::Empty => None,
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Empty
    }
}

/// Fixed-length array of tagged slots with modular index helpers.
///
/// The backing storage is a boxed slice: allocated once in [`new`](Self::new)
/// and never grown, shrunk or reallocated afterwards.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use ringkit::ds::SlotRing;
///
/// let mut ring: SlotRing<u32> = SlotRing::new(NonZeroUsize::new(4).unwrap());
/// assert_eq!(ring.capacity(), 4);
/// assert_eq!(ring.filled_count(), 0);
///
/// let mut idx = 0;
/// for v in [10, 20, 30, 40, 50] {
///     ring.write(idx, v);
///     idx = ring.advance(idx);
/// }
///
/// // The fifth write wrapped around to index 0
/// assert_eq!(ring.read(0).as_ref(), Some(&50));
/// assert_eq!(ring.filled_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SlotRing<T> {
    slots: Box<[Slot<T>]>,
}

impl<T> SlotRing<T> {
    /// Allocates `capacity` empty slots.
    pub fn new(capacity: NonZeroUsize) -> Self {
        let slots: Box<[Slot<T>]> = (0..capacity.get()).map(|_| Slot::Empty).collect();
        Self { slots }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Borrows the slot at `index`.
    #[inline]
    pub fn read(&self, index: usize) -> &Slot<T> {
        &self.slots[index]
    }

    /// Fills the slot at `index` and returns what it held before.
    #[inline]
    pub fn write(&mut self, index: usize, value: T) -> Slot<T> {
        mem::replace(&mut self.slots[index], Slot::Filled(value))
    }

    /// Empties the slot at `index`, returning its payload if it had one.
    #[inline]
    pub fn clear_slot(&mut self, index: usize) -> Option<T> {
        self.slots[index].take()
    }

    /// Index one step forward, wrapping to 0 after the last slot.
    #[inline]
    pub fn advance(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.slots.len() { 0 } else { next }
    }

    /// Index one step backward, wrapping to the last slot before 0.
    #[inline]
    pub fn retreat(&self, index: usize) -> usize {
        if index == 0 {
            self.slots.len() - 1
        } else {
            index - 1
        }
    }

    /// Empties every slot, dropping all payloads.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
    }

    /// Iterates over all slots in index order, empty ones included.
    pub fn slots(&self) -> std::slice::Iter<'_, Slot<T>> {
        self.slots.iter()
    }

    /// Counts filled slots by scanning. O(C); for validation only.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_filled()).count()
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        mem::size_of::<Self>() + self.slots.len() * mem::size_of::<Slot<T>>()
    }

    /// Checks that the filled slots form one contiguous wrap-around run of
    /// `count` slots starting at `start`.
    pub fn check_run(&self, start: usize, count: usize) -> Result<(), InvariantError> {
        let cap = self.capacity();
        if start >= cap {
            return Err(InvariantError::new(format!(
                "run start {} out of range for capacity {}",
                start, cap
            )));
        }
        if count > cap {
            return Err(InvariantError::new(format!(
                "run length {} exceeds capacity {}",
                count, cap
            )));
        }
        let mut idx = start;
        for offset in 0..cap {
            let inside = offset < count;
            if inside != self.slots[idx].is_filled() {
                return Err(InvariantError::new(format!(
                    "slot {} is {} but run [{}; {}) expects it {}",
                    idx,
                    if inside { "empty" } else { "filled" },
                    start,
                    count,
                    if inside { "filled" } else { "empty" },
                )));
            }
            idx = self.advance(idx);
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns a debug snapshot of slot occupancy in index order.
    pub fn debug_snapshot_slots(&self) -> Vec<Option<&T>> {
        self.slots.iter().map(Slot::as_ref).collect()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(!self.slots.is_empty());
        assert!(self.filled_count() <= self.capacity());
    }
}
