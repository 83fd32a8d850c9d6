use std::cell::Cell;

/// A counter that can be bumped through a shared reference.
///
/// Used for operations that take `&self` on the queue (`peek`, `contains`).
/// `Cell` keeps the owning queue `Send` but not `Sync`, matching the queue's
/// single-owner access model.
#[repr(transparent)]
#[derive(Debug, Default, Clone)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}
