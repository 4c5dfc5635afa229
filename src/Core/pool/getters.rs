use super::*;
use std::sync::atomic::Ordering;

/// Getter methods for Pool
///
/// The counts are loaded with relaxed ordering since they are used for
/// monitoring; under concurrent `get`/drop they are a snapshot, and
/// `slots_taken() + slots_free()` only adds up to `capacity()` once the pool
/// is quiescent.
impl<T> Pool<T> {
    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    /// Number of slots currently holding a value.
    pub fn slots_taken(&self) -> usize {
        self.shared.taken.load(Ordering::Relaxed)
    }

    /// Number of slots available to `get`.
    pub fn slots_free(&self) -> usize {
        self.shared.capacity.saturating_sub(self.slots_taken())
    }
}
