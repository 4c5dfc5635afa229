// This is the bounded round buffer behind every MPSC channel - one lives in the
// shared state, one is kept privately by the receiver as a drain cache.

use std::mem::MaybeUninit;

/// A fixed-capacity circular buffer.
///
/// This struct does no synchronization of its own. It is exclusively owned by
/// whoever currently holds it: the channel's shared state (behind the mutex) or
/// the receiver's private scratch copy.
///
/// ### Layout:
/// - **Slots**: `capacity` uninitialised slots allocated once at construction.
/// - **Live range**: the slots `start .. start + size` (wrapping at `capacity`)
///   hold initialised values. Every other slot is logically empty.
///
/// Exchanging two buffers with [`RingBuffer::swap`] moves the boxed slot array
/// and the indices, never the elements, so it costs the same for one queued
/// item as for a full buffer.
pub struct RingBuffer<T> {
    /// Backing storage. Only the live range is initialised.
    pub(crate) slots: Box<[MaybeUninit<T>]>,

    /// Index of the oldest queued value.
    pub(crate) start: usize,

    /// Number of queued values.
    pub(crate) size: usize,

    /// The capacity of the buffer (number of slots).
    pub(crate) capacity: usize,
}
