// This is the state shared by every handle of one channel. Senders and the
// receiver each hold an `Arc` to it; the last handle to drop frees it.

use crate::MPSC::Buffer::RingBuffer;
use parking_lot::{Condvar, Mutex};

/// Everything guarded by the channel mutex.
///
/// `producer_count` and `receiver_alive` are part of the same wait predicates
/// as the buffer, so they only change under the lock the waiters re-check.
pub(crate) struct StateInner<T> {
    /// Authoritative queue contents.
    pub(crate) buffer: RingBuffer<T>,

    /// Number of live `Sender` handles.
    pub(crate) producer_count: usize,

    /// Cleared once, when the `Receiver` drops.
    pub(crate) receiver_alive: bool,
}

/// Shared channel state: one mutex, two condition variables.
pub(crate) struct SharedState<T> {
    /// Identifier used in diagnostics only.
    pub(crate) channel_id: u64,

    /// Fixed at construction; also the capacity of the receiver's scratch buffer.
    pub(crate) capacity: usize,

    pub(crate) inner: Mutex<StateInner<T>>,

    /// Signalled when a full buffer gets drained, or when the receiver drops.
    pub(crate) space_available: Condvar,

    /// Signalled when an empty buffer gets data, or when the last sender drops.
    pub(crate) data_available: Condvar,
}

impl<T> SharedState<T> {
    pub(crate) fn new(channel_id: u64, capacity: usize) -> Self {
        Self {
            channel_id,
            capacity,
            inner: Mutex::new(StateInner {
                buffer: RingBuffer::new(capacity),
                producer_count: 1,
                receiver_alive: true,
            }),
            space_available: Condvar::new(),
            data_available: Condvar::new(),
        }
    }
}
