use std::fmt;
use crate::Core::pool::Pool;
use crate::MPSC::Buffer::RingBuffer;
use crate::MPSC::{Receiver, Sender};

/// Debug function for Sender
///
/// Shows:
/// - Channel ID and capacity
/// - Queued length, producer count and receiver liveness, if the channel
///   lock is free right now
///
/// Never blocks: formatting a sender while another thread holds the lock
/// prints `<locked>` instead of waiting.
pub fn debug_sender<T>(sender: &Sender<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("Sender");
    s.field("channel_id", &sender.shared.channel_id)
        .field("capacity", &sender.shared.capacity);

    match sender.shared.inner.try_lock() {
        Some(state) => s
            .field("len", &state.buffer.len())
            .field("producer_count", &state.producer_count)
            .field("receiver_alive", &state.receiver_alive)
            .finish(),
        None => s.field("state", &"<locked>").finish(),
    }
}

/// Debug function for Receiver
///
/// Shows:
/// - Channel ID and capacity
/// - Values waiting in the private buffer
/// - Whether the receiver has already observed the channel closed
pub fn debug_receiver<T>(receiver: &Receiver<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Receiver")
        .field("channel_id", &receiver.shared.channel_id)
        .field("capacity", &receiver.shared.capacity)
        .field("buffered", &receiver.local.len())
        .field("closed", &receiver.closed)
        .finish()
}

/// Debug function for RingBuffer
///
/// Displays indices and the storage location without touching the elements
pub fn debug_ring_buffer<T>(buffer: &RingBuffer<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RingBuffer")
        .field("slots", &format_args!("{:p}", buffer.slots.as_ptr()))
        .field("start", &buffer.start)
        .field("size", &buffer.size)
        .field("capacity", &buffer.capacity)
        .finish()
}

/// Debug function for Pool
pub fn debug_pool<T>(pool: &Pool<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pool")
        .field("capacity", &pool.capacity())
        .field("slots_taken", &pool.slots_taken())
        .field("slots_free", &pool.slots_free())
        .finish()
}

/// Debug function for PoolPtr: transparent over the pooled value
pub fn debug_pool_ptr<T: fmt::Debug>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("PoolPtr").field(value).finish()
}
