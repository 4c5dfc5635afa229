use super::{Receiver, Sender};

/// Getter methods on the channel handles.
///
/// The counters are read under the channel mutex, so each value is exact at
/// the moment of the call and may be stale by the time the caller looks at it.
/// They are meant for monitoring, tests and `Debug` output.
impl<T> Sender<T> {
    /// Identifier of the channel this sender belongs to.
    pub fn channel_id(&self) -> u64 {
        self.shared.channel_id
    }

    /// Maximum number of values the channel queues.
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    /// Number of values currently queued in the shared buffer.
    ///
    /// Values already moved into the receiver's private buffer are not counted.
    pub fn len(&self) -> usize {
        self.shared.inner.lock().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live senders, this one included.
    pub fn producer_count(&self) -> usize {
        self.shared.inner.lock().producer_count
    }

    /// Check whether the receiver still exists.
    ///
    /// Once this returns `false` every send returns `0`/`false` immediately.
    pub fn is_receiver_alive(&self) -> bool {
        self.shared.inner.lock().receiver_alive
    }
}

impl<T> Receiver<T> {
    /// Identifier of the channel this receiver belongs to.
    pub fn channel_id(&self) -> u64 {
        self.shared.channel_id
    }

    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    /// Values already taken from the channel and waiting in the private buffer.
    pub fn buffered(&self) -> usize {
        self.local.len()
    }

    /// Number of live senders.
    pub fn producer_count(&self) -> usize {
        self.shared.inner.lock().producer_count
    }

    /// Check whether every sender is gone.
    ///
    /// Values may still be queued; `receive` keeps returning them until the
    /// channel is drained.
    pub fn is_closed(&self) -> bool {
        self.producer_count() == 0
    }
}
