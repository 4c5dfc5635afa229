// src/MPSC/receiver.rs

use crate::MPSC::Buffer::RingBuffer;
use crate::MPSC::Structs::Shared_State::SharedState;
use std::sync::Arc;

/// The consumer handle for a bounded MPSC channel.
///
/// There is exactly one receiver per channel and it cannot be cloned. It keeps
/// a private ring buffer of the same capacity as the channel: each time it runs
/// dry, the receiver trades it (empty) for the shared buffer (full of queued
/// values) under the lock, then hands the values out one by one without
/// touching the lock again.
pub struct Receiver<T> {
    pub(crate) shared: Arc<SharedState<T>>,
    pub(crate) local: RingBuffer<T>,
    pub(crate) closed: bool,
}

impl<T> Receiver<T> {
    pub(crate) fn new(shared: Arc<SharedState<T>>) -> Self {
        let local = RingBuffer::new(shared.capacity);
        Self {
            shared,
            local,
            closed: false,
        }
    }

    /// Receives the next value, blocking until one is available or every sender is gone.
    ///
    /// # Returns
    /// * `Some(value)` in the order values were queued
    /// * `None` once all senders have been dropped and nothing is left; every
    ///   later call returns `None` again without blocking
    pub fn receive(&mut self) -> Option<T> {
        if !self.local.is_empty() {
            return Some(self.local.pop());
        }

        let shared = &*self.shared;
        let mut state = shared.inner.lock();

        if state.buffer.is_empty() && state.producer_count > 0 {
            log::trace!("channel {}: receiver blocked, buffer empty", shared.channel_id);
            while state.buffer.is_empty() && state.producer_count > 0 {
                shared.data_available.wait(&mut state);
            }
        }

        let was_full = state.buffer.is_full();
        state.buffer.swap(&mut self.local);
        if was_full {
            shared.space_available.notify_all();
        }
        drop(state);

        if !self.local.is_empty() {
            return Some(self.local.pop());
        }

        if !self.closed {
            self.closed = true;
            log::debug!("channel {}: closed and drained", shared.channel_id);
        }
        None
    }

    /// Borrowing iterator over received values; ends when the channel is closed and drained.
    pub fn iter(&mut self) -> Iter<'_, T> {
        Iter { receiver: self }
    }
}

impl<T> Iterator for Receiver<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receive()
    }
}

/// Iterator returned by [`Receiver::iter`].
pub struct Iter<'a, T> {
    receiver: &'a mut Receiver<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.receive()
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        let shared = &*self.shared;
        let mut state = shared.inner.lock();
        state.receiver_alive = false;
        shared.space_available.notify_all();
        drop(state);

        // Logged after unlocking: a log backend may itself use this channel.
        log::debug!("channel {}: receiver dropped", shared.channel_id);
    }
}
