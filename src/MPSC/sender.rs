// In src/MPSC/sender.rs
use crate::MPSC::Structs::Shared_State::SharedState;
use std::collections::VecDeque;
use std::sync::Arc;

/// A producer handle for a bounded MPSC channel.
///
/// Senders are cheap to clone; every clone counts as one more live producer.
/// When the last one drops, a receiver blocked on an empty channel wakes up
/// and observes the channel as closed.
pub struct Sender<T> {
    pub(crate) shared: Arc<SharedState<T>>,
}

impl<T> Sender<T> {
    pub(crate) fn new(shared: Arc<SharedState<T>>) -> Self {
        // The state starts with `producer_count == 1`, which accounts for this handle.
        Self { shared }
    }

    /// Move up to `count` values produced by `items` into the shared buffer.
    ///
    /// Waits at most once: while the buffer is full and the receiver is alive.
    /// After that it fills whatever space is free and returns, even if fewer
    /// than `count` values fit. `items` is only pulled while there is room.
    fn enqueue<I>(&self, count: usize, items: &mut I) -> usize
    where
        I: Iterator<Item = T>,
    {
        if count == 0 {
            return 0;
        }

        let shared = &*self.shared;
        let mut state = shared.inner.lock();

        if state.receiver_alive && state.buffer.is_full() {
            log::trace!("channel {}: sender blocked, buffer full", shared.channel_id);
            while state.receiver_alive && state.buffer.is_full() {
                shared.space_available.wait(&mut state);
            }
        }

        if !state.receiver_alive {
            return 0;
        }

        let was_empty = state.buffer.is_empty();
        let mut sent = 0;
        while sent != count && !state.buffer.is_full() {
            match items.next() {
                Some(value) => {
                    state.buffer.push(value);
                    sent += 1;
                }
                None => break,
            }
        }

        if was_empty && sent > 0 {
            shared.data_available.notify_one();
        }

        sent
    }

    /// Send up to `count` values from the front of `items`, as many as currently fit.
    ///
    /// Blocks while the channel is full and the receiver is alive, but only
    /// once per call: the call takes whatever space is free after that wait.
    ///
    /// # Arguments
    /// * `items` - Values to send. Accepted values are removed from the front;
    ///   the rest stay in place, in order. A `Vec` converts with
    ///   `VecDeque::from` without copying its elements.
    /// * `count` - How many values from the front of `items` to offer. Capped
    ///   at `items.len()`.
    ///
    /// # Returns
    /// * The number of values accepted, at most `count`. `0` means the receiver
    ///   has been dropped (or there was nothing to send).
    pub fn send_batch(&self, items: &mut VecDeque<T>, count: usize) -> usize {
        let count = count.min(items.len());
        self.enqueue(count, &mut std::iter::from_fn(|| items.pop_front()))
    }

    /// Send every value in `items`, blocking across as many refill cycles as needed.
    ///
    /// Stops early only if the receiver is dropped; the unsent values are then
    /// left in `items`.
    ///
    /// # Returns
    /// * The total number of values sent.
    pub fn send_all(&self, items: &mut VecDeque<T>) -> usize {
        let mut sent = 0;
        while !items.is_empty() {
            let pending = items.len();
            let accepted = self.send_batch(items, pending);
            if accepted == 0 {
                return sent;
            }
            sent += accepted;
        }
        sent
    }

    /// Sends a single value through the channel.
    ///
    /// # Returns
    /// * `true` if the value was queued
    /// * `false` if the receiver has terminated; the value is dropped
    pub fn send_one(&self, value: T) -> bool {
        self.enqueue(1, &mut std::iter::once(value)) == 1
    }

    /// Send every value yielded by `items`, in order.
    ///
    /// Values are staged locally, at most one channel capacity at a time, and
    /// handed to [`send_all`](Self::send_all). Returns the number sent; it is
    /// short of the iterator's length only if the receiver was dropped.
    pub fn send_iter<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let capacity = self.shared.capacity;
        let mut pending = VecDeque::with_capacity(capacity);
        let mut sent = 0;

        for value in items {
            pending.push_back(value);
            if pending.len() == capacity {
                sent += self.send_all(&mut pending);
                if !pending.is_empty() {
                    return sent;
                }
            }
        }

        sent + self.send_all(&mut pending)
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        self.shared.inner.lock().producer_count += 1;
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        let shared = &*self.shared;
        let mut state = shared.inner.lock();
        state.producer_count -= 1;
        let last = state.producer_count == 0;
        if last {
            shared.data_available.notify_one();
        }
        drop(state);

        if last {
            log::debug!("channel {}: last sender dropped", shared.channel_id);
        }
    }
}
