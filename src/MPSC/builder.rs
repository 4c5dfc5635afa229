use super::{Receiver, Sender};
use crate::MPSC::Structs::Shared_State::SharedState;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Source of default channel IDs.
static NEXT_CHANNEL_ID: AtomicU64 = AtomicU64::new(0);

pub struct ChannelBuilder {
    capacity: usize,
    channel_id: Option<u64>,
}

impl Default for ChannelBuilder {
    fn default() -> Self {
        Self {
            capacity: 1024, // 1024 slots
            channel_id: None, // Next free ID
        }
    }
}

impl ChannelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Label the channel in log lines and `Debug` output.
    pub fn with_channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    /// Create the channel and return its only receiver and its first sender.
    pub fn build<T>(self) -> io::Result<(Sender<T>, Receiver<T>)> {
        if self.capacity == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Channel capacity must be greater than zero",
            ));
        }

        let channel_id = self
            .channel_id
            .unwrap_or_else(|| NEXT_CHANNEL_ID.fetch_add(1, Ordering::Relaxed));

        let shared = Arc::new(SharedState::new(channel_id, self.capacity));
        log::debug!("channel {}: created with capacity {}", channel_id, self.capacity);

        Ok((Sender::new(Arc::clone(&shared)), Receiver::new(shared)))
    }
}
