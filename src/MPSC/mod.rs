mod builder;
mod debug;
mod getters;
mod receiver;
mod sender;

pub use builder::ChannelBuilder;
pub use receiver::{Iter, Receiver};
pub use sender::Sender;

pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub use Buffer::RingBuffer; // re-export for stable path
}

pub mod Structs {
    pub(crate) mod Shared_State;
}

/// Create a bounded channel holding at most `capacity` queued values.
///
/// # Panics
/// Panics if `capacity` is zero. Use [`ChannelBuilder`] to get an error instead.
pub fn channel<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    ChannelBuilder::new()
        .with_capacity(capacity)
        .build()
        .unwrap_or_else(|e| panic!("{e}"))
}
