use std::mem::{self, MaybeUninit};

use super::Buffer::RingBuffer;

impl<T> RingBuffer<T> {
    /// Create an empty ring buffer with room for `capacity` values.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RingBuffer capacity must be greater than zero");

        let slots: Box<[MaybeUninit<T>]> = std::iter::repeat_with(MaybeUninit::uninit)
            .take(capacity)
            .collect();

        Self {
            slots,
            start: 0,
            size: 0,
            capacity,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Number of values currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a value at the back.
    ///
    /// # Panics
    /// Panics if the buffer is full. Callers check [`is_full`](Self::is_full) first.
    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(!self.is_full(), "push on a full RingBuffer");

        let end = (self.start + self.size) % self.capacity;
        self.slots[end].write(value);
        self.size += 1;
    }

    /// Remove the value at the front.
    ///
    /// # Panics
    /// Panics if the buffer is empty. Callers check [`is_empty`](Self::is_empty) first.
    #[inline]
    pub fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "pop on an empty RingBuffer");

        // Safety: `start` is inside the live range, so the slot is initialised,
        // and advancing `start` below marks it empty again so it is read once.
        let value = unsafe { self.slots[self.start].assume_init_read() };
        self.start = (self.start + 1) % self.capacity;
        self.size -= 1;
        value
    }

    /// Exchange storage and indices with `other` in O(1).
    ///
    /// Both buffers must have been created with the same capacity.
    #[inline]
    pub fn swap(&mut self, other: &mut RingBuffer<T>) {
        debug_assert_eq!(
            self.capacity, other.capacity,
            "swapping RingBuffers of different capacity"
        );
        mem::swap(self, other);
    }

    /// Drop every queued value, leaving the buffer empty.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            drop(self.pop());
        }
        self.start = 0;
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        if mem::needs_drop::<T>() {
            self.clear();
        }
    }
}
