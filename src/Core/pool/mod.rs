use crossbeam_utils::CachePadded;
use std::io;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
mod debug;
mod getters;

// Use parking_lot's Mutex for better performance
use parking_lot::Mutex;

type Slot<T> = Box<MaybeUninit<T>>;

/// Storage shared by a pool and every handle it has given out.
pub(crate) struct PoolShared<T> {
    /// Uninitialised slots ready to be handed out (LIFO).
    free: Mutex<Vec<Slot<T>>>,
    /// Total number of slots, fixed at construction.
    capacity: usize,
    /// Slots currently holding a live value.
    taken: CachePadded<AtomicUsize>,
}

/// A fixed-size object pool.
///
/// All slots are allocated up front by [`Pool::new`]; `get` and the release on
/// drop only move a slot between the free list and a [`PoolPtr`], so a caller
/// can preallocate channel payloads and recycle them without touching the heap
/// allocator on the hot path.
///
/// Cloning a `Pool` gives another handle to the same slots.
pub struct Pool<T> {
    pub(crate) shared: Arc<PoolShared<T>>,
}

/// RAII handle to a value stored in a [`Pool`] slot.
///
/// Dropping it drops the value and puts the slot back on the free list.
pub struct PoolPtr<T> {
    value: ManuallyDrop<Box<T>>,
    pool: Arc<PoolShared<T>>,
}

impl<T> Pool<T> {
    /// Create a pool with `capacity` preallocated slots.
    pub fn new(capacity: usize) -> io::Result<Self> {
        if capacity == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Pool capacity must be greater than zero",
            ));
        }

        let free: Vec<Slot<T>> = (0..capacity).map(|_| Box::new(MaybeUninit::uninit())).collect();

        Ok(Self {
            shared: Arc::new(PoolShared {
                free: Mutex::new(free),
                capacity,
                taken: CachePadded::new(AtomicUsize::new(0)),
            }),
        })
    }

    /// Move `value` into a free slot.
    ///
    /// # Returns
    /// * `Some(ptr)` owning the stored value
    /// * `None` if every slot is taken; `value` is dropped
    pub fn get(&self, value: T) -> Option<PoolPtr<T>> {
        let slot = self.shared.free.lock().pop()?;
        self.shared.taken.fetch_add(1, Ordering::Relaxed);

        Some(PoolPtr {
            value: ManuallyDrop::new(Box::write(slot, value)),
            pool: Arc::clone(&self.shared),
        })
    }
}

impl<T> Clone for Pool<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> PoolShared<T> {
    fn put(&self, slot: Slot<T>) {
        // Decrement first so `taken` never exceeds `capacity` when the slot is
        // popped again before this thread gets back here.
        self.taken.fetch_sub(1, Ordering::Relaxed);
        self.free.lock().push(slot);
    }
}

impl<T> PoolPtr<T> {
    /// Move the value out and return the slot to the pool.
    pub fn into_inner(self) -> T {
        let mut this = ManuallyDrop::new(self);
        // Safety: `this` is never dropped, so the box and the pool handle are
        // each taken out exactly once.
        let (boxed, pool) = unsafe {
            (
                ManuallyDrop::take(&mut this.value),
                ptr::read(&this.pool),
            )
        };

        let raw = Box::into_raw(boxed);
        // Safety: `raw` came from `Box::into_raw` and holds an initialised `T`.
        // After the read the memory is logically uninitialised again, which is
        // exactly what a free slot holds.
        let (value, slot) = unsafe { (ptr::read(raw), Box::from_raw(raw.cast::<MaybeUninit<T>>())) };
        pool.put(slot);
        value
    }
}

impl<T> Deref for PoolPtr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for PoolPtr<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Drop for PoolPtr<T> {
    fn drop(&mut self) {
        // Safety: `value` is not used again after this point.
        let boxed = unsafe { ManuallyDrop::take(&mut self.value) };
        let raw = Box::into_raw(boxed);
        // Safety: the value is dropped in place once, then the allocation is
        // reinterpreted as an uninitialised slot of the same layout.
        let slot = unsafe {
            ptr::drop_in_place(raw);
            Box::from_raw(raw.cast::<MaybeUninit<T>>())
        };
        self.pool.put(slot);
    }
}
