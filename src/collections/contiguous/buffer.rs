use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

/// An owned, fixed size allocation of possibly uninitialized slots. Similar to a
/// `Box<[MaybeUninit<T>]>` that can be grown in place.
///
/// A Buffer never reads, writes or drops the values in its slots. Tracking which slots are
/// initialized is left to the owning collection. Dropping a Buffer only releases the allocation.
pub(crate) struct Buffer<T> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Allocates a new Buffer with exactly `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn new(cap: usize) -> Buffer<T> {
        let layout = Self::make_layout(cap);

        Buffer {
            ptr: Self::make_ptr(layout),
            cap,
            _phantom: PhantomData,
        }
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const().cast()
    }

    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr().cast()
    }

    /// Grows the Buffer to hold `new_cap` slots. The contents of the first [`cap`](Buffer::cap)
    /// slots are moved into the new allocation unchanged and the old allocation is released.
    ///
    /// # Panics
    /// Panics if `new_cap` is smaller than the current capacity, or if the memory layout of the
    /// new allocation would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow_to(&mut self, new_cap: usize) {
        assert!(new_cap >= self.cap, "Buffers can't be shrunk!");

        let old_layout = Self::make_layout(self.cap);
        let new_layout = Self::make_layout(new_cap);

        let new_ptr = match (old_layout.size(), new_layout.size()) {
            // Zero-sized types never need an allocation, the dangling pointer stays valid for
            // every capacity.
            (_, 0) => self.ptr,
            // Nothing to move out of, just allocate.
            (0, _) => Self::make_ptr(new_layout),
            (_, new_size) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, which has a
                // non-zero size. new_size is non-zero and has already been checked against
                // isize::MAX by Layout::array.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_size).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `cap` number
    /// of slots for `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so it can be sent between threads whenever the
// values it holds can be.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: A Buffer exposes no interior mutability, shared access only ever produces shared reads.
unsafe impl<T: Sync> Sync for Buffer<T> {}
