use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Range};
use std::ptr;
use std::slice;

use tracing::trace;

use super::{Access, OutOfRange};
use crate::collections::contiguous::buffer::Buffer;

/// The capacity of a newly created [`DynamicArray`].
pub const DEFAULT_CAP: usize = 10;

/// The number of slots added to a [`DynamicArray`] each time it runs out of capacity.
pub const GROWTH_CHUNK: usize = 10;

/// A variable size contiguous collection, backed by a single owned allocation.
///
/// Unlike [`Vec`], a DynamicArray starts with room for [`DEFAULT_CAP`] elements and grows
/// linearly, adding [`GROWTH_CHUNK`] slots each time it is full. Capacity is never released
/// until the DynamicArray is dropped.
///
/// Positional access comes in two flavors: the checked methods ([`front`](DynamicArray::front),
/// [`back`](DynamicArray::back), [`at`](DynamicArray::at), [`pop_back`](DynamicArray::pop_back)
/// and [`erase`](DynamicArray::erase)) return an [`OutOfRange`] error for positions without an
/// element, while [`index_unchecked`](DynamicArray::index_unchecked) and
/// [`insert_unchecked`](DynamicArray::insert_unchecked) leave validation to the caller.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `front` / `back` / `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)`, `O(n)`* |
/// | `erase` | `O(n-i)` |
/// | `clear` | `O(n)`** |
///
/// \* When the DynamicArray is full, the elements are moved to a larger allocation first. Since
/// growth is linear, pushing `n` elements costs `O(n²)` in total rather than the amortized `O(n)`
/// of a doubling strategy.
///
/// \** Only to drop the elements, `O(1)` for types without drop glue.
pub struct DynamicArray<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new, empty DynamicArray with capacity [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn new() -> DynamicArray<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty DynamicArray with capacity exactly equal to the provided value,
    /// allowing values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(3);
    /// arr.extend([1, 2, 3]);
    /// assert_eq!(arr.cap(), 3);
    /// arr.push_back(4);
    /// assert_eq!(arr.cap(), 13);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            buf: Buffer::new(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// assert!(arr.is_empty());
    /// arr.push_back(1);
    /// assert!(!arr.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated, which is always at least
    /// [`len`](DynamicArray::len). Capacity doesn't take part in equality.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`OutOfRange::EmptyArray`] if the DynamicArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from([7, 8, 9]);
    /// assert_eq!(arr.front(), Ok(&7));
    /// assert!(DynamicArray::<u8>::new().front().is_err());
    /// ```
    pub fn front(&self) -> Result<&T, OutOfRange> {
        self.first().ok_or(OutOfRange::EmptyArray { op: Access::Front })
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`OutOfRange::EmptyArray`] if the DynamicArray is empty.
    pub fn back(&self) -> Result<&T, OutOfRange> {
        self.last().ok_or(OutOfRange::EmptyArray { op: Access::Back })
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    /// Returns [`OutOfRange::PastEnd`] if `pos` is not less than the length.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let arr = DynamicArray::from(['a', 'b']);
    /// assert_eq!(arr.at(1), Ok(&'b'));
    /// assert_eq!(
    ///     arr.at(2).unwrap_err().to_string(),
    ///     "at index 2 out of range for DynamicArray with 2 elements"
    /// );
    /// ```
    pub fn at(&self, pos: usize) -> Result<&T, OutOfRange> {
        self.get(pos).ok_or(OutOfRange::PastEnd {
            op: Access::At,
            index: pos,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the element at `pos`, without any bounds checking. This is
    /// the fast counterpart of [`at`](DynamicArray::at).
    ///
    /// # Safety
    /// `pos` must be less than [`len`](DynamicArray::len). Calling this method with any other
    /// position is undefined behavior, even if the position is within the capacity.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3]);
    /// // SAFETY: 1 < arr.len()
    /// unsafe { *arr.index_unchecked(1) = 20; }
    /// assert_eq!(&*arr, &[1, 20, 3]);
    /// ```
    pub unsafe fn index_unchecked(&mut self, pos: usize) -> &mut T {
        // SAFETY: The caller guarantees that pos < len, so the slot is within the allocation and
        // initialized. The returned reference borrows self mutably, preventing any aliasing.
        unsafe { &mut *self.buf.as_mut_ptr().add(pos) }
    }

    /// Appends `item` after the last element, growing the DynamicArray first if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// for i in 0..11 {
    ///     arr.push_back(i);
    /// }
    /// assert_eq!(arr.len(), 11);
    /// assert_eq!(arr.cap(), 20);
    /// ```
    pub fn push_back(&mut self, item: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(item) }
    }

    /// Appends `item` after the last element, assuming that there is enough capacity to do so.
    ///
    /// # Safety
    /// The DynamicArray must have at least one unused slot (`len() < cap()`). Using this method on
    /// a full DynamicArray is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, item: T) {
        // SAFETY: It is up to the caller to ensure that len < cap, so the write is within the
        // allocation and doesn't overwrite an initialized value.
        unsafe { self.buf.as_mut_ptr().add(self.len).write(item) }
        self.len += 1;
    }

    /// Removes the last element and returns it. The capacity is unchanged.
    ///
    /// # Errors
    /// Returns [`OutOfRange::EmptyArray`] if the DynamicArray is empty.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2]);
    /// assert_eq!(arr.pop_back(), Ok(2));
    /// assert_eq!(arr.pop_back(), Ok(1));
    /// assert!(arr.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, OutOfRange> {
        if self.len == 0 {
            return Err(OutOfRange::EmptyArray { op: Access::PopBack });
        }

        // Decrement len before reading, the slot is no longer logically present.
        self.len -= 1;

        // SAFETY: The old len was > 0, so the slot at the new len is within the allocation and
        // initialized. It is now outside of the logical range and won't be read or dropped again.
        Ok(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Removes the element at `pos` and returns it, moving all following elements one position to
    /// the left to close the gap.
    ///
    /// # Errors
    /// Returns [`OutOfRange::PastEnd`] if `pos` is not less than the length.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello".chars().collect();
    /// assert_eq!(arr.erase(1), Ok('e'));
    /// assert_eq!(arr, "Hllo".chars().collect());
    /// assert!(arr.erase(4).is_err());
    /// ```
    pub fn erase(&mut self, pos: usize) -> Result<T, OutOfRange> {
        if pos >= self.len {
            return Err(OutOfRange::PastEnd {
                op: Access::Erase,
                index: pos,
                len: self.len,
            });
        }

        // SAFETY: pos < len, so the removed slot is initialized and the len - pos - 1 following
        // slots are initialized and within the allocation. ptr::copy handles the overlap. After
        // the copy, the last logical slot holds a stale duplicate which is excluded by
        // decrementing len.
        let value = unsafe {
            let slot = self.buf.as_mut_ptr().add(pos);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - pos - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Inserts `item` at `pos`, moving all elements from `pos` onwards one position to the right.
    /// Inserting at `pos == len()` appends.
    ///
    /// Positions are not validated as part of the checked API, so this method never returns an
    /// [`OutOfRange`] error. Passing a position past the end is a contract violation.
    ///
    /// # Panics
    /// Panics if `pos > len()`, or if the memory layout of the DynamicArray would have a size that
    /// exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3]);
    /// arr.insert(1, 99);
    /// arr.insert(4, 100);
    /// assert_eq!(&*arr, &[1, 99, 2, 3, 100]);
    /// ```
    pub fn insert(&mut self, pos: usize, item: T) {
        assert!(
            pos <= self.len,
            "Insertion position {} is past the end of a DynamicArray with {} elements!",
            pos,
            self.len,
        );

        // SAFETY: pos <= len has just been asserted.
        unsafe { self.insert_unchecked(pos, item) }
    }

    /// Inserts `item` at `pos` without any validation of `pos`, growing the DynamicArray first if
    /// it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Safety
    /// `pos` must be less than or equal to [`len`](DynamicArray::len). Calling this method with any
    /// other position is undefined behavior.
    pub unsafe fn insert_unchecked(&mut self, pos: usize, item: T) {
        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: The caller guarantees pos <= len, and len < cap after growing, so the slots from
        // pos to len (inclusive) are all within the allocation. ptr::copy handles the overlap and
        // the slot at pos is overwritten without dropping its stale duplicate.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(pos);
            ptr::copy(slot, slot.add(1), self.len - pos);
            slot.write(item);
        }

        self.len += 1;
    }

    /// Removes all elements, dropping them in place. The capacity and allocation are retained.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([1, 2, 3]);
    /// arr.clear();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.cap(), 10);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        // Set len first, so that a panicking drop can't lead to a double drop.
        self.len = 0;

        // SAFETY: The first len slots were initialized and are now outside of the logical range,
        // so they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), len));
        }
    }

    /// Returns the begin and end cursors of the logical elements, as a half-open pointer range.
    ///
    /// When the DynamicArray is empty both ends are null, so the range is always empty and safe to
    /// compare. The pointers are invalidated by any mutation, including growth.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u32> = DynamicArray::new();
    /// let range = arr.ptr_range();
    /// assert!(range.start.is_null());
    /// assert_eq!(range.start, range.end);
    ///
    /// arr.extend([1, 2, 3]);
    /// let range = arr.ptr_range();
    /// assert_eq!(range.end as usize - range.start as usize, 3 * size_of::<u32>());
    /// ```
    pub fn ptr_range(&self) -> Range<*const T> {
        if self.len == 0 {
            ptr::null()..ptr::null()
        } else {
            let start = self.buf.as_ptr();
            // SAFETY: len <= cap, so one past the last element is at most one past the end of the
            // allocation.
            start..unsafe { start.add(self.len) }
        }
    }

    /// Grows the backing buffer by [`GROWTH_CHUNK`] slots, moving all elements to the new
    /// allocation in order.
    ///
    /// # Panics
    /// Panics if the new capacity overflows, or if the memory layout of the DynamicArray would
    /// have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let old_cap = self.cap();
        let new_cap = old_cap.checked_add(GROWTH_CHUNK).expect("Capacity overflow!");

        trace!(old_cap, new_cap, len = self.len, "growing DynamicArray");

        self.buf.grow_to(new_cap);
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop the logical elements, the buffer deallocates itself afterwards.
        self.clear();
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, properly aligned and contained within a
        // single allocation (or dangling for len 0 / zero-sized types). The borrow checker
        // prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the unique borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep-copies every element into a new allocation with the same capacity as `self`.
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: arr has the same capacity as self, so it can hold all of self's elements.
            unsafe { arr.push_unchecked(value.clone()) }
        }

        arr
    }

    /// Replaces the contents of `self` with deep copies of the elements of `source`. Afterwards,
    /// `self` has the same capacity as `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();

        if self.cap() != source.cap() {
            self.buf = Buffer::new(source.cap());
        }

        for value in source.iter() {
            // SAFETY: self has just been emptied and has the same capacity as source.
            unsafe { self.push_unchecked(value.clone()) }
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
