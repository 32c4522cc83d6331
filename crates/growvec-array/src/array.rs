//! The [`GrowableArray`] container.

use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use growvec_buffer::OwningBuffer;
use growvec_core::{AllocError, AllocMetrics, ArrayError, GrowthPolicy, PolicyError};

/// A contiguous, growable sequence of `T`.
///
/// Holds one [`OwningBuffer`] whose length is the capacity, plus the
/// logical size. Elements `[0, len)` are the sequence; `[len, capacity)`
/// are placeholders that are only ever overwritten.
///
/// Operations that may reallocate come in two forms: the plain form
/// (`push_back`, `insert`, `resize`, `reserve`) aborts on allocation
/// failure like `Vec`, and the `try_` form reports it as
/// [`ArrayError::Alloc`]. Either way, a failed reallocation leaves the
/// array unchanged.
///
/// Positional contracts (`pop_back` on a non-empty array, `insert` at
/// `index <= len`, `erase` at `index < len`) are checked by debug
/// assertions only. `self[i]` and `self[a..b]` index the logical slice and
/// panic past `len`; use [`at`](Self::at) for a checked read.
pub struct GrowableArray<T> {
    buffer: OwningBuffer<T>,
    size: usize,
    policy: GrowthPolicy,
    metrics: AllocMetrics,
}

impl<T> GrowableArray<T> {
    /// An empty array with no allocation and the default growth policy.
    pub fn new() -> Self {
        Self::from_parts(OwningBuffer::empty(), 0)
    }

    /// An empty array that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        let mut arr = Self::new();
        arr.policy = policy;
        Ok(arr)
    }

    /// An array of `size` copies of `value`; capacity equals `size`.
    pub fn from_elem(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_parts(OwningBuffer::from_fn(size, |_| value.clone()), size)
    }

    /// Adopt every element of `buffer` as the logical contents.
    pub fn from_buffer(buffer: OwningBuffer<T>) -> Self {
        let size = buffer.len();
        Self::from_parts(buffer, size)
    }

    fn from_parts(buffer: OwningBuffer<T>, size: usize) -> Self {
        debug_assert!(size <= buffer.len());
        let metrics = AllocMetrics {
            peak_capacity: buffer.len(),
            ..AllocMetrics::default()
        };
        Self {
            buffer,
            size,
            policy: GrowthPolicy::default(),
            metrics,
        }
    }

    /// Number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of elements the current allocation holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// True if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The growth policy used when the array runs out of room.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Reallocation statistics for this array.
    pub fn metrics(&self) -> &AllocMetrics {
        &self.metrics
    }

    /// The logical elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The logical elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.size]
    }

    /// Checked access: [`ArrayError::OutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        if index >= self.size {
            return Err(ArrayError::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(&self.buffer[index])
    }

    /// Checked mutable access: [`ArrayError::OutOfRange`] when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        if index >= self.size {
            return Err(ArrayError::OutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(&mut self.buffer[index])
    }

    /// Forget every element. Capacity and the buffer are kept; old
    /// values stay in place until overwritten or the array is dropped.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Drop the last element from the sequence.
    ///
    /// The array must not be empty. The value stays in its slot as a
    /// placeholder; use [`take_back`](Self::take_back) to get it out.
    pub fn pop_back(&mut self) {
        debug_assert!(self.size != 0, "pop_back on an empty array");
        self.size = self.size.saturating_sub(1);
    }

    /// Remove the element at `index`, shifting everything after it one
    /// slot to the left.
    ///
    /// `index` must be below `len()`. Returns the index now holding the
    /// element that followed the erased one, which equals `len()` when
    /// the last element was erased.
    pub fn erase(&mut self, index: usize) -> usize {
        debug_assert!(
            index < self.size,
            "erase position {index} out of range for size {}",
            self.size
        );
        // The erased value rotates into the first spare slot.
        self.buffer.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Exchange contents with `other` in constant time.
    ///
    /// Growth policy and metrics travel with the storage.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Hand the storage and the logical size back to the caller.
    pub fn into_buffer(self) -> (OwningBuffer<T>, usize) {
        (self.buffer, self.size)
    }

    /// Install `fresh` as the storage and retire the old buffer.
    fn install(&mut self, mut fresh: OwningBuffer<T>, moved: usize) {
        let old_capacity = self.capacity();
        self.buffer.swap(&mut fresh);
        self.metrics.record_reallocation(self.capacity(), moved);
        log::trace!(
            "growvec: reallocated {old_capacity} -> {} ({moved} elements moved)",
            self.capacity()
        );
    }

    fn required_for_one_more(&self) -> Result<usize, AllocError> {
        self.size
            .checked_add(1)
            .ok_or(AllocError::CapacityOverflow {
                requested: usize::MAX,
            })
    }
}

impl<T: Default> GrowableArray<T> {
    /// An array of `size` default values; capacity equals `size`.
    pub fn with_size(size: usize) -> Self {
        Self::from_parts(OwningBuffer::new(size), size)
    }

    /// An empty array with exactly `capacity` slots allocated up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(OwningBuffer::new(capacity), 0)
    }

    /// Move the logical elements into a new buffer of `new_capacity`.
    ///
    /// The new buffer is fully built before anything is moved, so a
    /// failure here leaves `self` untouched.
    fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(new_capacity >= self.size);
        let size = self.size;
        let mut fresh = OwningBuffer::try_new(new_capacity)?;
        fresh.as_mut_slice()[..size].swap_with_slice(&mut self.buffer.as_mut_slice()[..size]);
        self.install(fresh, size);
        Ok(())
    }

    /// Ensure capacity of at least `new_capacity`, allocating exactly that
    /// much if the current buffer is smaller. Does not change `len()`.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity > self.capacity() {
            self.try_reallocate(new_capacity)?;
        }
        Ok(())
    }

    /// Infallible form of [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            abort_on(err);
        }
    }

    /// Set the logical size to `new_size`.
    ///
    /// Shrinking only moves the logical end. Growing within capacity
    /// default-fills the newly exposed slots. Growing past capacity
    /// reallocates to `max(new_size, 2 × capacity)`.
    pub fn try_resize(&mut self, new_size: usize) -> Result<(), ArrayError> {
        if new_size <= self.size {
            self.size = new_size;
            return Ok(());
        }
        if new_size <= self.capacity() {
            for slot in &mut self.buffer.as_mut_slice()[self.size..new_size] {
                *slot = T::default();
            }
        } else {
            let new_capacity = self.policy.grown_capacity(self.capacity(), new_size);
            // Slots past the old size arrive default-filled.
            self.try_reallocate(new_capacity)?;
        }
        self.size = new_size;
        Ok(())
    }

    /// Infallible form of [`try_resize`](Self::try_resize).
    pub fn resize(&mut self, new_size: usize) {
        if let Err(err) = self.try_resize(new_size) {
            abort_on(err);
        }
    }

    /// Append `value`, growing to `max(len + 1, 2 × capacity)` when full.
    ///
    /// On failure `value` is dropped and the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ArrayError> {
        let required = self.required_for_one_more()?;
        if required > self.capacity() {
            let new_capacity = self.policy.grown_capacity(self.capacity(), required);
            self.try_reallocate(new_capacity)?;
        }
        self.buffer[self.size] = value;
        self.size = required;
        Ok(())
    }

    /// Infallible form of [`try_push_back`](Self::try_push_back).
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            abort_on(err);
        }
    }

    /// Insert `value` before the element at `index`; `index == len()`
    /// appends.
    ///
    /// `index` must not exceed `len()`. Returns the index of the inserted
    /// element. When a reallocation is needed the prefix, the new value
    /// and the suffix are moved straight into the new buffer.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, ArrayError> {
        debug_assert!(
            index <= self.size,
            "insert position {index} out of range for size {}",
            self.size
        );
        let size = self.size;
        let required = self.required_for_one_more()?;
        if required <= self.capacity() {
            let window = &mut self.buffer.as_mut_slice()[index..required];
            window.rotate_right(1);
            window[0] = value;
        } else {
            let new_capacity = self.policy.grown_capacity(self.capacity(), required);
            let mut fresh = OwningBuffer::try_new(new_capacity)?;
            let old = &mut self.buffer.as_mut_slice()[..size];
            let new = fresh.as_mut_slice();
            new[..index].swap_with_slice(&mut old[..index]);
            new[index] = value;
            new[index + 1..required].swap_with_slice(&mut old[index..]);
            self.install(fresh, size);
        }
        self.size = required;
        Ok(index)
    }

    /// Infallible form of [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).unwrap_or_else(|err| abort_on(err))
    }

    /// Remove and return the last element, or `None` if empty.
    ///
    /// A default placeholder is left in the vacated slot.
    pub fn take_back(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        Some(mem::take(&mut self.buffer[self.size]))
    }

    /// Erase the element at `index` and return it.
    ///
    /// `index` must be below `len()`.
    pub fn remove(&mut self, index: usize) -> T {
        self.erase(index);
        mem::take(&mut self.buffer[self.size])
    }
}

fn abort_on(err: ArrayError) -> ! {
    match err {
        ArrayError::Alloc(alloc) => alloc.handle(),
        ArrayError::OutOfRange { .. } => unreachable!("reallocation never reports {err}"),
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Deep copy whose capacity equals the source's logical size.
    fn clone(&self) -> Self {
        let source = self.as_slice();
        let mut copy = Self::from_parts(
            OwningBuffer::from_fn(source.len(), |i| source[i].clone()),
            source.len(),
        );
        copy.policy = self.policy;
        copy
    }

    /// Copy-and-swap: `self` is only replaced once the copy is complete.
    ///
    /// The target keeps its own growth policy and allocation history;
    /// the copied buffer counts towards its peak capacity.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        copy.policy = self.policy;
        self.swap(&mut copy);
        mem::swap(&mut self.metrics, &mut copy.metrics);
        self.metrics.peak_capacity = self.metrics.peak_capacity.max(self.capacity());
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Indexing by position or range over the logical elements, as on a
/// slice. `index < len()` is the caller's contract; an index in
/// `[len, capacity)` panics like any out-of-bounds slice access.
impl<T, I: SliceIndex<[T]>> Index<I> for GrowableArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowableArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_buffer(OwningBuffer::from(values))
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}
