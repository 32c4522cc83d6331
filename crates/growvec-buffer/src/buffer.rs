//! The [`OwningBuffer`] type.

use std::alloc::Layout;
use std::ops::{Index, IndexMut};

use growvec_core::AllocError;

/// A single heap allocation of a fixed number of `T`, or nothing.
///
/// Every slot always holds a valid `T`: construction either default-fills
/// the storage or adopts an already-initialised boxed slice. The storage
/// is freed once, when the buffer is dropped, unless it was handed out
/// with [`release`](OwningBuffer::release) first.
#[derive(Debug)]
pub struct OwningBuffer<T> {
    /// `None` iff the buffer has zero length.
    data: Option<Box<[T]>>,
}

impl<T> OwningBuffer<T> {
    /// A buffer that owns no allocation.
    pub const fn empty() -> Self {
        Self { data: None }
    }

    /// Allocate `count` elements, building slot `i` with `fill(i)`.
    ///
    /// `count == 0` allocates nothing. If `fill` panics, the partially
    /// built storage is dropped and nothing leaks.
    pub fn try_from_fn<F>(count: usize, fill: F) -> Result<Self, AllocError>
    where
        F: FnMut(usize) -> T,
    {
        if count == 0 {
            return Ok(Self::empty());
        }
        let layout = Layout::array::<T>(count)
            .map_err(|_| AllocError::CapacityOverflow { requested: count })?;
        let mut data = Vec::new();
        data.try_reserve_exact(count)
            .map_err(|_| AllocError::OutOfMemory { layout })?;
        data.extend((0..count).map(fill));
        Ok(Self {
            data: Some(data.into_boxed_slice()),
        })
    }

    /// Infallible form of [`try_from_fn`](Self::try_from_fn).
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through
    /// [`std::alloc::handle_alloc_error`] if the allocator refuses.
    pub fn from_fn<F>(count: usize, fill: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::try_from_fn(count, fill).unwrap_or_else(|err| err.handle())
    }

    /// Adopt an existing boxed slice. An empty slice yields an empty buffer.
    pub fn from_boxed(data: Box<[T]>) -> Self {
        if data.is_empty() {
            Self::empty()
        } else {
            Self { data: Some(data) }
        }
    }

    /// Number of elements in the allocation (its physical extent).
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    /// True if the buffer has zero length.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// True if the buffer currently owns an allocation.
    pub fn is_allocated(&self) -> bool {
        self.data.is_some()
    }

    /// The whole allocation as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }

    /// The whole allocation as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_deref_mut().unwrap_or(&mut [])
    }

    /// Give up ownership of the storage without freeing it.
    ///
    /// The buffer is left empty; dropping it afterwards is a no-op.
    #[must_use = "released storage is freed immediately if the result is discarded"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.data.take()
    }

    /// Exchange storage with `other`. Constant time, no allocation.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Move the storage out into a new buffer, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        Self {
            data: self.data.take(),
        }
    }

    /// Consume the buffer, returning its storage (empty if unallocated).
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.data.unwrap_or_default()
    }
}

impl<T: Default> OwningBuffer<T> {
    /// Allocate `count` default-constructed elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through
    /// [`std::alloc::handle_alloc_error`] if the allocator refuses.
    pub fn new(count: usize) -> Self {
        Self::from_fn(count, |_| T::default())
    }

    /// Allocate `count` default-constructed elements, reporting failure.
    pub fn try_new(count: usize) -> Result<Self, AllocError> {
        Self::try_from_fn(count, |_| T::default())
    }
}

impl<T> Default for OwningBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<[T]>> for OwningBuffer<T> {
    fn from(data: Box<[T]>) -> Self {
        Self::from_boxed(data)
    }
}

impl<T> From<Vec<T>> for OwningBuffer<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_boxed(data.into_boxed_slice())
    }
}

/// Offset access. The offset must be below [`len`](OwningBuffer::len);
/// the owner is responsible for issuing valid offsets.
impl<T> Index<usize> for OwningBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, offset: usize) -> &T {
        debug_assert!(
            offset < self.len(),
            "offset {offset} past buffer of {}",
            self.len()
        );
        &self.as_slice()[offset]
    }
}

impl<T> IndexMut<usize> for OwningBuffer<T> {
    #[inline]
    fn index_mut(&mut self, offset: usize) -> &mut T {
        debug_assert!(
            offset < self.len(),
            "offset {offset} past buffer of {}",
            self.len()
        );
        &mut self.as_mut_slice()[offset]
    }
}
