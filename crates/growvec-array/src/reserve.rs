//! Capacity requests that are distinct from a size.
//!
//! `GrowableArray::from(reserve(n))` reads as "an empty array with room
//! for `n`", where a bare integer would be ambiguous with `with_size`.

use crate::array::GrowableArray;

/// A request for an empty array with the given capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reserve(pub usize);

impl Reserve {
    /// The requested capacity.
    pub fn capacity(self) -> usize {
        self.0
    }
}

/// Wrap `capacity` as a [`Reserve`] request.
///
/// ```
/// use growvec_array::{reserve, GrowableArray};
///
/// let arr: GrowableArray<String> = reserve(16).into();
/// assert_eq!(arr.len(), 0);
/// assert_eq!(arr.capacity(), 16);
/// ```
pub fn reserve(capacity: usize) -> Reserve {
    Reserve(capacity)
}

impl<T: Default> From<Reserve> for GrowableArray<T> {
    fn from(request: Reserve) -> Self {
        GrowableArray::with_capacity(request.capacity())
    }
}
