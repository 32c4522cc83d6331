//! Growvec: a growable contiguous array over an exclusively-owned heap buffer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the growvec sub-crates. For most users, adding `growvec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use growvec::prelude::*;
//!
//! let mut arr: GrowableArray<i32> = reserve(4).into();
//! arr.extend([1, 2, 3, 4]);
//! assert_eq!(arr.metrics().reallocations, 0);
//!
//! // Full: the next append doubles the capacity.
//! arr.push_back(5);
//! assert_eq!(arr.capacity(), 8);
//!
//! arr.erase(0);
//! arr.insert(2, 10);
//! assert_eq!(arr, [2, 3, 10, 4, 5]);
//!
//! match arr.at(7) {
//!     Err(ArrayError::OutOfRange { index, size }) => assert_eq!((index, size), (7, 5)),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `growvec-core` | Errors, `GrowthPolicy`, `AllocMetrics` |
//! | [`buffer`] | `growvec-buffer` | `OwningBuffer` |
//! | [`array`] | `growvec-array` | `GrowableArray`, `IntoIter`, reservation requests |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error types, growth policy and allocation metrics (`growvec-core`).
pub use growvec_core as types;

/// Fixed-size owning heap buffer (`growvec-buffer`).
///
/// [`buffer::OwningBuffer`] is the storage beneath every array; use it
/// directly to adopt or release raw boxed storage.
pub use growvec_buffer as buffer;

/// The growable array (`growvec-array`).
pub use growvec_array as array;

pub use growvec_array::growable;

/// Common imports for typical growvec usage.
///
/// ```rust
/// use growvec::prelude::*;
/// ```
pub mod prelude {
    pub use growvec_array::{growable, reserve, GrowableArray, Reserve};
    pub use growvec_buffer::OwningBuffer;
    pub use growvec_core::{AllocError, ArrayError, GrowthPolicy};
}
