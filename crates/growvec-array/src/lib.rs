//! Growable contiguous array built on [`OwningBuffer`].
//!
//! [`GrowableArray`] separates logical size from physical capacity.
//! Slots past the logical end hold default-valued placeholders, so every
//! slot of the buffer is always a valid `T` and the crate needs no
//! `unsafe` code.
//!
//! # Architecture
//!
//! ```text
//! GrowableArray<T>
//! ├── OwningBuffer<T>   (capacity = buffer length, exact)
//! ├── size              (logical length, <= capacity)
//! ├── GrowthPolicy      (max(required, 2 × capacity), floor 1)
//! └── AllocMetrics      (reallocation counters)
//! ```
//!
//! Any operation that needs more room builds a complete new buffer
//! first, then moves the existing elements across by swapping and
//! installs it. A failed allocation, or a panicking `T::default()`,
//! leaves the array exactly as it was.
//!
//! # Example
//!
//! ```
//! use growvec_array::{growable, GrowableArray};
//!
//! let mut arr = growable![1, 2, 3];
//! arr.push_back(4);
//! assert_eq!(arr, [1, 2, 3, 4]);
//!
//! arr.erase(1);
//! assert_eq!(arr, [1, 3, 4]);
//!
//! arr.insert(0, 0);
//! assert_eq!(arr, [0, 1, 3, 4]);
//!
//! assert!(arr.at(4).is_err());
//! assert!(growable![1, 3] > growable![1, 2, 9]);
//! # let _: GrowableArray<i32> = arr;
//! ```
//!
//! [`OwningBuffer`]: growvec_buffer::OwningBuffer

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod cmp;
pub mod iter;
mod macros;
pub mod reserve;

pub use array::GrowableArray;
pub use iter::IntoIter;
pub use reserve::{reserve, Reserve};

pub use growvec_core::{AllocError, AllocMetrics, ArrayError, GrowthPolicy, PolicyError};
