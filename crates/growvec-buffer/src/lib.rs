//! Fixed-size, exclusively-owned heap buffer.
//!
//! [`OwningBuffer`] is the storage primitive beneath
//! `growvec_array::GrowableArray`. It owns at most one heap allocation
//! of a fixed element count and never resizes it: growing means building
//! a new buffer and swapping it in. A zero-length buffer owns no
//! allocation at all.
//!
//! ```
//! use growvec_buffer::OwningBuffer;
//!
//! let mut buf: OwningBuffer<u32> = OwningBuffer::new(4);
//! assert_eq!(buf.len(), 4);
//! buf[2] = 7;
//! assert_eq!(buf.as_slice(), &[0, 0, 7, 0]);
//!
//! let storage = buf.release().unwrap();
//! assert!(!buf.is_allocated());
//! assert_eq!(&*storage, &[0, 0, 7, 0]);
//! ```
//!
//! The buffer is move-only; there is no `Clone`:
//!
//! ```compile_fail
//! let a = growvec_buffer::OwningBuffer::<u8>::new(4);
//! let b = a.clone();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;

pub use buffer::OwningBuffer;
