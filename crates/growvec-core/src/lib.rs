//! Core types shared across the growvec workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error types reported by the buffer and array layers, the
//! [`GrowthPolicy`] that decides how capacity expands, and the
//! [`AllocMetrics`] counters an array keeps about its reallocations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod metrics;
pub mod policy;

pub use error::{AllocError, ArrayError, PolicyError};
pub use metrics::AllocMetrics;
pub use policy::GrowthPolicy;
