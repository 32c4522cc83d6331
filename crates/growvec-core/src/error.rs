//! Error types for the growvec containers.
//!
//! Organized by layer: allocation (buffer construction), array access
//! and mutation, and growth-policy configuration.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors raised while obtaining storage for a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested element count does not fit in a valid [`Layout`]
    /// (the byte size would exceed `isize::MAX`).
    CapacityOverflow {
        /// Number of elements requested.
        requested: usize,
    },
    /// The global allocator refused the request.
    OutOfMemory {
        /// Layout that could not be allocated.
        layout: Layout,
    },
}

impl AllocError {
    /// Abort the way `Vec` does for an infallible allocation.
    ///
    /// Capacity overflow panics; allocator refusal goes through
    /// [`std::alloc::handle_alloc_error`], which does not return.
    pub fn handle(self) -> ! {
        match self {
            Self::CapacityOverflow { requested } => {
                panic!("capacity overflow: {requested} elements")
            }
            Self::OutOfMemory { layout } => std::alloc::handle_alloc_error(layout),
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} elements")
            }
            Self::OutOfMemory { layout } => {
                write!(
                    f,
                    "out of memory: failed to allocate {} bytes (align {})",
                    layout.size(),
                    layout.align()
                )
            }
        }
    }
}

impl Error for AllocError {}

/// Errors reported by array operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access with `index >= size`.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Logical size of the array at the time of the call.
        size: usize,
    },
    /// A reallocating operation could not obtain its new buffer. The
    /// array is left exactly as it was before the call.
    Alloc(AllocError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for array of size {size}")
            }
            Self::Alloc(err) => write!(f, "reallocation failed: {err}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl From<AllocError> for ArrayError {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}

/// Errors detected by [`GrowthPolicy::validate()`](crate::GrowthPolicy::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// Growth factor below 2.
    FactorTooSmall {
        /// The configured factor.
        factor: usize,
    },
    /// First-allocation floor of zero.
    ZeroMinCapacity,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FactorTooSmall { factor } => {
                write!(f, "growth factor {factor} is below the minimum of 2")
            }
            Self::ZeroMinCapacity => write!(f, "minimum capacity must be at least 1"),
        }
    }
}

impl Error for PolicyError {}
