//! Allocation statistics kept by an array.
//!
//! [`AllocMetrics`] lets callers and tests observe how often an array
//! reallocated, which is how the amortized-append and reservation
//! guarantees are verified.

/// Counters updated every time an array swaps in a new buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocMetrics {
    /// Number of times a new buffer replaced the current one.
    pub reallocations: u64,
    /// Total number of existing elements moved into new buffers.
    pub elements_moved: u64,
    /// Largest capacity the array has held.
    pub peak_capacity: usize,
}

impl AllocMetrics {
    /// Record one reallocation to `new_capacity` that moved `moved` elements.
    pub fn record_reallocation(&mut self, new_capacity: usize, moved: usize) {
        self.reallocations += 1;
        self.elements_moved += moved as u64;
        self.peak_capacity = self.peak_capacity.max(new_capacity);
    }
}
