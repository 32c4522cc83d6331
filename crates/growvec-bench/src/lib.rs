//! Workloads shared by the growvec benchmarks.
//!
//! - [`insert_positions`]: deterministic insert offsets via seed
//! - [`filled`]: an array of `n` ascending values with exact capacity
//! - [`run_mixed`]: a push/insert/erase mix replayed identically on each run

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growvec_array::GrowableArray;

/// Generate `n` insert positions, each valid for an array that grows by
/// one element per insert starting from `start_len`.
///
/// Positions come from a fixed linear congruential sequence, so the
/// same seed always yields the same workload.
pub fn insert_positions(start_len: usize, n: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % (start_len + i + 1) as u64) as usize
        })
        .collect()
}

/// An array holding `0..n` with capacity exactly `n`.
pub fn filled(n: usize) -> GrowableArray<u64> {
    (0..n as u64).collect()
}

/// Replay a fixed mix of appends, front-half inserts and erases.
///
/// Returns the final length so the work cannot be optimised away.
pub fn run_mixed(arr: &mut GrowableArray<u64>, rounds: usize, seed: u64) -> usize {
    let positions = insert_positions(arr.len(), rounds, seed);
    for (i, &pos) in positions.iter().enumerate() {
        match i % 4 {
            0 | 1 => arr.push_back(i as u64),
            2 => {
                arr.insert(pos.min(arr.len()) / 2, i as u64);
            }
            _ => {
                if !arr.is_empty() {
                    arr.erase(pos % arr.len());
                }
            }
        }
    }
    arr.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_positions_are_in_range() {
        let positions = insert_positions(10, 100, 42);
        assert_eq!(positions.len(), 100);
        for (i, &pos) in positions.iter().enumerate() {
            assert!(pos <= 10 + i, "position {pos} out of range at step {i}");
        }
    }

    #[test]
    fn insert_positions_are_deterministic() {
        assert_eq!(insert_positions(0, 50, 7), insert_positions(0, 50, 7));
        assert_ne!(insert_positions(0, 50, 7), insert_positions(0, 50, 8));
    }

    #[test]
    fn filled_has_exact_capacity() {
        let arr = filled(64);
        assert_eq!(arr.len(), 64);
        assert_eq!(arr.capacity(), 64);
        assert_eq!(arr[63], 63);
    }

    #[test]
    fn mixed_workload_is_reproducible() {
        let mut a = filled(16);
        let mut b = filled(16);
        assert_eq!(run_mixed(&mut a, 200, 3), run_mixed(&mut b, 200, 3));
        assert_eq!(a, b);
        // Per 4 rounds: two pushes, one insert, one erase.
        assert_eq!(a.len(), 16 + 200 / 2);
    }
}
