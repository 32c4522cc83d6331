//! Capacity growth policy.

use crate::error::PolicyError;

/// How an array picks its next capacity when it runs out of room.
///
/// The new capacity is `max(required, factor * current)`, or
/// `max(required, min_capacity)` when the array has no storage yet.
/// Explicit reservations bypass the policy and allocate exactly what
/// was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the current capacity on overflow.
    ///
    /// Default: 2. Must be at least 2.
    pub factor: usize,

    /// Capacity used when growing from empty, if larger than what
    /// the triggering operation requires.
    ///
    /// Default: 1. Must be at least 1.
    pub min_capacity: usize,
}

impl GrowthPolicy {
    /// Default growth factor (doubling).
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default capacity floor for the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Create the default doubling policy.
    pub const fn new() -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
        }
    }

    /// Check the policy's structural invariants.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.factor < 2 {
            return Err(PolicyError::FactorTooSmall {
                factor: self.factor,
            });
        }
        if self.min_capacity == 0 {
            return Err(PolicyError::ZeroMinCapacity);
        }
        Ok(())
    }

    /// Capacity to allocate when `required` elements must fit and the
    /// array currently holds `current`.
    ///
    /// Never returns less than `required`. If `factor * current`
    /// overflows, falls back to exact fit.
    pub fn grown_capacity(&self, current: usize, required: usize) -> usize {
        if current == 0 {
            return required.max(self.min_capacity);
        }
        match current.checked_mul(self.factor) {
            Some(scaled) => required.max(scaled),
            None => {
                log::debug!(
                    "growvec: growth from {current} by factor {} overflows, using exact fit {required}",
                    self.factor
                );
                required
            }
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_doubles() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(4, 5), 8);
        assert_eq!(policy.grown_capacity(8, 9), 16);
    }

    #[test]
    fn empty_array_grows_to_floor_of_one() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(0, 1), 1);
    }

    #[test]
    fn required_wins_over_doubling() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.grown_capacity(4, 100), 100);
        assert_eq!(policy.grown_capacity(0, 10), 10);
    }

    #[test]
    fn custom_floor_applies_only_from_empty() {
        let policy = GrowthPolicy {
            factor: 2,
            min_capacity: 8,
        };
        assert_eq!(policy.grown_capacity(0, 1), 8);
        assert_eq!(policy.grown_capacity(1, 2), 2);
    }

    #[test]
    fn overflow_falls_back_to_exact_fit() {
        let policy = GrowthPolicy::default();
        let current = usize::MAX / 2 + 1;
        assert_eq!(policy.grown_capacity(current, current + 1), current + 1);
    }

    #[test]
    fn validate_rejects_small_factor() {
        let policy = GrowthPolicy {
            factor: 1,
            min_capacity: 1,
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::FactorTooSmall { factor: 1 })
        );
    }

    #[test]
    fn validate_rejects_zero_floor() {
        let policy = GrowthPolicy {
            factor: 3,
            min_capacity: 0,
        };
        assert_eq!(policy.validate(), Err(PolicyError::ZeroMinCapacity));
    }

    #[test]
    fn default_policy_is_valid() {
        assert!(GrowthPolicy::new().validate().is_ok());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grown_capacity_fits_requirement(
                factor in 2usize..8,
                min_capacity in 1usize..64,
                current in 0usize..1_000_000,
                extra in 1usize..1_000,
            ) {
                let policy = GrowthPolicy { factor, min_capacity };
                let required = current + extra;
                let grown = policy.grown_capacity(current, required);
                prop_assert!(grown >= required);
                if current > 0 {
                    prop_assert!(grown >= current * factor);
                }
            }
        }
    }
}
