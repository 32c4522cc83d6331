//! A failed reallocation must leave the array exactly as it was.
//!
//! Failures are injected by making `Default` or `Clone` panic part way
//! through building the replacement buffer, and by requesting capacities
//! that cannot be laid out.

use std::panic::{catch_unwind, AssertUnwindSafe};

use growvec_array::{growable, AllocError, ArrayError, GrowableArray, GrowthPolicy};
use growvec_test_utils::{
    arm_clone_panic, arm_default_panic, DropCounter, FlakyClone, FlakyDefault,
};

fn flaky(values: &[i32]) -> GrowableArray<FlakyDefault> {
    values.iter().map(|&v| FlakyDefault(v)).collect()
}

#[test]
fn push_back_survives_failed_growth() {
    let mut arr = flaky(&[1, 2]);
    {
        let _guard = arm_default_panic(1);
        let result = catch_unwind(AssertUnwindSafe(|| arr.push_back(FlakyDefault(3))));
        assert!(result.is_err());
    }
    assert_eq!(arr, flaky(&[1, 2]));
    assert_eq!(arr.capacity(), 2);
    assert_eq!(arr.metrics().reallocations, 0);

    arr.push_back(FlakyDefault(3));
    assert_eq!(arr, flaky(&[1, 2, 3]));
}

#[test]
fn insert_survives_failed_growth() {
    let mut arr = flaky(&[1, 2, 3]);
    {
        let _guard = arm_default_panic(2);
        let result = catch_unwind(AssertUnwindSafe(|| arr.insert(1, FlakyDefault(9))));
        assert!(result.is_err());
    }
    assert_eq!(arr, flaky(&[1, 2, 3]));
    assert_eq!(arr.capacity(), 3);
}

#[test]
fn reserve_survives_failed_growth() {
    let mut arr = flaky(&[5, 6]);
    {
        let _guard = arm_default_panic(4);
        let result = catch_unwind(AssertUnwindSafe(|| arr.reserve(10)));
        assert!(result.is_err());
    }
    assert_eq!(arr, flaky(&[5, 6]));
    assert_eq!(arr.capacity(), 2);
}

#[test]
fn resize_past_capacity_survives_failed_growth() {
    let mut arr = flaky(&[1, 2, 3, 4]);
    {
        let _guard = arm_default_panic(0);
        let result = catch_unwind(AssertUnwindSafe(|| arr.resize(5)));
        assert!(result.is_err());
    }
    assert_eq!(arr, flaky(&[1, 2, 3, 4]));
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn resize_within_capacity_keeps_size_on_failure() {
    let mut arr = flaky(&[1, 2, 3, 4]);
    arr.resize(1);
    {
        let _guard = arm_default_panic(1);
        let result = catch_unwind(AssertUnwindSafe(|| arr.resize(4)));
        assert!(result.is_err());
    }
    assert_eq!(arr, flaky(&[1]));
    assert_eq!(arr.capacity(), 4);
}

#[test]
fn clone_failure_leaves_source_intact() {
    let source: GrowableArray<FlakyClone> = (1..=4).map(FlakyClone).collect();
    {
        let _guard = arm_clone_panic(2);
        let result = catch_unwind(AssertUnwindSafe(|| source.clone()));
        assert!(result.is_err());
    }
    assert_eq!(source.len(), 4);
    assert_eq!(source[3], FlakyClone(4));
}

#[test]
fn clone_from_failure_leaves_target_intact() {
    let source: GrowableArray<FlakyClone> = (1..=3).map(FlakyClone).collect();
    let mut target: GrowableArray<FlakyClone> = (10..=11).map(FlakyClone).collect();
    {
        let _guard = arm_clone_panic(1);
        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
    }
    assert_eq!(target, [FlakyClone(10), FlakyClone(11)]);

    target.clone_from(&source);
    assert_eq!(target, [FlakyClone(1), FlakyClone(2), FlakyClone(3)]);
}

#[test]
fn unrepresentable_capacity_is_reported_not_applied() {
    let mut arr = growable![1u32, 2, 3];
    let before = arr.clone();

    assert_eq!(
        arr.try_reserve(usize::MAX),
        Err(ArrayError::Alloc(AllocError::CapacityOverflow {
            requested: usize::MAX
        }))
    );
    assert!(matches!(
        arr.try_resize(usize::MAX),
        Err(ArrayError::Alloc(AllocError::CapacityOverflow { .. }))
    ));
    assert_eq!(arr, before);
    assert_eq!(arr.capacity(), 3);
}

#[test]
fn failed_reserve_does_not_block_later_pushes() {
    let mut arr: GrowableArray<u16> = GrowableArray::new();
    arr.push_back(1);
    assert!(arr.try_reserve(usize::MAX / 2).is_err());
    assert!(arr.try_push_back(2).is_ok());
    assert_eq!(arr, [1, 2]);
}

fn overflowing_growth() -> GrowthPolicy {
    GrowthPolicy {
        factor: usize::MAX / 2,
        min_capacity: 1,
    }
}

#[test]
fn try_push_back_and_try_insert_report_overflow() {
    let mut arr: GrowableArray<u64> = GrowableArray::with_policy(overflowing_growth()).unwrap();
    arr.push_back(1);
    assert_eq!(arr.capacity(), 1);

    assert!(matches!(
        arr.try_push_back(2),
        Err(ArrayError::Alloc(AllocError::CapacityOverflow { .. }))
    ));
    assert!(matches!(
        arr.try_insert(0, 3),
        Err(ArrayError::Alloc(AllocError::CapacityOverflow { .. }))
    ));
    assert_eq!(arr, [1]);
    assert_eq!(arr.capacity(), 1);
    assert_eq!(arr.metrics().reallocations, 1);
}

#[test]
fn rejected_value_is_dropped_exactly_once() {
    let counter = DropCounter::new();
    let mut arr = GrowableArray::with_policy(overflowing_growth()).unwrap();
    arr.push_back(counter.track(1));

    assert!(arr.try_push_back(counter.track(2)).is_err());
    assert_eq!(counter.count(), 1);
    assert!(arr.try_insert(0, counter.track(3)).is_err());
    assert_eq!(counter.count(), 2);

    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0].value, 1);
    drop(arr);
    assert_eq!(counter.count(), 3);
}
