//! Reusable element fixtures.
//!
//! - [`Tracked`]: counts its drops through a shared [`DropCounter`].
//! - [`FlakyDefault`]: `Default` panics once an armed budget runs out.
//! - [`FlakyClone`]: `Clone` panics once an armed budget runs out.
//!
//! Budgets are thread-local, so tests running in parallel do not
//! interfere with each other.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::LocalKey;

/// Shared drop tally for [`Tracked`] elements.
#[derive(Clone, Debug, Default)]
pub struct DropCounter(Arc<AtomicUsize>);

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked elements dropped so far.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Wrap `value` so that its drop is counted here.
    pub fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            counter: Some(self.clone()),
        }
    }
}

/// An element that bumps a [`DropCounter`] when dropped.
///
/// `Tracked::default()` carries no counter, so default placeholders
/// sitting in spare capacity never show up in the tally.
#[derive(Clone, Debug, Default)]
pub struct Tracked {
    pub value: i32,
    counter: Option<DropCounter>,
}

impl Tracked {
    /// Whether this element reports its drop.
    pub fn is_tracked(&self) -> bool {
        self.counter.is_some()
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counter) = &self.counter {
            counter.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

thread_local! {
    static DEFAULT_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
    static CLONE_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

fn spend(budget: &'static LocalKey<Cell<Option<usize>>>, what: &str) {
    budget.with(|b| match b.get() {
        None => {}
        Some(0) => panic!("{what} budget exhausted"),
        Some(n) => b.set(Some(n - 1)),
    });
}

/// Disarms its budget when dropped.
#[must_use = "the budget is disarmed as soon as the guard is dropped"]
pub struct BudgetGuard {
    budget: &'static LocalKey<Cell<Option<usize>>>,
}

impl Drop for BudgetGuard {
    fn drop(&mut self) {
        self.budget.with(|b| b.set(None));
    }
}

/// Let `after` more [`FlakyDefault`] values be built on this thread,
/// then panic on the next one.
pub fn arm_default_panic(after: usize) -> BudgetGuard {
    DEFAULT_BUDGET.with(|b| b.set(Some(after)));
    BudgetGuard {
        budget: &DEFAULT_BUDGET,
    }
}

/// Let `after` more [`FlakyClone`] clones happen on this thread,
/// then panic on the next one.
pub fn arm_clone_panic(after: usize) -> BudgetGuard {
    CLONE_BUDGET.with(|b| b.set(Some(after)));
    BudgetGuard {
        budget: &CLONE_BUDGET,
    }
}

/// An element whose `Default` can be made to panic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlakyDefault(pub i32);

impl Default for FlakyDefault {
    fn default() -> Self {
        spend(&DEFAULT_BUDGET, "default");
        FlakyDefault(0)
    }
}

/// An element whose `Clone` can be made to panic.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FlakyClone(pub i32);

impl Clone for FlakyClone {
    fn clone(&self) -> Self {
        spend(&CLONE_BUDGET, "clone");
        FlakyClone(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::catch_unwind;

    #[test]
    fn tracked_drop_is_counted() {
        let counter = DropCounter::new();
        let a = counter.track(1);
        let b = a.clone();
        drop(a);
        assert_eq!(counter.count(), 1);
        drop(b);
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn default_tracked_is_not_counted() {
        let t = Tracked::default();
        assert!(!t.is_tracked());
    }

    #[test]
    fn default_budget_panics_when_exhausted() {
        let _guard = arm_default_panic(2);
        let _a = FlakyDefault::default();
        let _b = FlakyDefault::default();
        assert!(catch_unwind(FlakyDefault::default).is_err());
    }

    #[test]
    fn guard_drop_disarms_budget() {
        {
            let _guard = arm_default_panic(0);
        }
        assert_eq!(FlakyDefault::default(), FlakyDefault(0));
    }

    #[test]
    fn clone_budget_panics_when_exhausted() {
        let value = FlakyClone(5);
        let _guard = arm_clone_panic(1);
        assert_eq!(value.clone(), FlakyClone(5));
        assert!(catch_unwind(|| value.clone()).is_err());
    }
}
