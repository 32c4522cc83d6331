//! Test utilities for growvec development.
//!
//! Element types that make container behavior observable:
//! drop accounting ([`DropCounter`], [`Tracked`]) and panic injection
//! ([`FlakyDefault`], [`FlakyClone`]) for checking that a failed
//! reallocation leaves the container untouched.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    arm_clone_panic, arm_default_panic, BudgetGuard, DropCounter, FlakyClone, FlakyDefault,
    Tracked,
};
