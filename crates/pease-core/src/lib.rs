//! pease-core: Pease Number calculation logic
//!
//! This crate contains the full derivation pipeline with no I/O dependencies.
//! It is designed to be pure and testable: memoized Fibonacci and
//! Collatz-sequence-length calculators over a shared memo store, composed into
//! the three-stage Pease Number derivation.
//!
//! Supports `no_std` environments by disabling the default `std` feature; the
//! calculators only need `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::vec::Vec;
}

pub mod collatz;
pub mod fibo;
pub mod memo;
pub mod pease;

pub use collatz::{DEFAULT_STEP_BUDGET, collatz_length};
pub use fibo::{FiboError, fibo};
pub use memo::MemoStore;
pub use pease::{ConvergenceError, PeaseCalculator, PeaseError, PeaseRecord};
