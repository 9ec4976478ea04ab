//! The Pease Number derivation pipeline.
//!
//! Three stages over a shared memo store: the Fibonacci Birthday Constant
//! from month and day, Collatz lengths of both constants and the year, and
//! the Pease Number as the sum of the three lengths. The pipeline
//! short-circuits on the first stage whose Collatz trajectory fails to
//! converge within the step budget.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collatz::{DEFAULT_STEP_BUDGET, collatz_length};
use crate::fibo::{FiboError, fibo};
use crate::memo::MemoStore;

/// Result of one Pease Number derivation. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeaseRecord {
    /// Fibonacci Birthday Constant: `(fibo(month), fibo(day))`.
    #[serde(rename = "FBC")]
    pub fbc: (u64, u64),
    /// Collatz Fibo-Birthday: Collatz lengths of `fbc.0`, `fbc.1`, and the year.
    #[serde(rename = "CFB")]
    pub cfb: (u64, u64, u64),
    /// The Pease Number: sum of the CFB triple.
    #[serde(rename = "Pease")]
    pub pease: u64,
}

/// A Collatz trajectory failed to reach 1 within the step budget.
///
/// Names the pipeline stage that failed and the offending intermediate value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvergenceError {
    #[error("Fibo({month})={value} does not converge")]
    FiboMonth { month: i64, value: u64 },
    #[error("Fibo({day})={value} does not converge")]
    FiboDay { day: i64, value: u64 },
    #[error("Year {year} does not converge")]
    Year { year: u64 },
}

/// Any failure a derivation can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeaseError {
    /// A precondition violation (negative Fibonacci input); expected to be
    /// prevented by the caller's date validation.
    #[error(transparent)]
    InvalidArgument(#[from] FiboError),
    /// A stage did not converge; the derivation aborts with no partial result.
    #[error(transparent)]
    Convergence(#[from] ConvergenceError),
}

/// The calculator pair behind one program run: both memo tables plus the
/// Collatz step budget, shared across derivations so repeated inputs become
/// lookups.
#[derive(Debug, Clone)]
pub struct PeaseCalculator {
    memo: MemoStore,
    step_budget: u32,
}

impl PeaseCalculator {
    /// Create a calculator with the default step budget.
    pub fn new() -> Self {
        Self::with_budget(DEFAULT_STEP_BUDGET)
    }

    /// Create a calculator with a custom Collatz step budget.
    pub fn with_budget(step_budget: u32) -> Self {
        Self {
            memo: MemoStore::new(),
            step_budget,
        }
    }

    pub fn step_budget(&self) -> u32 {
        self.step_budget
    }

    /// Read access to the underlying memo tables.
    pub fn memo(&self) -> &MemoStore {
        &self.memo
    }

    /// Memoized `fibo(n)`.
    pub fn fibo(&mut self, n: i64) -> Result<u64, FiboError> {
        fibo(n, &mut self.memo)
    }

    /// Memoized Collatz length of `n` under this calculator's budget.
    pub fn collatz_length(&mut self, n: u64) -> Option<u64> {
        collatz_length(n, self.step_budget, &mut self.memo)
    }

    /// Derive the Pease Number for a date triple.
    ///
    /// Stages run in order and the first failure aborts the derivation; no
    /// partial results. Calendar range checks (1-12, 1-31, year floor) belong
    /// to the caller; here month and day only need to be valid Fibonacci
    /// inputs, and the year is used directly as a Collatz input.
    pub fn calculate(
        &mut self,
        month: i64,
        day: i64,
        year: u64,
    ) -> Result<PeaseRecord, PeaseError> {
        let fm = self.fibo(month)?;
        let fd = self.fibo(day)?;

        let c0 = self
            .collatz_length(fm)
            .ok_or(ConvergenceError::FiboMonth { month, value: fm })?;
        let c1 = self
            .collatz_length(fd)
            .ok_or(ConvergenceError::FiboDay { day, value: fd })?;
        let c2 = self
            .collatz_length(year)
            .ok_or(ConvergenceError::Year { year })?;

        Ok(PeaseRecord {
            fbc: (fm, fd),
            cfb: (c0, c1, c2),
            pease: c0 + c1 + c2,
        })
    }
}

impl Default for PeaseCalculator {
    fn default() -> Self {
        Self::new()
    }
}
