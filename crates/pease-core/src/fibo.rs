//! Memoized Fibonacci calculator.

use thiserror::Error;

use crate::memo::MemoStore;

/// Failures of the Fibonacci calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FiboError {
    #[error("Fibonacci input must be non-negative, got {0}")]
    NegativeInput(i64),
    #[error("fibo({0}) overflows u64")]
    Overflow(u64),
}

/// Compute `fibo(n)` against the memo table in `memo`.
///
/// Defined by `fibo(0)=0`, `fibo(1)=1`, `fibo(n)=fibo(n-1)+fibo(n-2)`.
/// Each distinct `n` is computed at most once per store; later calls for the
/// same `n` are O(1) lookups. Implemented as an iterative climb from the
/// memoized frontier rather than by recursion, so call-stack depth does not
/// grow with `n`. Values past `n = 93` do not fit in `u64` and yield
/// `FiboError::Overflow`; nothing unconfirmed is cached.
pub fn fibo(n: i64, memo: &mut MemoStore) -> Result<u64, FiboError> {
    if n < 0 {
        return Err(FiboError::NegativeInput(n));
    }
    let n = n as u64;
    if let Some(value) = memo.fibo_get(n) {
        return Ok(value);
    }

    // The table holds a contiguous 0..=top range: it is seeded with 0 and 1
    // and only extended here, one index at a time. Find the frontier, then
    // climb with a rolling pair, memoizing as we go.
    let mut top = 1;
    let mut prev = 0; // fibo(top - 1)
    let mut curr = 1; // fibo(top)
    while let Some(value) = memo.fibo_get(top + 1) {
        top += 1;
        prev = curr;
        curr = value;
    }
    for k in (top + 1)..=n {
        let next = prev
            .checked_add(curr)
            .ok_or(FiboError::Overflow(k))?;
        memo.fibo_insert(k, next);
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        let mut memo = MemoStore::new();
        assert_eq!(fibo(0, &mut memo), Ok(0));
        assert_eq!(fibo(1, &mut memo), Ok(1));
    }

    #[test]
    fn test_known_values() {
        let mut memo = MemoStore::new();
        assert_eq!(fibo(2, &mut memo), Ok(1));
        assert_eq!(fibo(4, &mut memo), Ok(3));
        assert_eq!(fibo(10, &mut memo), Ok(55));
        assert_eq!(fibo(20, &mut memo), Ok(6765));
        assert_eq!(fibo(31, &mut memo), Ok(1346269));
    }

    #[test]
    fn test_negative_input_rejected() {
        let mut memo = MemoStore::new();
        assert_eq!(fibo(-1, &mut memo), Err(FiboError::NegativeInput(-1)));
        // The failed call leaves the table untouched.
        assert_eq!(memo.fibo_len(), 2);
    }

    #[test]
    fn test_memoization_transparency() {
        let mut memo = MemoStore::new();
        let first = fibo(12, &mut memo).unwrap();
        let len_after_first = memo.fibo_len();
        let second = fibo(12, &mut memo).unwrap();
        assert_eq!(first, second);
        // Second call was a pure lookup: no cache growth.
        assert_eq!(memo.fibo_len(), len_after_first);
    }

    #[test]
    fn test_resumes_from_memoized_frontier() {
        let mut memo = MemoStore::new();
        fibo(10, &mut memo).unwrap();
        assert_eq!(memo.fibo_len(), 11);
        fibo(15, &mut memo).unwrap();
        // Only the new indices 11..=15 were added.
        assert_eq!(memo.fibo_len(), 16);
        assert_eq!(memo.fibo_get(13), Some(233));
    }

    #[test]
    fn test_recurrence_holds() {
        let mut memo = MemoStore::new();
        for n in 2..=40 {
            let a = fibo(n - 2, &mut memo).unwrap();
            let b = fibo(n - 1, &mut memo).unwrap();
            assert_eq!(fibo(n, &mut memo), Ok(a + b));
        }
    }

    #[test]
    fn test_overflow_past_u64() {
        let mut memo = MemoStore::new();
        // fibo(93) is the largest value that fits in u64.
        assert_eq!(fibo(93, &mut memo), Ok(12200160415121876738));
        assert_eq!(fibo(94, &mut memo), Err(FiboError::Overflow(94)));
        // The failed index was not cached, and a retry fails the same way.
        assert_eq!(memo.fibo_get(94), None);
        assert_eq!(fibo(94, &mut memo), Err(FiboError::Overflow(94)));
        // The confirmed prefix below it is intact.
        assert_eq!(memo.fibo_get(93), Some(12200160415121876738));
    }

    #[test]
    fn test_overflow_from_cold_store() {
        let mut memo = MemoStore::new();
        assert_eq!(fibo(100, &mut memo), Err(FiboError::Overflow(94)));
        // Everything computable on the way up was still memoized.
        assert_eq!(memo.fibo_get(93), Some(12200160415121876738));
        assert_eq!(memo.fibo_get(94), None);
    }

    #[test]
    fn test_error_display() {
        let err = FiboError::NegativeInput(-7);
        assert_eq!(
            err.to_string(),
            "Fibonacci input must be non-negative, got -7"
        );
    }
}
