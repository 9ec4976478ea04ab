//! Memoized Collatz sequence length calculator with a bounded step budget.
//!
//! Collatz convergence is conjectured but unproven, so every calculation
//! carries a hard step ceiling. Running out of budget means "did not converge
//! within the budget", never "does not converge" — which is why exhausted
//! trajectories are deliberately left out of the memo table.

#[cfg(not(feature = "std"))]
use crate::compat::*;
use crate::memo::MemoStore;

/// Default step budget before declaring non-convergence.
pub const DEFAULT_STEP_BUDGET: u32 = 1500;

/// Number of steps for `n` to reach 1 under the Collatz rule (halve if even,
/// else triple-plus-one), or `None` if the trajectory does not reach 1 within
/// `step_budget` steps.
///
/// Convergent results are cached in `memo` for every value visited along the
/// trajectory; non-convergent outcomes are never cached, so a later call with
/// a larger budget recomputes from scratch. A `3n+1` step that overflows `u64`
/// is reported as non-convergent for the same reason: the true length cannot
/// be confirmed.
///
/// Expects `n >= 1`. Zero has no path to 1 (it loops at 0) and exhausts the
/// budget like any other non-convergent input.
pub fn collatz_length(n: u64, step_budget: u32, memo: &mut MemoStore) -> Option<u64> {
    if n == 1 {
        return Some(0);
    }
    if let Some(length) = memo.collatz_get(n) {
        return Some(length);
    }

    // Walk the trajectory, recording every value visited, until we reach 1,
    // a memoized value, or the budget runs out.
    let mut trail: Vec<u64> = Vec::new();
    let mut current = n;
    let mut budget = step_budget;
    let base_length = loop {
        if current == 1 {
            break 0;
        }
        if let Some(length) = memo.collatz_get(current) {
            break length;
        }
        if budget == 0 {
            return None;
        }
        trail.push(current);
        current = if current % 2 == 0 {
            current / 2
        } else {
            current.checked_mul(3)?.checked_add(1)?
        };
        budget -= 1;
    };

    // Convergence confirmed: cache each visited value with its distance to 1.
    let mut length = base_length;
    while let Some(value) = trail.pop() {
        length += 1;
        memo.collatz_insert(value, length);
    }
    Some(length)
}
