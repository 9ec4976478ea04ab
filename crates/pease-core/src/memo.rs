//! Shared memoization tables for the Fibonacci and Collatz calculators.

use hashbrown::HashMap;

/// Memoization tables shared by both calculators for one program run.
///
/// Entries are only added, never removed or overwritten, so each table grows
/// monotonically within a run. Both tables are pre-seeded with their base
/// cases on construction. Not persisted; discarded at exit.
#[derive(Debug, Clone)]
pub struct MemoStore {
    fibo: HashMap<u64, u64>,
    collatz: HashMap<u64, u64>,
}

impl MemoStore {
    /// Create a store seeded with `fibo(0)=0`, `fibo(1)=1` and `collatz(1)=0`.
    pub fn new() -> Self {
        let mut fibo = HashMap::new();
        fibo.insert(0, 0);
        fibo.insert(1, 1);
        let mut collatz = HashMap::new();
        collatz.insert(1, 0);
        Self { fibo, collatz }
    }

    pub fn fibo_get(&self, n: u64) -> Option<u64> {
        self.fibo.get(&n).copied()
    }

    /// Record `fibo(n) = value`. An existing entry is kept as-is.
    pub fn fibo_insert(&mut self, n: u64, value: u64) {
        self.fibo.entry(n).or_insert(value);
    }

    pub fn collatz_get(&self, n: u64) -> Option<u64> {
        self.collatz.get(&n).copied()
    }

    /// Record the Collatz sequence length of `n`. An existing entry is kept as-is.
    pub fn collatz_insert(&mut self, n: u64, length: u64) {
        self.collatz.entry(n).or_insert(length);
    }

    /// Number of memoized Fibonacci entries. Used to observe cache growth.
    pub fn fibo_len(&self) -> usize {
        self.fibo.len()
    }

    /// Number of memoized Collatz entries. Used to observe cache growth.
    pub fn collatz_len(&self) -> usize {
        self.collatz.len()
    }
}

impl Default for MemoStore {
    fn default() -> Self {
        Self::new()
    }
}
