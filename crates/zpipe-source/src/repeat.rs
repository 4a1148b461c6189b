//! A single value repeated a bounded number of times.

use zpipe_core::check::contract_violation;
use zpipe_core::Enumerator;

/// Produces `value` exactly `n` times.
///
/// The count is always explicit; there is no unbounded mode. `empty(value)`
/// is the zero-count default and yields nothing.
#[derive(Debug, Clone)]
pub struct RepeatEnum<T> {
    value: T,
    n: usize,
    i: usize,
}

impl<T> RepeatEnum<T> {
    pub fn new(value: T, n: usize) -> Self {
        Self { value, n, i: 0 }
    }

    pub fn empty(value: T) -> Self {
        Self::new(value, 0)
    }

    /// Repetitions not yet produced.
    pub fn remaining(&self) -> usize {
        self.n - self.i
    }
}

impl<T: Clone> Enumerator for RepeatEnum<T> {
    type Item = T;

    fn current(&self) -> T {
        if self.i == self.n {
            contract_violation("current", "RepeatEnum");
        }
        self.value.clone()
    }

    fn over(&self) -> bool {
        self.i == self.n
    }

    fn advance(&mut self) {
        if self.i == self.n {
            contract_violation("advance", "RepeatEnum");
        }
        self.i += 1;
    }
}
