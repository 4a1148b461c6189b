//! Stage trait + the left-to-right apply helper.
//!
//! A stage is anything that takes an enumerator and produces something:
//! a transformation returns a new enumerator wrapping the input, a terminal
//! drains the input into a value. `e.pipe(stage)` is exactly
//! `stage.apply(e)`; it only exists so pipelines read in data-flow order.

use crate::enumerator::Enumerator;

/// Trait that all pipeline stages implement.
///
/// Invariants:
/// - A stage holds configuration only (functions, seeds, separators). It never
///   keeps enumerator state once `apply` returns.
/// - Terminal stages drain `input` completely unless they document an early
///   exit (the quantifiers).
pub trait Stage<E: Enumerator> {
    type Output;

    fn apply(&self, input: E) -> Self::Output;
}

/// `pipe(e, f) == f(e)` for arbitrary closures over an enumerator.
pub fn pipe<E, R, F>(e: E, f: F) -> R
where
    E: Enumerator,
    F: FnOnce(E) -> R,
{
    f(e)
}
