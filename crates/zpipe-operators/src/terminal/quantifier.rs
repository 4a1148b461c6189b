//! Existential and universal tests. Both stop at the first decisive element,
//! so a `by_ref` input is left positioned on it.

use zpipe_core::{Enumerator, Stage};

/// True iff every element satisfies `f`; true for an empty input.
#[derive(Debug, Clone, Copy)]
pub struct All<F> {
    f: F,
}

impl<F> All<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<E, F> Stage<E> for All<F>
where
    E: Enumerator,
    F: Fn(&E::Item) -> bool,
{
    type Output = bool;

    fn apply(&self, mut input: E) -> bool {
        while !input.over() {
            if !(self.f)(&input.current()) {
                return false;
            }
            input.advance();
        }
        true
    }
}

/// True iff some element satisfies `f`; false for an empty input.
#[derive(Debug, Clone, Copy)]
pub struct Any<F> {
    f: F,
}

impl<F> Any<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<E, F> Stage<E> for Any<F>
where
    E: Enumerator,
    F: Fn(&E::Item) -> bool,
{
    type Output = bool;

    fn apply(&self, mut input: E) -> bool {
        while !input.over() {
            if (self.f)(&input.current()) {
                return true;
            }
            input.advance();
        }
        false
    }
}
