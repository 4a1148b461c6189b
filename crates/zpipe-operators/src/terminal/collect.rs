//! Materialization.

use zpipe_core::{Enumerator, Stage};

/// Drains an enumerator into a `Vec`, in traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVector;

impl<E: Enumerator> Stage<E> for ToVector {
    type Output = Vec<E::Item>;

    fn apply(&self, mut input: E) -> Vec<E::Item> {
        let mut out = Vec::new();
        while !input.over() {
            out.push(input.current());
            input.advance();
        }
        out
    }
}
