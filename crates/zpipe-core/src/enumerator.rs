//! The enumerator protocol.
//!
//! An enumerator is a pull-based, single-pass cursor. Sources produce values,
//! combinators wrap another enumerator by value and re-expose the protocol,
//! terminal stages drain it. The contract every implementation follows:
//!
//! - `current` is defined only while `over()` is false.
//! - `advance` is only valid while `over()` is false.
//! - Cloning an enumerator copies its cursor; the clone traverses on its own.
//! - An exhausted enumerator stays exhausted. Build a new one to start over.

use crate::stage::Stage;

pub trait Enumerator {
    type Item;

    /// Element at the cursor. Panics when `over()` is true.
    fn current(&self) -> Self::Item;

    /// True iff no further elements remain.
    fn over(&self) -> bool;

    /// Move the cursor one element forward. Panics when `over()` is true.
    fn advance(&mut self);

    /// Hand this enumerator to `stage`, left to right.
    fn pipe<S>(self, stage: S) -> S::Output
    where
        Self: Sized,
        S: Stage<Self>,
    {
        stage.apply(self)
    }

    /// Borrow this enumerator so a stage drains it in place instead of
    /// consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Adapt into a `std::iter::Iterator` over the remaining elements.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values { inner: self }
    }
}

impl<E: Enumerator + ?Sized> Enumerator for &mut E {
    type Item = E::Item;

    fn current(&self) -> Self::Item {
        (**self).current()
    }

    fn over(&self) -> bool {
        (**self).over()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/// `Iterator` view over an enumerator, produced by [`Enumerator::values`].
#[derive(Debug, Clone)]
pub struct Values<E> {
    inner: E,
}

impl<E: Enumerator> Iterator for Values<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inner.over() {
            return None;
        }
        let item = self.inner.current();
        self.inner.advance();
        Some(item)
    }
}
