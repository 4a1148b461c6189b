//! Filter stage.
//!
//! The wrapped enumerator is primed on construction: leading elements that
//! fail the predicate are skipped before a [`WhereEnum`] is handed out, so
//! `current` never exposes a rejected element, not even the first one.

use zpipe_core::{Enumerator, Stage};

/// Stage form of the filter; `apply` wraps its input in a [`WhereEnum`].
#[derive(Debug, Clone, Copy)]
pub struct Where<F> {
    f: F,
}

impl<F> Where<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<E, F> Stage<E> for Where<F>
where
    E: Enumerator,
    F: Fn(&E::Item) -> bool + Clone,
{
    type Output = WhereEnum<E, F>;

    fn apply(&self, input: E) -> WhereEnum<E, F> {
        WhereEnum::new(input, self.f.clone())
    }
}

#[derive(Debug, Clone)]
pub struct WhereEnum<E, F> {
    inner: E,
    f: F,
}

impl<E, F> WhereEnum<E, F>
where
    E: Enumerator,
    F: Fn(&E::Item) -> bool,
{
    pub fn new(inner: E, f: F) -> Self {
        let mut this = Self { inner, f };
        this.skip_rejected();
        this
    }

    fn skip_rejected(&mut self) {
        while !self.inner.over() && !(self.f)(&self.inner.current()) {
            self.inner.advance();
        }
    }
}

impl<E, F> Enumerator for WhereEnum<E, F>
where
    E: Enumerator,
    F: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn current(&self) -> E::Item {
        self.inner.current()
    }

    fn over(&self) -> bool {
        self.inner.over()
    }

    /// May consume several inner elements.
    fn advance(&mut self) {
        self.inner.advance();
        self.skip_rejected();
    }
}
