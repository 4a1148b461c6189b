//! Map stage: one output element per input element.

use zpipe_core::{Enumerator, Stage};

/// Stage form of the map; `apply` wraps its input in a [`SelectEnum`].
#[derive(Debug, Clone, Copy)]
pub struct Select<F> {
    f: F,
}

impl<F> Select<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<E, F, U> Stage<E> for Select<F>
where
    E: Enumerator,
    F: Fn(E::Item) -> U + Clone,
{
    type Output = SelectEnum<E, F>;

    fn apply(&self, input: E) -> SelectEnum<E, F> {
        SelectEnum::new(input, self.f.clone())
    }
}

/// `current` is `f(inner.current())`; position and exhaustion come from
/// `inner` unchanged.
#[derive(Debug, Clone)]
pub struct SelectEnum<E, F> {
    inner: E,
    f: F,
}

impl<E, F> SelectEnum<E, F> {
    pub fn new(inner: E, f: F) -> Self {
        Self { inner, f }
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E, F, U> Enumerator for SelectEnum<E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> U,
{
    type Item = U;

    fn current(&self) -> U {
        (self.f)(self.inner.current())
    }

    fn over(&self) -> bool {
        self.inner.over()
    }

    fn advance(&mut self) {
        self.inner.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zpipe_source::{from_slice, from_text};

    fn drain<E: Enumerator>(mut e: E) -> Vec<E::Item> {
        let mut out = Vec::new();
        while !e.over() {
            out.push(e.current());
            e.advance();
        }
        out
    }

    #[test]
    fn squares() {
        let v = [1, 2, 3];
        let e = from_slice(&v).pipe(Select::new(|x: i32| x * x));
        assert_eq!(drain(e), vec![1, 4, 9]);
    }

    #[test]
    fn may_change_the_element_type() {
        let e = SelectEnum::new(from_text("ab"), |c: char| c.to_ascii_uppercase().to_string());
        assert_eq!(drain(e), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn empty_stays_empty() {
        let v: [i32; 0] = [];
        assert!(from_slice(&v).pipe(Select::new(|x: i32| x + 1)).over());
    }

    #[test]
    fn into_inner_keeps_the_cursor_position() {
        let v = [1, 2, 3];
        let mut e = SelectEnum::new(from_slice(&v), |x: i32| x * 10);
        assert_eq!(e.current(), 10);
        e.advance();
        let inner = e.into_inner();
        assert_eq!(drain(inner), vec![2, 3]);
    }

    #[test]
    fn one_stage_serves_many_pipelines() {
        let double = Select::new(|x: i32| x * 2);
        let a = [1, 2];
        let b = [5];
        assert_eq!(drain(from_slice(&a).pipe(double)), vec![2, 4]);
        assert_eq!(drain(from_slice(&b).pipe(double)), vec![10]);
    }
}
