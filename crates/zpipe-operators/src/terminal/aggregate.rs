//! Folds.
//!
//! [`Aggregate`] seeds the accumulator with the first element; [`Aggregate2`]
//! takes an explicit seed whose type may differ from the element type. The
//! remaining stages are named specializations of one or the other.

use std::ops::Add;

use zpipe_core::{Enumerator, Stage};

use crate::select::SelectEnum;

/// Left fold from `init`. Shared by every seeded fold.
pub(crate) fn fold<E, S, F>(mut input: E, init: S, f: F) -> S
where
    E: Enumerator,
    F: Fn(S, E::Item) -> S,
{
    let mut acc = init;
    while !input.over() {
        acc = f(acc, input.current());
        input.advance();
    }
    acc
}

/// Left fold seeded with the first element.
pub(crate) fn fold_first<E, F>(mut input: E, f: F) -> E::Item
where
    E: Enumerator,
    E::Item: Default,
    F: Fn(E::Item, E::Item) -> E::Item,
{
    if input.over() {
        return E::Item::default();
    }
    let first = input.current();
    input.advance();
    fold(input, first, f)
}

/// Implicit-seed fold. An empty input yields `T::default()` rather than an
/// error; otherwise each element is folded in exactly once.
#[derive(Debug, Clone, Copy)]
pub struct Aggregate<F> {
    f: F,
}

impl<F> Aggregate<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<E, F> Stage<E> for Aggregate<F>
where
    E: Enumerator,
    E::Item: Default,
    F: Fn(E::Item, E::Item) -> E::Item,
{
    type Output = E::Item;

    fn apply(&self, input: E) -> E::Item {
        fold_first(input, &self.f)
    }
}

/// Explicit-seed fold: `init` comes back unchanged for an empty input.
#[derive(Debug, Clone, Copy)]
pub struct Aggregate2<F, S> {
    f: F,
    init: S,
}

impl<F, S> Aggregate2<F, S> {
    pub fn new(f: F, init: S) -> Self {
        Self { f, init }
    }
}

impl<E, F, S> Stage<E> for Aggregate2<F, S>
where
    E: Enumerator,
    S: Clone,
    F: Fn(S, E::Item) -> S,
{
    type Output = S;

    fn apply(&self, input: E) -> S {
        fold(input, self.init.clone(), &self.f)
    }
}

pub(crate) fn larger<T: PartialOrd>(u: T, v: T) -> T {
    if v > u {
        v
    } else {
        u
    }
}

pub(crate) fn smaller<T: PartialOrd>(u: T, v: T) -> T {
    if v < u {
        v
    } else {
        u
    }
}

/// Largest element; ties keep the earlier one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl<E> Stage<E> for Max
where
    E: Enumerator,
    E::Item: PartialOrd + Default,
{
    type Output = E::Item;

    fn apply(&self, input: E) -> E::Item {
        fold_first(input, larger)
    }
}

/// Smallest element; ties keep the earlier one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl<E> Stage<E> for Min
where
    E: Enumerator,
    E::Item: PartialOrd + Default,
{
    type Output = E::Item;

    fn apply(&self, input: E) -> E::Item {
        fold_first(input, smaller)
    }
}

/// Sum of the elements on top of a seed (`0usize` by default).
#[derive(Debug, Clone, Copy)]
pub struct Sum<S = usize> {
    init: S,
}

impl Sum<usize> {
    pub fn new() -> Self {
        Self { init: 0 }
    }
}

impl Default for Sum<usize> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Sum<S> {
    pub fn from_seed(init: S) -> Self {
        Self { init }
    }
}

impl<E, S> Stage<E> for Sum<S>
where
    E: Enumerator,
    S: Clone + Add<E::Item, Output = S>,
{
    type Output = S;

    fn apply(&self, input: E) -> S {
        fold(input, self.init.clone(), |acc, v| acc + v)
    }
}

/// Number of elements equal to `target`, added to a seed (`0usize` by default).
#[derive(Debug, Clone, Copy)]
pub struct Count<X, S = usize> {
    target: X,
    init: S,
}

impl<X> Count<X, usize> {
    pub fn new(target: X) -> Self {
        Self { target, init: 0 }
    }
}

impl<X, S> Count<X, S> {
    pub fn from_seed(target: X, init: S) -> Self {
        Self { target, init }
    }
}

impl<E, X, S> Stage<E> for Count<X, S>
where
    E: Enumerator,
    E::Item: PartialEq<X>,
    S: Clone + Add<Output = S> + From<u8>,
{
    type Output = S;

    fn apply(&self, input: E) -> S {
        fold(input, self.init.clone(), |acc, v| {
            if v == self.target {
                acc + S::from(1)
            } else {
                acc
            }
        })
    }
}

/// Joins text elements with a separator, without a leading or trailing one.
/// An empty input yields an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concat {
    separator: String,
}

impl Concat {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Separator made of `c` repeated `n` times.
    pub fn repeated(c: char, n: usize) -> Self {
        Self::new(std::iter::repeat(c).take(n).collect::<String>())
    }

    pub fn with_char(c: char) -> Self {
        Self::repeated(c, 1)
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl<E> Stage<E> for Concat
where
    E: Enumerator,
    E::Item: AsRef<str>,
{
    type Output = String;

    fn apply(&self, input: E) -> String {
        let owned = SelectEnum::new(input, |v: E::Item| v.as_ref().to_owned());
        fold_first(owned, |mut acc: String, v: String| {
            acc.push_str(&self.separator);
            acc.push_str(&v);
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zpipe_source::{from_slice, from_text, range_to, repeat};

    #[test]
    fn aggregate_folds_each_element_once() {
        let v = [1, 2, 3, 4];
        assert_eq!(from_slice(&v).pipe(Aggregate::new(|a: i32, b: i32| a + b)), 10);
        // A non-idempotent fold shows the first element is not doubled.
        assert_eq!(from_slice(&v).pipe(Aggregate::new(|a: i32, b: i32| a * 10 + b)), 1234);
    }

    #[test]
    fn aggregate_on_empty_gives_default() {
        let v: [i64; 0] = [];
        assert_eq!(from_slice(&v).pipe(Aggregate::new(|a: i64, b: i64| a * b)), 0);
    }

    #[test]
    fn aggregate2_changes_accumulator_type() {
        let total_len = Aggregate2::new(|acc: usize, s: &str| acc + s.len(), 0);
        assert_eq!(from_slice(&["ab", "cde"]).pipe(total_len), 5);
        let v: [&str; 0] = [];
        assert_eq!(from_slice(&v).pipe(Aggregate2::new(|acc: usize, s: &str| acc + s.len(), 7)), 7);
    }

    #[test]
    fn max_and_min() {
        let v = [3, 1, 4, 1, 5];
        assert_eq!(from_slice(&v).pipe(Max), 5);
        assert_eq!(from_slice(&v).pipe(Min), 1);
        assert_eq!(range_to(-4).pipe(Min), -3);
        let none: [f64; 0] = [];
        assert_eq!(from_slice(&none).pipe(Max), 0.0);
    }

    #[test]
    fn sum_with_default_and_explicit_seed() {
        let counts: [usize; 3] = [1, 2, 3];
        assert_eq!(from_slice(&counts).pipe(Sum::new()), 6);
        let empty: [i32; 0] = [];
        assert_eq!(from_slice(&empty).pipe(Sum::from_seed(0)), 0);
        assert_eq!(range_to(5).pipe(Sum::from_seed(100)), 110);
        assert_eq!(from_slice(&[0.5, 0.25]).pipe(Sum::from_seed(1.0)), 1.75);
    }

    #[test]
    fn count_matches_target() {
        let v = [2, 2, 3];
        assert_eq!(from_slice(&v).pipe(Count::new(2)), 2);
        assert_eq!(from_slice(&v).pipe(Count::from_seed(3, 10u64)), 11);
        assert_eq!(from_text("banana").pipe(Count::new('a')), 3);
    }

    #[test]
    fn concat_joins_without_outer_separators() {
        let v = ["a", "b", "c"];
        assert_eq!(from_slice(&v).pipe(Concat::new(",")), "a,b,c");
        assert_eq!(from_slice(&["a", "b"]).pipe(Concat::default()), "ab");
        assert_eq!(from_slice(&["solo"]).pipe(Concat::new(", ")), "solo");
        let none: [&str; 0] = [];
        assert_eq!(from_slice(&none).pipe(Concat::new(",")), "");
    }

    #[test]
    fn concat_separator_constructors() {
        assert_eq!(Concat::repeated('-', 3).separator(), "---");
        assert_eq!(Concat::with_char('/').separator(), "/");
        assert_eq!(Concat::repeated('-', 0), Concat::default());
        let words = vec!["x".to_string(), "y".to_string()];
        assert_eq!(from_slice(&words).pipe(Concat::repeated('=', 2)), "x==y");
        assert_eq!(repeat("ha", 3).pipe(Concat::with_char(' ')), "ha ha ha");
    }
}
