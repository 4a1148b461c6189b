//! Method-chaining spelling of every stage.
//!
//! `e.select(f).filter(p).sum()` is the same pipeline as
//! `e.pipe(Select::new(f)).pipe(Where::new(p)).pipe(Sum::new())`.

use std::ops::Add;

use zpipe_core::{Enumerator, Stage};

use crate::filter::WhereEnum;
use crate::select::SelectEnum;
use crate::terminal::aggregate::{fold, fold_first, larger, smaller};
use crate::terminal::{All, Any, Concat, Count, ToVector};

pub trait EnumeratorExt: Enumerator + Sized {
    fn select<U, F>(self, f: F) -> SelectEnum<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        SelectEnum::new(self, f)
    }

    fn filter<F>(self, f: F) -> WhereEnum<Self, F>
    where
        F: Fn(&Self::Item) -> bool,
    {
        WhereEnum::new(self, f)
    }

    fn to_vector(self) -> Vec<Self::Item> {
        ToVector.apply(self)
    }

    fn aggregate<F>(self, f: F) -> Self::Item
    where
        Self::Item: Default,
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        fold_first(self, f)
    }

    fn aggregate_with<S, F>(self, init: S, f: F) -> S
    where
        F: Fn(S, Self::Item) -> S,
    {
        fold(self, init, f)
    }

    fn max(self) -> Self::Item
    where
        Self::Item: PartialOrd + Default,
    {
        fold_first(self, larger)
    }

    fn min(self) -> Self::Item
    where
        Self::Item: PartialOrd + Default,
    {
        fold_first(self, smaller)
    }

    fn sum(self) -> usize
    where
        usize: Add<Self::Item, Output = usize>,
    {
        self.sum_from(0usize)
    }

    fn sum_from<S>(self, init: S) -> S
    where
        S: Add<Self::Item, Output = S>,
    {
        fold(self, init, |acc, v| acc + v)
    }

    fn count<X>(self, target: X) -> usize
    where
        Self::Item: PartialEq<X>,
    {
        Count::new(target).apply(self)
    }

    fn count_from<X, S>(self, target: X, init: S) -> S
    where
        Self::Item: PartialEq<X>,
        S: Clone + Add<Output = S> + From<u8>,
    {
        Count::from_seed(target, init).apply(self)
    }

    fn concat(self, separator: &str) -> String
    where
        Self::Item: AsRef<str>,
    {
        Concat::new(separator).apply(self)
    }

    fn all<F>(self, f: F) -> bool
    where
        F: Fn(&Self::Item) -> bool,
    {
        All::new(f).apply(self)
    }

    fn any<F>(self, f: F) -> bool
    where
        F: Fn(&Self::Item) -> bool,
    {
        Any::new(f).apply(self)
    }
}

impl<E: Enumerator> EnumeratorExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use zpipe_source::{from_slice, from_text, range, range_to, repeat};

    #[test]
    fn chained_map_filter_sum() {
        let total = range_to(10i64)
            .select(|x| x * x)
            .filter(|x| x % 2 == 1)
            .sum_from(0i64);
        assert_eq!(total, 1 + 9 + 25 + 49 + 81);
    }

    #[test]
    fn method_and_stage_forms_agree() {
        let v = [5, 3, 8, 1];
        assert_eq!(from_slice(&v).max(), 8);
        assert_eq!(from_slice(&v).min(), 1);
        assert_eq!(from_slice(&v).aggregate(|a, b| a - b), 5 - 3 - 8 - 1);
        assert_eq!(from_slice(&v).aggregate_with(String::new(), |s, x| s + &x.to_string()), "5381");
        assert_eq!(from_slice(&v).to_vector(), v.to_vec());
    }

    #[test]
    fn counting_and_joining() {
        assert_eq!(from_text("mississippi").count('s'), 4);
        assert_eq!(from_text("aab").count_from('a', 1i32), 3);
        assert_eq!(repeat("ab", 2).concat("-"), "ab-ab");
        let sizes: [usize; 3] = [4, 5, 6];
        assert_eq!(from_slice(&sizes).sum(), 15);
    }

    #[test]
    fn quantifiers() {
        let r = range(0, 20, 5).unwrap();
        assert!(r.all(|x| x % 5 == 0));
        assert!(range(0, 20, 5).unwrap().any(|x| *x == 15));
        assert!(!range_to(0).any(|_| true));
    }

    #[test]
    fn text_pipeline() {
        let upper = from_text("a1b2")
            .filter(|c| c.is_alphabetic())
            .select(|c| c.to_ascii_uppercase().to_string())
            .concat("");
        assert_eq!(upper, "AB");
    }
}
