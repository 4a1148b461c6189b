#![forbid(unsafe_code)]
//! zpipe-source: the enumerators a pipeline starts from.
//!
//! - [`StdEnum`] / [`TextEnum`]: borrowed views over an existing slice or string.
//! - [`RepeatEnum`]: one value, a bounded number of times.
//! - [`RangeEnum`]: a checked arithmetic progression over signed integers.
//!
//! None of these own or copy the underlying storage up front; the free
//! functions at the bottom are the short spellings used in pipelines.

pub mod range;
pub mod repeat;
pub mod std_enum;

pub use range::{RangeEnum, RangeValue};
pub use repeat::RepeatEnum;
pub use std_enum::{StdEnum, TextEnum};

use zpipe_core::Result;

/// Enumerate every element of `items`.
pub fn from_slice<T: Clone>(items: &[T]) -> StdEnum<'_, T> {
    StdEnum::new(items)
}

/// Enumerate the characters of `text`.
pub fn from_text(text: &str) -> TextEnum<'_> {
    TextEnum::new(text)
}

/// `value`, `n` times.
pub fn repeat<T: Clone>(value: T, n: usize) -> RepeatEnum<T> {
    RepeatEnum::new(value, n)
}

/// `begin, begin + step, ...` up to (excluding) `end`. Fails when `step` points
/// away from `end` or is zero.
pub fn range<T: RangeValue>(begin: T, end: T, step: T) -> Result<RangeEnum<T>> {
    RangeEnum::new(begin, end, step)
}

/// `begin` towards `end` by one, in whichever direction `end` lies.
pub fn range_between<T: RangeValue>(begin: T, end: T) -> RangeEnum<T> {
    RangeEnum::between(begin, end)
}

/// `0` towards `end` by one.
pub fn range_to<T: RangeValue>(end: T) -> RangeEnum<T> {
    RangeEnum::to(end)
}
