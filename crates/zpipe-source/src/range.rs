//! Checked arithmetic progressions.
//!
//! `RangeEnum` walks `cur, cur + step, ...` and stops on `cur == end`. The
//! explicit constructor moves `end` forward to the next multiple of `step`
//! from `begin`, so the equality test always fires, whatever the span:
//! `(0, 10, 3)` stores `end = 12` and yields `0, 3, 6, 9`.

use std::fmt::Debug;

use zpipe_core::check::{contract_violation, precondition_failed};
use zpipe_core::trace::emit_event;
use zpipe_core::{ensure_precondition, Enumerator, Result};

/// Integer types a progression can run over.
pub trait RangeValue: Copy + PartialOrd + Debug {
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_rem_euclid(self, rhs: Self) -> Option<Self>;
}

macro_rules! range_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl RangeValue for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const NEG_ONE: Self = -1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }
                fn checked_rem_euclid(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_rem_euclid(self, rhs)
                }
            }
        )*
    };
}

range_value!(i8, i16, i32, i64, i128, isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEnum<T> {
    cur: T,
    end: T,
    step: T,
}

impl<T: RangeValue> RangeEnum<T> {
    /// `begin` towards `end` by `step`.
    ///
    /// Requires `step > 0 && begin <= end` or `step < 0 && begin >= end`; a
    /// zero step never qualifies.
    pub fn new(begin: T, end: T, step: T) -> Result<Self> {
        ensure_precondition!(
            (step > T::ZERO && begin <= end) || (step < T::ZERO && begin >= end);
            begin, end, step
        );

        let Some(adjusted) = adjusted_end(begin, end, step) else {
            return Err(precondition_failed(
                "adjusted end fits the value type",
                vec![
                    ("begin", format!("{begin:?}")),
                    ("end", format!("{end:?}")),
                    ("step", format!("{step:?}")),
                ],
            ));
        };

        emit_event(
            "range",
            &[
                ("begin", format!("{begin:?}")),
                ("end", format!("{adjusted:?}")),
                ("step", format!("{step:?}")),
            ],
        );
        Ok(Self {
            cur: begin,
            end: adjusted,
            step,
        })
    }

    /// Step `+1` when `begin < end`, `-1` otherwise.
    pub fn between(begin: T, end: T) -> Self {
        let step = if begin < end { T::ONE } else { T::NEG_ONE };
        Self {
            cur: begin,
            end,
            step,
        }
    }

    /// `0` towards `end`.
    pub fn to(end: T) -> Self {
        Self::between(T::ZERO, end)
    }

    /// The stop value after adjustment.
    pub fn end(&self) -> T {
        self.end
    }

    pub fn step(&self) -> T {
        self.step
    }
}

/// Smallest value `>= end` (for a positive step; `<=` for a negative one)
/// reachable from `begin` in whole steps.
///
/// `end - begin` can exceed the value type, so the remainder is taken from
/// the two residues instead. Only the returned end itself may overflow.
fn adjusted_end<T: RangeValue>(begin: T, end: T, step: T) -> Option<T> {
    if step == T::ONE || step == T::NEG_ONE {
        return Some(end);
    }
    // Both residues lie in [0, |step|), so their difference cannot overflow.
    let diff = end
        .checked_rem_euclid(step)?
        .checked_sub(begin.checked_rem_euclid(step)?)?;
    // Same sign as `step`, magnitude below `|step|`.
    let rem = if step > T::ZERO && diff < T::ZERO {
        diff.checked_add(step)?
    } else if step < T::ZERO && diff > T::ZERO {
        diff.checked_add(step)?
    } else {
        diff
    };
    if rem == T::ZERO {
        return Some(end);
    }
    end.checked_add(step.checked_sub(rem)?)
}

impl<T: RangeValue> Enumerator for RangeEnum<T> {
    type Item = T;

    fn current(&self) -> T {
        if self.cur == self.end {
            contract_violation("current", "RangeEnum");
        }
        self.cur
    }

    fn over(&self) -> bool {
        self.cur == self.end
    }

    fn advance(&mut self) {
        if self.cur == self.end {
            contract_violation("advance", "RangeEnum");
        }
        self.cur = match self.cur.checked_add(self.step) {
            Some(next) => next,
            None => contract_violation("advance", "RangeEnum"),
        };
    }
}
