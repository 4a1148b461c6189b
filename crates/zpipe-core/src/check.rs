//! Fail-fast checks used by sources and combinators.
//!
//! Two kinds of failure exist. A precondition violation is detected while a
//! stage is being constructed and is returned as [`Error::Precondition`] with
//! the offending inputs attached. A contract violation (`current`/`advance`
//! past the end) is a caller bug and panics immediately.

use crate::error::Error;

/// Return `Err(Error::Precondition)` from the enclosing function unless `cond`
/// holds. The listed identifiers are captured by name with their `Debug` form.
///
/// ```
/// use zpipe_core::{ensure_precondition, Result};
///
/// fn positive(step: i32) -> Result<i32> {
///     ensure_precondition!(step > 0; step);
///     Ok(step)
/// }
///
/// assert!(positive(1).is_ok());
/// assert!(positive(0).unwrap_err().is_precondition());
/// ```
#[macro_export]
macro_rules! ensure_precondition {
    ($cond:expr; $($name:ident),* $(,)?) => {
        if !($cond) {
            return Err($crate::check::precondition_failed(
                stringify!($cond),
                vec![$((stringify!($name), format!("{:?}", $name))),*],
            ));
        }
    };
}

/// Build the error for a failed precondition and report it to the log facade.
pub fn precondition_failed(condition: &'static str, values: Vec<(&'static str, String)>) -> Error {
    crate::trace::emit_event(
        "precondition_failed",
        &[
            ("condition", condition.to_string()),
            ("values", format!("{values:?}")),
        ],
    );
    Error::Precondition { condition, values }
}

/// Abort on an out-of-contract call (`current`/`advance` on an exhausted
/// enumerator).
#[track_caller]
#[cold]
pub fn contract_violation(op: &'static str, enumerator: &'static str) -> ! {
    panic!("contract violation: `{op}` called on exhausted {enumerator}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    fn ordered(begin: i32, end: i32) -> Result<()> {
        ensure_precondition!(begin <= end; begin, end);
        Ok(())
    }

    #[test]
    fn passing_precondition_is_ok() {
        assert!(ordered(1, 2).is_ok());
    }

    #[test]
    fn failing_precondition_captures_names() {
        let err = ordered(5, 2).unwrap_err();
        match &err {
            Error::Precondition { condition, values } => {
                assert_eq!(*condition, "begin <= end");
                assert_eq!(values.len(), 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.value("begin"), Some("5"));
        assert_eq!(err.value("end"), Some("2"));
    }

    #[test]
    #[should_panic(expected = "contract violation: `current` called on exhausted StdEnum")]
    fn contract_violation_panics() {
        contract_violation("current", "StdEnum");
    }
}
