#![forbid(unsafe_code)]
//! zpipe: lazy, single-pass enumerators composed left to right.
//!
//! A pipeline is one source, any number of transformations and exactly one
//! terminal:
//!
//! ```
//! use zpipe::prelude::*;
//!
//! let v = [1, 2, 3, 4];
//! let evens = from_slice(&v)
//!     .pipe(Where::new(|x: &i32| x % 2 == 0))
//!     .pipe(Select::new(|x: i32| x * x))
//!     .pipe(ToVector);
//! assert_eq!(evens, vec![4, 16]);
//!
//! // Same thing, method style.
//! assert_eq!(from_slice(&v).filter(|x| x % 2 == 0).select(|x| x * x).to_vector(), vec![4, 16]);
//! ```
//!
//! Member crates:
//! - [`zpipe_core`]: the `Enumerator` protocol, `Stage`/`pipe`, rendering, errors.
//! - [`zpipe_source`]: slice, text, repeat and range sources.
//! - [`zpipe_operators`]: select/where and the terminal stages.

pub use zpipe_core;
pub use zpipe_operators;
pub use zpipe_source;

pub use zpipe_core::{ensure_precondition, pipe, Enumerator, Error, Result, Stage};
pub use zpipe_core::render::{log_rendered, render, render_to, render_with, Rendered};
pub use zpipe_core::config::RenderConfig;

pub mod prelude {
    //! Everything a pipeline usually needs in one import.

    pub use zpipe_core::prelude::*;
    pub use zpipe_operators::{
        Aggregate, Aggregate2, All, Any, Concat, Count, EnumeratorExt, Max, Min, Select,
        SelectEnum, Sum, ToVector, Where, WhereEnum,
    };
    pub use zpipe_source::{
        from_slice, from_text, range, range_between, range_to, repeat, RangeEnum, RepeatEnum,
        StdEnum, TextEnum,
    };
}
