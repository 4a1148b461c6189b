#![forbid(unsafe_code)]
//! zpipe-operators: transformation and terminal stages.
//!
//! Design intent:
//! - Transformations ([`Select`], [`Where`]) own the enumerator they wrap and
//!   delegate to it explicitly; they stay lazy and never buffer.
//! - Terminals ([`ToVector`], the folds, the quantifiers) drain their input and
//!   hold nothing but their configuration.
//! - Every stage works both through `Enumerator::pipe` and as a method on
//!   [`EnumeratorExt`].

pub mod ext;
pub mod filter;
pub mod select;
pub mod terminal;

pub use ext::EnumeratorExt;
pub use filter::{Where, WhereEnum};
pub use select::{Select, SelectEnum};
pub use terminal::{
    Aggregate, Aggregate2, All, Any, Concat, Count, Max, Min, Sum, ToVector,
};
