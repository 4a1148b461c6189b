//! Terminal stages: everything that drains a pipeline into a value.

pub mod aggregate;
pub mod collect;
pub mod quantifier;

pub use aggregate::{Aggregate, Aggregate2, Concat, Count, Max, Min, Sum};
pub use collect::ToVector;
pub use quantifier::{All, Any};
