#![forbid(unsafe_code)]
//! zpipe-core: the enumerator protocol and the glue every pipeline stage shares.
//!
//! Design intent:
//! - Keep this crate free of concrete sources and combinators; those live in
//!   `zpipe-source` and `zpipe-operators` and only depend on the traits here.
//! - Everything is synchronous and single-threaded. An enumerator is a plain
//!   value; cloning it forks the traversal.
//! - Diagnostics (precondition reporting, logging) are small modules here so the
//!   other crates can call into them without pulling a logging stack by default.

pub mod check;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod prelude;
pub mod render;
pub mod stage;
pub mod trace;

pub use enumerator::{Enumerator, Values};
pub use error::{Error, Result};
pub use stage::{pipe, Stage};
