//! Convenient re-exports for downstream crates.

pub use crate::config::RenderConfig;
pub use crate::enumerator::{Enumerator, Values};
pub use crate::error::{Error, Result};
pub use crate::render::{render, render_to, render_with, Rendered};
pub use crate::stage::{pipe, Stage};
