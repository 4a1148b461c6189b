//! Generic sequence-to-text rendering.
//!
//! Rendering drains the enumerator it is handed, like any terminal stage. To
//! print a sequence and keep using it, render a clone ([`Rendered`] does this).

use std::fmt::{self, Display, Write};

use crate::config::RenderConfig;
use crate::enumerator::Enumerator;

/// Write `[e0, e1, ..., eN]` (or `[]`) to `out`.
pub fn render_to<E, W>(e: E, out: &mut W) -> fmt::Result
where
    E: Enumerator,
    E::Item: Display,
    W: Write + ?Sized,
{
    render_with(e, &RenderConfig::default(), out)
}

/// Render with explicit delimiters and an optional element limit.
pub fn render_with<E, W>(mut e: E, cfg: &RenderConfig, out: &mut W) -> fmt::Result
where
    E: Enumerator,
    E::Item: Display,
    W: Write + ?Sized,
{
    out.write_str(&cfg.open)?;
    let mut written = 0usize;
    while !e.over() {
        if written > 0 {
            out.write_str(&cfg.separator)?;
        }
        if cfg.limit == Some(written) {
            out.write_str(&cfg.ellipsis)?;
            break;
        }
        write!(out, "{}", e.current())?;
        e.advance();
        written += 1;
    }
    out.write_str(&cfg.close)
}

/// Render into a fresh `String`.
pub fn render<E>(e: E) -> String
where
    E: Enumerator,
    E::Item: Display,
{
    let mut out = String::new();
    // fmt::Write for String is infallible.
    let _ = render_to(e, &mut out);
    out
}

/// Render and hand the text to the log facade under `label`.
pub fn log_rendered<E>(label: &str, e: E) -> String
where
    E: Enumerator,
    E::Item: Display,
{
    let text = render(e);
    crate::trace::emit_rendered(label, &text);
    text
}

/// `Display` adapter that renders a clone of the wrapped enumerator, leaving
/// the original cursor where it was.
#[derive(Debug, Clone)]
pub struct Rendered<E> {
    inner: E,
    cfg: RenderConfig,
}

impl<E> Rendered<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            cfg: RenderConfig::default(),
        }
    }

    pub fn with_config(inner: E, cfg: RenderConfig) -> Self {
        Self { inner, cfg }
    }

    /// Take the untouched enumerator back.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E> Display for Rendered<E>
where
    E: Enumerator + Clone,
    E::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_with(self.inner.clone(), &self.cfg, f)
    }
}
