//! Logging hooks.
//!
//! Kept deliberately thin: with the `tracing` feature off every call compiles
//! to nothing. Wire a subscriber up in the embedding binary.

/// One `debug` event under the `zpipe` target, all pairs folded into
/// `fields` as `k=v` separated by spaces.
#[cfg(feature = "tracing")]
pub fn emit_event(event: &str, key_values: &[(&str, String)]) {
    tracing::debug!(target: "zpipe", %event, fields = %format_fields(key_values));
}

#[cfg(not(feature = "tracing"))]
pub fn emit_event(_event: &str, _key_values: &[(&str, String)]) { /* no-op */
}

/// Forward a rendered sequence to the log facade at `info` level.
#[cfg(feature = "tracing")]
pub fn emit_rendered(label: &str, rendered: &str) {
    tracing::info!(target: "zpipe::render", %label, %rendered);
}

#[cfg(not(feature = "tracing"))]
pub fn emit_rendered(_label: &str, _rendered: &str) { /* no-op */
}

#[cfg(any(feature = "tracing", test))]
pub(crate) fn format_fields(key_values: &[(&str, String)]) -> String {
    key_values
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(" ")
}
