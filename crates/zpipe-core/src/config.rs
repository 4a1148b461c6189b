//! Rendering configuration that callers can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Written before the first element (also for an empty sequence).
    pub open: String,

    /// Written after the last element.
    pub close: String,

    /// Written between two consecutive elements.
    pub separator: String,

    /// Stop after this many elements and write `ellipsis` instead of the rest.
    /// The enumerator is still left positioned after the last rendered element.
    pub limit: Option<usize>,

    pub ellipsis: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
            separator: ", ".to_string(),
            limit: None,
            ellipsis: "...".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ZPIPE_RENDER_SEPARATOR`: element separator
    /// - `ZPIPE_RENDER_LIMIT`: max elements rendered before the ellipsis
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("ZPIPE_RENDER_SEPARATOR") {
            cfg.separator = s;
        }

        if let Ok(s) = std::env::var("ZPIPE_RENDER_LIMIT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.limit = Some(v);
            }
        }

        cfg
    }

    /// Parse a JSON document. Missing fields take their default value.
    pub fn from_json(doc: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(doc)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.limit == Some(0) && self.ellipsis.is_empty() {
            return Err(Error::Config(
                "limit 0 with an empty ellipsis renders nothing".into(),
            ));
        }
        Ok(())
    }
}
