use thiserror::Error;

/// Canonical result for zpipe.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A construction-time check failed. `values` lists the named inputs that
    /// were checked, already rendered with `Debug`.
    #[error("Precondition violated: `{condition}` ({})", format_values(.values))]
    Precondition {
        condition: &'static str,
        values: Vec<(&'static str, String)>,
    },

    #[error("Invalid window [{begin}, {end}) over a sequence of length {len}")]
    Window { begin: usize, end: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Look up one of the named values captured by a precondition failure.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self {
            Error::Precondition { values, .. } => values
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

fn format_values(values: &[(&'static str, String)]) -> String {
    values
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
