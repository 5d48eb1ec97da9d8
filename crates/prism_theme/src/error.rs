//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by composition, registry construction and I/O-backed adapters.
///
/// Lookups that model user-facing input (registry queries, applying a theme
/// by name) never produce these; they return `Option`/`bool` and log instead.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Variant key not present in the accent catalog
    #[error("unknown theme variant `{0}`")]
    UnknownVariant(String),

    /// Color scheme name other than `light`/`dark`
    #[error("unknown color scheme `{0}`")]
    UnknownScheme(String),

    /// A theme with this name is already registered
    #[error("theme `{0}` is already registered")]
    DuplicateTheme(String),

    /// Filesystem access failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
