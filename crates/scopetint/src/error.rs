//! Catalog error types.

use std::path::PathBuf;

use scopetint_resolve::ParseThemeError;
use thiserror::Error;

/// Errors surfaced by [`ThemeCatalog`](crate::ThemeCatalog) operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested theme name is not registered. The catalog is left
    /// unchanged.
    #[error("no such theme: {0}")]
    ThemeNotFound(String),

    /// A theme file or directory could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// The file or directory that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A theme file was read but its document is invalid. Fatal for that one
    /// theme; others remain usable.
    #[error("malformed theme in {}", .path.display())]
    Malformed {
        /// The offending file.
        path: PathBuf,
        #[source]
        source: ParseThemeError,
    },
}
