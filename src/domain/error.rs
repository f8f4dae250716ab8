//! Error types for the shelfscout plugin.
//!
//! [`ShelfError`] covers every failure the plugin can observe, from catalog
//! responses to theme loading. All variants derive their `Display` through
//! `thiserror`; the UI never shows these strings directly, it maps them onto
//! the fixed user-facing messages instead.

use thiserror::Error;

/// The main error type for shelfscout operations.
///
/// # Examples
///
/// ```
/// use shelfscout::ShelfError;
///
/// let err = ShelfError::Http { status: 503 };
/// assert_eq!(err.to_string(), "Catalog responded with status 503");
/// ```
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The catalog answered with a non-success status code.
    ///
    /// The Zellij host also reports connection failures this way, as a
    /// status outside the success range.
    #[error("Catalog responded with status {status}")]
    Http {
        /// HTTP status reported by the host.
        status: u16,
    },

    /// The response body was not valid JSON, or did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response parsed but carried no truthy content.
    #[error("Catalog returned an empty payload")]
    EmptyPayload,

    /// The response parsed but had an unexpected structure.
    #[error("Unexpected payload: {0}")]
    Payload(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is present but unusable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for shelfscout operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
