//! Unified error types for the API server.

use axum::http::Method;
use thiserror::Error;

/// Unified error type for the API server.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The same method and path were registered twice.
    #[error("duplicate route: {method} {path} is already registered")]
    DuplicateRoute {
        /// HTTP method of the rejected route.
        method: Method,
        /// Path of the rejected route.
        path: String,
    },

    /// Route path the router cannot mount.
    #[error("invalid route path {0:?}: paths must start with '/' and contain no ':' or '*'")]
    InvalidRoutePath(String),

    /// Template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
