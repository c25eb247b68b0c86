//! Error handling module.
//!
//! Centralized error types using thiserror. The catalog itself cannot fail;
//! errors here come from the terminal layer, route parsing, and
//! serialization.

use thiserror::Error;

/// Main error type for puptui.
#[derive(Error, Debug)]
pub enum PupTuiError {
    /// IO errors (terminal setup, event polling)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (invalid selection, missing detail route)
    #[error("State error: {0}")]
    State(String),

    /// Route parsing errors (malformed detail-screen address)
    #[error("Route error: {0}")]
    Route(String),

    /// JSON serialization errors (catalog export)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for puptui operations.
pub type Result<T> = std::result::Result<T, PupTuiError>;

// Convenient error constructors
impl PupTuiError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a route error
    pub fn route(msg: impl Into<String>) -> Self {
        Self::Route(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}
