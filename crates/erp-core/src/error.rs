//! Error types for the core crate.
//!
//! - [`AuthError`] - Login request and response failures
//! - [`ExportError`] - CSV serialization failures

use thiserror::Error;

/// Authentication failures.
///
/// Every variant reads as a login failure to the user; the variant only
/// records what went wrong for the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend answered with a non-2xx status.
    #[error("Login failed (HTTP {status})")]
    Rejected { status: u16 },
    /// The request never produced a response.
    #[error("Login failed: {0}")]
    Network(String),
    /// No response before the fetch timeout.
    #[error("Login failed: request timed out")]
    Timeout,
    /// The response body was not a login payload.
    #[error("Login failed: invalid response ({0})")]
    InvalidResponse(String),
}

/// CSV export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
