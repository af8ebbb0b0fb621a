//! Error types for browser-facing operations.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`DownloadError`] - Client-side file download failures

use erp_core::AuthError;
use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, DNS).
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

impl From<FetchError> for AuthError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::HttpError(status) => AuthError::Rejected { status },
            FetchError::Timeout => AuthError::Timeout,
            FetchError::JsonParseError(msg) => AuthError::InvalidResponse(msg),
            FetchError::InvalidContent | FetchError::ResponseReadFailed => {
                AuthError::InvalidResponse(err.to_string())
            }
            FetchError::NoWindow
            | FetchError::RequestCreationFailed
            | FetchError::NetworkError(_) => AuthError::Network(err.to_string()),
        }
    }
}

/// Client-side file download errors.
#[derive(Debug, Clone, Error)]
pub enum DownloadError {
    #[error("Browser document not available")]
    NoDocument,
    #[error("Failed to create file blob")]
    BlobCreationFailed,
    #[error("Failed to create object URL")]
    ObjectUrlFailed,
    #[error("Failed to create download link")]
    LinkCreationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_map_to_auth_errors() {
        assert_eq!(
            AuthError::from(FetchError::HttpError(401)),
            AuthError::Rejected { status: 401 }
        );
        assert_eq!(AuthError::from(FetchError::Timeout), AuthError::Timeout);
        assert_eq!(
            AuthError::from(FetchError::NetworkError("offline".into())),
            AuthError::Network("Network error: offline".into())
        );
        assert!(matches!(
            AuthError::from(FetchError::JsonParseError("eof".into())),
            AuthError::InvalidResponse(msg) if msg == "eof"
        ));
    }
}
