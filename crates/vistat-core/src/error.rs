//! Shared error type across vistat crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// No visit store configured.
    StoreUnconfigured,
    /// Visit store reachable but failing.
    StoreUnavailable,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::StoreUnconfigured => "STORE_UNCONFIGURED",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VistatError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VistatError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("visit store is not configured")]
    StoreUnconfigured,
    #[error("visit store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl VistatError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VistatError::BadRequest(_) => ClientCode::BadRequest,
            VistatError::StoreUnconfigured => ClientCode::StoreUnconfigured,
            VistatError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            VistatError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            VistatError::Internal(_) => ClientCode::Internal,
        }
    }

    /// HTTP status used by the gateway's degraded responses.
    pub fn http_status(&self) -> u16 {
        match self {
            VistatError::BadRequest(_) | VistatError::UnsupportedVersion => 400,
            VistatError::StoreUnconfigured => 503,
            VistatError::StoreUnavailable(_) | VistatError::Internal(_) => 500,
        }
    }
}
