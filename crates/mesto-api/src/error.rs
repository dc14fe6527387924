use thiserror::Error;

/// Top-level error type for the `mesto-api` crate.
///
/// Covers every failure mode of the gallery REST API: authentication,
/// transport, HTTP status errors and malformed payloads. `mesto-core`
/// maps these into its own `CoreError` before they reach a UI.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The server rejected the token (HTTP 401 / 403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The token could not be turned into a header value.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// The resource does not exist (HTTP 404).
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The server refused the payload (HTTP 400).
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Any other non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the token was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::InvalidToken(_))
    }

    /// Returns `true` if this is a transient error a caller might retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(400),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn server_errors_are_transient() {
        let err = Error::Api {
            status: 503,
            message: "unavailable".into(),
        };
        assert!(err.is_transient());
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn client_errors_are_not_transient() {
        let err = Error::Validation {
            message: "bad link".into(),
        };
        assert!(!err.is_transient());
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn not_found_is_detected() {
        let err = Error::NotFound {
            message: "no such card".into(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
    }
}
