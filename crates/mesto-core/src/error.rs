// ── Core error types ──
//
// User-facing errors from mesto-core. Consumers never see HTTP status
// codes or JSON parse failures directly: the `From<mesto_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Card not found: {identifier}")]
    CardNotFound { identifier: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Request rejected by server: {message}")]
    Rejected { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("No card is awaiting delete confirmation")]
    NothingToConfirm,

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<mesto_api::Error> for CoreError {
    fn from(err: mesto_api::Error) -> Self {
        match err {
            mesto_api::Error::Authentication { message } => Self::AuthenticationFailed { message },
            mesto_api::Error::InvalidToken(message) => Self::AuthenticationFailed { message },
            mesto_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    Self::Timeout
                } else if e.is_connect() {
                    Self::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    Self::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            mesto_api::Error::InvalidUrl(e) => Self::Config {
                message: format!("Invalid URL: {e}"),
            },
            mesto_api::Error::Tls(msg) => Self::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            mesto_api::Error::NotFound { message } => Self::NotFound { message },
            mesto_api::Error::Validation { message } => Self::Rejected { message },
            mesto_api::Error::Api { status, message } => Self::Api {
                message,
                status: Some(status),
            },
            mesto_api::Error::Deserialization { message, body: _ } => {
                Self::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn maps_not_found() {
        let err = CoreError::from(mesto_api::Error::NotFound {
            message: "Card not found".into(),
        });
        assert!(matches!(err, CoreError::NotFound { ref message } if message == "Card not found"));
    }

    #[test]
    fn maps_validation_to_rejected() {
        let err = CoreError::from(mesto_api::Error::Validation {
            message: "bad avatar".into(),
        });
        assert!(matches!(err, CoreError::Rejected { .. }));
    }

    #[test]
    fn maps_status_errors() {
        let err = CoreError::from(mesto_api::Error::Api {
            status: 500,
            message: "boom".into(),
        });
        assert!(matches!(err, CoreError::Api { status: Some(500), .. }));
    }
}
