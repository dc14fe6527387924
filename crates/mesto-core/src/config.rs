// ── Runtime session configuration ──
//
// Describes *how* to reach the gallery API. Carries credentials and
// connection tuning but never touches disk: the CLI (via mesto-config)
// builds a `SessionConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Public gallery API server.
pub const DEFAULT_SERVER: &str = "https://mesto.nomoreparties.co";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (local test servers with self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for one gallery session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server root (e.g. `https://mesto.nomoreparties.co`).
    pub server: Url,
    /// Cohort path segment (`/v1/{cohort}/`).
    pub cohort: String,
    /// Value of the `authorization` header.
    pub token: SecretString,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SessionConfig {
    /// Config with strict TLS and a 30 second timeout.
    pub fn new(server: Url, cohort: impl Into<String>, token: SecretString) -> Self {
        Self {
            server,
            cohort: cohort.into(),
            token,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}
