//! Shared configuration for the mesto CLI.
//!
//! TOML profiles, token resolution (env + keyring + plaintext), and
//! translation to `mesto_core::SessionConfig`. The CLI layers its
//! `GlobalOpts` overrides on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mesto_core::{DEFAULT_SERVER, SessionConfig, TlsVerification};

/// Keyring service name; entries are keyed `{profile}/token`.
pub const KEYRING_SERVICE: &str = "mesto";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no token configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named gallery profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Name of the active profile: explicit choice, then `default_profile`,
    /// then `"default"`.
    pub fn active_profile_name(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into())
    }

    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named gallery profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// API server root (e.g. "https://mesto.nomoreparties.co").
    #[serde(default = "default_server")]
    pub server: String,

    /// Cohort identifier, the `/v1/{cohort}/` path segment.
    pub cohort: String,

    /// Token (plaintext; prefer keyring or env var).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Environment variable holding the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,

    /// Path to a custom CA certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// Override the insecure TLS default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Override the timeout default (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Profile {
    pub fn new(cohort: impl Into<String>) -> Self {
        Self {
            server: default_server(),
            cohort: cohort.into(),
            token: None,
            token_env: None,
            ca_cert: None,
            insecure: None,
            timeout: None,
        }
    }
}

fn default_server() -> String {
    DEFAULT_SERVER.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "mesto").map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("mesto");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path, layered over defaults and under
/// `MESTO_`-prefixed environment variables (`__` separates keys).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("MESTO_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file is missing or broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, ConfigError> {
    Ok(keyring::Entry::new(
        KEYRING_SERVICE,
        &format!("{profile_name}/token"),
    )?)
}

/// Resolve the token from the credential chain (no CLI flag step).
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a token in the system keyring for `profile_name`.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(token)?;
    Ok(())
}

// ── Profile → SessionConfig ─────────────────────────────────────────

/// Build a `SessionConfig` from a profile, with no CLI overrides.
pub fn profile_to_session_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<SessionConfig, ConfigError> {
    let token = resolve_token(profile, profile_name)?;
    session_config(profile, defaults, token)
}

/// Build a `SessionConfig` from a profile and an already-resolved token.
pub fn session_config(
    profile: &Profile,
    defaults: &Defaults,
    token: SecretString,
) -> Result<SessionConfig, ConfigError> {
    let server: url::Url = profile
        .server
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {}", profile.server),
        })?;

    let cohort = profile.cohort.trim();
    if cohort.is_empty() {
        return Err(ConfigError::Validation {
            field: "cohort".into(),
            reason: "must not be empty".into(),
        });
    }

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let mut config = SessionConfig::new(server, cohort, token);
    config.tls = tls;
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn write(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.timeout, 30);
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn loads_profiles_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            r#"
default_profile = "work"

[defaults]
output = "json"

[profiles.work]
cohort = "cohort-42"
token = "abc"
timeout = 5
"#,
        );

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.active_profile_name(None), "work");

        let work = cfg.profile("work").unwrap();
        assert_eq!(work.server, DEFAULT_SERVER);
        assert_eq!(work.cohort, "cohort-42");
        assert_eq!(work.timeout, Some(5));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.profile("nope"),
            Err(ConfigError::UnknownProfile { .. })
        ));
        assert_eq!(cfg.active_profile_name(Some("other")), "other");
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        let mut profile = Profile::new("cohort-7");
        profile.token_env = Some("MESTO_TEST_TOKEN_VAR".into());
        cfg.profiles.insert("default".into(), profile);
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles, cfg.profiles);
    }

    #[test]
    fn session_config_applies_overrides() {
        let mut profile = Profile::new("cohort-7");
        profile.timeout = Some(12);
        profile.ca_cert = Some(PathBuf::from("/tmp/ca.pem"));

        let session =
            session_config(&profile, &Defaults::default(), SecretString::from("tok")).unwrap();

        assert_eq!(session.cohort, "cohort-7");
        assert_eq!(session.timeout, Duration::from_secs(12));
        assert_eq!(session.tls, TlsVerification::CustomCa("/tmp/ca.pem".into()));
        assert_eq!(session.token.expose_secret(), "tok");
    }

    #[test]
    fn insecure_beats_custom_ca() {
        let mut profile = Profile::new("cohort-7");
        profile.insecure = Some(true);
        profile.ca_cert = Some(PathBuf::from("/tmp/ca.pem"));

        let session =
            session_config(&profile, &Defaults::default(), SecretString::from("tok")).unwrap();
        assert_eq!(session.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn rejects_bad_server_and_empty_cohort() {
        let mut profile = Profile::new("  ");
        assert!(matches!(
            session_config(&profile, &Defaults::default(), SecretString::from("t")),
            Err(ConfigError::Validation { ref field, .. }) if field == "cohort"
        ));

        profile.cohort = "c".into();
        profile.server = "not a url".into();
        assert!(matches!(
            session_config(&profile, &Defaults::default(), SecretString::from("t")),
            Err(ConfigError::Validation { ref field, .. }) if field == "server"
        ));
    }

    #[test]
    fn plaintext_token_is_last_resort() {
        let mut profile = Profile::new("cohort-7");
        profile.token = Some("plain".into());
        // Unset variable: falls through to the keyring (empty for this
        // made-up profile name) and then to plaintext.
        profile.token_env = Some("MESTO_TEST_SURELY_UNSET_VARIABLE".into());

        let token = resolve_token(&profile, "mesto-config-test-profile").unwrap();
        assert_eq!(token.expose_secret(), "plain");
    }

    #[test]
    fn no_token_anywhere() {
        let profile = Profile::new("cohort-7");
        assert!(matches!(
            resolve_token(&profile, "mesto-config-test-profile"),
            Err(ConfigError::NoCredentials { .. })
        ));
    }
}
