//! CLI configuration: thin wrapper around `mesto_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects the
//! `GlobalOpts` overrides (--server, --cohort, --token, ...).

use secrecy::SecretString;

use mesto_core::SessionConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use mesto_config::{
    Config, Defaults, Profile, config_path, load_config, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Build a `SessionConfig` from the config file, active profile and
/// CLI overrides. Flags win over profile values.
pub fn build_session_config(global: &GlobalOpts) -> Result<SessionConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        // An explicitly named profile must exist.
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(&cfg),
            });
        }
        // No profile: flags / env vars alone must carry the cohort.
        None => {
            let cohort = global.cohort.clone().ok_or_else(|| CliError::NoConfig {
                path: config_path().display().to_string(),
            })?;
            Profile::new(cohort)
        }
    };

    resolve_profile(&profile, &profile_name, &cfg.defaults, global)
}

/// Apply flag overrides to `profile` and resolve its token.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<SessionConfig, CliError> {
    let mut profile = profile.clone();
    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if let Some(ref cohort) = global.cohort {
        profile.cohort.clone_from(cohort);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    let token = match global.token {
        Some(ref token) => SecretString::from(token.clone()),
        None => mesto_config::resolve_token(&profile, profile_name)?,
    };

    Ok(mesto_config::session_config(&profile, defaults, token)?)
}

pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
