//! Settings layering and credential resolution.
//!
//! An optional TOML settings file supplies `api_key`, `model`, and
//! `base_url`; `ESCOFFIER_*` environment variables layer on top. The API
//! credential itself resolves with explicit user entry taking precedence
//! over environment-sourced values.

use escoffier_error::{ConfigError, CredentialError, EscoffierResult};
use serde::Deserialize;
use std::path::PathBuf;

/// Optional settings, loaded from file and environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// API credential, lowest-precedence source
    pub api_key: Option<String>,
    /// Model identifier override
    pub model: Option<String>,
    /// Base URL override for the chat-completions API
    pub base_url: Option<String>,
}

impl Settings {
    /// Loads settings from the settings file (if any) with `ESCOFFIER_*`
    /// environment variables layered on top.
    ///
    /// # Errors
    ///
    /// Fails on a malformed settings file.
    pub fn load() -> EscoffierResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = settings_path() {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(config::Environment::with_prefix("ESCOFFIER"));

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }
}

/// Path of the settings file: `ESCOFFIER_CONFIG` when set, otherwise
/// `<config_dir>/escoffier/escoffier.toml`.
fn settings_path() -> Option<PathBuf> {
    std::env::var_os("ESCOFFIER_CONFIG")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("escoffier").join("escoffier.toml")))
}

/// Resolves the API credential from flag, environment, and settings file.
pub fn resolve_credential(flag: Option<&str>, settings: &Settings) -> EscoffierResult<String> {
    let env_key = std::env::var("OPENAI_API_KEY").ok();
    resolve_credential_from(flag, env_key.as_deref(), settings.api_key.as_deref())
}

/// Precedence: explicit flag, then environment, then settings file. Blank
/// values at any level fall through to the next.
pub fn resolve_credential_from(
    flag: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> EscoffierResult<String> {
    for candidate in [flag, env, file].into_iter().flatten() {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    Err(CredentialError::new(
        "no API key found; pass --api-key, set OPENAI_API_KEY, or add api_key to the settings file",
    )
    .into())
}
