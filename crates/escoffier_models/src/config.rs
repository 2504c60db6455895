//! Immutable client configuration.

use escoffier_core::DEFAULT_TEMPERATURE;
use sha2::{Digest, Sha256};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection configuration for an OpenAI-compatible client.
///
/// Handles built from identical configurations are interchangeable, which is
/// what makes the process-wide handle cache correctness-neutral.
///
/// # Examples
///
/// ```
/// use escoffier_models::{ClientConfig, DEFAULT_MODEL};
///
/// let config = ClientConfig::new("sk-test", 0.7);
/// assert_eq!(config.model(), DEFAULT_MODEL);
/// ```
#[derive(Debug, Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// API credential
    api_key: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL of the chat-completions API
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Default sampling temperature applied when a request carries none
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
}

impl ClientConfig {
    /// Creates a configuration with the default model and base URL.
    pub fn new(api_key: impl Into<String>, temperature: f32) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature,
        }
    }

    /// Returns a builder for constructing a ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Cache key identifying the handle this configuration produces.
    ///
    /// The credential enters the key only as a SHA-256 digest so the cache
    /// never holds key material in its map keys.
    pub(crate) fn cache_key(&self) -> HandleKey {
        HandleKey {
            temperature_bits: self.temperature.to_bits(),
            credential_digest: Sha256::digest(self.api_key.as_bytes()).into(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Identity of a cached client handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct HandleKey {
    temperature_bits: u32,
    credential_digest: [u8; 32],
    model: String,
    base_url: String,
}
