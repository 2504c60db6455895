//! Request and response types for chat-completion generation.

use crate::{Message, TokenUsage};
use serde::{Deserialize, Serialize};

/// A generation request for a chat-completion provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// Generated text
    text: String,
    /// Token usage, when the provider reports it
    #[builder(default)]
    usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Creates a new response with the given text and no usage data.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    /// Returns a builder for constructing a GenerateResponse.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }
}
