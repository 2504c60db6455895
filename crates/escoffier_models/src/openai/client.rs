//! Client for OpenAI-compatible chat completions APIs.

use crate::ClientConfig;
use crate::openai::conversions;
use crate::openai::dto::ChatResponse;
use async_trait::async_trait;
use escoffier_core::{GenerateRequest, GenerateResponse};
use escoffier_error::{EscoffierResult, ModelsError, ModelsErrorKind};
use escoffier_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for any OpenAI-compatible chat completions API.
///
/// Stateless aside from connection configuration; clones and cached handles
/// built from the same [`ClientConfig`] are interchangeable.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: ClientConfig,
}

impl OpenAiClient {
    /// Creates a new client from an immutable configuration.
    #[instrument(skip(config), fields(model = %config.model(), url = %config.base_url()))]
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::new();

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            "Created OpenAI-compatible client"
        );

        Self { client, config }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url())
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    /// Generates a response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(provider = self.provider_name(), model = %self.config.model()))]
    async fn generate(&self, req: &GenerateRequest) -> EscoffierResult<GenerateResponse> {
        let chat_request = conversions::to_chat_request(
            req,
            self.config.model(),
            *self.config.temperature(),
        )?;

        debug!(
            model = %self.config.model(),
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()),
            )
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {e}")))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            ModelsError::new(ModelsErrorKind::Parse(format!("Failed to parse JSON: {e}")))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        Ok(conversions::from_chat_response(&chat_response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
