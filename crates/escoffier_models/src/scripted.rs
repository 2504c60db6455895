//! Scripted driver for tests.
//!
//! Returns deterministic responses based on prompt substring matching, so
//! pipeline behavior can be exercised without network access or API costs.

use async_trait::async_trait;
use escoffier_core::{GenerateRequest, GenerateResponse};
use escoffier_error::{EscoffierResult, ModelsError, ModelsErrorKind};
use escoffier_interface::CompletionDriver;
use std::sync::Mutex;

/// A scripted text-completion driver.
///
/// Responses are matched by checking whether the final message of the prompt
/// contains a registered substring; registration order decides ties. Prompts
/// matching a registered failure substring fail instead, and every received
/// prompt is logged for call-count assertions.
///
/// # Examples
///
/// ```
/// use escoffier_models::ScriptedDriver;
///
/// let driver = ScriptedDriver::new()
///     .with_response("restaurant name", "Casa Verde")
///     .with_default("ok");
/// assert_eq!(driver.call_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    /// Ordered (prompt substring, response) pairs
    responses: Vec<(String, String)>,
    /// Prompt substrings that trigger a scripted upstream failure
    failures: Vec<String>,
    /// Response when nothing matches
    default_response: Option<String>,
    /// Every prompt received, in call order
    calls: Mutex<Vec<String>>,
}

impl ScriptedDriver {
    /// Creates a driver with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a response for prompts containing a substring.
    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
        self
    }

    /// Registers a scripted failure for prompts containing a substring.
    pub fn with_failure(mut self, prompt_contains: &str) -> Self {
        self.failures.push(prompt_contains.to_string());
        self
    }

    /// Sets the response returned when no substring matches.
    pub fn with_default(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of generate calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    /// Prompts received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> EscoffierResult<GenerateResponse> {
        let prompt = req
            .messages
            .last()
            .map(|m| m.content().clone())
            .unwrap_or_default();

        self.calls
            .lock()
            .expect("call log poisoned")
            .push(prompt.clone());

        if let Some(pattern) = self.failures.iter().find(|p| prompt.contains(p.as_str())) {
            return Err(ModelsError::new(ModelsErrorKind::Http(format!(
                "scripted failure for prompt containing '{pattern}'"
            )))
            .into());
        }

        if let Some((_, response)) = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
        {
            return Ok(GenerateResponse::new(response.clone()));
        }

        match &self.default_response {
            Some(response) => Ok(GenerateResponse::new(response.clone())),
            None => Err(ModelsError::new(ModelsErrorKind::Parse(format!(
                "no scripted response for prompt: {prompt}"
            )))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}
