//! Type conversions between Escoffier and OpenAI wire formats.

use crate::openai::dto::{ChatMessage, ChatRequest, ChatResponse};
use escoffier_core::{GenerateRequest, GenerateResponse, TokenUsage};
use escoffier_error::{ModelsError, ModelsErrorKind};

/// Converts an Escoffier GenerateRequest to the OpenAI chat format.
///
/// The client's default temperature is applied when the request carries none.
pub fn to_chat_request(
    req: &GenerateRequest,
    model: &str,
    default_temperature: f32,
) -> Result<ChatRequest, ModelsError> {
    let messages = req
        .messages
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().as_str().to_string(),
            content: msg.content().clone(),
        })
        .collect::<Vec<_>>();

    let mut builder = ChatRequest::builder();
    builder
        .model(model.to_string())
        .messages(messages)
        .temperature(Some(req.temperature.unwrap_or(default_temperature)));

    if let Some(max_tokens) = req.max_tokens {
        builder.max_tokens(Some(max_tokens));
    }

    builder.build().map_err(|e| {
        ModelsError::new(ModelsErrorKind::Builder(format!(
            "Failed to build request: {e}"
        )))
    })
}

/// Converts an OpenAI chat response to an Escoffier GenerateResponse.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, ModelsError> {
    let text = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| {
            ModelsError::new(ModelsErrorKind::Parse("No choices in response".to_string()))
        })?;

    let usage = response.usage.as_ref().and_then(|u| {
        match (u.prompt_tokens, u.completion_tokens, u.total_tokens) {
            (Some(input), Some(output), Some(total)) => Some(TokenUsage::new(input, output, total)),
            _ => None,
        }
    });

    GenerateResponse::builder()
        .text(text)
        .usage(usage)
        .build()
        .map_err(|e| {
            ModelsError::new(ModelsErrorKind::Builder(format!(
                "Failed to build response: {e}"
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::dto::{ChatChoice, ChatUsage};
    use escoffier_core::{Message, Role};

    fn request_with(temperature: Option<f32>) -> GenerateRequest {
        GenerateRequest {
            messages: vec![Message::new(Role::User, "hello")],
            max_tokens: Some(256),
            temperature,
            model: None,
        }
    }

    #[test]
    fn request_temperature_wins_over_default() {
        let chat = to_chat_request(&request_with(Some(0.2)), "gpt-4o-mini", 0.9).unwrap();
        assert_eq!(*chat.temperature(), Some(0.2));
    }

    #[test]
    fn default_temperature_applied_when_request_has_none() {
        let chat = to_chat_request(&request_with(None), "gpt-4o-mini", 0.9).unwrap();
        assert_eq!(*chat.temperature(), Some(0.9));
        assert_eq!(*chat.max_tokens(), Some(256));
        assert_eq!(chat.messages()[0].role, "user");
        assert_eq!(chat.messages()[0].content, "hello");
    }

    #[test]
    fn response_without_choices_is_a_parse_error() {
        let response = ChatResponse {
            choices: vec![],
            usage: None,
        };
        assert!(from_chat_response(&response).is_err());
    }

    #[test]
    fn usage_extracted_when_complete() {
        let response = ChatResponse {
            choices: vec![ChatChoice {
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: "Casa Verde".to_string(),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(ChatUsage {
                prompt_tokens: Some(12),
                completion_tokens: Some(3),
                total_tokens: Some(15),
            }),
        };

        let converted = from_chat_response(&response).unwrap();
        assert_eq!(converted.text(), "Casa Verde");
        let usage = converted.usage().as_ref().unwrap();
        assert_eq!(*usage.total_tokens(), 15);
    }
}

