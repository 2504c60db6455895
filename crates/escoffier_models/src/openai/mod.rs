//! OpenAI-compatible chat-completions client.
//!
//! Any API following the OpenAI chat completions format works here; the
//! base URL in [`ClientConfig`](crate::ClientConfig) selects the provider.

mod client;
mod conversions;
mod dto;

pub use client::OpenAiClient;
pub use dto::{ChatMessage, ChatRequest, ChatResponse};
