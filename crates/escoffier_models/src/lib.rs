//! Model provider clients for the Escoffier restaurant branding generator.
//!
//! Provides the OpenAI-compatible chat-completions client, an immutable
//! client configuration, a process-wide memoizing handle cache, and a
//! scripted driver for tests.

mod config;
mod handle_cache;
pub mod openai;
mod scripted;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use handle_cache::completion_handle;
pub use openai::OpenAiClient;
pub use scripted::ScriptedDriver;
