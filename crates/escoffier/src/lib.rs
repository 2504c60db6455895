//! Escoffier: an LLM-driven restaurant branding generator.
//!
//! Given a cuisine, Escoffier drives a two-stage chain of chat-completion
//! calls to produce a restaurant name, slogan, description, menu, and drink
//! list, then normalizes, renders, and exports the result.
//!
//! This facade crate re-exports the workspace and carries the command-line
//! interface.

pub mod cli;
pub mod settings;

pub use escoffier_core::*;
pub use escoffier_error::*;
pub use escoffier_interface::CompletionDriver;
pub use escoffier_models::{ClientConfig, OpenAiClient, ScriptedDriver, completion_handle};
pub use escoffier_pipeline::*;
