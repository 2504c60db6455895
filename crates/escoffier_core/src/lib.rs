//! Core data types for the Escoffier restaurant branding generator.
//!
//! This crate provides the foundation data types used across all Escoffier
//! crates: the cuisine selection, generation request/result records, display
//! and export style enums, and the wire types exchanged with a
//! chat-completion provider.

mod cuisine;
mod generation;
mod message;
mod request;
mod role;
mod style;
mod token_usage;

pub use cuisine::Cuisine;
pub use generation::{
    DEFAULT_TEMPERATURE, GenerationRequest, GenerationRequestBuilder, GenerationResult,
    GenerationResultBuilder, TEMPERATURE_MAX, TEMPERATURE_MIN,
};
pub use message::Message;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use style::{ExportFormat, MenuStyle};
pub use token_usage::TokenUsage;
