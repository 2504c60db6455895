//! Error types for the Escoffier restaurant branding generator.
//!
//! This crate provides the foundation error types used across all Escoffier
//! crates: credential resolution, prompt template rendering, pipeline
//! generation, model provider calls, and configuration loading.

mod config;
mod credential;
mod generation;
mod models;
mod template;

pub use config::ConfigError;
pub use credential::CredentialError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use models::{ModelsError, ModelsErrorKind};
pub use template::TemplateError;

/// Crate-level error variants.
///
/// Each variant wraps a domain error carrying its own source location.
#[derive(Debug, derive_more::From)]
pub enum EscoffierErrorKind {
    /// No API credential available from any source
    Credential(CredentialError),
    /// Prompt template failed to render
    Template(TemplateError),
    /// Generation pipeline failure
    Generation(GenerationError),
    /// Model provider failure
    Models(ModelsError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for EscoffierErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EscoffierErrorKind::Credential(e) => write!(f, "{}", e),
            EscoffierErrorKind::Template(e) => write!(f, "{}", e),
            EscoffierErrorKind::Generation(e) => write!(f, "{}", e),
            EscoffierErrorKind::Models(e) => write!(f, "{}", e),
            EscoffierErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Escoffier error with kind discrimination.
#[derive(Debug)]
pub struct EscoffierError(Box<EscoffierErrorKind>);

impl EscoffierError {
    /// Create a new error from a kind.
    pub fn new(kind: EscoffierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &EscoffierErrorKind {
        &self.0
    }
}

impl std::fmt::Display for EscoffierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Escoffier Error: {}", self.0)
    }
}

impl std::error::Error for EscoffierError {}

// Generic From implementation for any type that converts to EscoffierErrorKind
impl<T> From<T> for EscoffierError
where
    T: Into<EscoffierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Escoffier operations.
pub type EscoffierResult<T> = std::result::Result<T, EscoffierError>;
