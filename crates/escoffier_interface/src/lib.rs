//! Driver trait seam between the Escoffier pipeline and model providers.
//!
//! The generation pipeline depends only on [`CompletionDriver`]; concrete
//! providers (and test doubles) live in `escoffier_models`.

use async_trait::async_trait;
use escoffier_core::{GenerateRequest, GenerateResponse};
use escoffier_error::EscoffierResult;
use std::sync::Arc;

/// A text-completion capability.
///
/// Implementations are the sole network-facing dependency of the pipeline.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generates text for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails or the response cannot be
    /// parsed.
    async fn generate(&self, req: &GenerateRequest) -> EscoffierResult<GenerateResponse>;

    /// Name of the provider, for logging and error reporting.
    fn provider_name(&self) -> &'static str;

    /// Model identifier this driver targets.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: CompletionDriver + ?Sized> CompletionDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> EscoffierResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
