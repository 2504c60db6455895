//! Two-stage generation pipeline.
//!
//! Stage one generates the restaurant name; stage two fans out to four
//! mutually independent calls (menu, drinks, slogan, description) that each
//! depend only on stage one's output.

use crate::normalize::{clean_restaurant_name, normalize_lines};
use crate::templates::Stage;
use escoffier_core::{
    GenerateRequest, GenerationRequest, GenerationResult, Message, Role,
};
use escoffier_error::{EscoffierResult, GenerationError, GenerationErrorKind};
use escoffier_interface::CompletionDriver;
use tracing::{debug, info, instrument};

/// Drives the dependent chain of model calls for one generation attempt.
///
/// Each invocation of [`generate`](GenerationPipeline::generate) owns its
/// result exclusively; a failed attempt discards all intermediate outputs.
pub struct GenerationPipeline<D: CompletionDriver> {
    driver: D,
}

impl<D: CompletionDriver> GenerationPipeline<D> {
    /// Creates a pipeline over the given completion driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Returns a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Runs one generation attempt for the given request.
    ///
    /// The name stage is a hard prerequisite barrier; the four downstream
    /// calls run concurrently and fail fast, abandoning in-flight siblings
    /// on the first error.
    ///
    /// # Errors
    ///
    /// Fails when the cleaned name is empty, the normalized menu is empty,
    /// or any underlying model call fails. Empty drinks, slogan, or
    /// description are legitimate empty values, not errors.
    #[instrument(skip(self, request), fields(
        cuisine = %request.cuisine(),
        provider = self.driver.provider_name(),
        model = %self.driver.model_name(),
    ))]
    pub async fn generate(&self, request: &GenerationRequest) -> EscoffierResult<GenerationResult> {
        let cuisine = request.cuisine().to_string();
        let temperature = *request.temperature();

        let raw_name = self
            .run_stage(Stage::Name, &[("cuisine", cuisine.as_str())], temperature)
            .await?;
        let restaurant_name = clean_restaurant_name(&raw_name);
        if restaurant_name.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyName).into());
        }
        debug!(restaurant_name = %restaurant_name, "Name stage complete");

        let params = [
            ("cuisine", cuisine.as_str()),
            ("restaurant_name", restaurant_name.as_str()),
        ];
        let (menu_raw, drinks_raw, slogan_raw, description_raw) = tokio::try_join!(
            self.run_stage(Stage::Menu, &params, temperature),
            self.run_stage(Stage::Drinks, &params, temperature),
            self.run_stage(Stage::Slogan, &params, temperature),
            self.run_stage(Stage::Description, &params, temperature),
        )?;

        let menu_items = normalize_lines(&menu_raw);
        if menu_items.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyMenu).into());
        }
        let drink_items = normalize_lines(&drinks_raw);

        info!(
            restaurant_name = %restaurant_name,
            menu_items = menu_items.len(),
            drink_items = drink_items.len(),
            "Generation complete"
        );

        Ok(GenerationResult::new(
            restaurant_name,
            menu_items,
            drink_items,
            slogan_raw.trim(),
            description_raw.trim(),
        ))
    }

    /// Renders the stage's template and runs one model call.
    #[instrument(skip(self, params), fields(stage = %stage))]
    async fn run_stage(
        &self,
        stage: Stage,
        params: &[(&str, &str)],
        temperature: f32,
    ) -> EscoffierResult<String> {
        let prompt = stage.template().render(params)?;

        let request = GenerateRequest {
            messages: vec![Message::new(Role::User, prompt)],
            max_tokens: None,
            temperature: Some(temperature),
            model: None,
        };

        let response = self.driver.generate(&request).await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::Upstream {
                provider: self.driver.provider_name().to_string(),
                cause: e.to_string(),
            })
        })?;

        debug!(stage = %stage, chars = response.text().len(), "Stage response received");
        Ok(response.text().clone())
    }
}
