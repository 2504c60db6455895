//! Generation request and result records.

use crate::Cuisine;
use escoffier_error::{ConfigError, EscoffierResult};
use serde::{Deserialize, Serialize};

/// Lowest accepted sampling temperature.
pub const TEMPERATURE_MIN: f32 = 0.0;
/// Highest accepted sampling temperature.
pub const TEMPERATURE_MAX: f32 = 1.2;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// A single user-initiated generation request.
///
/// The temperature must lie in `[0.0, 1.2]`; construction fails closed on an
/// out-of-range value.
///
/// # Examples
///
/// ```
/// use escoffier_core::{Cuisine, GenerationRequest};
///
/// let request = GenerationRequest::new(Cuisine::Mexican, 0.7).unwrap();
/// assert_eq!(*request.cuisine(), Cuisine::Mexican);
///
/// assert!(GenerationRequest::new(Cuisine::Thai, 3.0).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(build_fn(validate = "GenerationRequestBuilder::validate"))]
pub struct GenerationRequest {
    /// The selected cuisine
    cuisine: Cuisine,
    /// Sampling temperature in `[0.0, 1.2]`
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
}

impl GenerationRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `temperature` is outside `[0.0, 1.2]`.
    pub fn new(cuisine: Cuisine, temperature: f32) -> EscoffierResult<Self> {
        Self::builder()
            .cuisine(cuisine)
            .temperature(temperature)
            .build()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(temperature) = self.temperature {
            if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
                return Err(format!(
                    "temperature {temperature} outside [{TEMPERATURE_MIN}, {TEMPERATURE_MAX}]"
                ));
            }
        }
        Ok(())
    }
}

/// The assembled output of one generation attempt.
///
/// Immutable once built; regeneration produces a fresh result rather than
/// mutating a prior one.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationResult {
    /// Cleaned restaurant name, always non-empty
    restaurant_name: String,
    /// Normalized menu items, at most six, deduplicated, always non-empty
    menu_items: Vec<String>,
    /// Normalized drink items, at most six, deduplicated, may be empty
    #[builder(default)]
    drink_items: Vec<String>,
    /// Trimmed slogan, may be empty
    #[builder(default)]
    slogan: String,
    /// Trimmed description, may be empty
    #[builder(default)]
    description: String,
}

impl GenerationResult {
    /// Creates a result from already-normalized parts.
    pub fn new(
        restaurant_name: impl Into<String>,
        menu_items: Vec<String>,
        drink_items: Vec<String>,
        slogan: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            menu_items,
            drink_items,
            slogan: slogan.into(),
            description: description.into(),
        }
    }

    /// Returns a builder for constructing a GenerationResult.
    pub fn builder() -> GenerationResultBuilder {
        GenerationResultBuilder::default()
    }
}
