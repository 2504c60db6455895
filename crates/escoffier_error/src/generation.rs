//! Generation pipeline error types.

/// Specific error conditions for generation pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// Model returned no usable restaurant name after cleaning
    EmptyName,
    /// Model returned no usable menu items after normalization
    EmptyMenu,
    /// The model-calling capability itself failed
    Upstream {
        /// Provider that failed
        provider: String,
        /// Underlying cause, for diagnostics
        cause: String,
    },
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::EmptyName => {
                write!(f, "No restaurant name was returned by the model")
            }
            GenerationErrorKind::EmptyMenu => {
                write!(f, "No menu items were returned by the model")
            }
            GenerationErrorKind::Upstream { provider, cause } => {
                write!(f, "Upstream failure from provider '{}': {}", provider, cause)
            }
        }
    }
}

/// Error type for generation pipeline operations.
///
/// # Examples
///
/// ```
/// use escoffier_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyMenu);
/// assert!(format!("{}", err).contains("menu"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}
