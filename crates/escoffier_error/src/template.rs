//! Prompt template error types.

/// A prompt template failed to render.
///
/// Rendering fails closed: a missing parameter or an unresolved placeholder
/// is a configuration error, never a silently rendered prompt.
#[derive(Debug, Clone)]
pub struct TemplateError {
    /// Name of the template that failed
    pub template: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(template: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            template: template.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Template Error in '{}': {} at line {} in {}",
            self.template, self.message, self.line, self.file
        )
    }
}

impl std::error::Error for TemplateError {}
