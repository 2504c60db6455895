//! Model provider error types.

/// Specific error conditions for model provider calls.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ModelsErrorKind {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned an error status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Failed to parse the provider response
    #[display("Response parsing failed: {}", _0)]
    Parse(String),

    /// Failed to build a request
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Error type for model provider operations.
#[derive(Debug, Clone)]
pub struct ModelsError {
    /// The specific error condition
    pub kind: ModelsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new ModelsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ModelsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Models Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ModelsError {}
