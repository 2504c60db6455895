//! Credential resolution error types.

/// No API credential could be resolved from any source.
///
/// Raised at the presentation boundary before any model call is attempted.
///
/// # Examples
///
/// ```
/// use escoffier_error::CredentialError;
///
/// let err = CredentialError::new("no key in flag, environment, or settings");
/// assert!(format!("{}", err).contains("no key"));
/// ```
#[derive(Debug, Clone)]
pub struct CredentialError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CredentialError {
    /// Create a new CredentialError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Credential Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for CredentialError {}
