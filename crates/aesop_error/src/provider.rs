//! Asset provider error types.

/// Asset provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// HTTP transport failure
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// API returned a non-success status
    #[display("API returned HTTP {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },
    /// Base64 decoding of a media payload failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Response contained no inline image data
    #[display("No image data found in response")]
    NoImageData,
    /// Response contained no inline audio data
    #[display("No audio data found in response")]
    NoAudioData,
    /// Request could not be constructed
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Response body could not be parsed
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
}

/// Asset provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use aesop_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new provider error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
