//! Reader state machine error types.

/// Reader state machine error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ReaderErrorKind {
    /// Operation requires the reading experience to have been activated
    #[display("Reader has not been activated")]
    NotActivated,
    /// Activation was attempted twice
    #[display("Reader is already activated")]
    AlreadyActivated,
}

/// Reader error with source location tracking.
///
/// # Examples
///
/// ```
/// use aesop_error::{ReaderError, ReaderErrorKind};
///
/// let err = ReaderError::new(ReaderErrorKind::NotActivated);
/// assert!(format!("{}", err).contains("not been activated"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Reader Error: {} at line {} in {}", kind, line, file)]
pub struct ReaderError {
    /// The kind of error that occurred
    pub kind: ReaderErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ReaderError {
    /// Create a new reader error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ReaderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
