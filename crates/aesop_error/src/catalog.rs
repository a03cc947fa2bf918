//! Story catalog error types.

/// Story catalog error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CatalogErrorKind {
    /// The catalog document failed to parse
    #[display("Failed to parse story catalog: {}", _0)]
    Parse(String),
    /// The catalog file could not be read
    #[display("Failed to read story catalog: {}", _0)]
    Io(String),
    /// A catalog with no scenes cannot be read
    #[display("Story catalog contains no scenes")]
    Empty,
    /// Two scenes share an id
    #[display("Duplicate scene id: {}", _0)]
    DuplicateId(u32),
}

/// Story catalog error with source location tracking.
///
/// # Examples
///
/// ```
/// use aesop_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::Empty);
/// assert!(format!("{}", err).contains("no scenes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new catalog error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
