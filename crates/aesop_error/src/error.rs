//! Top-level error wrapper types.

use crate::{AudioError, CatalogError, ProviderError, ReaderError};

/// The foundation error enum covering every Aesop failure domain.
///
/// # Examples
///
/// ```
/// use aesop_error::{AesopError, ProviderError, ProviderErrorKind};
///
/// let provider_err = ProviderError::new(ProviderErrorKind::NoAudioData);
/// let err: AesopError = provider_err.into();
/// assert!(format!("{}", err).contains("audio data"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AesopErrorKind {
    /// Asset provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Audio decode or playback error
    #[from(AudioError)]
    Audio(AudioError),
    /// Story catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Reader state machine error
    #[from(ReaderError)]
    Reader(ReaderError),
}

/// Aesop error with kind discrimination.
///
/// # Examples
///
/// ```
/// use aesop_error::{AesopResult, CatalogError, CatalogErrorKind};
///
/// fn load_story() -> AesopResult<()> {
///     Err(CatalogError::new(CatalogErrorKind::Empty))?
/// }
///
/// assert!(load_story().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Aesop Error: {}", _0)]
pub struct AesopError(Box<AesopErrorKind>);

impl AesopError {
    /// Create a new error from a kind.
    pub fn new(kind: AesopErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AesopErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AesopErrorKind
impl<T> From<T> for AesopError
where
    T: Into<AesopErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Aesop operations.
///
/// # Examples
///
/// ```
/// use aesop_error::{AesopResult, ProviderError, ProviderErrorKind};
///
/// fn synthesize() -> AesopResult<Vec<u8>> {
///     Err(ProviderError::new(ProviderErrorKind::NoAudioData))?
/// }
/// ```
pub type AesopResult<T> = std::result::Result<T, AesopError>;
