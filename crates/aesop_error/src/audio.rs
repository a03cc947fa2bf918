//! Audio decode and playback error types.

/// Audio error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AudioErrorKind {
    /// Payload byte length does not divide into whole 16-bit samples
    #[display("Malformed audio payload: {} bytes is not a whole number of 16-bit samples", len)]
    MalformedPayload {
        /// Byte length of the rejected payload
        len: usize,
    },
    /// A zero channel count cannot describe a waveform
    #[display("Malformed audio payload: channel count is zero")]
    ZeroChannels,
    /// No audio output device is available
    #[display("Audio output unavailable: {}", _0)]
    OutputUnavailable(String),
    /// A playback sink could not be created
    #[display("Failed to create playback sink: {}", _0)]
    Sink(String),
}

/// Audio error with source location tracking.
///
/// # Examples
///
/// ```
/// use aesop_error::{AudioError, AudioErrorKind};
///
/// let err = AudioError::new(AudioErrorKind::MalformedPayload { len: 3 });
/// assert!(format!("{}", err).contains("3 bytes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Audio Error: {} at line {} in {}", kind, line, file)]
pub struct AudioError {
    /// The kind of error that occurred
    pub kind: AudioErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl AudioError {
    /// Create a new audio error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for audio operations.
pub type AudioResult<T> = std::result::Result<T, AudioError>;
