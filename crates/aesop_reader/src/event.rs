//! Events consumed from the presentation layer.

/// A navigation or playback event emitted by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderEvent {
    /// Begin the reading experience (must be user-initiated: the audio
    /// output sink is unlocked inside this event)
    Activate,
    /// Advance to the next scene (clamped at the last)
    Next,
    /// Return to the previous scene (clamped at the first)
    Prev,
    /// Flip narration muting
    ToggleMute,
    /// Re-synthesize and replay the current scene's narration
    ReplayNarration,
    /// Retry a failed illustration fetch for the given scene index
    RetryImage(usize),
}
