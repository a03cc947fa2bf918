//! Single-slot playback control.

use crate::Waveform;
use aesop_error::AudioResult;
use std::sync::Mutex;
use tracing::debug;

/// A live, currently-playing bound audio source.
///
/// Stopping is infallible and idempotent: stopping a source that already
/// reached its natural end, or was stopped before, is a no-op rather than a
/// fault.
pub trait PlaybackHandle: Send + Sync {
    /// Stop the source immediately.
    fn stop(&self);
}

/// An audio output backend able to bind waveforms to fresh sources.
///
/// The production backend is [`crate::RodioOutput`]; tests substitute
/// recording mocks.
pub trait AudioOutput: Send + Sync {
    /// Unlock or warm up the output sink.
    ///
    /// Host platforms gate audio output behind a direct user gesture; the
    /// reader calls this synchronously inside its activation operation.
    fn prepare(&self) -> AudioResult<()>;

    /// Bind `waveform` to a fresh output source and begin playback
    /// immediately.
    fn start(&self, waveform: &Waveform) -> AudioResult<Box<dyn PlaybackHandle>>;
}

/// Owns at most one live audio source, enforcing single-slot exclusivity.
///
/// Every start is preceded by a stop, even when that stop is a no-op, so
/// two sources can never play concurrently. Natural end-of-clip needs no
/// notification back to the caller: the next stop or start simply
/// supersedes the spent handle.
pub struct PlaybackController {
    output: Box<dyn AudioOutput>,
    slot: Mutex<Option<Box<dyn PlaybackHandle>>>,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl PlaybackController {
    /// Create a controller over an output backend.
    pub fn new(output: Box<dyn AudioOutput>) -> Self {
        Self {
            output,
            slot: Mutex::new(None),
        }
    }

    /// Unlock the output sink. Delegates to the backend.
    pub fn prepare(&self) -> AudioResult<()> {
        self.output.prepare()
    }

    /// Stop and release the current source, if any.
    ///
    /// Always safe to call, including when no handle exists.
    pub fn stop(&self) {
        let handle = self.slot.lock().unwrap().take();
        if let Some(handle) = handle {
            debug!("Stopping active narration source");
            handle.stop();
        }
    }

    /// Stop the current source, then bind `waveform` to a fresh one.
    ///
    /// # Errors
    ///
    /// Propagates backend failures to create or start the new source; the
    /// previous source is released either way.
    pub fn start(&self, waveform: &Waveform) -> AudioResult<()> {
        let mut slot = self.slot.lock().unwrap();
        if let Some(previous) = slot.take() {
            previous.stop();
        }
        debug!(
            frames = waveform.frame_count(),
            sample_rate = waveform.sample_rate(),
            "Starting narration playback"
        );
        *slot = Some(self.output.start(waveform)?);
        Ok(())
    }

    /// Whether a handle currently occupies the playback slot.
    pub fn is_active(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}
