//! rodio-backed audio output.

use crate::{AudioOutput, PlaybackHandle, Waveform};
use aesop_error::{AudioError, AudioErrorKind, AudioResult};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

/// Production audio output over the default rodio device.
///
/// Only the stream handle is kept here; the `OutputStream` itself is not
/// `Send`, so the caller must keep it alive on the thread that created it
/// for as long as playback is needed.
pub struct RodioOutput {
    stream_handle: OutputStreamHandle,
}

impl RodioOutput {
    /// Open the default output device.
    ///
    /// Returns the output alongside the `OutputStream` the caller must keep
    /// alive.
    ///
    /// # Errors
    ///
    /// Returns [`AudioErrorKind::OutputUnavailable`] when no default device
    /// can be opened.
    pub fn try_default() -> AudioResult<(Self, OutputStream)> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::new(AudioErrorKind::OutputUnavailable(e.to_string())))?;
        debug!("Opened default audio output device");
        Ok((Self { stream_handle }, stream))
    }

    /// Wrap an existing stream handle.
    pub fn from_handle(stream_handle: OutputStreamHandle) -> Self {
        Self { stream_handle }
    }
}

impl AudioOutput for RodioOutput {
    fn prepare(&self) -> AudioResult<()> {
        // The device was opened when the stream was created; binding a sink
        // here would start the slot occupied. Nothing to do.
        Ok(())
    }

    fn start(&self, waveform: &Waveform) -> AudioResult<Box<dyn PlaybackHandle>> {
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::new(AudioErrorKind::Sink(e.to_string())))?;
        sink.append(SamplesBuffer::new(
            *waveform.channels(),
            *waveform.sample_rate(),
            waveform.samples().clone(),
        ));
        sink.play();
        Ok(Box::new(RodioHandle { sink }))
    }
}

struct RodioHandle {
    sink: Sink,
}

impl PlaybackHandle for RodioHandle {
    fn stop(&self) {
        // Stopping a drained sink is already a no-op in rodio.
        self.sink.stop();
    }
}
