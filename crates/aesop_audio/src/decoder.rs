//! Raw PCM payload decoding.

use aesop_error::{AudioError, AudioErrorKind, AudioResult};
use derive_getters::Getters;

/// Sample rate of provider narration payloads, in Hz.
pub const NARRATION_SAMPLE_RATE: u32 = 24_000;

/// Channel count of provider narration payloads.
pub const NARRATION_CHANNELS: u16 = 1;

/// Decoded floating-point audio samples ready for playback, independent of
/// source encoding.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Waveform {
    /// Interleaved samples normalized to `[-1.0, 1.0)`
    samples: Vec<f32>,
    /// Sample rate in Hz
    sample_rate: u32,
    /// Channel count
    channels: u16,
}

impl Waveform {
    /// Number of frames: total sample count divided by channel count.
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Duration of the waveform in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.frame_count() as f32 / self.sample_rate as f32
    }
}

/// Decode a raw PCM payload into a [`Waveform`].
///
/// The payload is interpreted as signed 16-bit little-endian samples; each
/// sample is normalized by dividing by 32768. The input format is a fixed
/// contract with the asset provider: no resampling, no format sniffing.
///
/// # Errors
///
/// A byte length that is not an even multiple of 2 is a malformed payload,
/// not a buffer to truncate. A zero channel count is likewise malformed.
///
/// # Examples
///
/// ```
/// use aesop_audio::{decode_pcm16, NARRATION_CHANNELS, NARRATION_SAMPLE_RATE};
///
/// // Two samples: i16::MIN and i16::MAX.
/// let payload = [0x00, 0x80, 0xFF, 0x7F];
/// let waveform = decode_pcm16(&payload, NARRATION_SAMPLE_RATE, NARRATION_CHANNELS).unwrap();
/// assert_eq!(waveform.frame_count(), 2);
/// assert_eq!(waveform.samples()[0], -1.0);
/// ```
pub fn decode_pcm16(payload: &[u8], sample_rate: u32, channels: u16) -> AudioResult<Waveform> {
    if payload.len() % 2 != 0 {
        return Err(AudioError::new(AudioErrorKind::MalformedPayload {
            len: payload.len(),
        }));
    }
    if channels == 0 {
        return Err(AudioError::new(AudioErrorKind::ZeroChannels));
    }

    let samples = payload
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();

    Ok(Waveform {
        samples,
        sample_rate,
        channels,
    })
}
