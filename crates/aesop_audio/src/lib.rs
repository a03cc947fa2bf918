//! Narration audio for the Aesop storybook engine.
//!
//! Two concerns live here:
//!
//! - **Decoding**: the asset provider returns raw signed 16-bit
//!   little-endian mono samples at 24 kHz; [`decode_pcm16`] turns them into
//!   a normalized floating-point [`Waveform`].
//! - **Playback**: [`PlaybackController`] owns at most one live audio
//!   source and enforces stop-before-start exclusivity. The actual output
//!   device sits behind the [`AudioOutput`] trait; [`RodioOutput`] is the
//!   production backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod playback;
mod rodio_output;

pub use decoder::{NARRATION_CHANNELS, NARRATION_SAMPLE_RATE, Waveform, decode_pcm16};
pub use playback::{AudioOutput, PlaybackController, PlaybackHandle};
pub use rodio_output::RodioOutput;
