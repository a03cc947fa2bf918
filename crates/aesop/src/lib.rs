//! Aesop - Interactive Digital Storybook Engine
//!
//! Aesop sequences a fixed narrative into scenes, requests an AI-generated
//! illustration and AI-generated narration clip per scene, and coordinates
//! a paginated reading experience with playback controls.
//!
//! # Features
//!
//! - **Reader State Machine**: clamped scene navigation, one illustration
//!   fetch per scene ever, narration re-synthesized on every entry
//! - **Single-Slot Playback**: at most one audio source alive, stopped
//!   before every start and on navigation or mute
//! - **Gemini Provider**: illustration generation and speech synthesis over
//!   the REST `generateContent` endpoint
//! - **PCM Decoding**: 24 kHz mono 16-bit provider payloads decoded into
//!   normalized waveforms
//! - **Observer Contract**: the presentation layer renders snapshots from a
//!   watch channel and feeds events back in
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aesop::{GeminiAssetClient, Reader, ReaderEvent, RodioOutput, StoryCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     aesop::init_telemetry()?;
//!
//!     let catalog = StoryCatalog::from_path("story.toml")?;
//!     let provider = GeminiAssetClient::new()?;
//!     // Keep `stream` alive for as long as playback is needed.
//!     let (output, stream) = RodioOutput::try_default()?;
//!
//!     let reader = Reader::new(catalog, provider, Box::new(output));
//!     reader.handle_event(ReaderEvent::Activate).await?;
//!     reader.handle_event(ReaderEvent::Next).await?;
//!
//!     let snapshot = reader.snapshot();
//!     println!("{} / {}", snapshot.position() + 1, snapshot.scene_count());
//!     drop(stream);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Aesop is organized as a workspace with focused crates:
//!
//! - `aesop_error` - Error types
//! - `aesop_core` - Scene, story catalog, voice direction, telemetry
//! - `aesop_interface` - AssetProvider trait definition
//! - `aesop_models` - Generative-AI provider implementations
//! - `aesop_audio` - PCM decoding and single-slot playback
//! - `aesop_reader` - The coordinating reader state machine
//!
//! This crate (`aesop`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use aesop_audio::{
    AudioOutput, NARRATION_CHANNELS, NARRATION_SAMPLE_RATE, PlaybackController, PlaybackHandle,
    RodioOutput, Waveform, decode_pcm16,
};
pub use aesop_core::{
    Scene, SceneBuilder, SceneImage, Semiotics, StoryCatalog, StoryMetadata, VoiceDirection,
    VoiceProfile, init_telemetry,
};
pub use aesop_error::{
    AesopError, AesopErrorKind, AesopResult, AudioError, AudioErrorKind, AudioResult,
    CatalogError, CatalogErrorKind, ProviderError, ProviderErrorKind, ReaderError,
    ReaderErrorKind,
};
pub use aesop_interface::AssetProvider;
pub use aesop_models::{GeminiAssetClient, GeminiAssetConfig, GeminiAssetConfigBuilder};
pub use aesop_reader::{IMAGE_FAILURE_MESSAGE, Reader, ReaderEvent, ReaderPhase, ReaderSnapshot};
