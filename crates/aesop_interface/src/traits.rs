//! Trait definitions for generative asset providers.

use aesop_core::SceneImage;
use aesop_error::AesopResult;
use async_trait::async_trait;

/// The external generative-AI boundary.
///
/// Both operations are fallible, asynchronous, and single-attempt: the
/// provider makes no intrinsic retries, and the engine performs retries
/// only when the user explicitly asks for one.
#[async_trait]
pub trait AssetProvider: Send + Sync {
    /// Render an illustration for a scene's visual prompt.
    ///
    /// The provider is responsible for any fixed style preamble and aspect
    /// ratio configuration; the caller passes the scene's prompt verbatim.
    async fn generate_image(&self, visual_prompt: &str) -> AesopResult<SceneImage>;

    /// Synthesize narration audio for a script.
    ///
    /// Returns raw little-endian 16-bit mono samples at 24 kHz, with the
    /// transport base64 encoding already decoded. Decoding into a playable
    /// waveform is the audio decoder's job, not the provider's.
    async fn synthesize_speech(&self, script: &str) -> AesopResult<Vec<u8>>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}
