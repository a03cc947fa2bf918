//! Gemini asset client configuration.

use aesop_core::VoiceDirection;
use derive_builder::Builder;
use derive_getters::Getters;

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

fn default_style_preamble() -> String {
    "Digital storybook illustration style, vivid cinematic colors, high detail, no text:"
        .to_string()
}

/// Configuration for [`crate::GeminiAssetClient`].
///
/// All fields default to the fixed values the storybook ships with; the
/// builder overrides individual knobs.
///
/// # Examples
///
/// ```
/// use aesop_models::GeminiAssetConfig;
///
/// let config = GeminiAssetConfig::builder()
///     .aspect_ratio("4:3")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.aspect_ratio(), "4:3");
/// assert_eq!(config.image_model(), "gemini-2.5-flash-image");
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
#[builder(setter(into))]
pub struct GeminiAssetConfig {
    /// Base URL of the Gemini REST API
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Model used for illustration generation
    #[builder(default = "default_image_model()")]
    image_model: String,
    /// Model used for speech synthesis
    #[builder(default = "default_speech_model()")]
    speech_model: String,
    /// Fixed aspect-ratio hint for illustrations
    #[builder(default = "default_aspect_ratio()")]
    aspect_ratio: String,
    /// Fixed style preamble prepended to every visual prompt
    #[builder(default = "default_style_preamble()")]
    style_preamble: String,
    /// Voice direction baked into the speech prompt wrapper
    #[builder(default)]
    voice: VoiceDirection,
}

impl GeminiAssetConfig {
    /// Creates a new builder for `GeminiAssetConfig`.
    pub fn builder() -> GeminiAssetConfigBuilder {
        GeminiAssetConfigBuilder::default()
    }
}

impl Default for GeminiAssetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_model: default_image_model(),
            speech_model: default_speech_model(),
            aspect_ratio: default_aspect_ratio(),
            style_preamble: default_style_preamble(),
            voice: VoiceDirection::default(),
        }
    }
}
