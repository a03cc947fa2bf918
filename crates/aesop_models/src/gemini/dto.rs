//! Gemini `generateContent` data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A piece of inline media: base64 payload plus its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    /// Base64-encoded payload
    data: String,
}

/// One part of a content block: text or inline media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Inline media content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    /// A text-only part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// A content block holding one or more parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// The parts of this content block
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// A content block with a single text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::from_text(text)],
        }
    }
}

/// Illustration output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio hint (e.g., "16:9")
    aspect_ratio: String,
}

/// Prebuilt voice selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Prebuilt voice name (e.g., "Kore")
    voice_name: String,
}

/// Voice configuration wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// The selected prebuilt voice
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Speech synthesis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    /// Voice configuration
    voice_config: VoiceConfig,
}

/// Generation configuration for a `generateContent` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested response modalities (e.g., `["AUDIO"]`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    /// Illustration output configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
    /// Speech synthesis configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

impl GenerationConfig {
    /// Configuration for illustration output with the given aspect ratio.
    pub fn for_image(aspect_ratio: impl Into<String>) -> Self {
        Self {
            response_modalities: None,
            image_config: Some(ImageConfig {
                aspect_ratio: aspect_ratio.into(),
            }),
            speech_config: None,
        }
    }

    /// Configuration for audio output with the given prebuilt voice.
    pub fn for_speech(voice_name: impl Into<String>) -> Self {
        Self {
            response_modalities: Some(vec!["AUDIO".to_string()]),
            image_config: None,
            speech_config: Some(SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig {
                        voice_name: voice_name.into(),
                    },
                },
            }),
        }
    }
}

/// A `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GenerateContentRequest {
    /// The content blocks to send
    contents: Vec<Content>,
    /// Optional generation configuration
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a new builder for `GenerateContentRequest`.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// One candidate in a `generateContent` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The candidate's content block
    #[serde(default)]
    content: Option<Content>,
}

/// A `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates, usually one
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The first inline media payload across candidates, if any.
    ///
    /// Both illustration and speech responses deliver their payload as a
    /// base64 `inlineData` part.
    pub fn first_inline_data(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.inline_data.as_ref())
            .map(|inline| inline.data.as_str())
            .next()
    }
}
