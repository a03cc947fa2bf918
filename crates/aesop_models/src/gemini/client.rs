//! Gemini REST client for illustration and narration assets.

use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::gemini::prompt::{illustration_prompt, narration_prompt};
use crate::gemini::GeminiAssetConfig;
use aesop_core::SceneImage;
use aesop_error::{AesopResult, ProviderError, ProviderErrorKind};
use aesop_interface::AssetProvider;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use std::env;
use tracing::{debug, instrument};

/// Client for the Gemini `generateContent` REST endpoint.
///
/// One instance serves both asset operations: illustration generation and
/// speech synthesis. Each call is a single attempt; retry is the user's
/// decision, not the client's.
#[derive(Debug, Clone)]
pub struct GeminiAssetClient {
    client: Client,
    api_key: String,
    config: GeminiAssetConfig,
}

impl GeminiAssetClient {
    /// Creates a client with the API key from the `GEMINI_API_KEY`
    /// environment variable and default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] when the variable is
    /// not set.
    #[instrument(skip_all)]
    pub fn new() -> Result<Self, ProviderError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ProviderError::new(ProviderErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Creates a client with a specific API key and default configuration.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, GeminiAssetConfig::default())
    }

    /// Creates a client with a specific API key and configuration.
    pub fn with_config(api_key: impl Into<String>, config: GeminiAssetConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeminiAssetConfig {
        &self.config
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.config.base_url(), model);
        debug!(url = %url, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status,
                message,
            }));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::InvalidResponse(e.to_string())))
    }
}

#[async_trait]
impl AssetProvider for GeminiAssetClient {
    #[instrument(skip(self, visual_prompt))]
    async fn generate_image(&self, visual_prompt: &str) -> AesopResult<SceneImage> {
        let prompt = illustration_prompt(self.config.style_preamble(), visual_prompt);
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::from_text(prompt)])
            .generation_config(Some(GenerationConfig::for_image(
                self.config.aspect_ratio().clone(),
            )))
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::InvalidRequest(e.to_string())))?;

        let response = self
            .generate_content(self.config.image_model(), &request)
            .await?;

        let data = response
            .first_inline_data()
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::NoImageData))?;
        Ok(SceneImage::from_base64_png(data))
    }

    #[instrument(skip(self, script))]
    async fn synthesize_speech(&self, script: &str) -> AesopResult<Vec<u8>> {
        let prompt = narration_prompt(self.config.voice(), script);
        let request = GenerateContentRequest::builder()
            .contents(vec![Content::from_text(prompt)])
            .generation_config(Some(GenerationConfig::for_speech(
                self.config.voice().base_voice().clone(),
            )))
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::InvalidRequest(e.to_string())))?;

        let response = self
            .generate_content(self.config.speech_model(), &request)
            .await?;

        let data = response
            .first_inline_data()
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::NoAudioData))?;
        let samples = BASE64
            .decode(data)
            .map_err(|e| ProviderError::new(ProviderErrorKind::Base64Decode(e.to_string())))?;
        Ok(samples)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
