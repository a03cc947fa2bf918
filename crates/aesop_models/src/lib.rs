//! Generative-AI provider integrations for the Aesop storybook engine.
//!
//! Currently one provider is implemented: Google Gemini, used for both
//! scene illustration generation and narration speech synthesis over the
//! REST `generateContent` endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod gemini;

pub use gemini::{GeminiAssetClient, GeminiAssetConfig, GeminiAssetConfigBuilder};
