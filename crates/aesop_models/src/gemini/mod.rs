//! Google Gemini asset provider.
//!
//! Implements [`aesop_interface::AssetProvider`] over the REST
//! `generateContent` endpoint: one model renders scene illustrations, a
//! second synthesizes narration speech. Both calls share the wire types in
//! [`dto`] and the prompt wrappers in [`prompt`].

mod client;
mod config;
pub mod dto;
mod prompt;

pub use client::GeminiAssetClient;
pub use config::{GeminiAssetConfig, GeminiAssetConfigBuilder};
pub use prompt::{illustration_prompt, narration_prompt};
