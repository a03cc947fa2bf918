//! Core data types for the Aesop storybook engine.
//!
//! This crate provides the foundation data types shared across the Aesop
//! workspace: the scene and story catalog model, voice direction for
//! narration synthesis, the generated-image handle, and telemetry setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod image;
mod scene;
mod telemetry;
mod voice;

pub use catalog::{StoryCatalog, StoryMetadata};
pub use image::SceneImage;
pub use scene::{Scene, SceneBuilder, Semiotics};
pub use telemetry::init_telemetry;
pub use voice::{VoiceDirection, VoiceProfile};
