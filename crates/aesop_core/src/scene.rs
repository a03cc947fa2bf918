//! Scene types for the story catalog.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Display-only semiotic annotations for a scene's illustration.
///
/// Both fields are opaque to the engine and surfaced verbatim by the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Semiotics {
    /// Compositional note for the illustration
    composition: String,
    /// Note on the depicted character's gaze
    eyes: String,
}

impl Semiotics {
    /// Create a new semiotic annotation pair.
    pub fn new(composition: impl Into<String>, eyes: impl Into<String>) -> Self {
        Self {
            composition: composition.into(),
            eyes: eyes.into(),
        }
    }
}

/// One unit of the fixed narrative.
///
/// Scenes are created once at startup (typically by parsing a story
/// document) and never mutated.
///
/// # Examples
///
/// ```
/// use aesop_core::{Scene, Semiotics};
///
/// let scene = Scene::builder()
///     .id(1u32)
///     .title("Dawn on the Rock")
///     .narration("The sun rose over the savanna.")
///     .visual_prompt("A lion on a cliff at sunrise, golden light")
///     .theme("from-yellow-600 to-orange-500")
///     .semiotics(Semiotics::new("split composition", "sharp, regal"))
///     .build()
///     .unwrap();
///
/// assert_eq!(*scene.id(), 1);
/// assert!(scene.dialogue().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct Scene {
    /// Unique ordinal identifier
    id: u32,
    /// Scene title
    title: String,
    /// Narration text body
    narration: String,
    /// Optional multi-line dialogue, attributable to speakers by label
    #[builder(default)]
    #[serde(default)]
    dialogue: Option<String>,
    /// Free-text prompt fed to the image generator
    visual_prompt: String,
    /// Presentation hint, opaque to the engine
    theme: String,
    /// Display-only semiotic annotations
    semiotics: Semiotics,
}

impl Scene {
    /// Creates a new builder for `Scene`.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// The narration script for speech synthesis: narration text, with the
    /// dialogue appended after a blank line when present.
    pub fn narration_script(&self) -> String {
        match &self.dialogue {
            Some(dialogue) => format!("{}\n\n{}", self.narration, dialogue),
            None => self.narration.clone(),
        }
    }
}
