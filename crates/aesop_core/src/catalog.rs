//! The story catalog: an ordered, immutable sequence of scenes.

use crate::{Scene, VoiceDirection};
use aesop_error::{CatalogError, CatalogErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Story metadata from the `[story]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoryMetadata {
    /// Story title
    title: String,
    /// Human-readable description
    #[serde(default)]
    description: String,
}

/// Complete story document parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
struct StoryDocument {
    story: StoryMetadata,
    #[serde(default)]
    voice: Option<VoiceDirection>,
    scenes: Vec<Scene>,
}

/// The static, ordered, immutable sequence of scenes, loaded once at
/// startup.
///
/// The only query surface is "scene at index" and "count"; index validity
/// is the caller's responsibility (the reader clamps navigation).
///
/// # Example TOML Structure
///
/// ```toml
/// [story]
/// title = "The Two Kings"
/// description = "A rivalry becomes an alliance."
///
/// [voice]
/// base_voice = "Kore"
/// narrator_style = "warm and wondering"
///
/// [[voice.profiles]]
/// label = "Leo"
/// style = "deep, booming, domineering"
///
/// [[scenes]]
/// id = 1
/// title = "Dawn on the Rock"
/// narration = "The sun rose over the savanna."
/// dialogue = "Leo: All the light touches is mine!"
/// visual_prompt = "A lion on a cliff at sunrise"
/// theme = "from-yellow-600 to-orange-500"
///
/// [scenes.semiotics]
/// composition = "split composition, centered"
/// eyes = "sharp, regal"
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct StoryCatalog {
    /// Story metadata
    metadata: StoryMetadata,
    /// Voice direction for narration synthesis
    voice: VoiceDirection,
    /// The ordered scenes
    scenes: Vec<Scene>,
}

impl StoryCatalog {
    /// Build a catalog from scenes directly.
    ///
    /// # Errors
    ///
    /// Rejects empty catalogs and duplicate scene ids.
    pub fn new(
        metadata: StoryMetadata,
        voice: VoiceDirection,
        scenes: Vec<Scene>,
    ) -> Result<Self, CatalogError> {
        validate(&scenes)?;
        debug!(title = %metadata.title, scene_count = scenes.len(), "Loaded story catalog");
        Ok(Self {
            metadata,
            voice,
            scenes,
        })
    }

    /// Parse a story document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed TOML and rejects empty catalogs
    /// and duplicate scene ids.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let doc: StoryDocument = toml::from_str(text)
            .map_err(|e| CatalogError::new(CatalogErrorKind::Parse(e.to_string())))?;
        Self::new(doc.story, doc.voice.unwrap_or_default(), doc.scenes)
    }

    /// Read and parse a story document from a file.
    ///
    /// # Errors
    ///
    /// Returns an IO error when the file cannot be read, plus all
    /// [`Self::from_toml_str`] failure modes.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(CatalogErrorKind::Io(e.to_string())))?;
        Self::from_toml_str(&text)
    }

    /// The scene at `index`, if in range.
    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Number of scenes in the catalog.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the catalog has no scenes (never true for a validated
    /// catalog).
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl StoryMetadata {
    /// Create story metadata.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

fn validate(scenes: &[Scene]) -> Result<(), CatalogError> {
    if scenes.is_empty() {
        return Err(CatalogError::new(CatalogErrorKind::Empty));
    }
    let mut seen = HashSet::new();
    for scene in scenes {
        if !seen.insert(*scene.id()) {
            return Err(CatalogError::new(CatalogErrorKind::DuplicateId(
                *scene.id(),
            )));
        }
    }
    Ok(())
}
