//! Observable state snapshots.

use crate::ReaderPhase;
use aesop_core::{Scene, SceneImage};
use derive_getters::Getters;

/// An immutable copy of the reader's observable state.
///
/// The presentation layer renders snapshots and nothing else; it receives
/// them from [`crate::Reader::snapshot`] or through the watch channel
/// returned by [`crate::Reader::subscribe`].
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ReaderSnapshot {
    /// Lifecycle phase
    phase: ReaderPhase,
    /// Current position in the catalog
    position: usize,
    /// Total scene count, for progress display
    scene_count: usize,
    /// Content of the current scene
    scene: Option<Scene>,
    /// Generated illustration for the current scene, if already cached
    image: Option<SceneImage>,
    /// An illustration fetch for the current scene is outstanding
    image_loading: bool,
    /// A narration fetch for the current scene is outstanding
    audio_loading: bool,
    /// Last surfaced illustration failure text
    last_error: Option<String>,
    /// Narration muting flag
    muted: bool,
}

impl ReaderSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        phase: ReaderPhase,
        position: usize,
        scene_count: usize,
        scene: Option<Scene>,
        image: Option<SceneImage>,
        image_loading: bool,
        audio_loading: bool,
        last_error: Option<String>,
        muted: bool,
    ) -> Self {
        Self {
            phase,
            position,
            scene_count,
            scene,
            image,
            image_loading,
            audio_loading,
            last_error,
            muted,
        }
    }
}
