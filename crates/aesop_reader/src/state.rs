//! Internal reader state.

use aesop_core::SceneImage;
use std::collections::{HashMap, HashSet};

/// Lifecycle phase of the reading experience.
///
/// There is no distinct terminal phase: reaching the last scene simply
/// saturates navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderPhase {
    /// Created, waiting for the user to begin
    NotStarted,
    /// Actively reading
    Reading,
}

/// The single mutable state record owned by the reader.
///
/// All mutation funnels through the named operations on
/// [`crate::Reader`]; the struct itself never leaves the reader's mutex.
#[derive(Debug)]
pub(crate) struct ReaderState {
    pub phase: ReaderPhase,
    pub position: usize,
    /// Populated slots are never invalidated or re-fetched.
    pub image_cache: HashMap<usize, SceneImage>,
    /// Indices with an illustration fetch outstanding. Keeps the
    /// at-most-one-fetch-per-index invariant under rapid navigation back to
    /// an index whose first fetch has not resolved yet.
    pub pending_images: HashSet<usize>,
    /// Presentation flag: an illustration fetch for the current position is
    /// outstanding.
    pub image_loading: bool,
    /// Presentation flag: a narration fetch for the current position is
    /// outstanding.
    pub audio_loading: bool,
    /// Last surfaced illustration failure, cleared on the next fetch
    /// attempt.
    pub last_error: Option<String>,
    pub muted: bool,
}

impl ReaderState {
    pub fn new() -> Self {
        Self {
            phase: ReaderPhase::NotStarted,
            position: 0,
            image_cache: HashMap::new(),
            pending_images: HashSet::new(),
            image_loading: false,
            audio_loading: false,
            last_error: None,
            muted: false,
        }
    }
}
