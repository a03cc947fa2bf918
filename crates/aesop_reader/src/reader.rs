//! The reader state machine.

use crate::state::{ReaderPhase, ReaderState};
use crate::{ReaderEvent, ReaderSnapshot};
use aesop_audio::{
    AudioOutput, NARRATION_CHANNELS, NARRATION_SAMPLE_RATE, PlaybackController, decode_pcm16,
};
use aesop_core::StoryCatalog;
use aesop_error::{AesopResult, ReaderError, ReaderErrorKind};
use aesop_interface::AssetProvider;
use std::sync::Mutex;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

/// Fixed user-facing message surfaced when an illustration fetch fails.
///
/// The failed cache slot stays empty, so retrying is simply asking again.
pub const IMAGE_FAILURE_MESSAGE: &str = "Illustration failed to generate. Please retry.";

/// The scene playback and asynchronous-resource coordination state machine.
///
/// Owns the current catalog position, the illustration cache, the loading
/// and mute flags, and the playback controller. All mutation funnels
/// through the operations below; the presentation layer drives them via
/// [`Reader::handle_event`] and observes the machine through
/// [`Reader::snapshot`] / [`Reader::subscribe`].
///
/// Operations take `&self`; callers in concurrent environments share the
/// reader behind an `Arc`. The state mutex is never held across an await,
/// so navigation can interleave with outstanding fetches — the cache and
/// playback disciplines keep that interleaving harmless.
pub struct Reader<P: AssetProvider> {
    catalog: StoryCatalog,
    provider: P,
    playback: PlaybackController,
    state: Mutex<ReaderState>,
    watch_tx: watch::Sender<ReaderSnapshot>,
}

impl<P: AssetProvider> Reader<P> {
    /// Create a reader over a catalog, an asset provider, and an audio
    /// output backend.
    pub fn new(catalog: StoryCatalog, provider: P, output: Box<dyn AudioOutput>) -> Self {
        let state = ReaderState::new();
        let initial = ReaderSnapshot::new(
            state.phase,
            state.position,
            catalog.len(),
            catalog.scene(state.position).cloned(),
            None,
            false,
            false,
            None,
            false,
        );
        let (watch_tx, _) = watch::channel(initial);
        Self {
            catalog,
            provider,
            playback: PlaybackController::new(output),
            state: Mutex::new(state),
            watch_tx,
        }
    }

    /// Begin the reading experience.
    ///
    /// Valid only once: the reader transitions to `Reading` at position 0
    /// and runs the enter-scene sequence for the first scene. The audio
    /// output sink is prepared synchronously here because host platforms
    /// unlock output only inside a direct user-initiated call.
    ///
    /// # Errors
    ///
    /// [`ReaderErrorKind::AlreadyActivated`] when called twice; audio
    /// output preparation failures propagate.
    #[instrument(skip(self))]
    pub async fn activate(&self) -> AesopResult<()> {
        {
            let mut state = self.state.lock().unwrap();
            if state.phase == ReaderPhase::Reading {
                return Err(ReaderError::new(ReaderErrorKind::AlreadyActivated).into());
            }
            self.playback.prepare()?;
            state.phase = ReaderPhase::Reading;
            state.position = 0;
            self.publish(&state);
        }
        info!(scenes = self.catalog.len(), "Reader activated");
        self.enter_scene(0).await;
        Ok(())
    }

    /// Advance to the next scene.
    ///
    /// Clamped, not cyclic: at the last scene this is a complete no-op (no
    /// stop, no fetch). Otherwise any playing narration is stopped
    /// immediately before the position moves.
    ///
    /// # Errors
    ///
    /// [`ReaderErrorKind::NotActivated`] before activation.
    #[instrument(skip(self))]
    pub async fn next(&self) -> AesopResult<()> {
        self.navigate(1).await
    }

    /// Return to the previous scene.
    ///
    /// Clamped at the first scene; otherwise identical to [`Reader::next`].
    ///
    /// # Errors
    ///
    /// [`ReaderErrorKind::NotActivated`] before activation.
    #[instrument(skip(self))]
    pub async fn prev(&self) -> AesopResult<()> {
        self.navigate(-1).await
    }

    /// Flip narration muting.
    ///
    /// Muting stops playback immediately. Unmuting re-runs the narration
    /// sequence for the current scene so resuming sound does not lose it.
    /// Before activation only the flag flips.
    pub async fn toggle_mute(&self) {
        let resume = {
            let mut state = self.state.lock().unwrap();
            state.muted = !state.muted;
            debug!(muted = state.muted, "Toggled mute");
            if state.muted {
                self.playback.stop();
            }
            self.publish(&state);
            (!state.muted && state.phase == ReaderPhase::Reading).then_some(state.position)
        };
        if let Some(position) = resume {
            self.narrate(position).await;
        }
    }

    /// Re-synthesize and replay the current scene's narration.
    ///
    /// Narration is never cached, so replay always asks the provider again.
    /// A no-op when muted or before activation.
    pub async fn replay_narration(&self) {
        let target = {
            let state = self.state.lock().unwrap();
            if state.phase != ReaderPhase::Reading || state.muted {
                return;
            }
            state.position
        };
        self.narrate(target).await;
    }

    /// Fetch the illustration for `index` unless one is cached or already
    /// on its way.
    ///
    /// Idempotent: a populated cache slot short-circuits without a provider
    /// call, and an outstanding fetch for the same index is never
    /// duplicated. The result is written to the slot keyed by `index` as
    /// captured here, so a fetch that resolves after navigation still lands
    /// where it belongs.
    ///
    /// Failures never propagate: the fixed [`IMAGE_FAILURE_MESSAGE`] is
    /// surfaced through the snapshot's `last_error`, the slot stays empty,
    /// and an explicit retry simply calls this again.
    #[instrument(skip(self))]
    pub async fn request_image(&self, index: usize) {
        let Some(visual_prompt) = self.catalog.scene(index).map(|s| s.visual_prompt().clone())
        else {
            warn!(index, "Ignoring illustration request for out-of-range scene");
            return;
        };
        {
            let mut state = self.state.lock().unwrap();
            if state.phase != ReaderPhase::Reading {
                return;
            }
            if state.image_cache.contains_key(&index) {
                debug!(scene = index, "Illustration cache hit");
                return;
            }
            if !state.pending_images.insert(index) {
                debug!(scene = index, "Illustration fetch already outstanding");
                return;
            }
            state.last_error = None;
            if state.position == index {
                state.image_loading = true;
            }
            self.publish(&state);
        }

        let result = self.provider.generate_image(&visual_prompt).await;

        let mut state = self.state.lock().unwrap();
        state.pending_images.remove(&index);
        match result {
            Ok(image) => {
                debug!(scene = index, "Illustration cached");
                state.image_cache.insert(index, image);
            }
            Err(e) => {
                error!(scene = index, error = %e, "Illustration generation failed");
                state.last_error = Some(IMAGE_FAILURE_MESSAGE.to_string());
            }
        }
        if state.position == index {
            state.image_loading = false;
        }
        self.publish(&state);
    }

    /// Dispatch an event from the presentation layer.
    ///
    /// # Errors
    ///
    /// Propagates the underlying operation's error for `Activate`, `Next`
    /// and `Prev`; the remaining events never fail.
    pub async fn handle_event(&self, event: ReaderEvent) -> AesopResult<()> {
        match event {
            ReaderEvent::Activate => self.activate().await,
            ReaderEvent::Next => self.next().await,
            ReaderEvent::Prev => self.prev().await,
            ReaderEvent::ToggleMute => {
                self.toggle_mute().await;
                Ok(())
            }
            ReaderEvent::ReplayNarration => {
                self.replay_narration().await;
                Ok(())
            }
            ReaderEvent::RetryImage(index) => {
                self.request_image(index).await;
                Ok(())
            }
        }
    }

    /// The asset provider this reader orchestrates.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The story catalog this reader walks.
    pub fn catalog(&self) -> &StoryCatalog {
        &self.catalog
    }

    /// An immutable copy of the observable state.
    pub fn snapshot(&self) -> ReaderSnapshot {
        self.snapshot_from(&self.state.lock().unwrap())
    }

    /// Subscribe to snapshot updates.
    ///
    /// The receiver always holds the latest snapshot; a new one is
    /// published after every state mutation.
    pub fn subscribe(&self) -> watch::Receiver<ReaderSnapshot> {
        self.watch_tx.subscribe()
    }

    async fn navigate(&self, delta: isize) -> AesopResult<()> {
        let target = {
            let mut state = self.state.lock().unwrap();
            if state.phase != ReaderPhase::Reading {
                return Err(ReaderError::new(ReaderErrorKind::NotActivated).into());
            }
            let Some(target) = state
                .position
                .checked_add_signed(delta)
                .filter(|t| *t < self.catalog.len())
            else {
                // Saturated at an end of the catalog: a complete no-op.
                return Ok(());
            };
            // Interrupt any in-progress narration before moving on.
            self.playback.stop();
            state.position = target;
            // The flags describe the position we are arriving at: an
            // illustration fetch for it may already be outstanding.
            state.image_loading = state.pending_images.contains(&target);
            state.audio_loading = false;
            self.publish(&state);
            target
        };
        debug!(scene = target, "Navigated");
        self.enter_scene(target).await;
        Ok(())
    }

    /// Run on activation and on every successful navigation: fetch the
    /// scene's illustration and narration concurrently. Narration is
    /// skipped while muted.
    async fn enter_scene(&self, index: usize) {
        tokio::join!(self.request_image(index), self.narrate(index));
    }

    async fn narrate(&self, index: usize) {
        let script = {
            let state = self.state.lock().unwrap();
            if state.phase != ReaderPhase::Reading || state.muted {
                return;
            }
            match self.catalog.scene(index) {
                Some(scene) => scene.narration_script(),
                None => return,
            }
        };
        {
            let mut state = self.state.lock().unwrap();
            if state.position == index {
                state.audio_loading = true;
            }
            self.publish(&state);
        }

        // Narration is best-effort: a failure here must never block
        // illustration display or navigation.
        if let Err(e) = self.narration_pipeline(&script).await {
            warn!(scene = index, error = %e, "Narration failed; continuing without audio");
        }

        let mut state = self.state.lock().unwrap();
        if state.position == index {
            state.audio_loading = false;
        }
        self.publish(&state);
    }

    async fn narration_pipeline(&self, script: &str) -> AesopResult<()> {
        let payload = self.provider.synthesize_speech(script).await?;
        let waveform = decode_pcm16(&payload, NARRATION_SAMPLE_RATE, NARRATION_CHANNELS)?;
        {
            let state = self.state.lock().unwrap();
            if state.muted {
                // Muted while the clip was being synthesized; drop it.
                return Ok(());
            }
        }
        self.playback.start(&waveform)?;
        Ok(())
    }

    fn snapshot_from(&self, state: &ReaderState) -> ReaderSnapshot {
        ReaderSnapshot::new(
            state.phase,
            state.position,
            self.catalog.len(),
            self.catalog.scene(state.position).cloned(),
            state.image_cache.get(&state.position).cloned(),
            state.image_loading,
            state.audio_loading,
            state.last_error.clone(),
            state.muted,
        )
    }

    fn publish(&self, state: &ReaderState) {
        self.watch_tx.send_replace(self.snapshot_from(state));
    }
}
