//! The Aesop reader state machine.
//!
//! This crate is the engine core: it owns the current position in the story
//! catalog, the per-scene illustration cache, the loading and mute flags,
//! and orchestrates the asset provider and the playback controller in
//! response to navigation events.
//!
//! The coordination rules are deliberate and few:
//!
//! - Illustrations are fetched **at most once per scene index**; the cache
//!   is keyed by the index captured when the fetch starts, so a fetch that
//!   resolves after the user navigated away still lands in its own slot and
//!   never corrupts the displayed scene.
//! - Narration audio is **never cached**; every entry into a scene (and
//!   every replay) re-synthesizes it.
//! - At most one audio source plays at a time; navigation and mute stop the
//!   current source immediately rather than waiting for it to finish.
//! - Narration failures are logged and swallowed; illustration failures
//!   surface to the presentation layer as a fixed retryable message. The
//!   asymmetry is a product policy, not an accident.
//!
//! The presentation layer drives the machine through [`ReaderEvent`] and
//! observes it through [`Reader::snapshot`] or the [`Reader::subscribe`]
//! watch channel; it never touches fetch or playback logic itself.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod reader;
mod snapshot;
mod state;

pub use event::ReaderEvent;
pub use reader::{IMAGE_FAILURE_MESSAGE, Reader};
pub use snapshot::ReaderSnapshot;
pub use state::ReaderPhase;
