//! Reader state machine tests.

mod test_utils;

use aesop_error::AesopErrorKind;
use aesop_reader::{IMAGE_FAILURE_MESSAGE, Reader, ReaderEvent, ReaderPhase};
use test_utils::{
    ImageBehavior, Ledger, MockAssetProvider, MockAudioOutput, SpeechBehavior, catalog,
};

fn reader_with_ledger() -> (Reader<MockAssetProvider>, Ledger) {
    let ledger = Ledger::default();
    let reader = Reader::new(
        catalog(),
        MockAssetProvider::new(),
        Box::new(MockAudioOutput::new(ledger.clone())),
    );
    (reader, ledger)
}

//
// ─── ACTIVATION ─────────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn activation_enters_the_first_scene() {
    let (reader, ledger) = reader_with_ledger();
    assert_eq!(*reader.snapshot().phase(), ReaderPhase::NotStarted);

    reader.activate().await.unwrap();

    let snapshot = reader.snapshot();
    assert_eq!(*snapshot.phase(), ReaderPhase::Reading);
    assert_eq!(*snapshot.position(), 0);
    assert_eq!(*snapshot.scene_count(), 3);
    assert!(snapshot.image().is_some());
    assert!(!snapshot.image_loading());
    assert!(!snapshot.audio_loading());

    // The sink was prepared synchronously, then narration started.
    assert_eq!(ledger.events(), vec!["prepare", "start:0"]);
}

#[tokio::test]
async fn activation_concatenates_narration_and_dialogue() {
    let (reader, _ledger) = reader_with_ledger();
    reader.activate().await.unwrap();

    let scripts = reader.provider().speech_calls();
    assert_eq!(scripts, vec!["Narration for A.\n\nLeo: Mine!"]);
}

#[tokio::test]
async fn second_activation_is_rejected() {
    let (reader, _ledger) = reader_with_ledger();
    reader.activate().await.unwrap();

    let err = reader.activate().await.unwrap_err();
    assert!(matches!(err.kind(), AesopErrorKind::Reader(_)));
    // The first scene was not re-entered.
    assert_eq!(reader.provider().image_call_count(), 1);
}

#[tokio::test]
async fn navigation_before_activation_is_rejected() {
    let (reader, ledger) = reader_with_ledger();

    assert!(reader.next().await.is_err());
    assert!(reader.prev().await.is_err());
    assert_eq!(reader.provider().image_call_count(), 0);
    assert!(ledger.events().is_empty());
}

#[tokio::test]
async fn request_image_before_activation_is_ignored() {
    let (reader, _ledger) = reader_with_ledger();

    reader.request_image(0).await;

    assert_eq!(reader.provider().image_call_count(), 0);
}

//
// ─── IMAGE CACHE ────────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn second_image_request_is_a_cache_hit() {
    let (reader, _ledger) = reader_with_ledger();
    reader.activate().await.unwrap();
    assert_eq!(reader.provider().image_call_count(), 1);

    reader.request_image(0).await;

    assert_eq!(reader.provider().image_call_count(), 1);
}

#[tokio::test]
async fn revisiting_a_scene_never_refetches_its_image() {
    let (reader, _ledger) = reader_with_ledger();
    reader.activate().await.unwrap();
    reader.next().await.unwrap();
    reader.prev().await.unwrap();

    // A and B fetched exactly once each.
    assert_eq!(reader.provider().image_calls(), vec!["prompt-a", "prompt-b"]);
    // Narration is never cached: A, B, then A again.
    assert_eq!(reader.provider().speech_call_count(), 3);
}

#[tokio::test]
async fn out_of_range_image_request_is_ignored() {
    let (reader, _ledger) = reader_with_ledger();
    reader.activate().await.unwrap();

    reader.request_image(99).await;

    assert_eq!(reader.provider().image_call_count(), 1);
}

//
// ─── NAVIGATION ─────────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn navigation_saturates_at_both_ends() {
    let (reader, _ledger) = reader_with_ledger();
    reader.activate().await.unwrap();

    // prev at the first scene: a complete no-op.
    reader.prev().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 0);
    assert_eq!(reader.provider().image_call_count(), 1);
    assert_eq!(reader.provider().speech_call_count(), 1);

    reader.next().await.unwrap();
    reader.next().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 2);

    // next at the last scene: a complete no-op.
    reader.next().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 2);
    assert_eq!(reader.provider().image_call_count(), 3);
    assert_eq!(reader.provider().speech_call_count(), 3);
}

#[tokio::test]
async fn navigation_stops_playback_before_moving() {
    let (reader, ledger) = reader_with_ledger();
    reader.activate().await.unwrap();
    reader.next().await.unwrap();

    // Scene A's clip is stopped before scene B's starts.
    assert_eq!(
        ledger.events(),
        vec!["prepare", "start:0", "stop:0", "start:1"]
    );
}

#[tokio::test]
async fn every_start_is_preceded_by_a_stop() {
    let (reader, ledger) = reader_with_ledger();
    reader.activate().await.unwrap();
    reader.next().await.unwrap();
    reader.next().await.unwrap();
    reader.prev().await.unwrap();

    let events = ledger.events();
    for (position, event) in events.iter().enumerate() {
        if event.starts_with("start:") && position > 0 {
            let preceding = &events[..position];
            let starts = preceding.iter().filter(|e| e.starts_with("start:")).count();
            let stops = preceding.iter().filter(|e| e.starts_with("stop:")).count();
            // Every previously started clip has been stopped already.
            assert_eq!(starts, stops, "overlapping playback in {:?}", events);
        }
    }
}

//
// ─── THE FULL WALKTHROUGH ───────────────────────────────────────────────────────
//

#[tokio::test]
async fn walkthrough_matches_the_catalog_contract() {
    let (reader, _ledger) = reader_with_ledger();

    // activate() → fetches image(A) and narration(A), position = 0.
    reader.activate().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 0);
    assert_eq!(reader.provider().image_calls(), vec!["prompt-a"]);
    assert_eq!(reader.provider().speech_call_count(), 1);

    // goNext() → position = 1, fetches image(B) and narration(B).
    reader.next().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 1);
    assert_eq!(reader.provider().image_calls(), vec!["prompt-a", "prompt-b"]);
    assert_eq!(reader.provider().speech_call_count(), 2);

    // goPrev() → position = 0, image(A) cache hit, narration(A) fresh.
    reader.prev().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 0);
    assert_eq!(reader.provider().image_calls(), vec!["prompt-a", "prompt-b"]);
    assert_eq!(reader.provider().speech_call_count(), 3);

    // goNext(); goNext() → position = 2 (last index, count = 3).
    reader.next().await.unwrap();
    reader.next().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 2);

    // goNext() again → position stays 2, no fetch.
    let images_before = reader.provider().image_call_count();
    let speech_before = reader.provider().speech_call_count();
    reader.next().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 2);
    assert_eq!(reader.provider().image_call_count(), images_before);
    assert_eq!(reader.provider().speech_call_count(), speech_before);
}

//
// ─── MUTE AND REPLAY ────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn muting_stops_playback_immediately() {
    let (reader, ledger) = reader_with_ledger();
    reader.activate().await.unwrap();

    reader.toggle_mute().await;

    assert!(*reader.snapshot().muted());
    assert_eq!(ledger.events(), vec!["prepare", "start:0", "stop:0"]);
}

#[tokio::test]
async fn unmuting_renarrates_the_current_scene() {
    let (reader, ledger) = reader_with_ledger();
    reader.activate().await.unwrap();
    reader.next().await.unwrap();
    reader.toggle_mute().await;

    reader.toggle_mute().await;

    assert!(!*reader.snapshot().muted());
    // Scene B narrated twice: on entry and on unmute.
    assert_eq!(reader.provider().speech_call_count(), 3);
    assert_eq!(ledger.count_of("start:"), 3);
}

#[tokio::test]
async fn entering_a_scene_while_muted_skips_narration() {
    let (reader, ledger) = reader_with_ledger();
    reader.activate().await.unwrap();
    reader.toggle_mute().await;

    reader.next().await.unwrap();

    // Image still fetched, narration skipped.
    assert_eq!(reader.provider().image_call_count(), 2);
    assert_eq!(reader.provider().speech_call_count(), 1);
    assert_eq!(ledger.count_of("start:"), 1);
}

#[tokio::test]
async fn mute_before_activation_only_flips_the_flag() {
    let (reader, ledger) = reader_with_ledger();

    reader.toggle_mute().await;
    assert!(*reader.snapshot().muted());
    reader.toggle_mute().await;
    assert!(!*reader.snapshot().muted());

    assert!(ledger.events().is_empty());
    assert_eq!(reader.provider().speech_call_count(), 0);
}

#[tokio::test]
async fn replay_resynthesizes_unconditionally() {
    let (reader, ledger) = reader_with_ledger();
    reader.activate().await.unwrap();

    reader.replay_narration().await;
    reader.replay_narration().await;

    assert_eq!(reader.provider().speech_call_count(), 3);
    assert_eq!(ledger.count_of("start:"), 3);
}

#[tokio::test]
async fn replay_while_muted_is_a_no_op() {
    let (reader, _ledger) = reader_with_ledger();
    reader.activate().await.unwrap();
    reader.toggle_mute().await;

    reader.replay_narration().await;

    assert_eq!(reader.provider().speech_call_count(), 1);
}

//
// ─── FAILURE HANDLING ───────────────────────────────────────────────────────────
//

#[tokio::test]
async fn image_failure_surfaces_and_retry_recovers() {
    let (reader, _ledger) = reader_with_ledger();
    reader.provider().set_image_behavior(ImageBehavior::Error);

    reader.activate().await.unwrap();

    let snapshot = reader.snapshot();
    assert_eq!(snapshot.last_error().as_deref(), Some(IMAGE_FAILURE_MESSAGE));
    assert!(snapshot.image().is_none());
    assert!(!snapshot.image_loading());

    // The slot stayed empty, so retry asks the provider again.
    reader.provider().set_image_behavior(ImageBehavior::Success);
    reader.handle_event(ReaderEvent::RetryImage(0)).await.unwrap();

    let snapshot = reader.snapshot();
    assert_eq!(reader.provider().image_call_count(), 2);
    assert!(snapshot.image().is_some());
    assert!(snapshot.last_error().is_none());
}

#[tokio::test]
async fn narration_failure_is_logged_not_surfaced() {
    let (reader, ledger) = reader_with_ledger();
    reader.provider().set_speech_behavior(SpeechBehavior::Error);

    reader.activate().await.unwrap();

    let snapshot = reader.snapshot();
    assert!(snapshot.last_error().is_none());
    assert!(snapshot.image().is_some());
    assert!(!snapshot.audio_loading());
    assert_eq!(ledger.count_of("start:"), 0);
}

#[tokio::test]
async fn malformed_narration_payload_is_just_another_narration_failure() {
    let (reader, ledger) = reader_with_ledger();
    reader.provider().set_speech_behavior(SpeechBehavior::OddPayload);

    reader.activate().await.unwrap();

    let snapshot = reader.snapshot();
    assert!(snapshot.last_error().is_none());
    assert!(!snapshot.audio_loading());
    assert_eq!(ledger.count_of("start:"), 0);

    // Navigation is not blocked.
    reader.next().await.unwrap();
    assert_eq!(*reader.snapshot().position(), 1);
}

#[tokio::test]
async fn playback_failure_is_treated_as_a_narration_failure() {
    let ledger = Ledger::default();
    let reader = Reader::new(
        catalog(),
        MockAssetProvider::new(),
        Box::new(MockAudioOutput::fail_starts(ledger.clone())),
    );

    reader.activate().await.unwrap();

    let snapshot = reader.snapshot();
    assert!(snapshot.last_error().is_none());
    assert!(snapshot.image().is_some());
    assert!(!snapshot.audio_loading());
    assert_eq!(ledger.count_of("start:"), 0);
}

#[tokio::test]
async fn narration_failure_never_blocks_the_image() {
    let (reader, _ledger) = reader_with_ledger();
    reader.provider().set_speech_behavior(SpeechBehavior::Error);

    reader.activate().await.unwrap();

    assert!(reader.snapshot().image().is_some());
}

//
// ─── OBSERVER CONTRACT ──────────────────────────────────────────────────────────
//

#[tokio::test]
async fn subscribers_see_the_latest_snapshot() {
    let (reader, _ledger) = reader_with_ledger();
    let rx = reader.subscribe();
    assert_eq!(*rx.borrow().phase(), ReaderPhase::NotStarted);

    reader.activate().await.unwrap();
    reader.next().await.unwrap();

    let latest = rx.borrow();
    assert_eq!(*latest.phase(), ReaderPhase::Reading);
    assert_eq!(*latest.position(), 1);
    assert_eq!(latest.scene().as_ref().map(|s| s.title().as_str()), Some("B"));
}

#[tokio::test]
async fn events_drive_the_machine_end_to_end() {
    let (reader, _ledger) = reader_with_ledger();

    reader.handle_event(ReaderEvent::Activate).await.unwrap();
    reader.handle_event(ReaderEvent::Next).await.unwrap();
    reader.handle_event(ReaderEvent::ToggleMute).await.unwrap();
    reader.handle_event(ReaderEvent::Prev).await.unwrap();
    reader.handle_event(ReaderEvent::ReplayNarration).await.unwrap();

    let snapshot = reader.snapshot();
    assert_eq!(*snapshot.position(), 0);
    assert!(*snapshot.muted());
    // Muted: A and B narrated once each (before the mute), replay ignored.
    assert_eq!(reader.provider().speech_call_count(), 2);
}
