//! Mock asset provider and audio output for reader tests.

use aesop_audio::{AudioOutput, PlaybackHandle, Waveform};
use aesop_core::{Scene, SceneImage, Semiotics, StoryCatalog, StoryMetadata, VoiceDirection};
use aesop_error::{AesopResult, AudioError, AudioErrorKind, AudioResult, ProviderError, ProviderErrorKind};
use aesop_interface::AssetProvider;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock illustration responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBehavior {
    /// Always return a fresh mock image
    Success,
    /// Always fail
    Error,
}

/// Behavior configuration for mock speech responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechBehavior {
    /// Return a well-formed PCM payload
    Success,
    /// Always fail
    Error,
    /// Return a payload with an odd byte length
    OddPayload,
}

/// Mock asset provider recording every call.
pub struct MockAssetProvider {
    image_behavior: Mutex<ImageBehavior>,
    speech_behavior: Mutex<SpeechBehavior>,
    image_calls: Arc<Mutex<Vec<String>>>,
    speech_calls: Arc<Mutex<Vec<String>>>,
}

impl MockAssetProvider {
    pub fn new() -> Self {
        Self {
            image_behavior: Mutex::new(ImageBehavior::Success),
            speech_behavior: Mutex::new(SpeechBehavior::Success),
            image_calls: Arc::new(Mutex::new(Vec::new())),
            speech_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_image_behavior(&self, behavior: ImageBehavior) {
        *self.image_behavior.lock().unwrap() = behavior;
    }

    pub fn set_speech_behavior(&self, behavior: SpeechBehavior) {
        *self.speech_behavior.lock().unwrap() = behavior;
    }

    /// Visual prompts passed to `generate_image`, in call order.
    pub fn image_calls(&self) -> Vec<String> {
        self.image_calls.lock().unwrap().clone()
    }

    /// Scripts passed to `synthesize_speech`, in call order.
    pub fn speech_calls(&self) -> Vec<String> {
        self.speech_calls.lock().unwrap().clone()
    }

    pub fn image_call_count(&self) -> usize {
        self.image_calls.lock().unwrap().len()
    }

    pub fn speech_call_count(&self) -> usize {
        self.speech_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AssetProvider for MockAssetProvider {
    async fn generate_image(&self, visual_prompt: &str) -> AesopResult<SceneImage> {
        self.image_calls
            .lock()
            .unwrap()
            .push(visual_prompt.to_string());
        match *self.image_behavior.lock().unwrap() {
            ImageBehavior::Success => Ok(SceneImage::from_uri(format!(
                "mock://image/{}",
                visual_prompt
            ))),
            ImageBehavior::Error => Err(ProviderError::new(ProviderErrorKind::Api {
                status: 503,
                message: "mock image failure".to_string(),
            })
            .into()),
        }
    }

    async fn synthesize_speech(&self, script: &str) -> AesopResult<Vec<u8>> {
        self.speech_calls.lock().unwrap().push(script.to_string());
        match *self.speech_behavior.lock().unwrap() {
            // Two frames of silence.
            SpeechBehavior::Success => Ok(vec![0x00, 0x00, 0x00, 0x00]),
            SpeechBehavior::Error => Err(ProviderError::new(ProviderErrorKind::NoAudioData).into()),
            SpeechBehavior::OddPayload => Ok(vec![0x00, 0x00, 0x00]),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Records every playback lifecycle event, in order.
#[derive(Clone, Default)]
pub struct Ledger(Arc<Mutex<Vec<String>>>);

impl Ledger {
    fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count_of(&self, prefix: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .count()
    }
}

struct MockHandle {
    id: usize,
    ledger: Ledger,
    stopped: AtomicBool,
}

impl PlaybackHandle for MockHandle {
    fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            self.ledger.push(format!("stop:{}", self.id));
        }
    }
}

/// Mock audio output writing every prepare/start into a shared ledger.
pub struct MockAudioOutput {
    ledger: Ledger,
    fail_starts: AtomicBool,
    next_id: Mutex<usize>,
}

impl MockAudioOutput {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            fail_starts: AtomicBool::new(false),
            next_id: Mutex::new(0),
        }
    }

    pub fn fail_starts(ledger: Ledger) -> Self {
        let output = Self::new(ledger);
        output.fail_starts.store(true, Ordering::SeqCst);
        output
    }
}

impl AudioOutput for MockAudioOutput {
    fn prepare(&self) -> AudioResult<()> {
        self.ledger.push("prepare");
        Ok(())
    }

    fn start(&self, _waveform: &Waveform) -> AudioResult<Box<dyn PlaybackHandle>> {
        if self.fail_starts.load(Ordering::SeqCst) {
            return Err(AudioError::new(AudioErrorKind::Sink(
                "mock sink refused".to_string(),
            )));
        }
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        self.ledger.push(format!("start:{}", id));
        Ok(Box::new(MockHandle {
            id,
            ledger: self.ledger.clone(),
            stopped: AtomicBool::new(false),
        }))
    }
}

fn scene(id: u32, title: &str, prompt: &str, dialogue: Option<&str>) -> Scene {
    let mut builder = Scene::builder();
    builder
        .id(id)
        .title(title)
        .narration(format!("Narration for {}.", title))
        .visual_prompt(prompt)
        .theme("mock-theme")
        .semiotics(Semiotics::new("mock composition", "mock eyes"));
    if let Some(d) = dialogue {
        builder.dialogue(Some(d.to_string()));
    }
    builder.build().unwrap()
}

/// A three-scene catalog: A (with dialogue), B, C.
pub fn catalog() -> StoryCatalog {
    StoryCatalog::new(
        StoryMetadata::new("Mock Story", "Three scenes for testing."),
        VoiceDirection::default(),
        vec![
            scene(1, "A", "prompt-a", Some("Leo: Mine!")),
            scene(2, "B", "prompt-b", None),
            scene(3, "C", "prompt-c", None),
        ],
    )
    .unwrap()
}
