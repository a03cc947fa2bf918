//! Voice direction for narration synthesis.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

fn default_base_voice() -> String {
    "Kore".to_string()
}

fn default_narrator_style() -> String {
    "a warm, wise, slightly raspy voice, full of wonder".to_string()
}

/// A per-character voice styling instruction.
///
/// The `label` matches speaker labels appearing in the narration script; the
/// `style` describes how lines under that label should be performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct VoiceProfile {
    /// Speaker label as it appears in dialogue text
    label: String,
    /// Performance instruction for this speaker
    style: String,
}

impl VoiceProfile {
    /// Create a new voice profile.
    pub fn new(label: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: style.into(),
        }
    }
}

/// Fixed voice-styling direction baked into the speech synthesis prompt.
///
/// One base voice is selected for the whole narration; the narrator style
/// and any character profiles steer the performance through the prompt
/// wrapper rather than through separate voice selections.
///
/// # Examples
///
/// ```
/// use aesop_core::{VoiceDirection, VoiceProfile};
///
/// let direction = VoiceDirection::default()
///     .with_profile(VoiceProfile::new("Leo", "deep, booming, domineering"));
///
/// assert_eq!(direction.base_voice(), "Kore");
/// assert_eq!(direction.profiles().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct VoiceDirection {
    /// Prebuilt voice selection for the whole narration
    #[serde(default = "default_base_voice")]
    base_voice: String,
    /// Performance instruction for unlabeled narrator text
    #[serde(default = "default_narrator_style")]
    narrator_style: String,
    /// Per-character performance instructions
    #[serde(default)]
    profiles: Vec<VoiceProfile>,
}

impl Default for VoiceDirection {
    fn default() -> Self {
        Self {
            base_voice: default_base_voice(),
            narrator_style: default_narrator_style(),
            profiles: Vec::new(),
        }
    }
}

impl VoiceDirection {
    /// Create a voice direction with an explicit base voice and narrator
    /// style.
    pub fn new(base_voice: impl Into<String>, narrator_style: impl Into<String>) -> Self {
        Self {
            base_voice: base_voice.into(),
            narrator_style: narrator_style.into(),
            profiles: Vec::new(),
        }
    }

    /// Add a character voice profile.
    pub fn with_profile(mut self, profile: VoiceProfile) -> Self {
        self.profiles.push(profile);
        self
    }
}
