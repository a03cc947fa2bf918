//! Fixed prompt wrappers for the Gemini asset calls.

use aesop_core::VoiceDirection;
use std::fmt::Write;

/// Prepend the fixed style preamble to a scene's visual prompt.
pub fn illustration_prompt(style_preamble: &str, visual_prompt: &str) -> String {
    format!("{} {}", style_preamble, visual_prompt)
}

/// Wrap a narration script in the fixed voice-acting instruction preamble.
///
/// The wrapper names the narrator style first, then each labeled character
/// profile, so the TTS model performs dialogue lines under their speaker
/// labels differently from the surrounding narration.
pub fn narration_prompt(voice: &VoiceDirection, script: &str) -> String {
    let mut prompt = String::from(
        "Please act as a versatile voice actor and narrate the following text.\n\n\
         Character Voice Instructions:\n",
    );
    let _ = writeln!(
        prompt,
        "1. Narrator (unlabeled text): Use {}.",
        voice.narrator_style()
    );
    for (ordinal, profile) in voice.profiles().iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {} (lines labeled '{}'): Use {}.",
            ordinal + 2,
            profile.label(),
            profile.label(),
            profile.style()
        );
    }
    let _ = write!(prompt, "\nText to narrate:\n{}", script);
    prompt
}
